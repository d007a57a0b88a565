use std::fmt;

/// Packed, MSB-first sequence of bits produced by the mode encoders
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct BitSequence {
    len: usize,
    data: Vec<u8>,
}

impl BitSequence {
    /// Create an empty bit sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty bit sequence with room for `bits` bits
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            len: 0,
            data: Vec::with_capacity(bits.div_ceil(8)),
        }
    }

    /// Number of bits in the sequence
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if no bits have been written
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Append a single bit
    pub fn push(&mut self, bit: bool) {
        let bit_index = self.len % 8;
        if bit_index == 0 {
            self.data.push(0);
        }
        if bit {
            // len / 8 is always the last byte here
            let last = self.data.len() - 1;
            self.data[last] |= 0x80 >> bit_index;
        }
        self.len += 1;
    }

    /// Append the low `width` bits of `value`, most significant bit first
    ///
    /// Panics if `width` exceeds 32 or `value` does not fit in `width` bits.
    pub fn push_bits(&mut self, value: u32, width: u8) {
        assert!(width <= 32, "bit width {} exceeds 32", width);
        assert!(
            width == 32 || value >> width == 0,
            "value {} does not fit in {} bits",
            value,
            width
        );
        for shift in (0..width).rev() {
            self.push((value >> shift) & 1 == 1);
        }
    }

    /// Append every bit of `other`
    pub fn extend(&mut self, other: &BitSequence) {
        if self.len % 8 == 0 {
            self.data.extend_from_slice(&other.data);
            self.len += other.len;
            return;
        }
        for bit in other.iter() {
            self.push(bit);
        }
    }

    /// Get bit at `index`, or `None` past the end
    pub fn get(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some((self.data[index / 8] >> (7 - index % 8)) & 1 == 1)
    }

    /// Iterate bits in order
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |i| (self.data[i / 8] >> (7 - i % 8)) & 1 == 1)
    }

    /// Packed bytes; the final byte is zero-padded on the right
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Copy out the packed bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data.clone()
    }
}

impl fmt::Display for BitSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for bit in self.iter() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl From<&BitSequence> for Vec<bool> {
    fn from(bits: &BitSequence) -> Self {
        bits.iter().collect()
    }
}

impl FromIterator<bool> for BitSequence {
    fn from_iter<I: IntoIterator<Item = bool>>(iter: I) -> Self {
        let mut bits = BitSequence::new();
        for bit in iter {
            bits.push(bit);
        }
        bits
    }
}
