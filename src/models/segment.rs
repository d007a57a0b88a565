use super::{BitSequence, Mode};
use crate::error::EncodeError;

/// An encoded data segment: mode, character count and payload bits
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Mode the payload was encoded in
    pub mode: Mode,
    /// Number of characters in the source text
    pub char_count: usize,
    /// Payload bits without header
    pub data: BitSequence,
}

impl Segment {
    /// Bundle an encoded payload with its mode and character count
    pub fn new(mode: Mode, char_count: usize, data: BitSequence) -> Self {
        Self {
            mode,
            char_count,
            data,
        }
    }

    /// Header plus payload length for a given version
    pub fn bit_len(&self, version: u8) -> Result<usize, EncodeError> {
        let count_bits = self
            .mode
            .char_count_bits(version)
            .ok_or(EncodeError::InvalidVersion { version })?;
        Ok(4 + count_bits as usize + self.data.len())
    }

    /// Render `mode indicator | character count | payload` for a version
    pub fn to_bits(&self, version: u8) -> Result<BitSequence, EncodeError> {
        let count_bits = self
            .mode
            .char_count_bits(version)
            .ok_or(EncodeError::InvalidVersion { version })?;
        if self.char_count >> count_bits != 0 {
            return Err(EncodeError::CharCountOverflow {
                mode: self.mode,
                count: self.char_count,
                version,
            });
        }

        let mut bits = BitSequence::with_capacity(4 + count_bits as usize + self.data.len());
        bits.push_bits(self.mode.indicator() as u32, 4);
        bits.push_bits(self.char_count as u32, count_bits);
        bits.extend(&self.data);
        Ok(bits)
    }
}
