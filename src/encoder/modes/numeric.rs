//! Numeric mode encoder (Mode 0001)
use crate::encoder::ModeEncoder;
use crate::error::EncodeError;
use crate::models::{BitSequence, Mode};
use crate::tables::CharSet;

/// Encode decimal digits
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
#[derive(Debug, Clone)]
pub struct NumericEncoder {
    digits: CharSet,
}

impl NumericEncoder {
    /// Encoder over the ASCII digits
    pub fn new() -> Self {
        Self {
            digits: ('0'..='9').collect(),
        }
    }
}

impl Default for NumericEncoder {
    fn default() -> Self {
        Self::new()
    }
}

fn group_width(group_len: usize) -> u8 {
    match group_len {
        3 => 10,
        2 => 7,
        _ => 4,
    }
}

impl ModeEncoder for NumericEncoder {
    fn mode(&self) -> Mode {
        Mode::Numeric
    }

    fn allowed(&self) -> Result<&CharSet, EncodeError> {
        Ok(&self.digits)
    }

    fn bit_len(&self, char_count: usize) -> usize {
        10 * (char_count / 3)
            + match char_count % 3 {
                0 => 0,
                r => group_width(r) as usize,
            }
    }

    fn encode_validated(&self, text: &str, out: &mut BitSequence) -> Result<(), EncodeError> {
        let chars: Vec<char> = text.chars().collect();
        for group in chars.chunks(3) {
            let value = group.iter().try_fold(0u32, |acc, &c| {
                let digit = c.to_digit(10).ok_or(EncodeError::EncodingRangeFault {
                    mode: Mode::Numeric,
                    character: c,
                    value: u32::from(c),
                })?;
                Ok::<_, EncodeError>(acc * 10 + digit)
            })?;
            out.push_bits(value, group_width(group.len()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_encode() {
        let bits = NumericEncoder::new().encode("01234567").unwrap();
        // 012 -> 12, 345 -> 345, 67 -> 67
        assert_eq!(bits.len(), 27);
        assert_eq!(bits.to_string(), "000000110001010110011000011");
    }

    #[test]
    fn test_group_widths() {
        let encoder = NumericEncoder::new();
        assert_eq!(encoder.encode("999").unwrap().to_string(), "1111100111");
        assert_eq!(encoder.encode("99").unwrap().to_string(), "1100011");
        assert_eq!(encoder.encode("9").unwrap().to_string(), "1001");
        // Leading zeros keep the group width
        assert_eq!(encoder.encode("000").unwrap().to_string(), "0000000000");
    }

    #[test]
    fn test_rejects_non_digit() {
        let err = NumericEncoder::new().encode("12a4").unwrap_err();
        assert_eq!(
            err,
            EncodeError::InvalidInput {
                mode: Mode::Numeric,
                character: 'a',
                position: 2
            }
        );
        // Full-width digits are not ASCII digits
        assert!(NumericEncoder::new().encode("１").is_err());
    }

    #[test]
    fn test_unvalidated_packing_faults() {
        let encoder = NumericEncoder::new();
        for text in ["zz", "1/", "９"] {
            let mut out = BitSequence::new();
            let err = encoder.encode_validated(text, &mut out).unwrap_err();
            assert!(matches!(
                err,
                EncodeError::EncodingRangeFault {
                    mode: Mode::Numeric,
                    ..
                }
            ));
            assert!(out.is_empty());
        }
    }
}
