//! Byte mode encoder (Mode 0100) for Latin-1 text
use crate::encoder::ModeEncoder;
use crate::error::EncodeError;
use crate::models::{BitSequence, Mode};
use crate::tables::{CharSet, TableCache, TableId};
use std::sync::Arc;

/// Encode one Latin-1 byte (8 bits) per character
#[derive(Debug, Clone)]
pub struct ByteEncoder {
    tables: Arc<TableCache>,
}

impl ByteEncoder {
    /// Encoder validating against the cached Latin-1 set
    pub fn new(tables: Arc<TableCache>) -> Self {
        Self { tables }
    }
}

impl ModeEncoder for ByteEncoder {
    fn mode(&self) -> Mode {
        Mode::Byte
    }

    fn allowed(&self) -> Result<&CharSet, EncodeError> {
        Ok(self.tables.char_set(TableId::Latin1)?)
    }

    fn bit_len(&self, char_count: usize) -> usize {
        8 * char_count
    }

    fn encode_validated(&self, text: &str, out: &mut BitSequence) -> Result<(), EncodeError> {
        for c in text.chars() {
            // Latin-1 is the first 256 code points
            let byte = u8::try_from(c).map_err(|_| EncodeError::EncodingRangeFault {
                mode: Mode::Byte,
                character: c,
                value: u32::from(c),
            })?;
            out.push_bits(u32::from(byte), 8);
        }
        Ok(())
    }
}
