//! Alphanumeric mode encoder (Mode 0010)
use crate::encoder::ModeEncoder;
use crate::error::EncodeError;
use crate::models::{BitSequence, Mode};
use crate::tables::cache::AlphanumericTable;
use crate::tables::{CharSet, TableCache};
use std::sync::Arc;

/// Encode alphanumeric data
/// Pairs = 11 bits, single = 6 bits
#[derive(Debug, Clone)]
pub struct AlphanumericEncoder {
    tables: Arc<TableCache>,
}

impl AlphanumericEncoder {
    /// Encoder using the cached alphanumeric table
    pub fn new(tables: Arc<TableCache>) -> Self {
        Self { tables }
    }

    fn lookup(table: &AlphanumericTable, c: char) -> Result<u32, EncodeError> {
        table.value(c).ok_or(EncodeError::EncodingRangeFault {
            mode: Mode::Alphanumeric,
            character: c,
            value: u32::from(c),
        })
    }
}

impl ModeEncoder for AlphanumericEncoder {
    fn mode(&self) -> Mode {
        Mode::Alphanumeric
    }

    fn allowed(&self) -> Result<&CharSet, EncodeError> {
        Ok(self.tables.alphanumeric()?.allowed())
    }

    fn bit_len(&self, char_count: usize) -> usize {
        11 * (char_count / 2) + 6 * (char_count % 2)
    }

    fn encode_validated(&self, text: &str, out: &mut BitSequence) -> Result<(), EncodeError> {
        let table = self.tables.alphanumeric()?;
        let mut chars = text.chars();

        while let Some(first) = chars.next() {
            let first_value = Self::lookup(table, first)?;
            match chars.next() {
                Some(second) => {
                    let second_value = Self::lookup(table, second)?;
                    out.push_bits(first_value * 45 + second_value, 11);
                }
                None => out.push_bits(first_value, 6),
            }
        }
        Ok(())
    }
}
