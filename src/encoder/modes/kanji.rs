//! Kanji mode encoder (Mode 1000)
//!
//! Characters are transcoded to Shift-JIS, then the 16-bit big-endian code is
//! folded into a 13-bit value:
//! - 0x8140-0x9FFC: subtract 0x8140
//! - 0xE040-0xEBBF: subtract 0xC140
//!
//! and the result's high byte is multiplied by 0xC0 and added to the low byte.
use crate::encoder::ModeEncoder;
use crate::error::EncodeError;
use crate::models::{BitSequence, Mode};
use crate::tables::{CharSet, TableCache, TableId};
use encoding_rs::SHIFT_JIS;
use std::sync::Arc;

/// Shift-JIS double-byte code for `c`, if it has one
pub(crate) fn shift_jis_code(c: char) -> Option<u16> {
    let mut buf = [0u8; 4];
    let (bytes, _, unmappable) = SHIFT_JIS.encode(c.encode_utf8(&mut buf));
    if unmappable {
        return None;
    }
    match &*bytes {
        &[hi, lo] => Some(u16::from_be_bytes([hi, lo])),
        _ => None,
    }
}

/// 13-bit QR value for a Shift-JIS code, `None` outside both kanji ranges
pub(crate) fn qr_kanji_value(code: u16) -> Option<u16> {
    let offset = match code {
        0x8140..=0x9FFC => code - 0x8140,
        0xE040..=0xEBBF => code - 0xC140,
        _ => return None,
    };
    Some((offset >> 8) * 0xC0 + (offset & 0xFF))
}

/// Encode Shift-JIS double-byte characters, 13 bits each
#[derive(Debug, Clone)]
pub struct KanjiEncoder {
    tables: Arc<TableCache>,
}

impl KanjiEncoder {
    /// Encoder validating against the cached JIS X 0208 set
    pub fn new(tables: Arc<TableCache>) -> Self {
        Self { tables }
    }

    fn qr_value(c: char) -> Result<u16, EncodeError> {
        let fault = |value: u32| EncodeError::EncodingRangeFault {
            mode: Mode::Kanji,
            character: c,
            value,
        };
        let code = shift_jis_code(c).ok_or_else(|| fault(u32::from(c)))?;
        qr_kanji_value(code).ok_or_else(|| fault(u32::from(code)))
    }
}

impl ModeEncoder for KanjiEncoder {
    fn mode(&self) -> Mode {
        Mode::Kanji
    }

    fn allowed(&self) -> Result<&CharSet, EncodeError> {
        Ok(self.tables.char_set(TableId::JisX0208)?)
    }

    fn bit_len(&self, char_count: usize) -> usize {
        13 * char_count
    }

    fn encode_validated(&self, text: &str, out: &mut BitSequence) -> Result<(), EncodeError> {
        for c in text.chars() {
            out.push_bits(u32::from(Self::qr_value(c)?), 13);
        }
        Ok(())
    }
}
