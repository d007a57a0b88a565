use super::parse::parse_encoding_table;
use super::{CharSet, EncodingTable, TableId, TableProvider};
use crate::encoder::modes::kanji::{qr_kanji_value, shift_jis_code};
use crate::error::TableError;
use encoding_rs::SHIFT_JIS;

const ALPHANUMERIC_SOURCE: &str = include_str!("../../resources/alphanumeric.txt");

// NEC special characters (row 13) sit inside the kanji range but are not JIS X 0208
const NEC_ROW_13_LEAD: u8 = 0x87;

/// Provider backed by embedded resources and generated character sets
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTables;

impl BuiltinTables {
    pub fn new() -> Self {
        Self
    }
}

impl TableProvider for BuiltinTables {
    fn encoding_table(&self, id: TableId) -> Result<EncodingTable, TableError> {
        match id {
            TableId::Alphanumeric => parse_encoding_table(id, ALPHANUMERIC_SOURCE),
            _ => Err(TableError::Missing {
                id,
                reason: "no built-in encoding table".to_string(),
            }),
        }
    }

    fn char_set(&self, id: TableId) -> Result<CharSet, TableError> {
        match id {
            TableId::Alphanumeric => Ok(self.encoding_table(id)?.char_set()),
            TableId::Latin1 => Ok(latin1_set()),
            TableId::JisX0208 => Ok(jis_x0208_set()),
        }
    }
}

fn latin1_set() -> CharSet {
    (0u8..=0xFF).map(char::from).collect()
}

/// Every character whose Shift-JIS double-byte code lies in a QR kanji range
/// and decodes back to itself.
fn jis_x0208_set() -> CharSet {
    let mut chars = Vec::new();
    let leads = (0x81u8..=0x9F).chain(0xE0..=0xEB);
    for lead in leads.filter(|&b| b != NEC_ROW_13_LEAD) {
        for trail in (0x40u8..=0xFC).filter(|&b| b != 0x7F) {
            let bytes = [lead, trail];
            if qr_kanji_value(u16::from_be_bytes(bytes)).is_none() {
                continue;
            }
            let (decoded, had_errors) = SHIFT_JIS.decode_without_bom_handling(&bytes);
            if had_errors {
                continue;
            }
            let mut it = decoded.chars();
            let (Some(c), None) = (it.next(), it.next()) else {
                continue;
            };
            if shift_jis_code(c) == Some(u16::from_be_bytes(bytes)) {
                chars.push(c);
            }
        }
    }
    chars.into_iter().collect()
}
