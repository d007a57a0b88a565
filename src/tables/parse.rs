use super::{CharSet, EncodingTable, TableId};
use crate::error::TableError;
use std::collections::HashMap;

/// Parse a line-oriented encoding table.
///
/// Each line is exactly one character immediately followed by its decimal
/// value; whitespace between the two is ignored. Blank lines are skipped.
pub fn parse_encoding_table(id: TableId, source: &str) -> Result<EncodingTable, TableError> {
    let mut values = HashMap::new();

    for (idx, raw) in source.split('\n').enumerate() {
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        let mut chars = line.chars();
        let Some(key) = chars.next() else {
            continue;
        };
        let malformed = |reason: String| TableError::Malformed {
            id,
            line: idx + 1,
            reason,
        };

        let digits = chars.as_str().trim();
        if digits.is_empty() {
            // A lone whitespace line is blank, not an entry for ' '
            if key.is_whitespace() {
                continue;
            }
            return Err(malformed(format!("missing value for {:?}", key)));
        }
        let value = digits
            .parse::<u32>()
            .map_err(|e| malformed(format!("bad value {:?}: {}", digits, e)))?;
        if values.insert(key, value).is_some() {
            return Err(malformed(format!("duplicate entry for {:?}", key)));
        }
    }

    if values.is_empty() {
        return Err(TableError::Malformed {
            id,
            line: 0,
            reason: "no entries".to_string(),
        });
    }
    Ok(EncodingTable::new(values))
}

/// Parse a character set resource.
///
/// Every character is a member except line terminators, so member
/// characters must be listed without separators.
pub fn parse_char_set(id: TableId, source: &str) -> Result<CharSet, TableError> {
    let set: CharSet = source.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    if set.is_empty() {
        return Err(TableError::Malformed {
            id,
            line: 0,
            reason: "no characters".to_string(),
        });
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_encoding_table() {
        let table = parse_encoding_table(TableId::Alphanumeric, "0 0\nA10\r\n 36\n\n$ 37\n").unwrap();
        assert_eq!(table.len(), 4);
        assert_eq!(table.value('0'), Some(0));
        assert_eq!(table.value('A'), Some(10));
        assert_eq!(table.value(' '), Some(36));
        assert_eq!(table.value('$'), Some(37));
    }

    #[test]
    fn test_parse_encoding_table_errors() {
        let err = parse_encoding_table(TableId::Alphanumeric, "A 10\nB x\n").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 2, .. }));

        let err = parse_encoding_table(TableId::Alphanumeric, "A 10\nA 11\n").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 2, .. }));

        let err = parse_encoding_table(TableId::Alphanumeric, "A\n").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 1, .. }));

        let err = parse_encoding_table(TableId::Alphanumeric, "\n\n").unwrap_err();
        assert!(matches!(err, TableError::Malformed { line: 0, .. }));
    }

    #[test]
    fn test_parse_char_set_drops_line_terminators() {
        let set = parse_char_set(TableId::Latin1, "ab c\r\n").unwrap();
        assert_eq!(set.len(), 4);
        assert!(set.contains(' '));
        assert!(!set.contains('\n'));
        assert!(!set.contains('\r'));
    }

    #[test]
    fn test_parse_char_set_empty() {
        assert!(parse_char_set(TableId::JisX0208, "\n").is_err());
    }
}
