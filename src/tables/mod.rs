//! Character sets and lookup tables backing the mode encoders
//!
//! Tables come from a [`TableProvider`] and are cached by [`TableCache`]:
//! - Alphanumeric: character → value (0-44) lookup
//! - Byte: Latin-1 character set
//! - Kanji: JIS X 0208 character set

use crate::error::TableError;
use std::collections::{HashMap, HashSet};
use std::fmt;

/// Built-in provider (embedded and generated tables)
pub mod builtin;
/// Exactly-once table cache shared by encoders
pub mod cache;
/// Provider reading table resources from a directory
pub mod directory;
/// Text formats for table resources
pub mod parse;

pub use builtin::BuiltinTables;
pub use cache::TableCache;
pub use directory::DirectoryTables;

/// Identifier of a table resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableId {
    /// Alphanumeric encoding table
    Alphanumeric,
    /// Latin-1 character set for byte mode
    Latin1,
    /// JIS X 0208 character set for kanji mode
    JisX0208,
}

impl TableId {
    /// Resource file name used by directory-backed providers
    pub fn file_name(&self) -> &'static str {
        match self {
            TableId::Alphanumeric => "alphanumeric.txt",
            TableId::Latin1 => "latin1.txt",
            TableId::JisX0208 => "jisx0208.txt",
        }
    }
}

impl fmt::Display for TableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TableId::Alphanumeric => "alphanumeric",
            TableId::Latin1 => "latin1",
            TableId::JisX0208 => "jisx0208",
        };
        f.write_str(name)
    }
}

/// Immutable set of characters allowed in a mode
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharSet {
    chars: HashSet<char>,
}

impl CharSet {
    /// Whether `c` is a member
    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// True when the set has no members
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Position and value of the first character not in the set
    pub fn first_invalid(&self, text: &str) -> Option<(usize, char)> {
        text.chars().enumerate().find(|(_, c)| !self.contains(*c))
    }
}

impl FromIterator<char> for CharSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        Self {
            chars: iter.into_iter().collect(),
        }
    }
}

/// Immutable character → value lookup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodingTable {
    values: HashMap<char, u32>,
}

impl EncodingTable {
    /// Wrap a character → value map
    pub fn new(values: HashMap<char, u32>) -> Self {
        Self { values }
    }

    /// Value of `c`, if it is in the table
    pub fn value(&self, c: char) -> Option<u32> {
        self.values.get(&c).copied()
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True when the table has no entries
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Largest value in the table
    pub fn max_value(&self) -> Option<u32> {
        self.values.values().copied().max()
    }

    /// Keys of the table as a character set
    pub fn char_set(&self) -> CharSet {
        self.values.keys().copied().collect()
    }
}

/// Source of static table data.
///
/// Implementations are called at most once per table per [`TableCache`].
pub trait TableProvider: Send + Sync {
    /// Load a character → integer mapping
    fn encoding_table(&self, id: TableId) -> Result<EncodingTable, TableError>;
    /// Load a set of allowed characters
    fn char_set(&self, id: TableId) -> Result<CharSet, TableError>;
}
