use super::parse::{parse_char_set, parse_encoding_table};
use super::{CharSet, EncodingTable, TableId, TableProvider};
use crate::error::TableError;
use std::fs;
use std::path::{Path, PathBuf};

/// Provider reading `<id>.txt` resources from a directory
///
/// Character sets use the [`parse_char_set`] format, so `\r` and `\n` can
/// never be members. A `latin1.txt` read here therefore rejects line breaks
/// in byte mode, unlike the generated set of [`BuiltinTables`](super::BuiltinTables).
#[derive(Debug, Clone)]
pub struct DirectoryTables {
    root: PathBuf,
}

impl DirectoryTables {
    /// Provider over the files in `root`
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Directory the resources are read from
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read(&self, id: TableId) -> Result<String, TableError> {
        let path = self.root.join(id.file_name());
        fs::read_to_string(&path).map_err(|e| TableError::Missing {
            id,
            reason: format!("{}: {}", path.display(), e),
        })
    }
}

impl TableProvider for DirectoryTables {
    fn encoding_table(&self, id: TableId) -> Result<EncodingTable, TableError> {
        parse_encoding_table(id, &self.read(id)?)
    }

    fn char_set(&self, id: TableId) -> Result<CharSet, TableError> {
        match id {
            TableId::Alphanumeric => Ok(self.encoding_table(id)?.char_set()),
            _ => parse_char_set(id, &self.read(id)?),
        }
    }
}
