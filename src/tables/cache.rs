use super::{BuiltinTables, CharSet, DirectoryTables, EncodingTable, TableId, TableProvider};
use crate::config;
use crate::error::TableError;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::{debug, warn};

/// Largest value a pair member may take (45 symbols)
const ALPHANUMERIC_MAX_VALUE: u32 = 44;

/// Alphanumeric lookup plus its allowed-character set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlphanumericTable {
    values: EncodingTable,
    allowed: CharSet,
}

impl AlphanumericTable {
    fn new(values: EncodingTable) -> Result<Self, TableError> {
        if let Some(max) = values.max_value().filter(|&m| m > ALPHANUMERIC_MAX_VALUE) {
            return Err(TableError::Malformed {
                id: TableId::Alphanumeric,
                line: 0,
                reason: format!("value {} exceeds {}", max, ALPHANUMERIC_MAX_VALUE),
            });
        }
        let allowed = values.char_set();
        Ok(Self { values, allowed })
    }

    /// Value (0-44) of `c`
    pub fn value(&self, c: char) -> Option<u32> {
        self.values.value(c)
    }

    /// Characters with a value
    pub fn allowed(&self) -> &CharSet {
        &self.allowed
    }
}

static GLOBAL: OnceLock<Arc<TableCache>> = OnceLock::new();

/// Exactly-once, read-only cache of the tables every mode needs.
///
/// Each table is requested from the provider on first use and the outcome,
/// success or failure, is kept for the lifetime of the cache. Concurrent
/// first access blocks on a single load.
pub struct TableCache {
    provider: Box<dyn TableProvider>,
    alphanumeric: OnceLock<Result<AlphanumericTable, TableError>>,
    latin1: OnceLock<Result<CharSet, TableError>>,
    jis_x0208: OnceLock<Result<CharSet, TableError>>,
}

impl TableCache {
    /// Empty cache loading from `provider` on demand
    pub fn new<P: TableProvider + 'static>(provider: P) -> Self {
        Self {
            provider: Box::new(provider),
            alphanumeric: OnceLock::new(),
            latin1: OnceLock::new(),
            jis_x0208: OnceLock::new(),
        }
    }

    /// Cache over the built-in tables
    pub fn builtin() -> Self {
        Self::new(BuiltinTables)
    }

    /// Cache over `QR_TABLE_DIR` when set, built-in tables otherwise
    pub fn from_env() -> Self {
        match config::table_dir() {
            Some(dir) => {
                debug!(dir = %dir.display(), "using table directory");
                Self::new(DirectoryTables::new(dir))
            }
            None => Self::builtin(),
        }
    }

    /// Process-wide cache, created from the environment on first call
    pub fn global() -> Arc<TableCache> {
        GLOBAL
            .get_or_init(|| Arc::new(TableCache::from_env()))
            .clone()
    }

    /// Alphanumeric lookup table
    pub fn alphanumeric(&self) -> Result<&AlphanumericTable, TableError> {
        self.alphanumeric
            .get_or_init(|| {
                let id = TableId::Alphanumeric;
                let result = self
                    .provider
                    .encoding_table(id)
                    .and_then(AlphanumericTable::new);
                log_load(id, result.as_ref().map(|t| t.values.len()));
                result
            })
            .as_ref()
            .map_err(Clone::clone)
    }

    /// Allowed-character set for a table
    pub fn char_set(&self, id: TableId) -> Result<&CharSet, TableError> {
        let cell = match id {
            TableId::Alphanumeric => return self.alphanumeric().map(AlphanumericTable::allowed),
            TableId::Latin1 => &self.latin1,
            TableId::JisX0208 => &self.jis_x0208,
        };
        cell.get_or_init(|| {
            let result = self.provider.char_set(id);
            log_load(id, result.as_ref().map(CharSet::len));
            result
        })
        .as_ref()
        .map_err(Clone::clone)
    }

    /// Whether a load has been attempted for `id`
    pub fn is_loaded(&self, id: TableId) -> bool {
        match id {
            TableId::Alphanumeric => self.alphanumeric.get().is_some(),
            TableId::Latin1 => self.latin1.get().is_some(),
            TableId::JisX0208 => self.jis_x0208.get().is_some(),
        }
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for TableCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableCache")
            .field("alphanumeric", &self.is_loaded(TableId::Alphanumeric))
            .field("latin1", &self.is_loaded(TableId::Latin1))
            .field("jis_x0208", &self.is_loaded(TableId::JisX0208))
            .finish_non_exhaustive()
    }
}

fn log_load(id: TableId, outcome: Result<usize, &TableError>) {
    match outcome {
        Ok(entries) => debug!(table = %id, entries, "loaded table"),
        Err(err) => warn!(table = %id, error = %err, "table load failed"),
    }
}
