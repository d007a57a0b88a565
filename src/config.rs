use std::path::PathBuf;
use std::sync::OnceLock;

fn parse_usize(value: Option<String>, default: usize) -> usize {
    value
        .and_then(|v| v.trim().parse::<usize>().ok())
        .unwrap_or(default)
}

fn parse_path(value: Option<String>) -> Option<PathBuf> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
}

static TABLE_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Directory holding table resources (`QR_TABLE_DIR`), if overridden
pub fn table_dir() -> Option<PathBuf> {
    TABLE_DIR
        .get_or_init(|| parse_path(std::env::var("QR_TABLE_DIR").ok()))
        .clone()
}

static PARALLEL_MIN_BATCH: OnceLock<usize> = OnceLock::new();

/// Batch size at which batch encoding goes parallel (`QR_PARALLEL_MIN_BATCH`)
pub fn parallel_min_batch() -> usize {
    *PARALLEL_MIN_BATCH.get_or_init(|| {
        parse_usize(std::env::var("QR_PARALLEL_MIN_BATCH").ok(), 64).max(1)
    })
}
