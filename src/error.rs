use crate::models::Mode;
use crate::tables::TableId;
use thiserror::Error;

/// Failure to obtain a lookup table or character set from a provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// The provider could not read the resource.
    #[error("table `{id}` is unavailable: {reason}")]
    Missing {
        /// Table that was requested
        id: TableId,
        /// Underlying cause
        reason: String,
    },
    /// The resource was read but does not follow the table format.
    #[error("table `{id}` is malformed at line {line}: {reason}")]
    Malformed {
        /// Table that was requested
        id: TableId,
        /// 1-based line, or 0 when the fault concerns the whole table
        line: usize,
        /// What is wrong with it
        reason: String,
    },
}

/// Error type for encode operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// Input contains a character outside the mode's allowed set.
    #[error("invalid {mode} input: {character:?} at position {position} is not an allowed character")]
    InvalidInput {
        /// Mode that rejected the text
        mode: Mode,
        /// First character outside the allowed set
        character: char,
        /// Its position in characters, not bytes
        position: usize,
    },
    /// The table backing this mode could not be loaded.
    #[error(transparent)]
    TableUnavailable(#[from] TableError),
    /// A validated character transcoded outside the mode's encodable range.
    #[error("{mode} encoding fault: {character:?} transcoded to {value:#06x}, outside the encodable range")]
    EncodingRangeFault {
        /// Mode that was packing the character
        mode: Mode,
        /// Character that could not be packed
        character: char,
        /// Shift-JIS code when one exists, otherwise the Unicode scalar
        value: u32,
    },
    /// The character count does not fit the count indicator of the version.
    #[error("{count} characters do not fit the {mode} count indicator of version {version}")]
    CharCountOverflow {
        /// Mode of the segment
        mode: Mode,
        /// Characters in the segment
        count: usize,
        /// Symbol version the header was rendered for
        version: u8,
    },
    /// The symbol version is not in 1-40.
    #[error("version {version} is outside 1-40")]
    InvalidVersion {
        /// Version that was given
        version: u8,
    },
}

impl EncodeError {
    /// True when the failure is a character-set violation in the caller's text
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, EncodeError::InvalidInput { .. })
    }
}
