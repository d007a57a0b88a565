//! qr_payload - QR code data payload encoder
//!
//! Converts text into the mode-specific bit sequence that forms the data
//! payload of a QR symbol (ISO/IEC 18004): numeric, alphanumeric, byte
//! (Latin-1) and kanji (Shift-JIS) modes.
//!
//! # Example
//! ```
//! use qr_payload::{encode, Mode};
//!
//! let bits = encode(Mode::Alphanumeric, "AC-42").unwrap();
//! assert_eq!(bits.len(), 28);
//! ```

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Environment-driven settings (table directory, batch threshold)
pub mod config;
/// Mode encoders and the shared encoder contract
pub mod encoder;
/// Error types for encoding and table loading
pub mod error;
/// Core data structures (BitSequence, Mode, Segment)
pub mod models;
/// Table providers and the exactly-once table cache
pub mod tables;

pub use encoder::{Encoder, ModeEncoder};
pub use error::{EncodeError, TableError};
pub use models::{BitSequence, Mode, Segment};
pub use tables::{TableCache, TableId, TableProvider};

/// Encode `text` in `mode` using the process-wide table cache
///
/// # Arguments
/// * `mode` - Encoding mode; no automatic mode selection is done
/// * `text` - Text whose every character must be valid in `mode`
///
/// # Returns
/// Payload bits, most significant bit of each group first
pub fn encode(mode: Mode, text: &str) -> Result<BitSequence, EncodeError> {
    Encoder::for_mode(mode).encode(text)
}
