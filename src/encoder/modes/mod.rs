//! QR code data mode encoders
//!
//! This module contains encoders for the four QR data modes:
//! - Numeric: Efficient encoding for digits (0-9)
//! - Alphanumeric: Upper-case letters, digits, and nine symbols
//! - Byte: Latin-1 text, one byte per character
//! - Kanji: Shift-JIS double-byte characters

pub mod alphanumeric;
pub mod byte;
pub mod kanji;
pub mod numeric;

pub use alphanumeric::AlphanumericEncoder;
pub use byte::ByteEncoder;
pub use kanji::KanjiEncoder;
pub use numeric::NumericEncoder;
