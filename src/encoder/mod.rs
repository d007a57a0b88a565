//! QR data payload encoding
//!
//! Every mode validates the whole input against its allowed-character set
//! before producing any bits. [`Encoder`] selects one of the four mode
//! encoders by [`Mode`] and shares a [`TableCache`] between them.

/// Per-mode encoders (numeric, alphanumeric, byte, kanji)
pub mod modes;

use crate::config;
use crate::error::EncodeError;
use crate::models::{BitSequence, Mode, Segment};
use crate::tables::{CharSet, TableCache};
use modes::{AlphanumericEncoder, ByteEncoder, KanjiEncoder, NumericEncoder};
use rayon::prelude::*;
use std::sync::Arc;
use tracing::trace;

/// Capability shared by all mode encoders
pub trait ModeEncoder {
    /// Mode this encoder produces
    fn mode(&self) -> Mode;

    /// Characters accepted by this mode (loads the backing table on first use)
    fn allowed(&self) -> Result<&CharSet, EncodeError>;

    /// Payload length in bits for `char_count` valid characters
    fn bit_len(&self, char_count: usize) -> usize;

    /// Append the payload for `text` to `out` without checking the allowed set
    ///
    /// Characters the mode cannot pack fail with
    /// [`EncodeError::EncodingRangeFault`]; groups already packed stay in `out`.
    fn encode_validated(&self, text: &str, out: &mut BitSequence) -> Result<(), EncodeError>;

    /// Whether `c` is in the allowed set
    fn is_allowed(&self, c: char) -> Result<bool, EncodeError> {
        Ok(self.allowed()?.contains(c))
    }

    /// Check every character of `text` against the allowed set
    fn validate(&self, text: &str) -> Result<(), EncodeError> {
        match self.allowed()?.first_invalid(text) {
            Some((position, character)) => Err(EncodeError::InvalidInput {
                mode: self.mode(),
                character,
                position,
            }),
            None => Ok(()),
        }
    }

    /// Validate then encode `text`; empty text always yields an empty sequence
    fn encode(&self, text: &str) -> Result<BitSequence, EncodeError> {
        if text.is_empty() {
            return Ok(BitSequence::new());
        }
        self.validate(text)?;

        let char_count = text.chars().count();
        let mut bits = BitSequence::with_capacity(self.bit_len(char_count));
        self.encode_validated(text, &mut bits)?;
        trace!(mode = %self.mode(), chars = char_count, bits = bits.len(), "encoded");
        Ok(bits)
    }

    /// Encode `text` into a segment carrying its mode and character count
    fn encode_segment(&self, text: &str) -> Result<Segment, EncodeError> {
        let data = self.encode(text)?;
        Ok(Segment::new(self.mode(), text.chars().count(), data))
    }
}

/// Encoder for one mode, selected by [`Mode`]
#[derive(Debug, Clone)]
pub enum Encoder {
    /// Mode 0001
    Numeric(NumericEncoder),
    /// Mode 0010
    Alphanumeric(AlphanumericEncoder),
    /// Mode 0100
    Byte(ByteEncoder),
    /// Mode 1000
    Kanji(KanjiEncoder),
}

impl Encoder {
    /// Create an encoder for `mode` backed by `tables`
    pub fn new(mode: Mode, tables: Arc<TableCache>) -> Self {
        match mode {
            Mode::Numeric => Encoder::Numeric(NumericEncoder::new()),
            Mode::Alphanumeric => Encoder::Alphanumeric(AlphanumericEncoder::new(tables)),
            Mode::Byte => Encoder::Byte(ByteEncoder::new(tables)),
            Mode::Kanji => Encoder::Kanji(KanjiEncoder::new(tables)),
        }
    }

    /// Create an encoder for `mode` backed by the process-wide cache
    pub fn for_mode(mode: Mode) -> Self {
        Self::new(mode, TableCache::global())
    }

    fn inner(&self) -> &(dyn ModeEncoder + Send + Sync) {
        match self {
            Encoder::Numeric(e) => e,
            Encoder::Alphanumeric(e) => e,
            Encoder::Byte(e) => e,
            Encoder::Kanji(e) => e,
        }
    }

    /// Encode independent texts, in input order
    ///
    /// Batches of at least `QR_PARALLEL_MIN_BATCH` texts are spread across
    /// the rayon thread pool.
    pub fn encode_batch(&self, texts: &[&str]) -> Vec<Result<BitSequence, EncodeError>> {
        if texts.len() >= config::parallel_min_batch() {
            texts.par_iter().map(|text| self.encode(text)).collect()
        } else {
            texts.iter().map(|text| self.encode(text)).collect()
        }
    }
}

impl ModeEncoder for Encoder {
    fn mode(&self) -> Mode {
        self.inner().mode()
    }

    fn allowed(&self) -> Result<&CharSet, EncodeError> {
        self.inner().allowed()
    }

    fn bit_len(&self, char_count: usize) -> usize {
        self.inner().bit_len(char_count)
    }

    fn encode_validated(&self, text: &str, out: &mut BitSequence) -> Result<(), EncodeError> {
        self.inner().encode_validated(text, out)
    }
}
