/// Packed MSB-first bit buffer
pub mod bit_sequence;
/// Encoding modes and their header widths
pub mod mode;
/// Mode, character count and payload of one segment
pub mod segment;

pub use bit_sequence::BitSequence;
pub use mode::Mode;
pub use segment::Segment;
