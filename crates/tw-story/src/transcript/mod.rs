//! Timestamped record of a story session.

pub mod entry;
pub mod log;

pub use entry::TranscriptEntry;
pub use log::Transcript;
