//! PCM buffer types and conversions.

pub mod buffer;
pub mod samples;
