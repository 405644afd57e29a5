//! Sample-level processing.

pub mod crossfade;
