//! # Segue
//!
//! Marker-driven randomized playback of a single PCM recording. A fixed intro
//! plays first, then random interior segments follow one another (never the
//! same one twice in a row, optionally crossfaded) until the target length is
//! reached, then a fixed outro closes the mix.

pub mod audio;
pub mod dsp;
pub mod error;
pub mod markers;
pub mod mix;
pub mod playback;
pub mod source;

pub use error::MixError;
