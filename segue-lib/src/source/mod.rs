//! Random-access PCM sources.

mod wav;

pub use wav::WavSource;

use crate::audio::buffer::PcmBuffer;
use crate::error::MixError;

/// Frame-addressed access to 16-bit PCM audio.
pub trait PcmSource {
    /// Read `count` frames starting at frame `start`.
    ///
    /// # Errors
    /// [`MixError::OutOfRange`] if `start + count` exceeds [`total_frames`](Self::total_frames).
    fn read_frames(&mut self, start: u64, count: u64) -> Result<PcmBuffer, MixError>;

    fn total_frames(&self) -> u64;

    fn sample_rate(&self) -> u32;

    fn channels(&self) -> u16;
}

/// Static properties of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceInfo {
    pub sample_rate: u32,
    pub channels: u16,
    pub total_frames: u64,
}

impl SourceInfo {
    pub fn of(source: &impl PcmSource) -> Self {
        Self {
            sample_rate: source.sample_rate(),
            channels: source.channels(),
            total_frames: source.total_frames(),
        }
    }

    pub fn duration_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.total_frames as f64 / self.sample_rate as f64
    }
}

pub(crate) fn check_range(start: u64, count: u64, total: u64) -> Result<(), MixError> {
    match start.checked_add(count) {
        Some(end) if end <= total => Ok(()),
        _ => Err(MixError::OutOfRange {
            start,
            count,
            total,
        }),
    }
}

/// PCM source backed by interleaved samples held in memory.
#[derive(Debug, Clone)]
pub struct MemorySource {
    sample_rate: u32,
    buffer: PcmBuffer,
}

impl MemorySource {
    pub fn new(sample_rate: u32, buffer: PcmBuffer) -> Self {
        Self {
            sample_rate,
            buffer,
        }
    }

    /// Mono source whose sample at frame `n` is `n` wrapped into `i16`.
    ///
    /// Each frame carries its own index, which makes reads easy to check.
    pub fn ramp(sample_rate: u32, frames: usize) -> Self {
        let samples = (0..frames).map(|n| n as i16).collect();
        Self {
            sample_rate,
            buffer: PcmBuffer::new(1, samples).unwrap_or_else(|_| PcmBuffer::silent(1)),
        }
    }
}

impl PcmSource for MemorySource {
    fn read_frames(&mut self, start: u64, count: u64) -> Result<PcmBuffer, MixError> {
        check_range(start, count, self.total_frames())?;
        let width = self.buffer.channels() as usize;
        let from = start as usize * width;
        let to = (start + count) as usize * width;
        PcmBuffer::new(self.buffer.channels(), self.buffer.samples()[from..to].to_vec())
    }

    fn total_frames(&self) -> u64 {
        self.buffer.frames() as u64
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channels(&self) -> u16 {
        self.buffer.channels()
    }
}
