//! Interleaved 16-bit PCM buffers passed between source, mixer and driver.

use crate::error::MixError;

/// Interleaved signed 16-bit samples with a fixed channel count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PcmBuffer {
    channels: u16,
    samples: Vec<i16>,
}

impl PcmBuffer {
    /// Wrap interleaved samples.
    ///
    /// # Errors
    /// Returns [`MixError::UnreadableAudio`] if `channels` is zero or the
    /// sample count is not a whole number of frames.
    pub fn new(channels: u16, samples: Vec<i16>) -> Result<Self, MixError> {
        if channels == 0 {
            return Err(MixError::UnreadableAudio(
                "pcm buffer needs at least one channel".to_string(),
            ));
        }
        if samples.len() % channels as usize != 0 {
            return Err(MixError::UnreadableAudio(format!(
                "{} samples do not divide into {} channel frames",
                samples.len(),
                channels
            )));
        }
        Ok(Self { channels, samples })
    }

    /// An empty buffer.
    pub fn silent(channels: u16) -> Self {
        Self {
            channels: channels.max(1),
            samples: Vec::new(),
        }
    }

    pub fn channels(&self) -> u16 {
        self.channels
    }

    pub fn frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[i16] {
        &self.samples
    }

    /// Samples of a single frame.
    pub fn frame(&self, index: usize) -> Option<&[i16]> {
        let width = self.channels as usize;
        self.samples.get(index * width..(index + 1) * width)
    }

    /// Playback length in seconds at `sample_rate`.
    pub fn duration_seconds(&self, sample_rate: u32) -> f64 {
        if sample_rate == 0 {
            return 0.0;
        }
        self.frames() as f64 / sample_rate as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frames_count_interleaved_samples() {
        let buffer = PcmBuffer::new(2, vec![1, -1, 2, -2, 3, -3]).unwrap();
        assert_eq!(buffer.frames(), 3);
        assert_eq!(buffer.frame(1), Some(&[2, -2][..]));
        assert_eq!(buffer.frame(3), None);
    }

    #[test]
    fn ragged_sample_count_is_rejected() {
        let err = PcmBuffer::new(2, vec![1, 2, 3]).unwrap_err();
        assert!(matches!(err, MixError::UnreadableAudio(_)));
    }

    #[test]
    fn zero_channels_is_rejected() {
        assert!(PcmBuffer::new(0, Vec::new()).is_err());
    }

    #[test]
    fn duration_uses_frame_count() {
        let buffer = PcmBuffer::new(2, vec![0; 2_000]).unwrap();
        assert!((buffer.duration_seconds(1_000) - 1.0).abs() < f64::EPSILON);
        assert_eq!(buffer.duration_seconds(0), 0.0);
    }
}
