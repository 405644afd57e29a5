use log::trace;

use crate::audio::buffer::PcmBuffer;
use crate::error::MixError;

use super::PlaybackDriver;

/// Driver that plays nothing and returns immediately.
///
/// Counts rendered frames and, when built with [`capturing`](Self::capturing),
/// keeps a copy of every buffer.
#[derive(Debug, Default)]
pub struct OfflineDriver {
    rendered_frames: u64,
    renders: usize,
    captured: Option<Vec<PcmBuffer>>,
}

impl OfflineDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn capturing() -> Self {
        Self {
            captured: Some(Vec::new()),
            ..Self::default()
        }
    }

    pub fn rendered_frames(&self) -> u64 {
        self.rendered_frames
    }

    pub fn renders(&self) -> usize {
        self.renders
    }

    /// Captured buffers in render order; empty unless capturing.
    pub fn captured(&self) -> &[PcmBuffer] {
        self.captured.as_deref().unwrap_or(&[])
    }
}

impl PlaybackDriver for OfflineDriver {
    fn render(&mut self, buffer: &PcmBuffer, sample_rate: u32) -> Result<(), MixError> {
        trace!("offline render of {} frames at {} Hz", buffer.frames(), sample_rate);
        self.rendered_frames += buffer.frames() as u64;
        self.renders += 1;
        if let Some(captured) = self.captured.as_mut() {
            captured.push(buffer.clone());
        }
        Ok(())
    }
}
