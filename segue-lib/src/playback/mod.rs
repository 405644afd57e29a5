//! Playback drivers that render PCM buffers.

mod device;
mod offline;

pub use device::DeviceDriver;
pub use offline::OfflineDriver;

use crate::audio::buffer::PcmBuffer;
use crate::error::MixError;

/// Renders PCM buffers one at a time.
///
/// `render` returns once the buffer has finished playing, so two buffers never
/// overlap on the output.
pub trait PlaybackDriver {
    fn render(&mut self, buffer: &PcmBuffer, sample_rate: u32) -> Result<(), MixError>;
}

impl<D: PlaybackDriver + ?Sized> PlaybackDriver for Box<D> {
    fn render(&mut self, buffer: &PcmBuffer, sample_rate: u32) -> Result<(), MixError> {
        (**self).render(buffer, sample_rate)
    }
}
