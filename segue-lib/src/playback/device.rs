use std::time::Instant;

use log::{debug, warn};
use rodio::{OutputStream, OutputStreamBuilder, Sink};

use crate::audio::buffer::PcmBuffer;
use crate::audio::samples::to_samples_buffer;
use crate::error::MixError;

use super::PlaybackDriver;

/// Plays buffers on the default audio output device.
pub struct DeviceDriver {
    // Dropping the stream silences the sink.
    _stream: OutputStream,
    sink: Sink,
}

impl DeviceDriver {
    /// Open the default output device.
    ///
    /// # Errors
    /// [`MixError::Playback`] if no output stream can be opened.
    pub fn open() -> Result<Self, MixError> {
        let mut stream = OutputStreamBuilder::open_default_stream().map_err(|err| {
            MixError::Playback(format!("failed to open default output stream: {}", err))
        })?;
        stream.log_on_drop(false);
        let sink = Sink::connect_new(stream.mixer());
        Ok(Self {
            _stream: stream,
            sink,
        })
    }

    /// Set output volume, `1.0` being unity gain.
    pub fn set_volume(&self, volume: f32) {
        if volume.is_finite() && volume >= 0.0 {
            self.sink.set_volume(volume);
        } else {
            warn!("ignoring invalid volume {}", volume);
        }
    }
}

impl PlaybackDriver for DeviceDriver {
    fn render(&mut self, buffer: &PcmBuffer, sample_rate: u32) -> Result<(), MixError> {
        if buffer.is_empty() {
            return Ok(());
        }
        let started = Instant::now();
        self.sink.append(to_samples_buffer(buffer, sample_rate));
        self.sink.sleep_until_end();
        debug!(
            "rendered {} frames ({:.3}s) in {:.3}s",
            buffer.frames(),
            buffer.duration_seconds(sample_rate),
            started.elapsed().as_secs_f64()
        );
        Ok(())
    }
}
