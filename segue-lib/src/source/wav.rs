use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::{SampleFormat, WavReader};
use log::debug;

use crate::audio::buffer::PcmBuffer;
use crate::error::MixError;

use super::{check_range, PcmSource};

/// 16-bit integer PCM WAV file read on demand.
pub struct WavSource {
    reader: WavReader<BufReader<File>>,
    sample_rate: u32,
    channels: u16,
    total_frames: u64,
}

impl std::fmt::Debug for WavSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WavSource")
            .field("sample_rate", &self.sample_rate)
            .field("channels", &self.channels)
            .field("total_frames", &self.total_frames)
            .finish()
    }
}

impl WavSource {
    /// Open a WAV file for frame reads.
    ///
    /// # Errors
    /// [`MixError::InputNotFound`] if the file does not exist and
    /// [`MixError::UnreadableAudio`] if the header cannot be parsed or the data
    /// is anything other than 16-bit signed integer PCM.
    pub fn open(path: &Path) -> Result<Self, MixError> {
        if !path.is_file() {
            return Err(MixError::InputNotFound(path.to_path_buf()));
        }

        let reader = WavReader::open(path).map_err(|err| {
            MixError::UnreadableAudio(format!("{}: {}", path.display(), err))
        })?;
        let spec = reader.spec();

        if spec.sample_format != SampleFormat::Int || spec.bits_per_sample != 16 {
            return Err(MixError::UnreadableAudio(format!(
                "{}: {}-bit {:?} samples are not supported, expected 16-bit integer PCM",
                path.display(),
                spec.bits_per_sample,
                spec.sample_format
            )));
        }

        debug!(
            "opened {}: {} Hz, {} channel(s), {} frames",
            path.display(),
            spec.sample_rate,
            spec.channels,
            reader.duration()
        );

        Ok(Self {
            total_frames: reader.duration() as u64,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
            reader,
        })
    }
}

impl PcmSource for WavSource {
    fn read_frames(&mut self, start: u64, count: u64) -> Result<PcmBuffer, MixError> {
        check_range(start, count, self.total_frames)?;
        // total_frames came from a u32 header field, so start fits.
        self.reader.seek(start as u32)?;

        let wanted = count as usize * self.channels as usize;
        let samples = self
            .reader
            .samples::<i16>()
            .take(wanted)
            .collect::<Result<Vec<i16>, hound::Error>>()?;

        if samples.len() != wanted {
            return Err(MixError::UnreadableAudio(format!(
                "short read at frame {}: wanted {} samples, got {}",
                start,
                wanted,
                samples.len()
            )));
        }

        PcmBuffer::new(self.channels, samples)
    }

    fn total_frames(&self) -> u64 {
        self.total_frames
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    fn channels(&self) -> u16 {
        self.channels
    }
}
