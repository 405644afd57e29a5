//! Helpers for handing PCM buffers to `rodio`.

use rodio::buffer::SamplesBuffer;

use super::buffer::PcmBuffer;

fn convert_signed_16bit_to_f32(sample: i16) -> f32 {
    sample as f32 / 2f32.powi(15)
}

/// Convert a 16-bit PCM buffer into a [`SamplesBuffer`] at `sample_rate`.
///
/// # Example
/// ```rust
/// use rodio::Source;
/// use segue_lib::audio::buffer::PcmBuffer;
/// use segue_lib::audio::samples::to_samples_buffer;
///
/// let pcm = PcmBuffer::new(2, vec![0i16; 8]).unwrap();
/// let buffer = to_samples_buffer(&pcm, 48_000);
/// assert_eq!(buffer.channels(), 2);
/// ```
pub fn to_samples_buffer(buffer: &PcmBuffer, sample_rate: u32) -> SamplesBuffer {
    let samples = buffer
        .samples()
        .iter()
        .map(|&sample| convert_signed_16bit_to_f32(sample))
        .collect::<Vec<f32>>();
    SamplesBuffer::new(buffer.channels(), sample_rate, samples)
}
