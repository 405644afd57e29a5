//! Linear crossfade between two adjacent PCM buffers.
//!
//! The transition is concatenative rather than overlap-add: the tail buffer's
//! last `fade_frames` frames are ramped down and kept, the head buffer's first
//! `fade_frames` frames are ramped up and then dropped, and the rest of the head
//! is appended untouched. The two buffers never sum into the same output
//! sample, so the result is `tail.frames() + head.frames() - fade_frames` long.

use crate::audio::buffer::PcmBuffer;
use crate::error::MixError;

/// Linear gain ramp from 0.0 to 1.0 over `frames` points, endpoints included.
///
/// A single-point ramp is `[0.0]`.
pub fn fade_ramp(frames: usize) -> Vec<f64> {
    match frames {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (frames - 1) as f64;
            (0..frames).map(|i| i as f64 / last).collect()
        }
    }
}

fn apply_gain(sample: i16, gain: f64) -> i16 {
    (f64::from(sample) * gain)
        .round()
        .clamp(f64::from(i16::MIN), f64::from(i16::MAX)) as i16
}

/// Blend `tail` into `head` over `fade_frames` frames.
///
/// Labels are only used for error context: `tail_label` and `head_label` name
/// the segments the buffers were read from.
///
/// # Errors
/// [`MixError::ChannelMismatch`] when the buffers disagree on channel count
/// and [`MixError::InsufficientFadeRegion`] when either buffer is shorter than
/// the fade.
pub fn crossfade(
    tail: &PcmBuffer,
    head: &PcmBuffer,
    fade_frames: usize,
    tail_label: &str,
    head_label: &str,
) -> Result<PcmBuffer, MixError> {
    if tail.channels() != head.channels() {
        return Err(MixError::ChannelMismatch {
            expected: tail.channels(),
            found: head.channels(),
        });
    }
    for (buffer, label) in [(tail, tail_label), (head, head_label)] {
        if buffer.frames() < fade_frames {
            return Err(MixError::InsufficientFadeRegion {
                label: label.to_string(),
                fade_frames,
                available_frames: buffer.frames(),
            });
        }
    }

    let channels = tail.channels() as usize;
    let ramp = fade_ramp(fade_frames);
    let fade_out_from = tail.frames() - fade_frames;

    let mut out = Vec::with_capacity((tail.frames() + head.frames() - fade_frames) * channels);
    out.extend_from_slice(&tail.samples()[..fade_out_from * channels]);

    for (i, gain) in ramp.iter().enumerate() {
        let frame = &tail.samples()[(fade_out_from + i) * channels..][..channels];
        out.extend(frame.iter().map(|&sample| apply_gain(sample, 1.0 - gain)));
    }

    // The faded-in head prefix replaces nothing in a concatenative fade; only
    // the remainder after it is appended.
    out.extend_from_slice(&head.samples()[fade_frames * channels..]);

    PcmBuffer::new(tail.channels(), out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono(samples: Vec<i16>) -> PcmBuffer {
        PcmBuffer::new(1, samples).unwrap()
    }

    #[test]
    fn ramp_spans_zero_to_one() {
        let ramp = fade_ramp(5);
        assert_eq!(ramp, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
        assert_eq!(fade_ramp(1), vec![0.0]);
        assert!(fade_ramp(0).is_empty());
    }

    #[test]
    fn fade_gains_sum_to_unity() {
        for frames in [2usize, 3, 10, 441, 44_100] {
            let ramp = fade_ramp(frames);
            for (i, g) in ramp.iter().enumerate() {
                let fade_out = 1.0 - g;
                assert!((fade_out + g - 1.0).abs() < 1e-12);
                // fade-out at i mirrors fade-in at the opposite end
                assert!((fade_out - ramp[frames - 1 - i]).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn zero_length_fade_concatenates() {
        let tail = mono(vec![1, 2, 3]);
        let head = mono(vec![4, 5]);
        let out = crossfade(&tail, &head, 0, "tail", "head").unwrap();
        assert_eq!(out.samples(), &[1, 2, 3, 4, 5]);
    }

    #[test]
    fn output_length_drops_head_prefix() {
        let tail = mono(vec![1_000; 100]);
        let head = mono(vec![2_000; 100]);
        let out = crossfade(&tail, &head, 5, "A", "B").unwrap();
        assert_eq!(out.frames(), 100 + 100 - 5);
    }

    #[test]
    fn tail_is_ramped_down_and_head_remainder_untouched() {
        let tail = mono(vec![1_000, 1_000, 1_000, 1_000, 1_000, 1_000]);
        let head = mono(vec![7, 7, 7, 7, 7, 9, 9]);
        let out = crossfade(&tail, &head, 5, "A", "B").unwrap();
        assert_eq!(out.samples(), &[1_000, 1_000, 750, 500, 250, 0, 9, 9]);
    }

    #[test]
    fn stereo_frames_share_one_gain() {
        let tail = PcmBuffer::new(2, vec![100, -100, 100, -100, 100, -100]).unwrap();
        let head = PcmBuffer::new(2, vec![0, 0, 0, 0, 5, 6]).unwrap();
        let out = crossfade(&tail, &head, 2, "A", "B").unwrap();
        assert_eq!(out.samples(), &[100, -100, 100, -100, 0, 0, 5, 6]);
    }

    #[test]
    fn extreme_samples_stay_in_range() {
        let tail = mono(vec![i16::MIN, i16::MAX, i16::MIN, i16::MAX]);
        let head = mono(vec![i16::MAX; 4]);
        let out = crossfade(&tail, &head, 4, "A", "B").unwrap();
        assert_eq!(out.samples()[0], i16::MIN);
        assert_eq!(out.samples()[3], 0);
        assert_eq!(apply_gain(i16::MAX, 0.0), 0);
        assert_eq!(apply_gain(i16::MAX, 1.0), i16::MAX);
        assert_eq!(apply_gain(i16::MIN, 1.0), i16::MIN);
        assert_eq!(apply_gain(i16::MAX, 1.5), i16::MAX);
        assert_eq!(apply_gain(i16::MIN, 1.5), i16::MIN);
    }

    #[test]
    fn oversized_fade_names_short_segment() {
        let tail = mono(vec![0; 10]);
        let head = mono(vec![0; 3]);
        match crossfade(&tail, &head, 4, "verse", "chorus") {
            Err(MixError::InsufficientFadeRegion {
                label,
                fade_frames,
                available_frames,
            }) => {
                assert_eq!(label, "chorus");
                assert_eq!(fade_frames, 4);
                assert_eq!(available_frames, 3);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn channel_mismatch_is_rejected() {
        let tail = mono(vec![0; 4]);
        let head = PcmBuffer::new(2, vec![0; 4]).unwrap();
        assert!(matches!(
            crossfade(&tail, &head, 1, "A", "B"),
            Err(MixError::ChannelMismatch {
                expected: 1,
                found: 2
            })
        ));
    }
}
