//! Mix configuration passed to the orchestrator.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::MixError;

/// Default mix length in seconds.
pub const DEFAULT_MIX_SECONDS: f64 = 60.0;
/// Default crossfade length in seconds.
pub const DEFAULT_CROSSFADE_SECONDS: f64 = 10.0;

/// A length expressed either in frames or in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Span {
    Frames(u64),
    Seconds(f64),
}

impl Span {
    /// Resolve to a frame count at `sample_rate`, rounding to the nearest frame.
    ///
    /// Negative or non-finite second values resolve to zero frames.
    pub fn to_frames(self, sample_rate: u32) -> u64 {
        match self {
            Span::Frames(frames) => frames,
            Span::Seconds(seconds) if seconds.is_finite() && seconds > 0.0 => {
                (seconds * sample_rate as f64).round() as u64
            }
            Span::Seconds(_) => 0,
        }
    }
}

/// Settings for one randomized playback run.
#[derive(Debug, Clone, PartialEq)]
pub struct MixConfig {
    /// Total mix length including the intro. The outro plays on top of it.
    pub target: Span,
    pub crossfade: bool,
    pub crossfade_length: Span,
    /// Seed for the segment random walk. `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for MixConfig {
    fn default() -> Self {
        Self {
            target: Span::Seconds(DEFAULT_MIX_SECONDS),
            crossfade: false,
            crossfade_length: Span::Seconds(DEFAULT_CROSSFADE_SECONDS),
            seed: None,
        }
    }
}

impl MixConfig {
    /// Random source for the segment selector, seeded when [`seed`](Self::seed) is set.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Reject negative or non-finite lengths.
    pub fn validate(&self) -> Result<(), MixError> {
        for (name, span) in [
            ("mix length", self.target),
            ("crossfade length", self.crossfade_length),
        ] {
            if let Span::Seconds(seconds) = span {
                if !seconds.is_finite() || seconds < 0.0 {
                    return Err(MixError::InvalidConfig(format!(
                        "{} must be a non-negative number of seconds, got {}",
                        name, seconds
                    )));
                }
            }
        }
        Ok(())
    }

    /// Crossfade length in frames, or `None` when crossfading is off.
    pub fn fade_frames(&self, sample_rate: u32) -> Option<usize> {
        if self.crossfade {
            Some(self.crossfade_length.to_frames(sample_rate) as usize)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn seconds_round_to_nearest_frame() {
        assert_eq!(Span::Seconds(0.005).to_frames(1_000), 5);
        assert_eq!(Span::Seconds(60.0).to_frames(44_100), 2_646_000);
        assert_eq!(Span::Seconds(-1.0).to_frames(44_100), 0);
        assert_eq!(Span::Seconds(f64::NAN).to_frames(44_100), 0);
        assert_eq!(Span::Frames(7).to_frames(44_100), 7);
    }

    #[test]
    fn defaults_match_reference_settings() {
        let config = MixConfig::default();
        assert_eq!(config.target.to_frames(44_100), 44_100 * 60);
        assert!(!config.crossfade);
        assert_eq!(config.fade_frames(44_100), None);
    }

    #[test]
    fn fade_frames_follow_the_flag() {
        let config = MixConfig {
            crossfade: true,
            ..MixConfig::default()
        };
        assert_eq!(config.fade_frames(48_000), Some(480_000));
    }

    #[test]
    fn negative_lengths_are_invalid() {
        let config = MixConfig {
            target: Span::Seconds(-3.0),
            ..MixConfig::default()
        };
        assert!(matches!(config.validate(), Err(MixError::InvalidConfig(_))));
        let config = MixConfig {
            crossfade_length: Span::Seconds(f64::INFINITY),
            ..MixConfig::default()
        };
        assert!(config.validate().is_err());
        assert!(MixConfig::default().validate().is_ok());
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let config = MixConfig {
            seed: Some(42),
            ..MixConfig::default()
        };
        let a = config.rng().gen::<u64>();
        let b = config.rng().gen::<u64>();
        assert_eq!(a, b);
    }
}
