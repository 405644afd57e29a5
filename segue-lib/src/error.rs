use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Error type for marker loading, PCM access, mixing and playback.
#[derive(Debug)]
pub enum MixError {
    /// Media or marker file does not exist.
    InputNotFound(PathBuf),
    MalformedMarkerData(String),
    /// Two markers share a sample offset, so the segment between them is empty.
    DuplicateOffset {
        offset: u64,
        first: String,
        second: String,
    },
    UnreadableAudio(String),
    /// A frame read past the end of the source.
    OutOfRange {
        start: u64,
        count: u64,
        total: u64,
    },
    NoAlternativeSegment {
        pool_size: usize,
    },
    InsufficientFadeRegion {
        label: String,
        fade_frames: usize,
        available_frames: usize,
    },
    ChannelMismatch {
        expected: u16,
        found: u16,
    },
    Playback(String),
    InvalidConfig(String),
    Io(std::io::Error),
}

impl Display for MixError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InputNotFound(path) => write!(f, "input not found: {}", path.display()),
            Self::MalformedMarkerData(err) => write!(f, "malformed marker data: {}", err),
            Self::DuplicateOffset {
                offset,
                first,
                second,
            } => write!(
                f,
                "duplicate marker offset {}: \"{}\" and \"{}\" start on the same sample",
                offset, first, second
            ),
            Self::UnreadableAudio(err) => write!(f, "unreadable audio: {}", err),
            Self::OutOfRange {
                start,
                count,
                total,
            } => write!(
                f,
                "frame range {}..{} is outside the source ({} frames)",
                start,
                start.saturating_add(*count),
                total
            ),
            Self::NoAlternativeSegment { pool_size } => write!(
                f,
                "no alternative segment: interior pool has {} marker(s), randomized play needs at least 2 interior markers",
                pool_size
            ),
            Self::InsufficientFadeRegion {
                label,
                fade_frames,
                available_frames,
            } => write!(
                f,
                "segment \"{}\" has {} frame(s), too short for a {} frame crossfade",
                label, available_frames, fade_frames
            ),
            Self::ChannelMismatch { expected, found } => write!(
                f,
                "channel count mismatch: expected {}, found {}",
                expected, found
            ),
            Self::Playback(err) => write!(f, "playback error: {}", err),
            Self::InvalidConfig(err) => write!(f, "invalid configuration: {}", err),
            Self::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for MixError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MixError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for MixError {
    fn from(value: serde_json::Error) -> Self {
        Self::MalformedMarkerData(value.to_string())
    }
}

impl From<hound::Error> for MixError {
    fn from(value: hound::Error) -> Self {
        match value {
            hound::Error::IoError(err) => Self::Io(err),
            other => Self::UnreadableAudio(other.to_string()),
        }
    }
}
