//! Resolution of the audio file and its marker file.

use std::path::{Path, PathBuf};

use log::error;
use segue_lib::markers::find_companion;

/// Exit code when the audio file does not exist.
pub const EXIT_AUDIO_NOT_FOUND: i32 = 1;
/// Exit code when no marker file can be found for the audio file.
pub const EXIT_MARKERS_NOT_FOUND: i32 = 2;

/// Audio file plus the marker file that annotates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Inputs {
    pub audio: PathBuf,
    pub markers: PathBuf,
}

/// Locate both inputs, logging why and returning the exit code when one is missing.
pub fn resolve_inputs(input: &str, markers: Option<&String>) -> Result<Inputs, i32> {
    let audio = PathBuf::from(input);
    if !audio.is_file() {
        error!("audio file not found: {}", audio.display());
        return Err(EXIT_AUDIO_NOT_FOUND);
    }

    let explicit = markers.map(PathBuf::from);
    let markers = match &explicit {
        Some(path) => Some(path.clone()).filter(|path| path.is_file()),
        None => find_companion(&audio),
    };

    match markers {
        Some(markers) => Ok(Inputs { audio, markers }),
        None => {
            error!("{}", missing_markers_message(&audio, explicit.as_deref()));
            Err(EXIT_MARKERS_NOT_FOUND)
        }
    }
}

fn missing_markers_message(audio: &Path, explicit: Option<&Path>) -> String {
    match explicit {
        Some(path) => format!("marker file not found: {}", path.display()),
        None => format!(
            "matching marker file not found for {}; place a JSON marker file named the same as the audio file next to it ({})",
            audio.display(),
            audio
                .with_extension(segue_lib::markers::MARKER_EXTENSION)
                .display()
        ),
    }
}
