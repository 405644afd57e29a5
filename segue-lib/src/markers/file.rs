use std::path::{Path, PathBuf};

use log::{debug, info};
use serde::Deserialize;

use crate::error::MixError;

use super::{Marker, MarkerList};

/// Extension of the companion marker file.
pub const MARKER_EXTENSION: &str = "json";

#[derive(Debug, Clone, Deserialize)]
struct MarkerRecord {
    #[serde(alias = "offset")]
    sample: u64,
    #[serde(alias = "label")]
    section: String,
}

#[derive(Debug, Clone, Deserialize)]
struct MarkerFile {
    markers: Vec<MarkerRecord>,
}

/// Parse a marker description.
///
/// The payload is a JSON object whose `markers` key holds records of the form
/// `{"sample": 44100, "section": "verse"}`.
///
/// # Errors
/// [`MixError::MalformedMarkerData`] if a record lacks a non-negative integer
/// offset or a string label, and [`MixError::DuplicateOffset`] when two
/// records share an offset.
pub fn load(source: &str) -> Result<MarkerList, MixError> {
    let file: MarkerFile = serde_json::from_str(source)?;
    debug!("parsed {} marker record(s)", file.markers.len());

    let markers = file
        .markers
        .into_iter()
        .map(|record| Marker::new(record.sample, record.section))
        .collect();

    MarkerList::new(markers)
}

/// Read and parse a marker file.
///
/// # Errors
/// [`MixError::InputNotFound`] if `path` does not exist, otherwise the errors of
/// [`load`].
pub fn load_file(path: &Path) -> Result<MarkerList, MixError> {
    if !path.is_file() {
        return Err(MixError::InputNotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)?;
    let markers = load(&raw)?;
    info!("Loaded {} markers from {}", markers.len(), path.display());
    Ok(markers)
}

/// Locate the marker file sharing `media_path`'s base name.
pub fn find_companion(media_path: &Path) -> Option<PathBuf> {
    let candidate = media_path.with_extension(MARKER_EXTENSION);
    if candidate.is_file() {
        Some(candidate)
    } else {
        debug!("no marker file at {}", candidate.display());
        None
    }
}
