//! Sample-offset markers and the segments derived from them.

mod file;

pub use file::{find_companion, load, load_file, MARKER_EXTENSION};

use crate::error::MixError;

/// A named position in the recording, in frames from the start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    pub sample_offset: u64,
    pub label: String,
}

impl Marker {
    pub fn new(sample_offset: u64, label: impl Into<String>) -> Self {
        Self {
            sample_offset,
            label: label.into(),
        }
    }
}

/// A playable frame range `[start, end)` derived from a marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    /// Position of the originating marker in the full list.
    pub marker_index: usize,
    pub start: u64,
    pub end: u64,
    pub label: String,
}

impl Segment {
    pub fn frames(&self) -> u64 {
        self.end.saturating_sub(self.start)
    }
}

/// Markers sorted ascending by offset with no two on the same sample.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerList {
    markers: Vec<Marker>,
}

impl MarkerList {
    /// Build a list from markers in any order.
    ///
    /// The sort is stable, so ties keep their input order in the error message.
    ///
    /// # Errors
    /// [`MixError::MalformedMarkerData`] for fewer than two markers and
    /// [`MixError::DuplicateOffset`] when two markers share an offset.
    pub fn new(mut markers: Vec<Marker>) -> Result<Self, MixError> {
        if markers.len() < 2 {
            return Err(MixError::MalformedMarkerData(format!(
                "found {} marker(s), at least a start and an end marker are required",
                markers.len()
            )));
        }

        markers.sort_by_key(|marker| marker.sample_offset);

        if let Some(pair) = markers
            .windows(2)
            .find(|pair| pair[0].sample_offset == pair[1].sample_offset)
        {
            return Err(MixError::DuplicateOffset {
                offset: pair[0].sample_offset,
                first: pair[0].label.clone(),
                second: pair[1].label.clone(),
            });
        }

        Ok(Self { markers })
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Marker> {
        self.markers.iter()
    }

    pub fn first(&self) -> &Marker {
        &self.markers[0]
    }

    pub fn last(&self) -> &Marker {
        &self.markers[self.markers.len() - 1]
    }

    /// Check every marker against the length of the audio it annotates.
    ///
    /// # Errors
    /// [`MixError::MalformedMarkerData`] naming the first marker past the end.
    pub fn validate_against(&self, total_frames: u64) -> Result<(), MixError> {
        match self
            .markers
            .iter()
            .find(|marker| marker.sample_offset > total_frames)
        {
            Some(marker) => Err(MixError::MalformedMarkerData(format!(
                "marker \"{}\" at sample {} lies beyond the end of the audio ({} frames)",
                marker.label, marker.sample_offset, total_frames
            ))),
            None => Ok(()),
        }
    }

    /// Frame range of the segment opened by the marker at `index`.
    ///
    /// The segment ends at the next marker, or at `total_frames` for the last
    /// marker in the list.
    pub fn resolve_segment_bounds(&self, index: usize, total_frames: u64) -> (u64, u64) {
        let start = self.markers[index].sample_offset;
        let end = match self.markers.get(index + 1) {
            Some(next) => next.sample_offset,
            None => total_frames,
        };
        (start, end)
    }

    /// The segment opened by the marker at `index`.
    pub fn segment(&self, index: usize, total_frames: u64) -> Segment {
        let (start, end) = self.resolve_segment_bounds(index, total_frames);
        Segment {
            marker_index: index,
            start,
            end,
            label: self.markers[index].label.clone(),
        }
    }

    /// Segment played before the randomized body: `[markers[0], markers[1])`.
    pub fn intro(&self, total_frames: u64) -> Segment {
        self.segment(0, total_frames)
    }

    /// Segment played after the randomized body: `[markers[last], total_frames)`.
    pub fn outro(&self, total_frames: u64) -> Segment {
        self.segment(self.markers.len() - 1, total_frames)
    }

    /// Marker indices eligible for randomized play.
    ///
    /// Matches the slice `markers[1:-2]`: the first marker and the last two are
    /// excluded, so the marker right before the outro never plays in the body.
    pub fn interior_range(&self) -> std::ops::Range<usize> {
        let end = self.markers.len().saturating_sub(2);
        1..end.max(1)
    }

    /// Segments eligible for randomized play, bounds resolved.
    pub fn interior_pool(&self, total_frames: u64) -> InteriorPool {
        InteriorPool {
            segments: self
                .interior_range()
                .map(|index| self.segment(index, total_frames))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a MarkerList {
    type Item = &'a Marker;
    type IntoIter = std::slice::Iter<'a, Marker>;

    fn into_iter(self) -> Self::IntoIter {
        self.markers.iter()
    }
}

/// Interior segments the random walk draws from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct InteriorPool {
    segments: Vec<Segment>,
}

impl InteriorPool {
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Segment> {
        self.segments.get(index)
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}
