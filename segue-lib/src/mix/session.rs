use crate::audio::buffer::PcmBuffer;

/// The last body segment, kept so the next one can fade out of it.
#[derive(Debug, Clone)]
pub struct PreviousSegment {
    pub label: String,
    pub buffer: PcmBuffer,
}

/// Mutable state of one randomized playback run.
#[derive(Debug, Clone, Default)]
pub struct MixSession {
    /// Frames rendered by the body so far, after crossfading.
    pub cumulative_frames: u64,
    /// Body budget: the configured mix length minus the intro.
    pub target_frames: u64,
    pub previous_interior_index: Option<usize>,
    pub previous_segment: Option<PreviousSegment>,
    pub rounds: usize,
}

impl MixSession {
    pub fn new(target_frames: u64) -> Self {
        Self {
            target_frames,
            ..Self::default()
        }
    }

    pub fn budget_exhausted(&self) -> bool {
        self.cumulative_frames >= self.target_frames
    }

    pub fn remaining_frames(&self) -> u64 {
        self.target_frames.saturating_sub(self.cumulative_frames)
    }

    /// Record a rendered body segment.
    pub fn advance(
        &mut self,
        index: usize,
        rendered_frames: usize,
        previous_segment: Option<PreviousSegment>,
    ) {
        self.rounds += 1;
        self.cumulative_frames += rendered_frames as u64;
        self.previous_interior_index = Some(index);
        self.previous_segment = previous_segment;
    }
}
