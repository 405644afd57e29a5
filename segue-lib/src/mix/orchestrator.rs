//! Intro, randomized body, outro.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, warn};
use rand::Rng;

use crate::audio::buffer::PcmBuffer;
use crate::dsp::crossfade::crossfade;
use crate::error::MixError;
use crate::markers::{MarkerList, Segment};
use crate::playback::PlaybackDriver;
use crate::source::PcmSource;

use super::config::MixConfig;
use super::selector::SegmentSelector;
use super::session::{MixSession, PreviousSegment};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MixState {
    Idle,
    PlayingIntro,
    PlayingBody,
    PlayingOutro,
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Body,
    Outro,
}

/// Details of a segment about to be rendered.
#[derive(Debug, Clone)]
pub struct SegmentStatus<'a> {
    pub phase: Phase,
    /// Body round, starting at 1. Zero for intro and outro.
    pub round: usize,
    pub segment: &'a Segment,
    /// Label of the body segment this one fades out of, if crossfading.
    pub faded_from: Option<&'a str>,
    pub rendered_frames: usize,
    /// Body budget left before this segment plays.
    pub remaining_frames: u64,
    pub sample_rate: u32,
}

impl SegmentStatus<'_> {
    pub fn remaining_seconds(&self) -> f64 {
        if self.sample_rate == 0 {
            return 0.0;
        }
        self.remaining_frames as f64 / self.sample_rate as f64
    }
}

/// Progress notifications emitted while a mix runs.
#[derive(Debug, Clone)]
pub enum MixEvent<'a> {
    StateChanged(MixState),
    SegmentStarted(SegmentStatus<'a>),
}

/// Summary of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MixReport {
    /// All frames handed to the driver, intro and outro included.
    pub rendered_frames: u64,
    pub body_frames: u64,
    pub rounds: usize,
    /// Labels of the body segments in play order.
    pub body_labels: Vec<String>,
    pub cancelled: bool,
}

/// Sequences one randomized playback run over a source.
pub struct MixOrchestrator<S, D, R>
where
    S: PcmSource,
    D: PlaybackDriver,
    R: Rng,
{
    source: S,
    driver: D,
    selector: SegmentSelector<R>,
    markers: MarkerList,
    config: MixConfig,
    state: MixState,
    cancel: Arc<AtomicBool>,
}

impl<S, D, R> MixOrchestrator<S, D, R>
where
    S: PcmSource,
    D: PlaybackDriver,
    R: Rng,
{
    /// Bind markers to a source.
    ///
    /// # Errors
    /// [`MixError::MalformedMarkerData`] if any marker lies past the end of the
    /// source and [`MixError::InvalidConfig`] for negative lengths.
    pub fn new(
        source: S,
        driver: D,
        markers: MarkerList,
        config: MixConfig,
        rng: R,
    ) -> Result<Self, MixError> {
        config.validate()?;
        markers.validate_against(source.total_frames())?;
        Ok(Self {
            source,
            driver,
            selector: SegmentSelector::new(rng),
            markers,
            config,
            state: MixState::Idle,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    pub fn state(&self) -> MixState {
        self.state
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Flag that stops the run before the next segment once set.
    ///
    /// A segment already handed to the driver always plays to its end.
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        self.cancel.clone()
    }

    /// Play the whole mix.
    ///
    /// The orchestrator ends in [`MixState::Done`] whatever the outcome; a run
    /// cannot be restarted.
    pub fn run<F>(&mut self, mut observer: F) -> Result<MixReport, MixError>
    where
        F: FnMut(&MixEvent<'_>),
    {
        if self.state != MixState::Idle {
            return Err(MixError::Playback(format!(
                "mix already ran (state {:?})",
                self.state
            )));
        }

        let result = self.play(&mut observer);
        if let Err(err) = &result {
            warn!("mix stopped: {}", err);
        }
        self.transition(MixState::Done, &mut observer);
        result
    }

    fn play<F>(&mut self, observer: &mut F) -> Result<MixReport, MixError>
    where
        F: FnMut(&MixEvent<'_>),
    {
        let total_frames = self.source.total_frames();
        let sample_rate = self.source.sample_rate();
        let mut report = MixReport::default();

        self.transition(MixState::PlayingIntro, observer);
        let intro = self.markers.intro(total_frames);
        let target_frames = self.config.target.to_frames(sample_rate);
        let intro_frames = self.play_fixed(Phase::Intro, &intro, target_frames, observer)?;
        report.rendered_frames += intro_frames as u64;

        let mut session = MixSession::new(target_frames.saturating_sub(intro_frames as u64));
        let pool = self.markers.interior_pool(total_frames);
        let fade_frames = self.config.fade_frames(sample_rate);
        debug!(
            "body budget {} frames, interior pool of {}, fade {:?}",
            session.target_frames,
            pool.len(),
            fade_frames
        );

        self.transition(MixState::PlayingBody, observer);
        while !session.budget_exhausted() {
            if self.cancelled() {
                report.cancelled = true;
                break;
            }

            let (index, segment) = self
                .selector
                .pick_next(&pool, session.previous_interior_index)?;
            let buffer = self.read_segment(&segment)?;

            let previous = session.previous_segment.take();
            let (rendered, keep) = match (fade_frames, previous.as_ref()) {
                (Some(fade), Some(prev)) => (
                    crossfade(&prev.buffer, &buffer, fade, &prev.label, &segment.label)?,
                    Some(buffer),
                ),
                (Some(_), None) => (buffer.clone(), Some(buffer)),
                (None, _) => (buffer, None),
            };

            observer(&MixEvent::SegmentStarted(SegmentStatus {
                phase: Phase::Body,
                round: session.rounds + 1,
                segment: &segment,
                faded_from: match fade_frames {
                    Some(_) => previous.as_ref().map(|prev| prev.label.as_str()),
                    None => None,
                },
                rendered_frames: rendered.frames(),
                remaining_frames: session.remaining_frames(),
                sample_rate,
            }));
            debug!(
                "body round {}: {} from sample {} ({} frames)",
                session.rounds + 1,
                segment.label,
                segment.start,
                rendered.frames()
            );

            self.driver.render(&rendered, sample_rate)?;

            report.body_labels.push(segment.label.clone());
            session.advance(
                index,
                rendered.frames(),
                keep.map(|buffer| PreviousSegment {
                    label: segment.label.clone(),
                    buffer,
                }),
            );
        }
        report.rounds = session.rounds;
        report.body_frames = session.cumulative_frames;
        report.rendered_frames += session.cumulative_frames;

        if report.cancelled || self.cancelled() {
            report.cancelled = true;
            return Ok(report);
        }

        self.transition(MixState::PlayingOutro, observer);
        let outro = self.markers.outro(total_frames);
        let outro_frames = self.play_fixed(Phase::Outro, &outro, 0, observer)?;
        report.rendered_frames += outro_frames as u64;

        Ok(report)
    }

    fn play_fixed<F>(
        &mut self,
        phase: Phase,
        segment: &Segment,
        remaining_frames: u64,
        observer: &mut F,
    ) -> Result<usize, MixError>
    where
        F: FnMut(&MixEvent<'_>),
    {
        let sample_rate = self.source.sample_rate();
        let buffer = self.read_segment(segment)?;
        observer(&MixEvent::SegmentStarted(SegmentStatus {
            phase,
            round: 0,
            segment,
            faded_from: None,
            rendered_frames: buffer.frames(),
            remaining_frames,
            sample_rate,
        }));
        debug!(
            "playing {:?} section: {}, sample: {}",
            phase, segment.label, segment.start
        );
        self.driver.render(&buffer, sample_rate)?;
        Ok(buffer.frames())
    }

    fn read_segment(&mut self, segment: &Segment) -> Result<PcmBuffer, MixError> {
        let total = self.source.total_frames();
        let end = segment.end.min(total);
        if end < segment.end {
            warn!(
                "segment \"{}\" ends at {} past the source end {}, clamping",
                segment.label, segment.end, total
            );
        }
        let count = end.saturating_sub(segment.start);
        self.source.read_frames(segment.start, count)
    }

    fn cancelled(&self) -> bool {
        let cancelled = self.cancel.load(Ordering::Relaxed);
        if cancelled {
            info!("mix cancelled between segments");
        }
        cancelled
    }

    fn transition<F>(&mut self, next: MixState, observer: &mut F)
    where
        F: FnMut(&MixEvent<'_>),
    {
        debug!("mix state {:?} -> {:?}", self.state, next);
        self.state = next;
        observer(&MixEvent::StateChanged(next));
    }
}
