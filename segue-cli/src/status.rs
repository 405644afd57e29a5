//! Console status lines for a running mix.

use segue_lib::mix::{MixEvent, MixReport, Phase, SegmentStatus};

pub fn banner() -> String {
    format!("Segue {}\nAUTOPLAY\n", env!("CARGO_PKG_VERSION"))
}

pub fn format_time(seconds: f64) -> String {
    // Seconds rounded up
    let seconds = seconds.max(0.0).ceil() as u64;
    let minutes = seconds / 60;
    let seconds = seconds % 60;
    let hours = minutes / 60;
    let minutes = minutes % 60;

    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

pub fn segment_text(status: &SegmentStatus<'_>) -> String {
    let segment = status.segment;
    match status.phase {
        Phase::Intro => format!(
            "Playing first section: {}, sample: {}",
            segment.label, segment.start
        ),
        Phase::Outro => format!(
            "Playing last section: {}, sample: {}",
            segment.label, segment.start
        ),
        Phase::Body => {
            let mut text = format!(
                "\nround {}\nremaining: {} frames (time left: {})",
                status.round,
                status.remaining_frames,
                format_time(status.remaining_seconds())
            );
            if let Some(previous) = status.faded_from {
                text.push_str(&format!("\nFading from: {}", previous));
            }
            text.push_str(&format!(
                "\nCurrent section: {}, sample: {} ({} frames)",
                segment.label, segment.start, status.rendered_frames
            ));
            text
        }
    }
}

/// Print the status line for segment events; state changes are left to the log.
pub fn print_event(event: &MixEvent<'_>) {
    if let MixEvent::SegmentStarted(status) = event {
        println!("{}", segment_text(status));
    }
}

pub fn summary_text(report: &MixReport, sample_rate: u32) -> String {
    let seconds = if sample_rate == 0 {
        0.0
    } else {
        report.rendered_frames as f64 / sample_rate as f64
    };
    let outcome = if report.cancelled { "cancelled" } else { "finished" };
    format!(
        "\nMix {}: {} body round(s), {} frames ({})",
        outcome,
        report.rounds,
        report.rendered_frames,
        format_time(seconds)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use segue_lib::markers::Segment;

    fn segment(label: &str, start: u64) -> Segment {
        Segment {
            marker_index: 1,
            start,
            end: start + 100,
            label: label.to_string(),
        }
    }

    #[test]
    fn time_rounds_up_to_whole_seconds() {
        assert_eq!(format_time(0.0), "00:00:00");
        assert_eq!(format_time(0.2), "00:00:01");
        assert_eq!(format_time(3_725.0), "01:02:05");
        assert_eq!(format_time(-4.0), "00:00:00");
    }

    #[test]
    fn body_status_shows_round_and_remaining_time() {
        let segment = segment("chorus", 88_200);
        let status = SegmentStatus {
            phase: Phase::Body,
            round: 3,
            segment: &segment,
            faded_from: Some("verse"),
            rendered_frames: 44_100,
            remaining_frames: 132_300,
            sample_rate: 44_100,
        };
        let text = segment_text(&status);
        assert!(text.contains("round 3"));
        assert!(text.contains("time left: 00:00:03"));
        assert!(text.contains("Fading from: verse"));
        assert!(text.contains("Current section: chorus, sample: 88200"));
    }

    #[test]
    fn intro_status_names_section() {
        let segment = segment("intro", 0);
        let status = SegmentStatus {
            phase: Phase::Intro,
            round: 0,
            segment: &segment,
            faded_from: None,
            rendered_frames: 100,
            remaining_frames: 0,
            sample_rate: 1_000,
        };
        assert_eq!(
            segment_text(&status),
            "Playing first section: intro, sample: 0"
        );
    }

    #[test]
    fn summary_reports_outcome() {
        let report = MixReport {
            rendered_frames: 90_000,
            rounds: 4,
            cancelled: true,
            ..MixReport::default()
        };
        let text = summary_text(&report, 44_100);
        assert!(text.contains("cancelled"));
        assert!(text.contains("4 body round(s)"));
        assert!(text.contains("00:00:03"));
    }
}
