//! `inspect` subcommand: source properties, markers and interior pool.

use clap::ArgMatches;
use log::warn;
use segue_lib::markers::{self, MarkerList};
use segue_lib::source::{SourceInfo, WavSource};
use segue_lib::MixError;

use crate::status::format_time;

use super::inputs::resolve_inputs;

/// Run the inspect subcommand for the given arguments.
pub fn run_inspect(args: &ArgMatches) -> Result<i32, MixError> {
    let Some(input) = args.get_one::<String>("INPUT") else {
        return Err(MixError::InvalidConfig("no input file given".to_string()));
    };
    let inputs = match resolve_inputs(input, args.get_one::<String>("markers")) {
        Ok(inputs) => inputs,
        Err(code) => return Ok(code),
    };

    let source = WavSource::open(&inputs.audio)?;
    let markers = markers::load_file(&inputs.markers)?;
    let info = SourceInfo::of(&source);

    println!("{}", inspect_text(&inputs.audio.display().to_string(), &info, &markers));

    if let Err(err) = markers.validate_against(info.total_frames) {
        warn!("{}", err);
        return Err(err);
    }
    if markers.interior_pool(info.total_frames).len() < 2 {
        warn!("randomized play needs at least 2 interior markers; this file can only play intro and outro");
    }
    Ok(0)
}

pub fn inspect_text(name: &str, info: &SourceInfo, markers: &MarkerList) -> String {
    let mut lines = vec![
        format!("Source: {}", name),
        format!("  sample rate: {} Hz", info.sample_rate),
        format!("  channels: {}", info.channels),
        format!(
            "  frames: {} ({})",
            info.total_frames,
            format_time(info.duration_seconds())
        ),
        format!("Markers ({}):", markers.len()),
    ];

    let interior = markers.interior_range();
    for (index, marker) in markers.iter().enumerate() {
        let (start, end) = markers.resolve_segment_bounds(index, info.total_frames);
        let role = if index == 0 {
            "intro"
        } else if index + 1 == markers.len() {
            "outro"
        } else if interior.contains(&index) {
            "pool"
        } else {
            "skipped"
        };
        lines.push(format!(
            "  #{:<3} {:>10}  {:<8} [{}, {})  {}",
            index, marker.sample_offset, role, start, end, marker.label
        ));
    }

    let pool = markers.interior_pool(info.total_frames);
    let labels = pool
        .segments()
        .iter()
        .map(|segment| segment.label.as_str())
        .collect::<Vec<_>>();
    lines.push(format!("Interior pool ({}): {}", pool.len(), labels.join(", ")));
    lines.join("\n")
}
