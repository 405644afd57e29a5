//! CLI argument definitions for `segue-cli`.

use clap::{Arg, ArgAction, Command};

/// Build the CLI argument parser and command definitions.
pub fn build_cli() -> Command {
    Command::new("Segue")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Play a WAV recording as an endless randomized mix between its markers")
        .arg_required_else_help(true)
        .arg(
            Arg::new("length")
                .long("length")
                .short('l')
                .value_name("SECONDS")
                .default_value("60")
                .help("Total mix length in seconds, intro included")
                .conflicts_with("length-frames"),
        )
        .arg(
            Arg::new("length-frames")
                .long("length-frames")
                .value_name("FRAMES")
                .help("Total mix length in frames, intro included"),
        )
        .arg(
            Arg::new("crossfade")
                .long("crossfade")
                .short('x')
                .action(ArgAction::SetTrue)
                .help("Crossfade from each body segment into the next"),
        )
        .arg(
            Arg::new("crossfade-seconds")
                .long("crossfade-seconds")
                .value_name("SECONDS")
                .default_value("10")
                .help("Crossfade length in seconds")
                .conflicts_with("crossfade-frames"),
        )
        .arg(
            Arg::new("crossfade-frames")
                .long("crossfade-frames")
                .value_name("FRAMES")
                .help("Crossfade length in frames"),
        )
        .arg(
            Arg::new("markers")
                .long("markers")
                .short('m')
                .value_name("PATH")
                .help("Marker JSON file (defaults to the input path with a .json extension)"),
        )
        .arg(
            Arg::new("seed")
                .long("seed")
                .value_name("SEED")
                .help("Seed for the segment random walk"),
        )
        .arg(
            Arg::new("GAIN")
                .long("gain")
                .short('g')
                .value_name("GAIN")
                .default_value("100")
                .help("The playback gain in percent"),
        )
        .arg(
            Arg::new("dry-run")
                .long("dry-run")
                .action(ArgAction::SetTrue)
                .help("Run the mix without an audio device and without waiting"),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .action(ArgAction::SetTrue)
                .help("Suppress status output"),
        )
        .arg(
            Arg::new("INPUT")
                .help("The WAV file to play")
                .required(false)
                .index(1),
        )
        .subcommand(
            Command::new("inspect")
                .about("Print source properties, markers and the interior pool")
                .arg(
                    Arg::new("INPUT")
                        .help("The WAV file to inspect")
                        .required(true)
                        .index(1),
                )
                .arg(
                    Arg::new("markers")
                        .long("markers")
                        .short('m')
                        .value_name("PATH")
                        .help("Marker JSON file (defaults to the input path with a .json extension)"),
                ),
        )
}
