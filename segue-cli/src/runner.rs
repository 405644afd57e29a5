use std::str::FromStr;

use clap::ArgMatches;
use log::{error, info};
use segue_lib::markers;
use segue_lib::mix::{MixConfig, MixOrchestrator, Span};
use segue_lib::playback::{DeviceDriver, OfflineDriver, PlaybackDriver};
use segue_lib::source::{PcmSource, WavSource};
use segue_lib::MixError;

use crate::cli::inputs::resolve_inputs;
use crate::{cli, status};

pub fn run(args: &ArgMatches) -> Result<i32, MixError> {
    if let Some(("inspect", sub_args)) = args.subcommand() {
        return cli::inspect::run_inspect(sub_args);
    }

    let Some(input) = args.get_one::<String>("INPUT") else {
        error!("no input file given");
        return Ok(-1);
    };
    let quiet = args.get_flag("quiet");
    let dry_run = args.get_flag("dry-run");

    let inputs = match resolve_inputs(input, args.get_one::<String>("markers")) {
        Ok(inputs) => inputs,
        Err(code) => return Ok(code),
    };

    let config = mix_config(args)?;
    let gain = parse_arg::<f32>(args, "GAIN")?.unwrap_or(100.0);

    let source = WavSource::open(&inputs.audio)?;
    let markers = markers::load_file(&inputs.markers)?;
    let sample_rate = source.sample_rate();

    if !quiet {
        println!("{}", status::banner());
    }

    let driver: Box<dyn PlaybackDriver> = if dry_run {
        info!("Dry run, nothing will be played");
        Box::new(OfflineDriver::new())
    } else {
        let driver = DeviceDriver::open()?;
        driver.set_volume(gain / 100.0);
        Box::new(driver)
    };

    let rng = config.rng();
    let mut orchestrator = MixOrchestrator::new(source, driver, markers, config, rng)?;
    let report = orchestrator.run(|event| {
        if !quiet {
            status::print_event(event);
        }
    })?;

    if !quiet {
        println!("{}", status::summary_text(&report, sample_rate));
    }
    info!(
        "Mix done: {} rounds, {} frames rendered",
        report.rounds, report.rendered_frames
    );

    Ok(0)
}

/// Build the mix configuration from parsed arguments.
pub fn mix_config(args: &ArgMatches) -> Result<MixConfig, MixError> {
    let target = match parse_arg::<u64>(args, "length-frames")? {
        Some(frames) => Span::Frames(frames),
        None => Span::Seconds(parse_arg::<f64>(args, "length")?.unwrap_or(60.0)),
    };
    let crossfade_length = match parse_arg::<u64>(args, "crossfade-frames")? {
        Some(frames) => Span::Frames(frames),
        None => Span::Seconds(parse_arg::<f64>(args, "crossfade-seconds")?.unwrap_or(10.0)),
    };

    let config = MixConfig {
        target,
        crossfade: args.get_flag("crossfade"),
        crossfade_length,
        seed: parse_arg::<u64>(args, "seed")?,
    };
    config.validate()?;
    Ok(config)
}

fn parse_arg<T>(args: &ArgMatches, name: &str) -> Result<Option<T>, MixError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match args.get_one::<String>(name) {
        Some(raw) => raw.trim().parse::<T>().map(Some).map_err(|err| {
            MixError::InvalidConfig(format!("invalid value \"{}\" for {}: {}", raw, name, err))
        }),
        None => Ok(None),
    }
}
