//! # Segue
//!
//! Command-line player for marker-driven randomized mixes of a WAV file.

use log::error;

mod cli;
mod logging;
mod runner;
mod status;

fn main() {
    let args = cli::args::build_cli().get_matches();
    logging::init(args.get_flag("quiet"));

    let code = match runner::run(&args) {
        Ok(code) => code,
        Err(err) => {
            error!("{}", err);
            -1
        }
    };

    std::process::exit(code)
}
