use std::process::ExitCode;

use clap::Parser;
use trellis_catalog::{logging, run, Cli};

fn main() -> ExitCode {
    logging::init();
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) => {
            print!("{}", report.output);
            if report.ok {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            }
        }
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
