use clap::Parser;
use page_outline::OutlineConfig;
use std::io;
use std::process::ExitCode;

mod args;
use args::{Args, convert_format};

fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => {
            ::log::info!("Loading configuration from {}", path.display());
            match OutlineConfig::from_file(path) {
                Ok(config) => config,
                Err(e) => {
                    ::log::error!("Failed to load configuration: {}", e);
                    eprintln!("error: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
        None => OutlineConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match page_outline::run(&config, convert_format(args.format), &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            ::log::error!("Outline failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
