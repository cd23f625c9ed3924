use anyhow::Context;
use axis_snapshot::cli::Args;
use axis_snapshot::{
    CaptureController, CaptureOutcome, DigestFetcher, NetrcResolver, SunriseSunsetClient,
    TimezoneResolver, TzfResolver,
};
use clap::Parser;
use log::info;
use std::process::ExitCode;

fn init_logging(args: &Args) {
    env_logger::Builder::new()
        .filter_level(args.log_level())
        .parse_default_env()
        .format_timestamp_secs()
        .init();
}

fn run(args: &Args) -> anyhow::Result<CaptureOutcome> {
    let timeout = args.request_timeout();
    let credentials = match &args.netrc {
        Some(path) => NetrcResolver::new(path),
        None => NetrcResolver::from_env()?,
    };
    let timezones: Box<dyn TimezoneResolver> = match args.timezone {
        Some(zone) => Box::new(zone),
        None => Box::new(TzfResolver::new()),
    };

    let controller = CaptureController::builder()
        .output_dir(args.output_dir.clone())
        .oracle(Box::new(SunriseSunsetClient::new(
            args.sunrise_api.clone(),
            timeout,
        )?))
        .timezones(timezones)
        .credentials(credentials)
        .fetcher(Box::new(DigestFetcher::new(timeout)?))
        .build();

    controller
        .run(&args.capture_request())
        .with_context(|| format!("Capture for '{}' failed", args.name))
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(&args);

    match run(&args) {
        Ok(CaptureOutcome::Captured(path)) => {
            info!("Saved snapshot to {}", path.display());
            ExitCode::SUCCESS
        }
        Ok(CaptureOutcome::Skipped(reason)) => {
            info!("No snapshot taken: {}", reason);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
