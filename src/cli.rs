//! Command-line arguments for the `axis_snapshot` binary.

use crate::capture::{CaptureRequest, DEFAULT_OUTPUT_DIR};
use crate::daylight::sunrise_sunset_client::DEFAULT_SUNRISE_API_URL;
use crate::types::lat_lon::LatLon;
use chrono_tz::Tz;
use clap::{ArgAction, Parser};
use log::LevelFilter;
use std::path::PathBuf;
use std::time::Duration;

/// Take a snapshot from a network camera
#[derive(Debug, Parser)]
#[command(name = "axis_snapshot", version, about)]
pub struct Args {
    /// Camera image URL
    #[arg(value_name = "URL")]
    pub url: String,

    /// Location name, used for the cache and output directory
    #[arg(short, long, value_name = "NAME")]
    pub name: String,

    /// Force image request if not between sunrise/sunset
    #[arg(short, long)]
    pub force: bool,

    /// Latitude in decimal degrees
    #[arg(short = 'l', long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub latitude: f64,

    /// Longitude in decimal degrees
    #[arg(short = 'g', long, value_name = "FLOAT", allow_negative_numbers = true)]
    pub longitude: f64,

    /// Raise log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Root directory for per-location snapshots and caches
    #[arg(short, long, value_name = "DIR", default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Timeout for each network request
    #[arg(long, value_name = "SECONDS", default_value_t = 30)]
    pub timeout: u64,

    /// Credentials file [default: $NETRC or ~/.netrc]
    #[arg(long, value_name = "PATH")]
    pub netrc: Option<PathBuf>,

    /// Sunrise/sunset API endpoint
    #[arg(long, value_name = "URL", default_value = DEFAULT_SUNRISE_API_URL)]
    pub sunrise_api: String,

    /// IANA time zone of the camera, skips the lookup from coordinates
    #[arg(long, value_name = "ZONE")]
    pub timezone: Option<Tz>,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        match self.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            _ => LevelFilter::Debug,
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }

    pub fn capture_request(&self) -> CaptureRequest {
        CaptureRequest::builder()
            .url(self.url.clone())
            .name(self.name.clone())
            .location(LatLon(self.latitude, self.longitude))
            .force(self.force)
            .build()
    }
}
