pub mod error;
mod migrations;
pub mod sunrise_cache;
