pub mod capture_outcome;
pub mod credential;
pub mod daylight_window;
pub mod lat_lon;
