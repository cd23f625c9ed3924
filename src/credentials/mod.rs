pub mod error;
pub mod netrc;
