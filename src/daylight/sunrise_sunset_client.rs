//! Blocking client for the public sunrise-sunset.org JSON API.

use crate::daylight::error::DaylightError;
use crate::daylight::DaylightOracle;
use crate::types::daylight_window::SunTimes;
use crate::types::lat_lon::LatLon;
use chrono::{DateTime, NaiveDate, Utc};
use log::{debug, info, warn};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use serde::Deserialize;
use std::time::Duration;

pub const DEFAULT_SUNRISE_API_URL: &str = "https://api.sunrise-sunset.org/json";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    status: String,
    results: Option<ApiResults>,
}

#[derive(Debug, Deserialize)]
struct ApiResults {
    sunrise: DateTime<Utc>,
    sunset: DateTime<Utc>,
}

pub struct SunriseSunsetClient {
    base_url: String,
    client: Client,
}

impl SunriseSunsetClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, DaylightError> {
        let base_url = base_url.into();
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DaylightError::NetworkRequest(base_url.clone(), e))?;
        Ok(Self { base_url, client })
    }

    /// Parses a response body. Kept separate from the transport so the upstream
    /// contract can be checked without a network.
    pub(crate) fn parse_body(url: &str, body: &[u8]) -> Result<SunTimes, DaylightError> {
        let parsed: ApiResponse = serde_json::from_slice(body)
            .map_err(|e| DaylightError::JsonParse(url.to_string(), e))?;
        let results = match (parsed.status.as_str(), parsed.results) {
            ("OK", Some(results)) => results,
            (status, _) => return Err(DaylightError::ApiStatus(status.to_string())),
        };
        if results.sunrise > results.sunset {
            return Err(DaylightError::InvalidWindow {
                sunrise: results.sunrise,
                sunset: results.sunset,
            });
        }
        Ok(SunTimes {
            sunrise: results.sunrise,
            sunset: results.sunset,
        })
    }
}

impl DaylightOracle for SunriseSunsetClient {
    fn fetch(&self, location: LatLon, date: NaiveDate) -> Result<SunTimes, DaylightError> {
        let date_param = date.format("%Y-%m-%d").to_string();
        let query = [
            ("lat", location.latitude().to_string()),
            ("lng", location.longitude().to_string()),
            ("date", date_param),
            ("formatted", "0".to_string()),
        ];
        info!(
            "Requesting sunrise/sunset for {} on {} from {}",
            location, date, self.base_url
        );

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .map_err(|e| DaylightError::NetworkRequest(self.base_url.clone(), e))?;
        let url = response.url().to_string();

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", url, e);
                return Err(if let Some(status) = e.status() {
                    DaylightError::HttpStatus {
                        url,
                        status,
                        source: e,
                    }
                } else {
                    DaylightError::NetworkRequest(url, e)
                });
            }
        };

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("application/json") {
            return Err(DaylightError::UnexpectedContentType { url, content_type });
        }

        let body = response
            .bytes()
            .map_err(|e| DaylightError::NetworkRequest(url.clone(), e))?;
        debug!("Sunrise API returned {} bytes", body.len());
        Self::parse_body(&url, &body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{serve, Reply};
    use chrono::TimeZone;

    const URL: &str = "https://api.sunrise-sunset.org/json";

    #[test]
    fn test_parse_unformatted_response() {
        let body = br#"{
            "results": {
                "sunrise": "2024-06-01T10:00:00+00:00",
                "sunset": "2024-06-01T23:00:00+00:00",
                "solar_noon": "2024-06-01T16:30:00+00:00",
                "day_length": 46800
            },
            "status": "OK",
            "tzid": "UTC"
        }"#;
        let times = SunriseSunsetClient::parse_body(URL, body).unwrap();
        assert_eq!(times.sunrise, Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap());
        assert_eq!(times.sunset, Utc.with_ymd_and_hms(2024, 6, 1, 23, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_normalizes_offsets_to_utc() {
        let body = br#"{"results": {"sunrise": "2024-06-01T06:00:00-04:00",
            "sunset": "2024-06-01T19:00:00-04:00"}, "status": "OK"}"#;
        let times = SunriseSunsetClient::parse_body(URL, body).unwrap();
        assert_eq!(times.sunrise, Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap());
        assert_eq!(times.sunset, Utc.with_ymd_and_hms(2024, 6, 1, 23, 0, 0).unwrap());
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let result = SunriseSunsetClient::parse_body(URL, b"<html>rate limited</html>");
        assert!(matches!(result, Err(DaylightError::JsonParse(..))));
    }

    #[test]
    fn test_parse_rejects_error_status() {
        let body = br#"{"status": "INVALID_DATE"}"#;
        match SunriseSunsetClient::parse_body(URL, body) {
            Err(DaylightError::ApiStatus(status)) => assert_eq!(status, "INVALID_DATE"),
            other => panic!("expected ApiStatus, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_inverted_window() {
        let body = br#"{"results": {"sunrise": "2024-06-01T23:00:00+00:00",
            "sunset": "2024-06-01T10:00:00+00:00"}, "status": "OK"}"#;
        let result = SunriseSunsetClient::parse_body(URL, body);
        assert!(matches!(result, Err(DaylightError::InvalidWindow { .. })));
    }

    fn client(url: &str) -> SunriseSunsetClient {
        SunriseSunsetClient::new(url, Duration::from_secs(5)).unwrap()
    }

    fn raleigh() -> LatLon {
        LatLon(35.800783, -78.645814)
    }

    fn june_first() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
    }

    #[test]
    fn test_fetch_sends_coordinates_and_date() {
        let body = r#"{"results": {"sunrise": "2024-06-01T10:00:00+00:00",
            "sunset": "2024-06-01T23:00:00+00:00"}, "status": "OK"}"#;
        let (url, server) = serve(
            "/json",
            vec![Reply::new("200 OK")
                .header("Content-Type: application/json")
                .body(body)],
        );

        let times = client(&url).fetch(raleigh(), june_first()).unwrap();
        assert_eq!(times.sunrise, Utc.with_ymd_and_hms(2024, 6, 1, 10, 0, 0).unwrap());

        let requests = server.join().unwrap();
        let request_line = requests[0].lines().next().unwrap();
        assert!(request_line.starts_with("GET /json?"));
        assert!(request_line.contains("lat=35.800783"));
        assert!(request_line.contains("lng=-78.645814"));
        assert!(request_line.contains("date=2024-06-01"));
        assert!(request_line.contains("formatted=0"));
    }

    #[test]
    fn test_fetch_rejects_html_content_type() {
        let (url, server) = serve(
            "/json",
            vec![Reply::new("200 OK")
                .header("Content-Type: text/html")
                .body("<html>maintenance</html>")],
        );

        match client(&url).fetch(raleigh(), june_first()) {
            Err(DaylightError::UnexpectedContentType { content_type, .. }) => {
                assert_eq!(content_type, "text/html")
            }
            other => panic!("expected UnexpectedContentType, got {:?}", other),
        }
        assert_eq!(server.join().unwrap().len(), 1);
    }

    #[test]
    fn test_fetch_rejects_server_error() {
        let (url, server) = serve(
            "/json",
            vec![Reply::new("500 Internal Server Error")
                .header("Content-Type: application/json")
                .body(r#"{"status": "UNKNOWN_ERROR"}"#)],
        );

        match client(&url).fetch(raleigh(), june_first()) {
            Err(DaylightError::HttpStatus { status, .. }) => {
                assert_eq!(status, reqwest::StatusCode::INTERNAL_SERVER_ERROR)
            }
            other => panic!("expected HttpStatus, got {:?}", other),
        }
        assert_eq!(server.join().unwrap().len(), 1);
    }
}
