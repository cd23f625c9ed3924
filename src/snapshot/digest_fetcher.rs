//! Camera fetcher speaking HTTP digest authentication over a blocking client.

use crate::snapshot::error::FetchError;
use crate::snapshot::{Snapshot, SnapshotSource};
use crate::types::credential::Credential;
use log::{debug, info, warn};
use reqwest::blocking::{Client, Response};
use reqwest::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use reqwest::{StatusCode, Url};
use std::time::Duration;

pub struct DigestFetcher {
    client: Client,
}

impl DigestFetcher {
    /// Builds the camera client. Certificate verification is disabled: network
    /// cameras serve self-signed certificates.
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        debug!("Camera client accepts invalid TLS certificates");
        let client = Client::builder()
            .danger_accept_invalid_certs(true)
            .timeout(timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self { client })
    }

    fn get(&self, url: &str, authorization: Option<&str>) -> Result<Response, FetchError> {
        let mut request = self.client.get(url);
        if let Some(authorization) = authorization {
            request = request.header(AUTHORIZATION, authorization);
        }
        request
            .send()
            .map_err(|e| FetchError::NetworkRequest(url.to_string(), e))
    }
}

fn digest_challenge(response: &Response) -> Option<String> {
    response
        .headers()
        .get_all(WWW_AUTHENTICATE)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .find(|value| {
            value
                .get(..6)
                .is_some_and(|scheme| scheme.eq_ignore_ascii_case("digest"))
        })
        .map(str::to_string)
}

fn request_uri(url: &Url) -> String {
    match url.query() {
        Some(query) => format!("{}?{}", url.path(), query),
        None => url.path().to_string(),
    }
}

fn answer_challenge(
    challenge: &str,
    url: &Url,
    credential: &Credential,
) -> Result<String, FetchError> {
    let to_error = |e: digest_auth::Error| FetchError::DigestChallenge {
        url: url.to_string(),
        message: e.to_string(),
    };
    let mut prompt = digest_auth::parse(challenge).map_err(to_error)?;
    let uri = request_uri(url);
    let context = digest_auth::AuthContext::new(
        credential.username.as_str(),
        credential.password.as_str(),
        uri.as_str(),
    );
    let answer = prompt.respond(&context).map_err(to_error)?;
    Ok(answer.to_header_string())
}

impl SnapshotSource for DigestFetcher {
    fn fetch(&self, url: &str, credential: &Credential) -> Result<Snapshot, FetchError> {
        info!("Requesting snapshot from {}", url);
        let mut response = self.get(url, None)?;

        if response.status() == StatusCode::UNAUTHORIZED {
            match digest_challenge(&response) {
                Some(challenge) => {
                    debug!("Answering digest challenge as '{}'", credential.username);
                    let authorization = answer_challenge(&challenge, response.url(), credential)?;
                    response = self.get(url, Some(&authorization))?;
                }
                None => debug!("401 from {} without a digest challenge", url),
            }
        }

        let status = response.status();
        if status.is_success() {
            Ok(Snapshot::Image(Box::new(response)))
        } else {
            warn!("Camera at {} responded with {}", url, status);
            Ok(Snapshot::Rejected(status))
        }
    }
}
