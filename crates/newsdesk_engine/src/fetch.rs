use std::time::Duration;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl FetchSettings {
    pub(crate) fn build_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .connect_timeout(self.connect_timeout)
            .timeout(self.request_timeout)
            .build()
    }
}

pub(crate) fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, "The news provider did not answer in time.");
    }
    if err.is_decode() {
        return FetchError::new(FailureKind::Decode, err.to_string());
    }
    FetchError::new(
        FailureKind::Network,
        format!("Could not reach the news provider: {err}"),
    )
}

/// Appends `path` to `base` without dropping any path prefix `base` carries.
pub(crate) fn join_endpoint(base: &str, path: &str) -> Result<url::Url, url::ParseError> {
    let trimmed = base.trim_end_matches('/');
    url::Url::parse(&format!("{trimmed}/{}", path.trim_start_matches('/')))
}
