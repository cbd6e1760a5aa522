use std::fmt;

use newsdesk_core::{Article, QueryError, RequestId};

use crate::SummaryError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    TrendingFetched {
        request: RequestId,
        result: Result<Vec<Article>, FetchError>,
    },
    ArticlesFetched {
        request: RequestId,
        result: Result<Vec<Article>, FetchError>,
    },
    SummaryFinished {
        key: String,
        request: RequestId,
        result: Result<String, SummaryError>,
    },
}

/// Repository failure. `message` is what the dashboard shows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn http_status(code: u16) -> Self {
        if code == 429 {
            return Self::new(
                FailureKind::RateLimited,
                "The news provider rate limit was reached. Please try again later.",
            );
        }
        Self::new(
            FailureKind::HttpStatus(code),
            format!("API request failed with status {code}."),
        )
    }
}

impl From<QueryError> for FetchError {
    fn from(err: QueryError) -> Self {
        Self::new(FailureKind::Validation, err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    /// The query was rejected before any request was made.
    Validation,
    MissingApiKey,
    HttpStatus(u16),
    RateLimited,
    Timeout,
    Network,
    Decode,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Validation => write!(f, "validation"),
            FailureKind::MissingApiKey => write!(f, "missing api key"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::RateLimited => write!(f, "rate limited"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::Network => write!(f, "network error"),
            FailureKind::Decode => write!(f, "undecodable response"),
        }
    }
}
