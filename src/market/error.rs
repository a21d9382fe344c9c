//! Failures of a market price lookup.

use reqwest::StatusCode;
use thiserror::Error;

use super::Region;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("no market listing for `{item}` in {region}")]
    NotFound { region: Region, item: String },
    #[error("market API unavailable: {0}")]
    UpstreamUnavailable(#[from] UpstreamFailure),
    #[error("market API returned a malformed payload: {0}")]
    MalformedResponse(#[from] serde_json::Error),
}

/// Why the market API could not be reached or refused to answer.
#[derive(Debug, Error)]
pub enum UpstreamFailure {
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("unexpected HTTP status {0}")]
    Status(StatusCode),
}

impl LookupError {
    /// Text safe to show to the user who ran the command.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "No market listing was found for that item in this region.",
            Self::UpstreamUnavailable(_) => {
                "The market API is unavailable right now. Please try again shortly."
            }
            Self::MalformedResponse(_) => "The market API returned data the bot could not read.",
        }
    }
}

impl From<reqwest::Error> for LookupError {
    fn from(err: reqwest::Error) -> Self {
        Self::UpstreamUnavailable(UpstreamFailure::Transport(err))
    }
}
