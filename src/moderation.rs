//! Client for the external comment moderation endpoint.
//!
//! Submitted comments go to moderation and only appear on the page after
//! approval and a later content refresh. Success or failure is judged by
//! the response status alone; no response body is consumed.

use crate::config::Config;
use crate::form::CommentInput;

/// Errors from a moderation submission.
#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    #[error("moderation request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("moderation endpoint returned status {0}")]
    Status(u16),
}

/// HTTP client for the moderation endpoint.
#[derive(Debug, Clone)]
pub struct ModerationClient {
    http: reqwest::Client,
    url: String,
}

impl ModerationClient {
    pub fn new(config: &Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: config.moderation_url.clone(),
        }
    }

    /// Submit one comment for moderation as JSON `{_id, name, email, comment}`.
    pub async fn submit(&self, input: &CommentInput) -> Result<(), ModerationError> {
        let response = self.http.post(&self.url).json(input).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ModerationError::Status(status.as_u16()));
        }

        Ok(())
    }
}
