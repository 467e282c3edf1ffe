use reqwest::header::AUTHORIZATION;
use serde::Serialize;
use thiserror::Error;
use tracing::info;

use crate::config::RelayConfig;

#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("URL is empty")]
    EmptyUrl,

    #[error("TOKEN is empty")]
    EmptyToken,

    #[error("Error creating request: {0}")]
    Request(#[source] reqwest::Error),

    #[error("Error forwarding request: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Error reading response: {0}")]
    ResponseRead(#[source] reqwest::Error),
}

/// Downstream status and body, reflected unchanged.
#[derive(Serialize, Debug)]
pub struct ForwardResponse {
    pub status_code: u16,
    pub body: String,
}

pub struct Forwarder {
    client: reqwest::Client,
    config: RelayConfig,
}

impl Forwarder {
    pub fn create(config: RelayConfig) -> Forwarder {
        Forwarder {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Issues a single POST carrying `payload` with the configured token
    /// inserted verbatim after `Basic `. No retries; the client's default
    /// settings apply, so no overall timeout is imposed. The response body
    /// is read to completion before returning, which releases the
    /// connection on every exit path.
    pub async fn forward(&self, payload: &str) -> Result<ForwardResponse, ForwardError> {
        if self.config.url.is_empty() {
            return Err(ForwardError::EmptyUrl);
        }

        if self.config.token.is_empty() {
            return Err(ForwardError::EmptyToken);
        }

        info!(message = "forwarding", url = self.config.url.as_str());
        info!(message = "payload", body = payload);

        let response = self
            .client
            .post(self.config.url.as_str())
            .header(AUTHORIZATION, format!("Basic {}", self.config.token))
            .body(payload.to_string())
            .send()
            .await
            .map_err(|err| {
                if err.is_builder() {
                    ForwardError::Request(err)
                } else {
                    ForwardError::Transport(err)
                }
            })?;

        let status_code = response.status().as_u16();

        let body = response.text().await.map_err(ForwardError::ResponseRead)?;

        info!(
            message = "downstream_response",
            status = status_code,
            body = body.as_str()
        );

        Ok(ForwardResponse { status_code, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_an_empty_url() {
        let forwarder = Forwarder::create(RelayConfig::new("", "secret"));

        let err = forwarder.forward("payload").await.unwrap_err();

        assert!(matches!(err, ForwardError::EmptyUrl));
        assert_eq!(err.to_string(), "URL is empty");
    }

    #[tokio::test]
    async fn rejects_an_empty_token() {
        let forwarder = Forwarder::create(RelayConfig::new("http://localhost:9", ""));

        let err = forwarder.forward("payload").await.unwrap_err();

        assert!(matches!(err, ForwardError::EmptyToken));
        assert_eq!(err.to_string(), "TOKEN is empty");
    }

    #[tokio::test]
    async fn a_malformed_url_fails_request_construction() {
        let forwarder = Forwarder::create(RelayConfig::new("not a url", "secret"));

        let err = forwarder.forward("payload").await.unwrap_err();

        assert!(matches!(err, ForwardError::Request(_)));
        assert!(err.to_string().starts_with("Error creating request: "));
    }
}
