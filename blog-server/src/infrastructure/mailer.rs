use std::time::Duration;

use anyhow::Context;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub(crate) enum MailError {
    #[error("invalid header found in '{0}'")]
    BadHeader(&'static str),

    #[error("mail relay request failed")]
    Transport(#[source] reqwest::Error),

    #[error("mail relay rejected the message with status {0}")]
    Rejected(StatusCode),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub(crate) struct OutgoingEmail {
    pub(crate) from: String,
    pub(crate) to: String,
    pub(crate) subject: String,
    pub(crate) text: String,
}

impl OutgoingEmail {
    /// Line breaks in a header value would let a sender smuggle extra
    /// headers (`Bcc:` and friends) into the message.
    pub(crate) fn check_headers(&self) -> Result<(), MailError> {
        for (name, value) in [
            ("from", &self.from),
            ("to", &self.to),
            ("subject", &self.subject),
        ] {
            if value.contains(['\r', '\n']) {
                return Err(MailError::BadHeader(name));
            }
        }
        Ok(())
    }
}

#[async_trait]
pub(crate) trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;
}

/// Delivers through an HTTP mail relay that accepts
/// `{from, to, subject, text}` as JSON.
#[derive(Debug, Clone)]
pub(crate) struct HttpMailer {
    client: Client,
    url: String,
    token: Option<String>,
}

impl HttpMailer {
    pub(crate) fn new(
        url: impl Into<String>,
        token: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .timeout(timeout)
            .build()
            .context("failed to build mail relay client")?;

        Ok(Self {
            client,
            url: url.into(),
            token,
        })
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        email.check_headers()?;

        let mut request = self.client.post(&self.url).json(email);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(MailError::Transport)?;
        if !response.status().is_success() {
            return Err(MailError::Rejected(response.status()));
        }
        Ok(())
    }
}

/// Fallback when no relay is configured: the message only goes to the log.
#[derive(Debug, Clone, Default)]
pub(crate) struct LogMailer;

#[async_trait]
impl Mailer for LogMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        email.check_headers()?;

        info!(
            from = %email.from,
            to = %email.to,
            subject = %email.subject,
            body_len = email.text.len(),
            "mail relay not configured, message logged only"
        );
        Ok(())
    }
}
