use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::contact::ContactRequest;
use crate::domain::error::DomainError;
use crate::infrastructure::mailer::{Mailer, OutgoingEmail};

pub(crate) struct ContactService {
    mailer: Arc<dyn Mailer>,
    recipient: String,
    subject_tag: String,
}

impl ContactService {
    pub(crate) fn new(
        mailer: Arc<dyn Mailer>,
        recipient: impl Into<String>,
        subject_tag: impl Into<String>,
    ) -> Self {
        Self {
            mailer,
            recipient: recipient.into(),
            subject_tag: subject_tag.into(),
        }
    }

    pub(crate) async fn submit(&self, req: ContactRequest) -> Result<(), DomainError> {
        let req = req.validate()?;

        let email = OutgoingEmail {
            subject: format!("{} New Message from {}", self.subject_tag, req.name),
            from: req.email,
            to: self.recipient.clone(),
            text: req.message,
        };

        if let Err(err) = self.mailer.send(&email).await {
            warn!(error = %err, from = %email.from, "contact message was not delivered");
            return Err(DomainError::Delivery(err.to_string()));
        }

        info!(from = %email.from, "contact message relayed");
        Ok(())
    }
}
