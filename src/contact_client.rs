//! Client side of the contact pipeline: validate the form, POST it to the
//! relay and turn the outcome into the notice shown to the visitor.
use crate::domain::{ContactSubmission, FormFields, ValidationError};
use reqwest::Client;

const TRANSMISSION_FAILED: &str = "Failed to send message. Please try again or email directly.";

pub struct ContactClient {
    http_client: Client,
    endpoint: String,
}

/// A toast-style message for the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: &'static str,
    pub description: String,
    pub destructive: bool,
}

impl Notice {
    pub fn transmitted() -> Self {
        Self {
            title: "Message Transmitted",
            description: "Your message has been sent successfully. I'll respond within 24 hours."
                .into(),
            destructive: false,
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SubmissionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("The contact relay answered with {0}")]
    Rejected(reqwest::StatusCode),
    #[error("Failed to reach the contact relay")]
    Transport(#[from] reqwest::Error),
}

impl SubmissionError {
    pub fn notice(&self) -> Notice {
        match self {
            SubmissionError::Validation(e) => Notice {
                title: "Validation Error",
                description: e.message.into(),
                destructive: true,
            },
            SubmissionError::Rejected(_) | SubmissionError::Transport(_) => Notice {
                title: "Transmission Failed",
                description: TRANSMISSION_FAILED.into(),
                destructive: true,
            },
        }
    }
}

impl ContactClient {
    pub fn new(endpoint: String, timeout: std::time::Duration) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            endpoint,
        })
    }

    /// Validates `fields` and sends the trimmed submission once.
    ///
    /// A validation failure returns before any request is made. Nothing is
    /// retried.
    #[tracing::instrument(name = "Submit the contact form", skip_all)]
    pub async fn submit(&self, fields: FormFields) -> Result<ContactSubmission, SubmissionError> {
        let submission = ContactSubmission::validate(fields)?;
        let body = FormFields::from(submission.clone());
        let response = self
            .http_client
            .post(&self.endpoint)
            .json(&body)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(SubmissionError::Rejected(response.status()));
        }
        Ok(submission)
    }

    /// Like [`ContactClient::submit`], reduced to the notice to display.
    pub async fn submit_with_notice(&self, fields: FormFields) -> Notice {
        match self.submit(fields).await {
            Ok(_) => Notice::transmitted(),
            Err(e) => {
                tracing::error!(error.cause_chain = ?e, error.message = %e, "Contact form error");
                e.notice()
            }
        }
    }
}
