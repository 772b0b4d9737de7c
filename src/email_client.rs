use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};

const DEFAULT_REJECTION_MESSAGE: &str = "Failed to send email";

pub struct EmailClient {
    http_client: Client,
    base_url: String,
    authorization_token: Secret<String>,
}

/// One message handed to the provider.
#[derive(Debug, Clone, Copy)]
pub struct OutgoingEmail<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub reply_to: Option<&'a str>,
    pub subject: &'a str,
    pub html_content: &'a str,
    pub text_content: &'a str,
}

#[derive(thiserror::Error, Debug)]
pub enum EmailClientError {
    #[error("Email provider rejected the request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },
    #[error("Failed to reach the email provider")]
    Transport(#[from] reqwest::Error),
}

impl EmailClient {
    pub fn new(
        base_url: String,
        authorization_token: Secret<String>,
        timeout: std::time::Duration,
    ) -> Result<Self, reqwest::Error> {
        let http_client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http_client,
            base_url,
            authorization_token,
        })
    }

    pub async fn send_email(&self, email: &OutgoingEmail<'_>) -> Result<(), EmailClientError> {
        let url = format!("{}/emails", self.base_url);
        let request_body = SendEmailRequest {
            from: email.from,
            to: [email.to],
            reply_to: email.reply_to,
            subject: email.subject,
            html: email.html_content,
            text: email.text_content,
        };
        let response = self
            .http_client
            .post(&url)
            .bearer_auth(self.authorization_token.expose_secret())
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let message = response
            .json::<ProviderError>()
            .await
            .ok()
            .and_then(|e| e.message)
            .unwrap_or_else(|| DEFAULT_REJECTION_MESSAGE.to_owned());
        Err(EmailClientError::Rejected { status, message })
    }
}

#[derive(serde::Serialize)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: [&'a str; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<&'a str>,
    subject: &'a str,
    html: &'a str,
    text: &'a str,
}

#[derive(serde::Deserialize)]
struct ProviderError {
    message: Option<String>,
}
