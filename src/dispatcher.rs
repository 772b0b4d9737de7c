use crate::configuration::ContactSettings;
use crate::domain::{ContactEmail, ContactRequest, InquiryCategory};
use crate::email_client::{EmailClient, EmailClientError, OutgoingEmail};
use crate::templates::{self, EmailContent};

/// Sends the owner notification and, once that went through, a best-effort
/// confirmation to the visitor.
pub struct ContactDispatcher {
    email_client: EmailClient,
    owner_email: ContactEmail,
    settings: ContactSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationStatus {
    Sent,
    Failed,
}

/// What happened after the owner notification was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchReport {
    pub confirmation: ConfirmationStatus,
}

#[derive(thiserror::Error, Debug)]
pub enum DispatchError {
    #[error("The owner notification was rejected by the email provider")]
    OwnerNotificationRejected(#[source] EmailClientError),
    #[error("The email provider could not be reached")]
    ProviderUnreachable(#[source] EmailClientError),
}

impl From<EmailClientError> for DispatchError {
    fn from(e: EmailClientError) -> Self {
        match e {
            EmailClientError::Rejected { .. } => DispatchError::OwnerNotificationRejected(e),
            EmailClientError::Transport(_) => DispatchError::ProviderUnreachable(e),
        }
    }
}

impl ContactDispatcher {
    pub fn new(
        email_client: EmailClient,
        settings: ContactSettings,
    ) -> Result<Self, anyhow::Error> {
        let owner_email = settings.owner_email().map_err(|e| {
            anyhow::anyhow!("Invalid owner email `{}`: {}", settings.owner_email, e)
        })?;
        Ok(Self {
            email_client,
            owner_email,
            settings,
        })
    }

    #[tracing::instrument(
        name = "Dispatch a contact submission",
        skip_all,
        fields(
            contact_name = %request.name,
            contact_subject = %request.subject,
            contact_category = ?InquiryCategory::from_value(&request.subject),
            confirmation = tracing::field::Empty
        )
    )]
    pub async fn dispatch(
        &self,
        request: &ContactRequest,
    ) -> Result<DispatchReport, DispatchError> {
        self.send_owner_notification(request).await?;
        tracing::info!("Owner notification sent");

        let confirmation = match self.send_confirmation(request).await {
            Ok(()) => {
                tracing::info!("Confirmation email sent");
                ConfirmationStatus::Sent
            }
            Err(e) => {
                tracing::warn!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Confirmation email failed, but the owner notification was sent",
                );
                ConfirmationStatus::Failed
            }
        };
        tracing::Span::current().record("confirmation", tracing::field::debug(&confirmation));
        Ok(DispatchReport { confirmation })
    }

    #[tracing::instrument(name = "Send the owner notification", skip_all)]
    async fn send_owner_notification(
        &self,
        request: &ContactRequest,
    ) -> Result<(), EmailClientError> {
        let content = templates::owner_notification(request);
        self.send(
            &self.settings.owner_sender,
            self.owner_email.as_ref(),
            Some(request.email.as_str()),
            &content,
        )
        .await
    }

    #[tracing::instrument(name = "Send the sender confirmation", skip_all)]
    async fn send_confirmation(&self, request: &ContactRequest) -> Result<(), EmailClientError> {
        let content = templates::confirmation(request, &self.settings.signature);
        self.send(&self.settings.confirmation_sender, &request.email, None, &content)
            .await
    }

    async fn send(
        &self,
        from: &str,
        to: &str,
        reply_to: Option<&str>,
        content: &EmailContent,
    ) -> Result<(), EmailClientError> {
        self.email_client
            .send_email(&OutgoingEmail {
                from,
                to,
                reply_to,
                subject: &content.subject,
                html_content: &content.html,
                text_content: &content.text,
            })
            .await
    }
}
