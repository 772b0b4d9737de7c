use crate::dispatcher::{ContactDispatcher, DispatchError};
use crate::domain::{ContactRequest, FormFields, InvalidPayload};
use crate::utils::error_chain_fmt;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("All fields are required")]
    InvalidPayload(#[from] InvalidPayload),
    #[error("Failed to send email")]
    SendFailed(#[source] DispatchError),
    #[error("Internal server error")]
    UnexpectedFault(#[source] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl From<DispatchError> for ContactError {
    fn from(e: DispatchError) -> Self {
        match e {
            DispatchError::OwnerNotificationRejected(_) => ContactError::SendFailed(e),
            DispatchError::ProviderUnreachable(_) => {
                ContactError::UnexpectedFault(anyhow::Error::new(e))
            }
        }
    }
}

#[derive(serde::Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            ContactError::SendFailed(_) | ContactError::UnexpectedFault(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: &self.to_string(),
        })
    }
}

/// Body parse failures are reported as internal faults, like any other fault
/// outside the field checks.
pub fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &actix_web::HttpRequest,
) -> actix_web::Error {
    let e = anyhow::anyhow!("Failed to parse the contact request body: {}", err);
    tracing::error!(error.cause_chain = ?e, error.message = %e, "Rejected a malformed request");
    ContactError::UnexpectedFault(e).into()
}

#[derive(serde::Serialize)]
struct SuccessBody {
    success: bool,
    message: &'static str,
}

#[tracing::instrument(
    name = "Received a contact form submission",
    skip(body, dispatcher),
    fields(
        contact_name = %body.name,
        contact_subject = %body.subject
    )
)]
pub async fn send_contact_email(
    body: web::Json<FormFields>,
    dispatcher: web::Data<ContactDispatcher>,
) -> Result<HttpResponse, ContactError> {
    let request: ContactRequest = body.into_inner().try_into()?;
    dispatcher.dispatch(&request).await.map_err(|e| {
        tracing::error!(
            error.cause_chain = ?e,
            error.message = %e,
            "Failed to deliver the owner notification",
        );
        e
    })?;
    Ok(HttpResponse::Ok().json(SuccessBody {
        success: true,
        message: "Emails sent successfully",
    }))
}

