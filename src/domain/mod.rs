mod contact_email;
mod contact_name;
mod contact_request;
mod contact_submission;
mod inquiry_subject;
mod message_body;

pub use contact_email::ContactEmail;
pub use contact_name::ContactName;
pub use contact_request::{ContactRequest, InvalidPayload};
pub use contact_submission::{ContactSubmission, FormField, FormFields, ValidationError};
pub use inquiry_subject::{InquiryCategory, InquirySubject};
pub use message_body::MessageBody;
