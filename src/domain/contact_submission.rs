use super::{ContactEmail, ContactName, InquirySubject, MessageBody};

/// The four contact form fields as typed by the visitor.
///
/// Missing or `null` fields deserialize as empty strings so they are reported
/// like any other empty field.
#[derive(Debug, Clone, Default, serde::Deserialize, serde::Serialize)]
pub struct FormFields {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub subject: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub message: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value: Option<String> = serde::Deserialize::deserialize(deserializer)?;
    Ok(value.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

/// The first contact form rule that a submission broke.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub field: FormField,
    pub message: &'static str,
}

impl ValidationError {
    fn on(field: FormField) -> impl FnOnce(&'static str) -> ValidationError {
        move |message| ValidationError { field, message }
    }
}

/// A contact submission that passed every form rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: InquirySubject,
    pub message: MessageBody,
}

impl ContactSubmission {
    /// Checks name, email, subject and message in that order and stops at the
    /// first broken rule.
    pub fn validate(fields: FormFields) -> Result<ContactSubmission, ValidationError> {
        let name = ContactName::parse(fields.name).map_err(ValidationError::on(FormField::Name))?;
        let email =
            ContactEmail::parse(fields.email).map_err(ValidationError::on(FormField::Email))?;
        let subject = InquirySubject::parse(fields.subject)
            .map_err(ValidationError::on(FormField::Subject))?;
        let message =
            MessageBody::parse(fields.message).map_err(ValidationError::on(FormField::Message))?;
        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}

impl TryFrom<FormFields> for ContactSubmission {
    type Error = ValidationError;
    fn try_from(value: FormFields) -> Result<Self, Self::Error> {
        Self::validate(value)
    }
}

impl From<ContactSubmission> for FormFields {
    fn from(value: ContactSubmission) -> Self {
        FormFields {
            name: value.name.as_ref().to_owned(),
            email: value.email.as_ref().to_owned(),
            subject: value.subject.as_ref().to_owned(),
            message: value.message.as_ref().to_owned(),
        }
    }
}
