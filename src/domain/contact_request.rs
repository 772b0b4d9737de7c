use super::{ContactSubmission, FormFields};

#[derive(thiserror::Error, Debug)]
#[error("All fields are required")]
pub struct InvalidPayload;

/// A submission as the dispatch endpoint sees it: every field is present and
/// non-empty, nothing else is checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl TryFrom<FormFields> for ContactRequest {
    type Error = InvalidPayload;
    fn try_from(value: FormFields) -> Result<Self, Self::Error> {
        let FormFields {
            name,
            email,
            subject,
            message,
        } = value;
        if [&name, &email, &subject, &message]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(InvalidPayload);
        }
        Ok(Self {
            name,
            email,
            subject,
            message,
        })
    }
}

impl From<ContactSubmission> for ContactRequest {
    fn from(value: ContactSubmission) -> Self {
        Self {
            name: value.name.as_ref().to_owned(),
            email: value.email.as_ref().to_owned(),
            subject: value.subject.as_ref().to_owned(),
            message: value.message.as_ref().to_owned(),
        }
    }
}
