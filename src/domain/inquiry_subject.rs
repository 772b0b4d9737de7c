/// The inquiry type picked from the contact form's selector.
///
/// Only emptiness is checked: the value is not matched against
/// [`InquiryCategory`] and is kept exactly as submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InquirySubject(String);

impl InquirySubject {
    pub fn parse(s: String) -> Result<InquirySubject, &'static str> {
        if s.is_empty() {
            return Err("Subject is required");
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for InquirySubject {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InquiryCategory {
    Challenge,
    Lab,
    Event,
    Consultation,
    Other,
}

impl InquiryCategory {
    pub const ALL: [InquiryCategory; 5] = [
        InquiryCategory::Challenge,
        InquiryCategory::Lab,
        InquiryCategory::Event,
        InquiryCategory::Consultation,
        InquiryCategory::Other,
    ];

    pub fn value(&self) -> &'static str {
        match self {
            InquiryCategory::Challenge => "challenge",
            InquiryCategory::Lab => "lab",
            InquiryCategory::Event => "event",
            InquiryCategory::Consultation => "consultation",
            InquiryCategory::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            InquiryCategory::Challenge => "CTF Challenge Request",
            InquiryCategory::Lab => "Training Lab Development",
            InquiryCategory::Event => "Full CTF Event",
            InquiryCategory::Consultation => "Consultation",
            InquiryCategory::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Option<InquiryCategory> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}
