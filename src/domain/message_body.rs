use unicode_segmentation::UnicodeSegmentation;

const MAX_MESSAGE_LENGTH: usize = 2000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageBody(String);

impl MessageBody {
    pub fn parse(s: String) -> Result<MessageBody, &'static str> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Message is required");
        }
        if trimmed.graphemes(true).count() > MAX_MESSAGE_LENGTH {
            return Err("Message must be less than 2000 characters");
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for MessageBody {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
