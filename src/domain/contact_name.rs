use unicode_segmentation::UnicodeSegmentation;

const MAX_NAME_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<ContactName, &'static str> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err("Name is required");
        }
        if trimmed.graphemes(true).count() > MAX_NAME_LENGTH {
            return Err("Name must be less than 100 characters");
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
