use unicode_segmentation::UnicodeSegmentation;
use validator::validate_email;

const MAX_EMAIL_LENGTH: usize = 255;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    /// Trims the input, then checks address syntax before length, the same
    /// order the contact form reports them in.
    pub fn parse(s: String) -> Result<ContactEmail, &'static str> {
        let trimmed = s.trim();
        if !validate_email(trimmed) || !has_top_level_domain(trimmed) {
            return Err("Invalid email address");
        }
        if trimmed.graphemes(true).count() > MAX_EMAIL_LENGTH {
            return Err("Email must be less than 255 characters");
        }
        Ok(Self(trimmed.to_owned()))
    }
}

/// The domain must be dotted and end in an alphabetic label of two or more
/// characters, which rules out `localhost` and IP literals.
fn has_top_level_domain(email: &str) -> bool {
    let Some((_, domain)) = email.rsplit_once('@') else {
        return false;
    };
    match domain.rsplit_once('.') {
        Some((_, tld)) => tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()),
        None => false,
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
