//! src/domain/profile_field.rs

/// Optional free-text field of a waiting list entry (name, interest, location).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileField(String);

impl ProfileField {
    /// Trims the input. Missing and blank values both become `None`, so an
    /// empty string is never stored.
    pub fn parse(s: Option<String>) -> Option<ProfileField> {
        let s = s?;
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_owned()))
        }
    }
}

impl AsRef<str> for ProfileField {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
