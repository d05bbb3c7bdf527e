//! src/domain/waiting_list_email.rs

use crate::domain::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

// `\s` as browsers read it: ASCII tab to carriage return, the Unicode space
// separators and the byte order mark, but not NEL (U+0085).
const WHITESPACE: &str = r"\x{09}-\x{0D}\x{20}\x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

static EMAIL_SHAPE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[^{ws}@]+@[^{ws}@]+\.[^{ws}@]+$", ws = WHITESPACE))
        .expect("email shape pattern is valid")
});

static EDGE_WHITESPACE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"^[{ws}]+|[{ws}]+$", ws = WHITESPACE))
        .expect("whitespace pattern is valid")
});

/// Checks the basic `local@domain.tld` shape, i.e. the whole input matches
/// `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
pub fn is_valid_email_shape(s: &str) -> bool {
    EMAIL_SHAPE.is_match(s)
}

/// Strips leading and trailing whitespace, using the same whitespace set as
/// the shape check.
pub fn trim_email(s: &str) -> Cow<'_, str> {
    EDGE_WHITESPACE.replace_all(s, "")
}

/// Normalized (trimmed, lower-cased) email of a waiting list entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitingListEmail(String);

impl WaitingListEmail {
    /// `None` and the empty string count as a missing email. Anything else must
    /// have a valid shape once surrounding whitespace is removed.
    pub fn parse(s: Option<String>) -> Result<WaitingListEmail, ValidationError> {
        let s = match s {
            Some(s) if !s.is_empty() => s,
            _ => return Err(ValidationError::MissingEmail),
        };
        let trimmed = trim_email(&s);
        if !is_valid_email_shape(&trimmed) {
            return Err(ValidationError::InvalidEmail(s));
        }
        Ok(Self(trimmed.to_lowercase()))
    }

    /// Parses the `email` member of a JSON body. `null`, `false` and `0`
    /// count as missing like an absent member; any other non-string value is
    /// an invalid email.
    pub fn parse_json(
        value: Option<serde_json::Value>,
    ) -> Result<WaitingListEmail, ValidationError> {
        use serde_json::Value;

        match value {
            None | Some(Value::Null) | Some(Value::Bool(false)) => Self::parse(None),
            Some(Value::Number(n)) if n.as_f64() == Some(0.0) => Self::parse(None),
            Some(Value::String(s)) => Self::parse(Some(s)),
            Some(other) => Err(ValidationError::InvalidEmail(other.to_string())),
        }
    }
}

impl AsRef<str> for WaitingListEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WaitingListEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
