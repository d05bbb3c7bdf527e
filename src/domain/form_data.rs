//! src/domain/form_data.rs

/// Body of a waiting list submission, as sent by the landing page form.
///
/// Every member is optional on the wire; a missing `newsletter` flag means
/// the visitor kept the pre-checked box. `email` is kept as raw JSON so that a
/// non-string value is answered as an invalid email instead of a bad body.
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct WaitingListFormData {
    #[serde(default)]
    pub email: Option<serde_json::Value>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub interest: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default = "default_newsletter")]
    pub newsletter: bool,
}

fn default_newsletter() -> bool {
    true
}

impl Default for WaitingListFormData {
    fn default() -> Self {
        Self {
            email: None,
            name: None,
            interest: None,
            location: None,
            newsletter: default_newsletter(),
        }
    }
}
