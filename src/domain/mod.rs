//! src/domain/mod.rs

mod form_data;
mod new_entry;
mod profile_field;
mod waiting_list_email;
mod waiting_list_entry;

pub use form_data::WaitingListFormData;
pub use new_entry::NewWaitingListEntry;
pub use profile_field::ProfileField;
pub use waiting_list_email::{is_valid_email_shape, trim_email, WaitingListEmail};
pub use waiting_list_entry::WaitingListEntry;

/// Validation error for submitted waiting list data.
///
/// The `Display` output is shown to the visitor as is.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Email is required")]
    MissingEmail,
    #[error("Please enter a valid email address.")]
    InvalidEmail(String),
}
