//! src/domain/new_entry.rs

use crate::domain::{ProfileField, ValidationError, WaitingListEmail, WaitingListFormData};

/// A validated and normalized waiting list entry, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWaitingListEntry {
    pub email: WaitingListEmail,
    pub name: Option<ProfileField>,
    pub interest: Option<ProfileField>,
    pub location: Option<ProfileField>,
    pub newsletter: bool,
}

impl TryFrom<WaitingListFormData> for NewWaitingListEntry {
    type Error = ValidationError;

    fn try_from(value: WaitingListFormData) -> Result<Self, Self::Error> {
        let email = WaitingListEmail::parse_json(value.email)?;
        Ok(Self {
            email,
            name: ProfileField::parse(value.name),
            interest: ProfileField::parse(value.interest),
            location: ProfileField::parse(value.location),
            newsletter: value.newsletter,
        })
    }
}
