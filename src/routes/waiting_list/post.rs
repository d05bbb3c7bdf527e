//! src/routes/waiting_list/post.rs

use actix_web::{web, HttpResponse};

use crate::domain::{NewWaitingListEntry, WaitingListEntry, WaitingListFormData};
use crate::error::{Error, HsResult};
use crate::routes::ApiResponse;
use crate::store::{StoreError, WaitingListStore};

#[tracing::instrument(
    name = "Adding a new waiting list entry.",
    skip(body, store),
    fields(entry_email = ?body.email)
)]
pub async fn join_waiting_list(
    body: web::Json<WaitingListFormData>,
    store: web::Data<dyn WaitingListStore>,
) -> HsResult<HttpResponse> {
    let entry = add_to_waiting_list(store.get_ref(), body.0).await?;
    Ok(HttpResponse::Created().json(ApiResponse::created(entry)))
}

/// Validate, check for a duplicate and insert. Shared by the JSON API and the
/// landing page form.
#[tracing::instrument(name = "Submitting to the waiting list.", skip_all)]
pub async fn add_to_waiting_list(
    store: &dyn WaitingListStore,
    form: WaitingListFormData,
) -> HsResult<WaitingListEntry> {
    let new_entry: NewWaitingListEntry = form.try_into()?;
    // check and insert are not atomic, the unique constraint catches the race
    if store
        .email_exists(&new_entry.email)
        .await
        .map_err(Error::DatabaseError)?
    {
        return Err(Error::DuplicateEmail);
    }
    store.insert(&new_entry).await.map_err(|e| match e {
        StoreError::DuplicateEmail => Error::DuplicateEmail,
        StoreError::Unexpected(e) => Error::InsertionError(e),
    })
}

/// Rejects bodies that do not deserialize into `WaitingListFormData`.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        Error::UnexpectedError(anyhow::anyhow!(
            "Failed to parse the waiting list request body: {}",
            err
        ))
        .into()
    })
}
