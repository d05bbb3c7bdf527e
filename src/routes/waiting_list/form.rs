//! src/routes/waiting_list/form.rs

use actix_web::{web, HttpResponse, ResponseError};
use actix_web_flash_messages::FlashMessage;

use crate::domain::WaitingListFormData;
use crate::routes::{add_to_waiting_list, SUCCESS_MESSAGE};
use crate::store::WaitingListStore;
use crate::utils::see_other;

/// The landing page form posted without JavaScript.
#[derive(serde::Deserialize, Debug)]
pub struct SignupFormData {
    email: Option<String>,
    name: Option<String>,
    interest: Option<String>,
    location: Option<String>,
    // a checkbox is only sent when it is ticked
    newsletter: Option<String>,
}

impl From<SignupFormData> for WaitingListFormData {
    fn from(value: SignupFormData) -> Self {
        Self {
            email: value.email.map(Into::into),
            name: value.name,
            interest: value.interest,
            location: value.location,
            newsletter: value.newsletter.is_some(),
        }
    }
}

#[tracing::instrument(
    name = "Adding a new waiting list entry from the landing page form.",
    skip(form, store),
    fields(entry_email = ?form.email)
)]
pub async fn join_waiting_list_form(
    form: web::Form<SignupFormData>,
    store: web::Data<dyn WaitingListStore>,
) -> HttpResponse {
    match add_to_waiting_list(store.get_ref(), form.0.into()).await {
        Ok(_) => FlashMessage::success(SUCCESS_MESSAGE).send(),
        Err(e) => {
            if e.status_code().is_server_error() {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "Waiting list form submission failed"
                );
            }
            FlashMessage::error(e.to_string()).send();
        }
    }
    // back to the landing page, which renders the flash message
    see_other("/")
}
