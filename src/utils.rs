//! src/utils.rs

use actix_web::{http::header::LOCATION, HttpResponse};

/// `303 See Other` pointing the browser at `location`.
pub fn see_other(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header((LOCATION, location))
        .finish()
}
