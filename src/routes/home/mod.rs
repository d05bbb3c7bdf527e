//! src/routes/home/mod.rs

mod properties;

use actix_web::Responder;
use actix_web_flash_messages::{IncomingFlashMessages, Level};
use askama_actix::Template;

pub use properties::{InterestOption, Property, INTEREST_OPTIONS, PROPERTIES};

struct Notice {
    kind: &'static str,
    content: String,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    notices: Vec<Notice>,
    properties: &'static [Property],
    interests: &'static [InterestOption],
}

pub async fn home(flash_messages: IncomingFlashMessages) -> impl Responder {
    let notices = flash_messages
        .iter()
        .map(|m| Notice {
            kind: match m.level() {
                Level::Success => "success",
                Level::Error | Level::Warning => "error",
                _ => "info",
            },
            content: m.content().to_string(),
        })
        .collect();
    HomeTemplate {
        notices,
        properties: PROPERTIES,
        interests: INTEREST_OPTIONS,
    }
}
