//! src/routes/waiting_list/mod.rs

mod form;
mod get;
mod post;
mod response;

pub use form::*;
pub use get::*;
pub use post::*;
pub use response::*;
