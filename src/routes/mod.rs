//! src/routes/mod.rs

mod health_check;
mod home;
mod waiting_list;

pub use health_check::*;
pub use home::*;
pub use waiting_list::*;
