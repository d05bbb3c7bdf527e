//! src/lib.rs
pub mod configuration;
pub mod domain;
pub mod error;
pub mod form_controller;
pub mod routes;
pub mod spreadsheet_client;
pub mod startup;
pub mod store;
pub mod telemetry;
pub mod utils;
pub mod waiting_list_client;
