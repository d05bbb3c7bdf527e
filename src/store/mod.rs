//! src/store/mod.rs

mod in_memory;
mod postgres;

pub use in_memory::InMemoryStore;
pub use postgres::PostgresStore;

use crate::domain::{NewWaitingListEntry, WaitingListEmail, WaitingListEntry};
use crate::error::error_chain_fmt;

#[derive(thiserror::Error)]
pub enum StoreError {
    #[error("An entry with this email already exists.")]
    DuplicateEmail,
    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

impl std::fmt::Debug for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

/// Persistent storage of the waiting list.
///
/// `email_exists` answers `Ok(false)` when nothing matches; an `Err` always
/// means the lookup itself failed.
#[async_trait::async_trait]
pub trait WaitingListStore: Send + Sync {
    async fn email_exists(&self, email: &WaitingListEmail) -> Result<bool, anyhow::Error>;

    /// Stores a new entry. Implementations enforce email uniqueness and report
    /// a clash as `StoreError::DuplicateEmail`.
    async fn insert(&self, entry: &NewWaitingListEntry) -> Result<WaitingListEntry, StoreError>;

    async fn count(&self) -> Result<i64, anyhow::Error>;
}
