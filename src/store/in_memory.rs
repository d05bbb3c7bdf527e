//! src/store/in_memory.rs

use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{NewWaitingListEntry, WaitingListEmail, WaitingListEntry};
use crate::store::{StoreError, WaitingListStore};

/// Process local waiting list for development and tests. Lost on restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Mutex<Vec<WaitingListEntry>>,
}

impl InMemoryStore {
    fn lock(&self) -> Result<MutexGuard<'_, Vec<WaitingListEntry>>, anyhow::Error> {
        self.entries
            .lock()
            .map_err(|e| anyhow::anyhow!("In-memory waiting list is poisoned: {}", e))
    }

    /// Copy of all stored entries, in insertion order.
    pub fn entries(&self) -> Result<Vec<WaitingListEntry>, anyhow::Error> {
        Ok(self.lock()?.clone())
    }
}

#[async_trait::async_trait]
impl WaitingListStore for InMemoryStore {
    async fn email_exists(&self, email: &WaitingListEmail) -> Result<bool, anyhow::Error> {
        let entries = self.lock()?;
        Ok(entries.iter().any(|e| e.email == email.as_ref()))
    }

    #[tracing::instrument(
        name = "Saving new waiting list entry in memory",
        skip(self, entry),
        fields(entry_email = %entry.email)
    )]
    async fn insert(&self, entry: &NewWaitingListEntry) -> Result<WaitingListEntry, StoreError> {
        let mut entries = self.lock()?;
        if entries.iter().any(|e| e.email == entry.email.as_ref()) {
            return Err(StoreError::DuplicateEmail);
        }
        let now = Utc::now();
        let stored = WaitingListEntry {
            id: Uuid::new_v4(),
            email: entry.email.as_ref().to_owned(),
            name: entry.name.as_ref().map(|f| f.as_ref().to_owned()),
            interest: entry.interest.as_ref().map(|f| f.as_ref().to_owned()),
            location: entry.location.as_ref().map(|f| f.as_ref().to_owned()),
            newsletter: entry.newsletter,
            created_at: now,
            updated_at: now,
        };
        entries.push(stored.clone());
        Ok(stored)
    }

    async fn count(&self) -> Result<i64, anyhow::Error> {
        Ok(self.lock()?.len() as i64)
    }
}
