//! src/store/postgres.rs

use anyhow::Context;
use chrono::Utc;
use sqlx::postgres::PgDatabaseError;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::{NewWaitingListEntry, ProfileField, WaitingListEmail, WaitingListEntry};
use crate::store::{StoreError, WaitingListStore};

/// Checks if err results from inserting an email that is already on the list
fn is_duplicate_email_err(err: &sqlx::Error) -> bool {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.is_unique_violation() {
            if let Some(pg_err) = db_err.try_downcast_ref::<PgDatabaseError>() {
                return pg_err.table() == Some("waiting_list")
                    && pg_err.constraint() == Some("waiting_list_email_key");
            }
        }
    }
    false
}

fn optional(field: &Option<ProfileField>) -> Option<&str> {
    field.as_ref().map(AsRef::as_ref)
}

#[derive(Clone, Debug)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl WaitingListStore for PostgresStore {
    #[tracing::instrument(name = "Looking up waiting list email in the database", skip(self))]
    async fn email_exists(&self, email: &WaitingListEmail) -> Result<bool, anyhow::Error> {
        let existing = sqlx::query_scalar::<_, String>(
            "SELECT email FROM waiting_list \
            WHERE email = $1",
        )
        .bind(email.as_ref())
        .fetch_optional(&self.pool)
        .await
        .context("Failed to check the waiting list for an existing email.")?;
        Ok(existing.is_some())
    }

    #[tracing::instrument(
        name = "Saving new waiting list entry in the database",
        skip(self, entry),
        fields(entry_email = %entry.email)
    )]
    async fn insert(&self, entry: &NewWaitingListEntry) -> Result<WaitingListEntry, StoreError> {
        let now = Utc::now();
        sqlx::query_as::<_, WaitingListEntry>(
            r#"INSERT INTO waiting_list (id, email, name, interest, location, newsletter, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $7)
            RETURNING id, email, name, interest, location, newsletter, created_at, updated_at"#,
        )
        .bind(Uuid::new_v4())
        .bind(entry.email.as_ref())
        .bind(optional(&entry.name))
        .bind(optional(&entry.interest))
        .bind(optional(&entry.location))
        .bind(entry.newsletter)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if is_duplicate_email_err(&e) {
                StoreError::DuplicateEmail
            } else {
                StoreError::Unexpected(
                    anyhow::Error::new(e).context("Failed to insert new waiting list entry."),
                )
            }
        })
    }

    #[tracing::instrument(name = "Counting waiting list entries in the database", skip(self))]
    async fn count(&self) -> Result<i64, anyhow::Error> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM waiting_list")
            .fetch_one(&self.pool)
            .await
            .context("Failed to count waiting list entries.")?;
        Ok(count)
    }
}
