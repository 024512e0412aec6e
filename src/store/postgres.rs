//! PostgreSQL-backed dare store.
//!
//! The schema does the heavy lifting:
//! - `messages_dare_sender_unique` rejects a second message from the same sender
//! - `ON DELETE CASCADE` removes messages together with their dare
//!
//! Inserts and listings take a `FOR SHARE` lock on the parent dare row inside
//! a transaction. A concurrent `DELETE` then waits for them (or they wait for
//! it and find no row), so neither sees half a dare.

use crate::{
    db::DbPool,
    error::AppError,
    models::{dare::Dare, message::Message},
    store::DareStore,
};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct PgDareStore {
    pool: DbPool,
}

impl PgDareStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Translate constraint violations raised by the message insert.
///
/// - unique violation → the sender already posted on this dare
/// - foreign key violation → the dare vanished between lock and insert
fn map_insert_error(err: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            return AppError::DuplicateSender;
        }
        if db_err.is_foreign_key_violation() {
            return AppError::DareNotFound;
        }
    }
    AppError::StorageUnavailable(err)
}

#[async_trait]
impl DareStore for PgDareStore {
    async fn create_dare(&self) -> Result<Dare, AppError> {
        let dare = Dare::new();

        let dare = sqlx::query_as::<_, Dare>(
            r#"
            INSERT INTO dares (id, created_at, updated_at)
            VALUES ($1, $2, $3)
            RETURNING id, created_at, updated_at
            "#,
        )
        .bind(dare.id)
        .bind(dare.created_at)
        .bind(dare.updated_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(dare)
    }

    async fn dare_exists(&self, dare_id: Uuid) -> Result<bool, AppError> {
        let exists: bool = sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM dares WHERE id = $1)")
            .bind(dare_id)
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn insert_message(&self, message: Message) -> Result<Message, AppError> {
        let mut tx = self.pool.begin().await?;

        // Hold the dare row so a concurrent delete cannot interleave
        let locked: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM dares WHERE id = $1 FOR SHARE")
                .bind(message.dare_id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Err(AppError::DareNotFound);
        }

        // The unique constraint is the duplicate-sender guard; no prior SELECT
        let stored = sqlx::query_as::<_, Message>(
            r#"
            INSERT INTO messages (id, dare_id, body, sender_fingerprint, sent_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, dare_id, body, sender_fingerprint, sent_at
            "#,
        )
        .bind(message.id)
        .bind(message.dare_id)
        .bind(&message.body)
        .bind(&message.sender_fingerprint)
        .bind(message.sent_at)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_insert_error)?;

        tx.commit().await?;

        Ok(stored)
    }

    async fn list_messages(&self, dare_id: Uuid) -> Result<Vec<Message>, AppError> {
        let mut tx = self.pool.begin().await?;

        let locked: Option<Uuid> =
            sqlx::query_scalar("SELECT id FROM dares WHERE id = $1 FOR SHARE")
                .bind(dare_id)
                .fetch_optional(&mut *tx)
                .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Err(AppError::DareNotFound);
        }

        let messages = sqlx::query_as::<_, Message>(
            r#"
            SELECT id, dare_id, body, sender_fingerprint, sent_at
            FROM messages
            WHERE dare_id = $1
            ORDER BY sent_at DESC, seq DESC
            "#,
        )
        .bind(dare_id)
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(messages)
    }

    async fn delete_dare(&self, dare_id: Uuid) -> Result<bool, AppError> {
        // Messages go with it through ON DELETE CASCADE
        let removed = sqlx::query("DELETE FROM dares WHERE id = $1")
            .bind(dare_id)
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(removed > 0)
    }
}
