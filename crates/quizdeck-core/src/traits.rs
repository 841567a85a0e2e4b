//! Core trait definition for result persistence.
//!
//! Backends live in the `quizdeck-store` crate: a durable JSON file store
//! for production and an in-memory store for tests. The on-disk contract
//! is wholesale: the full history is read and rewritten on every save, and
//! the persisted list is ordered most-recent-first.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StorageError;
use crate::results::QuizResult;

/// Repository of persisted quiz results.
///
/// `history_for` and `find_by_id` are provided in terms of the wholesale
/// read, so backends only implement the three storage primitives.
#[async_trait]
pub trait ResultStore: Send + Sync {
    /// Persist a result at the front of the history list.
    async fn save(&self, result: &QuizResult) -> Result<(), StorageError>;

    /// The full persisted history, most recent first.
    ///
    /// A missing or corrupt backing store is "no history", not an error;
    /// only genuine I/O failures surface as `StorageError`.
    async fn history(&self) -> Result<Vec<QuizResult>, StorageError>;

    /// Erase all persisted history.
    async fn clear(&self) -> Result<(), StorageError>;

    /// History filtered to one user, preserving order.
    async fn history_for(&self, user_id: &str) -> Result<Vec<QuizResult>, StorageError> {
        let mut results = self.history().await?;
        results.retain(|r| r.user_id.as_deref() == Some(user_id));
        Ok(results)
    }

    /// Look up a single result by id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<QuizResult>, StorageError> {
        Ok(self.history().await?.into_iter().find(|r| r.id == id))
    }
}
