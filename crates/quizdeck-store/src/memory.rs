//! In-memory result repository for tests.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use quizdeck_core::error::StorageError;
use quizdeck_core::results::QuizResult;
use quizdeck_core::traits::ResultStore;

/// A `ResultStore` that keeps history in memory.
///
/// Counts `save` calls so tests can assert that a submission was
/// persisted exactly once.
#[derive(Default)]
pub struct MemoryStore {
    results: Mutex<Vec<QuizResult>>,
    save_count: AtomicU32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `save` calls made against this store.
    pub fn save_count(&self) -> u32 {
        self.save_count.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl ResultStore for MemoryStore {
    async fn save(&self, result: &QuizResult) -> Result<(), StorageError> {
        self.save_count.fetch_add(1, Ordering::Relaxed);
        self.results.lock().unwrap().insert(0, result.clone());
        Ok(())
    }

    async fn history(&self) -> Result<Vec<QuizResult>, StorageError> {
        Ok(self.results.lock().unwrap().clone())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        self.results.lock().unwrap().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_result(score: u8) -> QuizResult {
        QuizResult {
            id: Uuid::new_v4(),
            quiz_id: 1,
            user_id: Some("u1".into()),
            score,
            total_questions: 10,
            correct_answers: (score / 10) as usize,
            time_spent_minutes: 5,
            completed_at: Utc::now(),
            answers: vec![],
        }
    }

    #[tokio::test]
    async fn counts_saves_and_preserves_order() {
        let store = MemoryStore::new();
        let first = make_result(50);
        let second = make_result(70);

        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();

        assert_eq!(store.save_count(), 2);
        let history = store.history().await.unwrap();
        assert_eq!(history[0].id, second.id);
        assert_eq!(history[1].id, first.id);

        store.clear().await.unwrap();
        assert!(store.history().await.unwrap().is_empty());
        // The counter survives a clear; it tracks calls, not contents.
        assert_eq!(store.save_count(), 2);
    }
}
