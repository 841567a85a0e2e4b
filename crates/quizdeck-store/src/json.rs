//! Durable result repository backed by a single JSON file.
//!
//! The on-disk format is one JSON array of results, most recent first.
//! Every `save` reads the whole file, prepends, and rewrites it; `clear`
//! removes the file. A missing or corrupt file is treated as empty
//! history rather than an error.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use quizdeck_core::error::StorageError;
use quizdeck_core::results::QuizResult;
use quizdeck_core::traits::ResultStore;

/// File-backed `ResultStore`.
pub struct JsonFileStore {
    path: PathBuf,
    // The design is single-writer, but the read-modify-write in `save`
    // still needs to be serialized against itself.
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// The path this store reads and writes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<QuizResult>, StorageError> {
        let bytes = match tokio::fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(StorageError::Read {
                    path: self.path.display().to_string(),
                    source: e,
                })
            }
        };

        match serde_json::from_slice(&bytes) {
            Ok(results) => Ok(results),
            Err(e) => {
                tracing::warn!(
                    "history file {} is corrupt, treating as empty: {e}",
                    self.path.display()
                );
                Ok(Vec::new())
            }
        }
    }

    async fn write_all(&self, results: &[QuizResult]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(results)?;
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| StorageError::Write {
                        path: self.path.display().to_string(),
                        source: e,
                    })?;
            }
        }
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| StorageError::Write {
                path: self.path.display().to_string(),
                source: e,
            })
    }
}

#[async_trait]
impl ResultStore for JsonFileStore {
    async fn save(&self, result: &QuizResult) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        let mut results = self.load().await?;
        results.insert(0, result.clone());
        self.write_all(&results).await
    }

    async fn history(&self) -> Result<Vec<QuizResult>, StorageError> {
        self.load().await
    }

    async fn clear(&self) -> Result<(), StorageError> {
        let _guard = self.write_lock.lock().await;
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Write {
                path: self.path.display().to_string(),
                source: e,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn make_result(user_id: Option<&str>, score: u8) -> QuizResult {
        QuizResult {
            id: Uuid::new_v4(),
            quiz_id: 1,
            user_id: user_id.map(String::from),
            score,
            total_questions: 10,
            correct_answers: (score / 10) as usize,
            time_spent_minutes: 5,
            completed_at: Utc::now(),
            answers: vec![],
        }
    }

    #[tokio::test]
    async fn missing_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));
        assert!(store.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn corrupt_file_is_empty_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        std::fs::write(&path, "{ not json at all").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.history().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn saves_are_most_recent_first() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));

        let first = make_result(Some("u1"), 50);
        let second = make_result(Some("u1"), 70);
        let third = make_result(Some("u2"), 90);
        store.save(&first).await.unwrap();
        store.save(&second).await.unwrap();
        store.save(&third).await.unwrap();

        let history = store.history().await.unwrap();
        assert_eq!(history.len(), 3);
        assert_eq!(history[0].id, third.id);
        assert_eq!(history[1].id, second.id);
        assert_eq!(history[2].id, first.id);
    }

    #[tokio::test]
    async fn user_filter_and_id_lookup() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));

        let mine = make_result(Some("u1"), 80);
        let theirs = make_result(Some("u2"), 60);
        let anon = make_result(None, 40);
        store.save(&mine).await.unwrap();
        store.save(&theirs).await.unwrap();
        store.save(&anon).await.unwrap();

        let filtered = store.history_for("u1").await.unwrap();
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id, mine.id);

        assert_eq!(store.find_by_id(theirs.id).await.unwrap().unwrap().id, theirs.id);
        assert!(store.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn clear_erases_history() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("history.json"));

        store.save(&make_result(Some("u1"), 80)).await.unwrap();
        store.clear().await.unwrap();
        assert!(store.history().await.unwrap().is_empty());

        // Clearing an already-empty store is fine.
        store.clear().await.unwrap();
    }

    #[tokio::test]
    async fn creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested/deeper/history.json"));
        store.save(&make_result(Some("u1"), 80)).await.unwrap();
        assert_eq!(store.history().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn on_disk_format_is_a_json_array() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("history.json");
        let store = JsonFileStore::new(&path);
        store.save(&make_result(Some("u1"), 80)).await.unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(value.is_array());
        assert_eq!(value.as_array().unwrap().len(), 1);
    }
}
