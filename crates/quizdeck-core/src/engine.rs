//! The central quiz engine.
//!
//! One object ties the catalog, the session state machine, the scoring
//! engine, and the result repository together. The presentation layer
//! talks only to this engine and to the `QuizSession` values it hands
//! out; it never reaches into storage directly.

use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::error::{SessionError, StorageError};
use crate::model::User;
use crate::results::QuizResult;
use crate::session::QuizSession;
use crate::statistics::{self, Statistics};
use crate::traits::ResultStore;

/// How the persistence side of a submission went.
///
/// Scoring always succeeds; this only describes what happened to the
/// durable copy of the result.
#[derive(Debug)]
pub enum SaveStatus {
    /// The result was written to the repository.
    Saved,
    /// No user identity was present; the result was scored but not saved.
    Anonymous,
    /// The session had already been submitted; nothing was written again.
    AlreadySubmitted,
    /// The write failed. The result is still valid and returned to the
    /// caller so the interface can warn that it was scored but not saved.
    Failed(StorageError),
}

/// A completed submission: the scored result plus its persistence outcome.
#[derive(Debug)]
pub struct Submission {
    pub result: QuizResult,
    pub save: SaveStatus,
}

/// The central quiz engine.
pub struct QuizEngine {
    catalog: Arc<Catalog>,
    store: Arc<dyn ResultStore>,
}

impl QuizEngine {
    pub fn new(catalog: Arc<Catalog>, store: Arc<dyn ResultStore>) -> Self {
        Self { catalog, store }
    }

    /// The catalog this engine serves.
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Start a session for a quiz in the catalog.
    pub fn start_session(
        &self,
        quiz_id: u32,
        user: Option<&User>,
    ) -> Result<QuizSession, SessionError> {
        let quiz = self
            .catalog
            .quiz_by_id(quiz_id)
            .ok_or(SessionError::QuizNotFound(quiz_id))?;
        QuizSession::start(quiz.clone(), user)
    }

    /// Submit a session, persisting the result when a user identity is
    /// present.
    ///
    /// Safe to call on an already-completed session (e.g. after a timeout
    /// tick finished it, or on a duplicate submit): the session's one-shot
    /// save latch guarantees the result is persisted at most once.
    pub async fn submit_session(&self, session: &mut QuizSession) -> Submission {
        let result = session.submit().clone();

        let save = if !session.take_save_pending() {
            SaveStatus::AlreadySubmitted
        } else if result.user_id.is_none() {
            SaveStatus::Anonymous
        } else {
            match self.store.save(&result).await {
                Ok(()) => SaveStatus::Saved,
                Err(e) => {
                    tracing::error!("failed to persist result {}: {e}", result.id);
                    SaveStatus::Failed(e)
                }
            }
        };

        Submission { result, save }
    }

    /// Result history, newest first, optionally filtered to one user.
    ///
    /// Storage failures degrade to an empty history: review screens stay
    /// usable even when the backing file is unreadable.
    pub async fn history(&self, user_id: Option<&str>) -> Vec<QuizResult> {
        let loaded = match user_id {
            Some(id) => self.store.history_for(id).await,
            None => self.store.history().await,
        };
        match loaded {
            Ok(results) => results,
            Err(e) => {
                tracing::warn!("failed to load history, treating as empty: {e}");
                Vec::new()
            }
        }
    }

    /// Look up a single persisted result.
    pub async fn result_by_id(&self, id: Uuid) -> Option<QuizResult> {
        match self.store.find_by_id(id).await {
            Ok(found) => found,
            Err(e) => {
                tracing::warn!("failed to load result {id}: {e}");
                None
            }
        }
    }

    /// Aggregate statistics over the (optionally user-scoped) history.
    pub async fn statistics(&self, user_id: Option<&str>) -> Statistics {
        let history = self.history(user_id).await;
        statistics::compute_statistics(&history, &self.catalog, Utc::now())
    }
}
