//! Core data model types for quizdeck.
//!
//! These are the fundamental types that the entire quizdeck system uses
//! to represent subjects, quizzes, questions, and user identity. Catalog
//! entities are immutable reference data: created at catalog load, never
//! mutated afterwards.

use serde::{Deserialize, Serialize};

/// A subject grouping related quizzes (e.g. "Mathematics").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Unique identifier for this subject.
    pub id: u32,
    /// Human-readable name.
    pub name: String,
    /// Description of what this subject covers.
    #[serde(default)]
    pub description: String,
    /// RGB hex color used when rendering this subject.
    #[serde(default = "default_color")]
    pub color: String,
    /// Symbolic icon name.
    #[serde(default = "default_icon")]
    pub icon: String,
}

fn default_color() -> String {
    "#007bff".to_string()
}

fn default_icon() -> String {
    "book".to_string()
}

/// A single multiple-choice question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within its quiz.
    pub id: u32,
    /// The question text shown to the user.
    pub prompt: String,
    /// Answer options in display order. Always 2 or more.
    pub options: Vec<String>,
    /// Index into `options` of the correct answer.
    pub correct_option: usize,
    /// Explanation shown after answering.
    #[serde(default)]
    pub explanation: String,
}

impl Question {
    /// Number of answer options.
    pub fn option_count(&self) -> usize {
        self.options.len()
    }
}

/// A timed multiple-choice quiz belonging to a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier for this quiz.
    pub id: u32,
    /// The subject this quiz belongs to.
    pub subject_id: u32,
    /// Human-readable title.
    pub title: String,
    /// Description of what this quiz covers.
    #[serde(default)]
    pub description: String,
    /// Time limit in minutes. Always positive.
    pub time_limit_minutes: u32,
    /// The questions in this quiz, in display order. Always non-empty.
    pub questions: Vec<Question>,
}

impl Quiz {
    /// Total number of questions.
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    /// Look up a question by its id.
    pub fn question_by_id(&self, question_id: u32) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == question_id)
    }

    /// The time limit converted to seconds.
    pub fn time_limit_seconds(&self) -> u32 {
        self.time_limit_minutes * 60
    }

    /// Whether this quiz satisfies the structural invariants required to
    /// start a session: non-empty questions, positive time limit, every
    /// question with at least two options and an in-range correct index.
    pub fn is_valid(&self) -> bool {
        !self.questions.is_empty()
            && self.time_limit_minutes > 0
            && self
                .questions
                .iter()
                .all(|q| q.options.len() >= 2 && q.correct_option < q.options.len())
    }
}

/// An authenticated user identity, supplied by an external collaborator.
///
/// The engine treats this as opaque: no credentials are validated here.
/// Anonymous attempts are represented by the absence of a `User`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Opaque user identifier.
    pub id: String,
    /// Name shown in the interface.
    pub display_name: String,
}
