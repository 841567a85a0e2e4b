//! The durable record of a completed, scored quiz attempt.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::{AnswerRecord, ScoreBreakdown};

/// A completed quiz attempt. Created exactly once per attempt by the
/// session state machine; immutable after creation. Persisted only when a
/// user identity was present — anonymous attempts are scored but not saved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizResult {
    /// Unique result identifier.
    pub id: Uuid,
    /// The quiz that was taken.
    pub quiz_id: u32,
    /// Owning user, or `None` for an anonymous attempt.
    pub user_id: Option<String>,
    /// Percentage score, 0–100.
    pub score: u8,
    /// Number of questions in the quiz.
    pub total_questions: usize,
    /// Questions answered correctly.
    pub correct_answers: usize,
    /// Minutes spent, rounded from elapsed seconds.
    pub time_spent_minutes: u32,
    /// When the attempt completed (submission or timeout).
    pub completed_at: DateTime<Utc>,
    /// Per-question review records in quiz order.
    pub answers: Vec<AnswerRecord>,
}

/// Coarse performance band derived from the score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceLevel {
    Excellent,
    Good,
    NeedsImprovement,
}

impl QuizResult {
    /// Build a result from a score breakdown.
    pub fn from_breakdown(
        quiz_id: u32,
        user_id: Option<String>,
        breakdown: ScoreBreakdown,
        time_spent_minutes: u32,
        completed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            quiz_id,
            user_id,
            score: breakdown.score,
            total_questions: breakdown.total_questions,
            correct_answers: breakdown.correct_answers,
            time_spent_minutes,
            completed_at,
            answers: breakdown.answers,
        }
    }

    /// Percentage of questions answered correctly, rounded.
    pub fn accuracy(&self) -> u8 {
        if self.total_questions == 0 {
            return 0;
        }
        ((self.correct_answers as f64 / self.total_questions as f64) * 100.0).round() as u8
    }

    /// Letter grade on the usual 90/80/70/60 ladder.
    pub fn grade(&self) -> char {
        match self.score {
            90.. => 'A',
            80..=89 => 'B',
            70..=79 => 'C',
            60..=69 => 'D',
            _ => 'F',
        }
    }

    /// Performance band used for summary displays.
    pub fn performance_level(&self) -> PerformanceLevel {
        match self.score {
            80.. => PerformanceLevel::Excellent,
            60..=79 => PerformanceLevel::Good,
            _ => PerformanceLevel::NeedsImprovement,
        }
    }

    /// Average minutes spent per question, rounded.
    pub fn time_per_question_minutes(&self) -> u32 {
        if self.total_questions == 0 {
            return 0;
        }
        ((self.time_spent_minutes as f64 / self.total_questions as f64).round()) as u32
    }
}
