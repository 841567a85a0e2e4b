//! The pure scoring engine.
//!
//! Turns a quiz definition plus an answer map into a score breakdown.
//! No I/O, no side effects, deterministic for identical inputs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::model::Quiz;

/// The user's selections for a session, keyed by question id.
pub type AnswerMap = HashMap<u32, usize>;

/// Per-question outcome, sufficient for a review UI without re-querying
/// the quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRecord {
    /// The question this record describes.
    pub question_id: u32,
    /// The option the user selected, or `None` if unanswered.
    pub selected: Option<usize>,
    /// Whether the selection matched the correct option.
    pub is_correct: bool,
    /// Index of the correct option.
    pub correct_option: usize,
    /// Explanation text for review.
    pub explanation: String,
}

/// The result of scoring one quiz attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Percentage score, 0–100, rounded half-up.
    pub score: u8,
    /// Number of questions in the quiz.
    pub total_questions: usize,
    /// Questions answered correctly.
    pub correct_answers: usize,
    /// Questions answered incorrectly or left unanswered.
    pub incorrect_answers: usize,
    /// Per-question records in quiz order.
    pub answers: Vec<AnswerRecord>,
}

/// Score a quiz attempt.
///
/// Every question in `quiz.questions` is scored in quiz order. A question
/// with no entry in `answers` counts as incorrect. The caller must pass a
/// structurally valid quiz (non-empty questions); `QuizSession::start`
/// enforces this.
pub fn score(quiz: &Quiz, answers: &AnswerMap) -> ScoreBreakdown {
    let mut correct_count = 0usize;
    let mut records = Vec::with_capacity(quiz.questions.len());

    for question in &quiz.questions {
        let selected = answers.get(&question.id).copied();
        let is_correct = selected == Some(question.correct_option);
        if is_correct {
            correct_count += 1;
        }
        records.push(AnswerRecord {
            question_id: question.id,
            selected,
            is_correct,
            correct_option: question.correct_option,
            explanation: question.explanation.clone(),
        });
    }

    let total = quiz.questions.len();
    let score = ((correct_count as f64 / total as f64) * 100.0).round() as u8;

    ScoreBreakdown {
        score,
        total_questions: total,
        correct_answers: correct_count,
        incorrect_answers: total - correct_count,
        answers: records,
    }
}
