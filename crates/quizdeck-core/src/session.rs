//! The timed quiz session state machine.
//!
//! One `QuizSession` value is one quiz attempt: it owns the quiz being
//! taken, the answer map built up by the user, the countdown, and once
//! finished, the scored result. A session only exists once started;
//! `start` is the constructor, so there is no not-started state to misuse.
//!
//! The session never performs I/O. Ticks are delivered by an external
//! 1-second clock, and persistence of the finished result is handled by
//! [`crate::engine::QuizEngine`], which consumes the session's one-shot
//! save latch so a result is never persisted twice.

use std::collections::HashSet;

use chrono::{DateTime, Utc};

use crate::error::SessionError;
use crate::model::{Question, Quiz, User};
use crate::results::QuizResult;
use crate::scoring::{self, AnswerMap};

/// Outcome of one clock tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// Seconds still remaining; the session is in progress.
    Remaining(u32),
    /// This tick hit zero and forced submission. Reported exactly once,
    /// on the transition edge.
    Expired,
    /// The session had already completed; the tick was ignored.
    AlreadyCompleted,
}

/// One in-progress or just-completed quiz attempt.
#[derive(Debug)]
pub struct QuizSession {
    quiz: Quiz,
    user_id: Option<String>,
    current_index: usize,
    answers: AnswerMap,
    revealed: HashSet<u32>,
    total_seconds: u32,
    remaining_seconds: u32,
    started_at: DateTime<Utc>,
    result: Option<QuizResult>,
    save_pending: bool,
}

impl QuizSession {
    /// Start a new session over `quiz` for an optional user identity.
    ///
    /// Validates the quiz invariants; a quiz with no questions, a zero
    /// time limit, or a malformed question is rejected.
    pub fn start(quiz: Quiz, user: Option<&User>) -> Result<Self, SessionError> {
        if !quiz.is_valid() {
            return Err(SessionError::InvalidQuiz(format!(
                "quiz {} ('{}') fails structural invariants",
                quiz.id, quiz.title
            )));
        }
        let total_seconds = quiz.time_limit_seconds();
        Ok(Self {
            quiz,
            user_id: user.map(|u| u.id.clone()),
            current_index: 0,
            answers: AnswerMap::new(),
            revealed: HashSet::new(),
            total_seconds,
            remaining_seconds: total_seconds,
            started_at: Utc::now(),
            result: None,
            save_pending: false,
        })
    }

    /// The question currently on display.
    pub fn current_question(&self) -> &Question {
        &self.quiz.questions[self.current_index]
    }

    /// Record an answer for the currently displayed question.
    ///
    /// Overwrite is allowed: last write wins. A UI may lock the option
    /// buttons after the first pick, but that is a presentation concern;
    /// the state layer permits a re-answer. Also marks the question's
    /// explanation as revealed.
    pub fn select_answer(
        &mut self,
        question_id: u32,
        option_index: usize,
    ) -> Result<(), SessionError> {
        if self.is_completed() {
            return Err(SessionError::AlreadyCompleted);
        }
        let current = self.current_question();
        if current.id != question_id {
            return Err(SessionError::QuestionMismatch {
                expected: current.id,
                got: question_id,
            });
        }
        if option_index >= current.option_count() {
            return Err(SessionError::InvalidAnswerIndex {
                question_id,
                index: option_index,
                option_count: current.option_count(),
            });
        }
        self.answers.insert(question_id, option_index);
        self.revealed.insert(question_id);
        Ok(())
    }

    /// Move to the next question, clamped to the last index.
    ///
    /// No-op while the current question is unanswered: the session does
    /// not allow moving on without an answer. Never errors.
    pub fn advance(&mut self) {
        if self.is_completed() || !self.is_answered(self.current_question().id) {
            return;
        }
        if self.current_index + 1 < self.quiz.total_questions() {
            self.current_index += 1;
        }
    }

    /// Move to the previous question, clamped to index 0. Never errors.
    pub fn retreat(&mut self) {
        if self.is_completed() {
            return;
        }
        self.current_index = self.current_index.saturating_sub(1);
    }

    /// Jump directly to a question index; out-of-range is a no-op.
    pub fn jump_to(&mut self, index: usize) {
        if self.is_completed() {
            return;
        }
        if index < self.quiz.total_questions() {
            self.current_index = index;
        }
    }

    /// Deliver one second of clock time.
    ///
    /// When the countdown reaches zero the session submits itself: a
    /// forced timeout commit, not a user action. Whatever answers were
    /// captured so far are scored, with unanswered questions counting as
    /// incorrect.
    pub fn tick(&mut self) -> Tick {
        if self.is_completed() {
            return Tick::AlreadyCompleted;
        }
        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.finish();
            Tick::Expired
        } else {
            Tick::Remaining(self.remaining_seconds)
        }
    }

    /// Submit the attempt and return the scored result.
    ///
    /// Idempotent: the first call scores the answer map and transitions
    /// to completed; later calls return the same cached result and have
    /// no further effect.
    pub fn submit(&mut self) -> &QuizResult {
        if self.result.is_none() {
            self.finish();
        }
        self.result.as_ref().expect("finish() populates the result")
    }

    fn finish(&mut self) {
        let elapsed = self.total_seconds - self.remaining_seconds;
        let time_spent_minutes = (elapsed as f64 / 60.0).round() as u32;
        let breakdown = scoring::score(&self.quiz, &self.answers);
        self.result = Some(QuizResult::from_breakdown(
            self.quiz.id,
            self.user_id.clone(),
            breakdown,
            time_spent_minutes,
            Utc::now(),
        ));
        self.save_pending = true;
    }

    /// One-shot persistence latch: returns `true` exactly once after the
    /// session finishes. Consumed by the engine before saving.
    pub(crate) fn take_save_pending(&mut self) -> bool {
        std::mem::take(&mut self.save_pending)
    }

    /// Whether the session has reached its terminal state.
    pub fn is_completed(&self) -> bool {
        self.result.is_some()
    }

    /// The scored result, if the session has completed.
    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    /// Whether a question has an answer recorded.
    pub fn is_answered(&self, question_id: u32) -> bool {
        self.answers.contains_key(&question_id)
    }

    /// The recorded answer for a question, if any.
    pub fn answer_for(&self, question_id: u32) -> Option<usize> {
        self.answers.get(&question_id).copied()
    }

    /// Whether a question's explanation has been revealed.
    pub fn is_explanation_revealed(&self, question_id: u32) -> bool {
        self.revealed.contains(&question_id)
    }

    /// Number of questions answered so far.
    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    /// Zero-based index of the question on display.
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Seconds left on the countdown.
    pub fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// When the session started.
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// The quiz being taken.
    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }
}
