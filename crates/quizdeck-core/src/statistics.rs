//! Aggregate statistics over the persisted result history.
//!
//! Pure read computation: derives summary numbers, per-subject counts,
//! and a trailing 12-calendar-month progress series from the history and
//! the catalog. Never mutates the repository.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::results::QuizResult;

/// Aggregate statistics across a result history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statistics {
    /// Number of completed quizzes in the history.
    pub total_quizzes: usize,
    /// Mean score across the history, rounded. Zero when empty.
    pub average_score: u32,
    /// Total minutes spent across all attempts.
    pub total_time_minutes: u64,
    /// Per-subject count of completed quizzes.
    pub quizzes_by_subject: Vec<SubjectQuizCount>,
    /// Trailing 12 calendar months, oldest first, current month last.
    pub monthly_progress: Vec<MonthlyBucket>,
    /// Per-subject correct/incorrect answer totals.
    pub answers_by_subject: Vec<SubjectAnswerTotals>,
}

impl Statistics {
    /// Whether the history this was computed from was empty.
    pub fn is_empty(&self) -> bool {
        self.total_quizzes == 0
    }
}

/// Completed-quiz count for one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectQuizCount {
    pub subject_id: u32,
    pub subject: String,
    pub color: String,
    pub count: usize,
}

/// Correct/incorrect answer counts for one calendar month.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyBucket {
    pub year: i32,
    /// 1-based month number.
    pub month: u32,
    /// Display label, e.g. "Mar 2026".
    pub label: String,
    pub correct: u64,
    pub incorrect: u64,
}

/// Answer totals and accuracy for one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectAnswerTotals {
    pub subject_id: u32,
    pub subject: String,
    pub color: String,
    pub correct: u64,
    pub incorrect: u64,
    /// correct / (correct + incorrect); 0.0 when no answers.
    pub accuracy: f64,
}

/// Compute aggregate statistics from a history slice.
///
/// `now` anchors the 12-month window at its calendar month; the engine
/// passes `Utc::now()`.
pub fn compute_statistics(
    history: &[QuizResult],
    catalog: &Catalog,
    now: DateTime<Utc>,
) -> Statistics {
    let total_quizzes = history.len();
    let average_score = if total_quizzes == 0 {
        0
    } else {
        let total: u64 = history.iter().map(|r| r.score as u64).sum();
        ((total as f64 / total_quizzes as f64).round()) as u32
    };
    let total_time_minutes = history.iter().map(|r| r.time_spent_minutes as u64).sum();

    // Per-subject joins go through Quiz.subject_id.
    let subject_of = |result: &QuizResult| -> Option<u32> {
        catalog.quiz_by_id(result.quiz_id).map(|q| q.subject_id)
    };

    let quizzes_by_subject = catalog
        .subjects
        .iter()
        .map(|subject| SubjectQuizCount {
            subject_id: subject.id,
            subject: subject.name.clone(),
            color: subject.color.clone(),
            count: history
                .iter()
                .filter(|r| subject_of(r) == Some(subject.id))
                .count(),
        })
        .collect();

    let answers_by_subject = catalog
        .subjects
        .iter()
        .map(|subject| {
            let mut correct = 0u64;
            let mut total = 0u64;
            for result in history {
                if subject_of(result) == Some(subject.id) {
                    correct += result.correct_answers as u64;
                    total += result.total_questions as u64;
                }
            }
            let incorrect = total - correct;
            SubjectAnswerTotals {
                subject_id: subject.id,
                subject: subject.name.clone(),
                color: subject.color.clone(),
                correct,
                incorrect,
                accuracy: if total == 0 {
                    0.0
                } else {
                    correct as f64 / total as f64
                },
            }
        })
        .collect();

    // Current month and the 11 preceding, oldest first. Buckets are keyed
    // by (year, month) of completed_at, so the last instant of a month
    // lands in that month.
    let monthly_progress = (0..12)
        .rev()
        .map(|back| {
            let (year, month) = months_back(now.year(), now.month(), back);
            let mut correct = 0u64;
            let mut total = 0u64;
            for result in history {
                let at = result.completed_at;
                if at.year() == year && at.month() == month {
                    correct += result.correct_answers as u64;
                    total += result.total_questions as u64;
                }
            }
            MonthlyBucket {
                year,
                month,
                label: month_label(year, month),
                correct,
                incorrect: total - correct,
            }
        })
        .collect();

    Statistics {
        total_quizzes,
        average_score,
        total_time_minutes,
        quizzes_by_subject,
        monthly_progress,
        answers_by_subject,
    }
}

/// The (year, month) pair `back` calendar months before the given one.
fn months_back(year: i32, month: u32, back: u32) -> (i32, u32) {
    let total = year * 12 + month as i32 - 1 - back as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

fn month_label(year: i32, month: u32) -> String {
    // First day of the month is always representable.
    match Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0).single() {
        Some(date) => date.format("%b %Y").to_string(),
        None => format!("{year}-{month:02}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, Quiz, Subject};
    use chrono::TimeZone;
    use uuid::Uuid;

    fn test_catalog() -> Catalog {
        let question = Question {
            id: 1,
            prompt: "q".into(),
            options: vec!["a".into(), "b".into()],
            correct_option: 0,
            explanation: String::new(),
        };
        Catalog {
            subjects: vec![
                Subject {
                    id: 1,
                    name: "Math".into(),
                    description: String::new(),
                    color: "#007bff".into(),
                    icon: "book".into(),
                },
                Subject {
                    id: 2,
                    name: "Physics".into(),
                    description: String::new(),
                    color: "#28a745".into(),
                    icon: "book".into(),
                },
            ],
            quizzes: vec![
                Quiz {
                    id: 10,
                    subject_id: 1,
                    title: "Algebra".into(),
                    description: String::new(),
                    time_limit_minutes: 30,
                    questions: vec![question.clone()],
                },
                Quiz {
                    id: 20,
                    subject_id: 2,
                    title: "Mechanics".into(),
                    description: String::new(),
                    time_limit_minutes: 30,
                    questions: vec![question],
                },
            ],
        }
    }

    fn result(quiz_id: u32, score: u8, correct: usize, total: usize, at: DateTime<Utc>) -> QuizResult {
        QuizResult {
            id: Uuid::new_v4(),
            quiz_id,
            user_id: Some("u1".into()),
            score,
            total_questions: total,
            correct_answers: correct,
            time_spent_minutes: 10,
            completed_at: at,
            answers: vec![],
        }
    }

    #[test]
    fn empty_history_yields_zeroed_statistics() {
        let catalog = test_catalog();
        let stats = compute_statistics(&[], &catalog, Utc::now());
        assert!(stats.is_empty());
        assert_eq!(stats.total_quizzes, 0);
        assert_eq!(stats.average_score, 0);
        assert_eq!(stats.total_time_minutes, 0);
        assert_eq!(stats.monthly_progress.len(), 12);
        assert!(stats.monthly_progress.iter().all(|b| b.correct == 0));
        assert!(stats.answers_by_subject.iter().all(|a| a.accuracy == 0.0));
    }

    #[test]
    fn summary_numbers() {
        let catalog = test_catalog();
        let now = Utc::now();
        let history = vec![
            result(10, 80, 8, 10, now),
            result(10, 61, 6, 10, now),
            result(20, 100, 10, 10, now),
        ];
        let stats = compute_statistics(&history, &catalog, now);
        assert_eq!(stats.total_quizzes, 3);
        // mean(80, 61, 100) = 80.33 rounds to 80
        assert_eq!(stats.average_score, 80);
        assert_eq!(stats.total_time_minutes, 30);
    }

    #[test]
    fn per_subject_joins() {
        let catalog = test_catalog();
        let now = Utc::now();
        let history = vec![
            result(10, 80, 8, 10, now),
            result(10, 50, 5, 10, now),
            result(20, 100, 10, 10, now),
        ];
        let stats = compute_statistics(&history, &catalog, now);

        let math = &stats.quizzes_by_subject[0];
        assert_eq!(math.subject, "Math");
        assert_eq!(math.count, 2);
        assert_eq!(stats.quizzes_by_subject[1].count, 1);

        let math_answers = &stats.answers_by_subject[0];
        assert_eq!(math_answers.correct, 13);
        assert_eq!(math_answers.incorrect, 7);
        assert!((math_answers.accuracy - 0.65).abs() < f64::EPSILON);

        let physics_answers = &stats.answers_by_subject[1];
        assert!((physics_answers.accuracy - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn unknown_quiz_ids_do_not_join() {
        let catalog = test_catalog();
        let now = Utc::now();
        let history = vec![result(999, 50, 5, 10, now)];
        let stats = compute_statistics(&history, &catalog, now);
        assert_eq!(stats.total_quizzes, 1);
        assert!(stats.quizzes_by_subject.iter().all(|c| c.count == 0));
    }

    #[test]
    fn monthly_window_is_twelve_trailing_months() {
        let catalog = test_catalog();
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        let stats = compute_statistics(&[], &catalog, now);
        let first = &stats.monthly_progress[0];
        let last = &stats.monthly_progress[11];
        assert_eq!((first.year, first.month), (2025, 4));
        assert_eq!((last.year, last.month), (2026, 3));
        assert_eq!(last.label, "Mar 2026");
    }

    #[test]
    fn month_boundary_buckets_into_that_month() {
        let catalog = test_catalog();
        let now = Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap();
        // Last instant of January 2026.
        let boundary = Utc.with_ymd_and_hms(2026, 1, 31, 23, 59, 59).unwrap();
        let history = vec![result(10, 80, 8, 10, boundary)];
        let stats = compute_statistics(&history, &catalog, now);

        let january = stats
            .monthly_progress
            .iter()
            .find(|b| b.year == 2026 && b.month == 1)
            .unwrap();
        assert_eq!(january.correct, 8);
        assert_eq!(january.incorrect, 2);

        let february = stats
            .monthly_progress
            .iter()
            .find(|b| b.year == 2026 && b.month == 2)
            .unwrap();
        assert_eq!(february.correct, 0);
    }

    #[test]
    fn months_back_crosses_year_boundaries() {
        assert_eq!(months_back(2026, 3, 0), (2026, 3));
        assert_eq!(months_back(2026, 3, 2), (2026, 1));
        assert_eq!(months_back(2026, 3, 3), (2025, 12));
        assert_eq!(months_back(2026, 1, 12), (2025, 1));
        assert_eq!(months_back(2026, 1, 13), (2024, 12));
    }
}
