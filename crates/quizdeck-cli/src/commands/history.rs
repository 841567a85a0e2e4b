//! The `quizdeck history` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use super::{build_engine, format_minutes};

pub async fn execute(
    catalog_path: PathBuf,
    store_path: PathBuf,
    user: Option<String>,
    limit: Option<usize>,
) -> Result<()> {
    let engine = build_engine(&catalog_path, store_path)?;
    let mut history = engine.history(user.as_deref()).await;
    if let Some(limit) = limit {
        history.truncate(limit);
    }

    if history.is_empty() {
        println!("No results yet.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(["Completed", "Quiz", "Subject", "Score", "Grade", "Correct", "Time", "Result id"]);
    for result in &history {
        let (quiz_title, subject_name) = match engine.catalog().quiz_with_subject(result.quiz_id) {
            Some((quiz, subject)) => (quiz.title.clone(), subject.name.clone()),
            None => (format!("unknown ({})", result.quiz_id), String::new()),
        };
        table.add_row([
            result.completed_at.format("%Y-%m-%d %H:%M").to_string(),
            quiz_title,
            subject_name,
            format!("{}%", result.score),
            result.grade().to_string(),
            format!("{}/{}", result.correct_answers, result.total_questions),
            format_minutes(result.time_spent_minutes as u64),
            result.id.to_string(),
        ]);
    }
    println!("{table}");

    Ok(())
}
