//! The `quizdeck stats` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use super::{build_engine, format_minutes};

pub async fn execute(
    catalog_path: PathBuf,
    store_path: PathBuf,
    user: Option<String>,
) -> Result<()> {
    let engine = build_engine(&catalog_path, store_path)?;
    let stats = engine.statistics(user.as_deref()).await;

    if stats.is_empty() {
        println!("No completed quizzes yet.");
        return Ok(());
    }

    println!("Quizzes completed: {}", stats.total_quizzes);
    println!("Average score:     {}%", stats.average_score);
    println!("Total time:        {}", format_minutes(stats.total_time_minutes));

    let mut by_subject = Table::new();
    by_subject.set_header(["Subject", "Quizzes", "Correct", "Incorrect", "Accuracy"]);
    for (count, answers) in stats
        .quizzes_by_subject
        .iter()
        .zip(&stats.answers_by_subject)
    {
        by_subject.add_row([
            count.subject.clone(),
            count.count.to_string(),
            answers.correct.to_string(),
            answers.incorrect.to_string(),
            format!("{:.0}%", answers.accuracy * 100.0),
        ]);
    }
    println!("\nBy subject:\n{by_subject}");

    let mut monthly = Table::new();
    monthly.set_header(["Month", "Correct", "Incorrect"]);
    for bucket in &stats.monthly_progress {
        monthly.add_row([
            bucket.label.clone(),
            bucket.correct.to_string(),
            bucket.incorrect.to_string(),
        ]);
    }
    println!("\nLast 12 months:\n{monthly}");

    Ok(())
}
