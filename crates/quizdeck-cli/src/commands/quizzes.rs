//! The `quizdeck quizzes` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use super::load_catalog;

pub fn execute(
    catalog_path: PathBuf,
    subject: Option<u32>,
    search: Option<String>,
) -> Result<()> {
    let catalog = load_catalog(&catalog_path)?;

    let quizzes: Vec<_> = match (&subject, &search) {
        (Some(id), _) => catalog.quizzes_by_subject(*id),
        (None, Some(query)) => catalog.search(query),
        (None, None) => catalog.quizzes.iter().collect(),
    };

    if quizzes.is_empty() {
        println!("No quizzes matched.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(["ID", "Title", "Subject", "Questions", "Time limit"]);
    for quiz in quizzes {
        let subject_name = catalog
            .subject_by_id(quiz.subject_id)
            .map(|s| s.name.clone())
            .unwrap_or_else(|| format!("unknown ({})", quiz.subject_id));
        table.add_row([
            quiz.id.to_string(),
            quiz.title.clone(),
            subject_name,
            quiz.total_questions().to_string(),
            format!("{}m", quiz.time_limit_minutes),
        ]);
    }
    println!("{table}");

    Ok(())
}
