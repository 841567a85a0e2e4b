//! The `quizdeck validate` command.

use std::path::PathBuf;

use anyhow::Result;

use quizdeck_core::catalog::validate_catalog;

use super::load_catalog;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = load_catalog(&catalog_path)?;

    println!(
        "Catalog: {} subjects, {} quizzes, {} questions",
        catalog.subjects.len(),
        catalog.quizzes.len(),
        catalog
            .quizzes
            .iter()
            .map(|q| q.questions.len())
            .sum::<usize>()
    );

    let warnings = validate_catalog(&catalog);
    for w in &warnings {
        let prefix = w
            .quiz_id
            .map(|id| format!("  [quiz {id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", w.message);
    }

    if warnings.is_empty() {
        println!("Catalog valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
