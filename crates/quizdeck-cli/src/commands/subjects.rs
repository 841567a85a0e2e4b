//! The `quizdeck subjects` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use super::load_catalog;

pub fn execute(catalog_path: PathBuf) -> Result<()> {
    let catalog = load_catalog(&catalog_path)?;

    if catalog.subjects.is_empty() {
        println!("No subjects in the catalog. Run `quizdeck init` to create a starter catalog.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(["ID", "Subject", "Quizzes", "Description"]);
    for subject in &catalog.subjects {
        table.add_row([
            subject.id.to_string(),
            subject.name.clone(),
            catalog.quizzes_by_subject(subject.id).len().to_string(),
            subject.description.clone(),
        ]);
    }
    println!("{table}");

    Ok(())
}
