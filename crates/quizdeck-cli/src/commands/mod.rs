//! Subcommand implementations.

pub mod clear;
pub mod history;
pub mod init;
pub mod quizzes;
pub mod show;
pub mod stats;
pub mod subjects;
pub mod take;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;

use quizdeck_core::catalog::{self, Catalog};
use quizdeck_core::engine::QuizEngine;
use quizdeck_store::JsonFileStore;

/// Load a catalog from a single TOML file or a directory of them.
pub(crate) fn load_catalog(path: &Path) -> Result<Catalog> {
    if path.is_dir() {
        catalog::load_catalog_directory(path)
    } else {
        catalog::parse_catalog(path)
    }
}

/// Build the engine over the given catalog and history file.
pub(crate) fn build_engine(catalog_path: &Path, store_path: PathBuf) -> Result<QuizEngine> {
    let catalog = load_catalog(catalog_path)?;
    let store = Arc::new(JsonFileStore::new(store_path));
    Ok(QuizEngine::new(Arc::new(catalog), store))
}

/// "3m" / "1h 12m" display for minute counts.
pub(crate) fn format_minutes(total: u64) -> String {
    let hours = total / 60;
    let minutes = total % 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
