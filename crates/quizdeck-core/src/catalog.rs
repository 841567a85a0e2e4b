//! The static catalog of subjects and quizzes, and its TOML loader.
//!
//! Catalogs are loaded wholesale at startup from TOML files and never
//! mutated afterwards. Validation is a separate pass that reports
//! warnings rather than failing the load, so one malformed quiz does not
//! hide the rest of the catalog.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Question, Quiz, Subject};

/// The full set of subjects and quizzes available to take.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub subjects: Vec<Subject>,
    pub quizzes: Vec<Quiz>,
}

impl Catalog {
    /// Look up a subject by id.
    pub fn subject_by_id(&self, id: u32) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    /// Look up a quiz by id.
    pub fn quiz_by_id(&self, id: u32) -> Option<&Quiz> {
        self.quizzes.iter().find(|q| q.id == id)
    }

    /// All quizzes belonging to a subject.
    pub fn quizzes_by_subject(&self, subject_id: u32) -> Vec<&Quiz> {
        self.quizzes
            .iter()
            .filter(|q| q.subject_id == subject_id)
            .collect()
    }

    /// A quiz together with its subject, when both resolve.
    pub fn quiz_with_subject(&self, quiz_id: u32) -> Option<(&Quiz, &Subject)> {
        let quiz = self.quiz_by_id(quiz_id)?;
        let subject = self.subject_by_id(quiz.subject_id)?;
        Some((quiz, subject))
    }

    /// Case-insensitive substring search over quiz titles and descriptions.
    pub fn search(&self, query: &str) -> Vec<&Quiz> {
        let needle = query.to_lowercase();
        self.quizzes
            .iter()
            .filter(|q| {
                q.title.to_lowercase().contains(&needle)
                    || q.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Merge another catalog into this one (directory loads).
    fn merge(&mut self, other: Catalog) {
        self.subjects.extend(other.subjects);
        self.quizzes.extend(other.quizzes);
    }
}

/// Intermediate TOML structure for parsing catalog files.
#[derive(Debug, Deserialize)]
struct TomlCatalogFile {
    #[serde(default)]
    subjects: Vec<TomlSubject>,
    #[serde(default)]
    quizzes: Vec<TomlQuiz>,
}

#[derive(Debug, Deserialize)]
struct TomlSubject {
    id: u32,
    name: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_color")]
    color: String,
    #[serde(default = "default_icon")]
    icon: String,
}

fn default_color() -> String {
    "#007bff".to_string()
}

fn default_icon() -> String {
    "book".to_string()
}

#[derive(Debug, Deserialize)]
struct TomlQuiz {
    id: u32,
    subject_id: u32,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_time_limit")]
    time_limit_minutes: u32,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

fn default_time_limit() -> u32 {
    30
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: u32,
    prompt: String,
    options: Vec<String>,
    correct_option: usize,
    #[serde(default)]
    explanation: String,
}

/// Parse a single TOML file into a `Catalog`.
pub fn parse_catalog(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read catalog file: {}", path.display()))?;
    parse_catalog_str(&content, path)
}

/// Parse a TOML string into a `Catalog` (useful for testing).
pub fn parse_catalog_str(content: &str, source_path: &Path) -> Result<Catalog> {
    let parsed: TomlCatalogFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let subjects = parsed
        .subjects
        .into_iter()
        .map(|s| Subject {
            id: s.id,
            name: s.name,
            description: s.description,
            color: s.color,
            icon: s.icon,
        })
        .collect();

    let quizzes = parsed
        .quizzes
        .into_iter()
        .map(|q| Quiz {
            id: q.id,
            subject_id: q.subject_id,
            title: q.title,
            description: q.description,
            time_limit_minutes: q.time_limit_minutes,
            questions: q
                .questions
                .into_iter()
                .map(|question| Question {
                    id: question.id,
                    prompt: question.prompt,
                    options: question.options,
                    correct_option: question.correct_option,
                    explanation: question.explanation,
                })
                .collect(),
        })
        .collect();

    Ok(Catalog { subjects, quizzes })
}

/// Recursively load and merge all `.toml` catalog files from a directory.
///
/// Unparseable files are skipped with a warning so one bad file does not
/// take down the whole catalog.
pub fn load_catalog_directory(dir: &Path) -> Result<Catalog> {
    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    let mut catalog = Catalog::default();
    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            catalog.merge(load_catalog_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_catalog(&path) {
                Ok(parsed) => catalog.merge(parsed),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(catalog)
}

/// A warning from catalog validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The quiz ID (if applicable).
    pub quiz_id: Option<u32>,
    /// Warning message.
    pub message: String,
}

/// Validate a catalog for common issues.
pub fn validate_catalog(catalog: &Catalog) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate subject ids
    let mut seen_subjects = std::collections::HashSet::new();
    for subject in &catalog.subjects {
        if !seen_subjects.insert(subject.id) {
            warnings.push(ValidationWarning {
                quiz_id: None,
                message: format!("duplicate subject ID: {}", subject.id),
            });
        }
    }

    // Duplicate quiz ids
    let mut seen_quizzes = std::collections::HashSet::new();
    for quiz in &catalog.quizzes {
        if !seen_quizzes.insert(quiz.id) {
            warnings.push(ValidationWarning {
                quiz_id: Some(quiz.id),
                message: format!("duplicate quiz ID: {}", quiz.id),
            });
        }
    }

    for quiz in &catalog.quizzes {
        if catalog.subject_by_id(quiz.subject_id).is_none() {
            warnings.push(ValidationWarning {
                quiz_id: Some(quiz.id),
                message: format!("references unknown subject {}", quiz.subject_id),
            });
        }

        if quiz.questions.is_empty() {
            warnings.push(ValidationWarning {
                quiz_id: Some(quiz.id),
                message: "quiz has no questions".into(),
            });
        }

        if quiz.time_limit_minutes == 0 {
            warnings.push(ValidationWarning {
                quiz_id: Some(quiz.id),
                message: "time limit must be positive".into(),
            });
        }

        let mut seen_questions = std::collections::HashSet::new();
        for question in &quiz.questions {
            if !seen_questions.insert(question.id) {
                warnings.push(ValidationWarning {
                    quiz_id: Some(quiz.id),
                    message: format!("duplicate question ID: {}", question.id),
                });
            }
            if question.options.len() < 2 {
                warnings.push(ValidationWarning {
                    quiz_id: Some(quiz.id),
                    message: format!("question {} has fewer than 2 options", question.id),
                });
            } else if question.correct_option >= question.options.len() {
                warnings.push(ValidationWarning {
                    quiz_id: Some(quiz.id),
                    message: format!(
                        "question {} correct_option {} out of range",
                        question.id, question.correct_option
                    ),
                });
            }
            if question.prompt.trim().is_empty() {
                warnings.push(ValidationWarning {
                    quiz_id: Some(quiz.id),
                    message: format!("question {} prompt is empty", question.id),
                });
            }
        }
    }

    warnings
}
