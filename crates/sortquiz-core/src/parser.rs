//! TOML quiz parser.
//!
//! Loads quiz definitions from TOML files and directories, and validates
//! them for data-entry mistakes the session will not catch at runtime.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Category, Quiz, Word};

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    categories: Vec<TomlCategory>,
    #[serde(default)]
    words: Vec<TomlWord>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    title: String,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Deserialize)]
struct TomlCategory {
    name: String,
    slug: String,
}

#[derive(Debug, Deserialize)]
struct TomlWord {
    label: String,
    category: String,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let categories = parsed
        .categories
        .into_iter()
        .map(|c| Category {
            name: c.name,
            slug: c.slug,
        })
        .collect();

    let words = parsed
        .words
        .into_iter()
        .map(|w| Word {
            label: w.label,
            category: w.category,
        })
        .collect();

    Ok(Quiz {
        id: parsed.quiz.id,
        title: parsed.quiz.title,
        description: parsed.quiz.description,
        categories,
        words,
    })
}

/// Recursively load all `.toml` quiz files from a directory.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The word label or category slug concerned (if applicable).
    pub subject: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for common data-entry issues.
///
/// None of these stop a quiz from loading; a word with a dangling category
/// reference simply can never be scored correct.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate category slugs
    let mut seen_slugs = std::collections::HashSet::new();
    for cat in &quiz.categories {
        if !seen_slugs.insert(&cat.slug) {
            warnings.push(ValidationWarning {
                subject: Some(cat.slug.clone()),
                message: format!("duplicate category slug: {}", cat.slug),
            });
        }
    }

    // Words referencing a category that doesn't exist
    for word in &quiz.words {
        if quiz.category(&word.category).is_none() {
            warnings.push(ValidationWarning {
                subject: Some(word.label.clone()),
                message: format!(
                    "word references unknown category '{}' and can never score correct",
                    word.category
                ),
            });
        }
    }

    // Empty and duplicate labels (labels address words in move scripts)
    let mut seen_labels = std::collections::HashSet::new();
    for word in &quiz.words {
        if word.label.trim().is_empty() {
            warnings.push(ValidationWarning {
                subject: None,
                message: "word label is empty".into(),
            });
            continue;
        }
        if !seen_labels.insert(&word.label) {
            warnings.push(ValidationWarning {
                subject: Some(word.label.clone()),
                message: format!("duplicate word label: {}", word.label),
            });
        }
    }

    // Categories no word belongs to
    for cat in &quiz.categories {
        if !quiz.words.iter().any(|w| w.category == cat.slug) {
            warnings.push(ValidationWarning {
                subject: Some(cat.slug.clone()),
                message: format!("category '{}' has no words assigned to it", cat.slug),
            });
        }
    }

    warnings
}
