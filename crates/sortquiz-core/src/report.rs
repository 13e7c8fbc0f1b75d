//! Score report types with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::Quiz;
use crate::scoring::{ScoreCard, WordVerdict};

/// A persisted record of one scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Summary of the quiz that was played.
    pub quiz: QuizSummary,
    /// Per-word verdicts, in pool order.
    pub verdicts: Vec<WordVerdict>,
    /// Words placed in their matching column.
    pub correct: usize,
    /// Total word count.
    pub total: usize,
    /// The human-readable score line.
    pub summary: String,
}

/// Summary of a quiz (without the full definitions).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizSummary {
    pub id: String,
    pub title: String,
    pub category_count: usize,
    pub word_count: usize,
}

impl ScoreReport {
    /// Build a report from a scoring pass.
    pub fn from_card(quiz: &Quiz, card: ScoreCard) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            quiz: QuizSummary {
                id: quiz.id.clone(),
                title: quiz.title.clone(),
                category_count: quiz.categories.len(),
                word_count: quiz.words.len(),
            },
            summary: card.summary(),
            verdicts: card.verdicts,
            correct: card.correct,
            total: card.total,
        }
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: ScoreReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}
