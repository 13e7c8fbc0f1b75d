//! Scoring: compare current placements against the answer key.
//!
//! A pure read of the session; placements are never mutated here. The pool
//! is not a scored column: words still in it get no correct/incorrect
//! verdict and never increment the count, while the total stays at the full
//! word count.

use serde::{Deserialize, Serialize};

use crate::model::WordId;
use crate::session::{Container, Session};

/// Outcome for a single word at submit time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// Placed in the column matching its answer-key category.
    Correct,
    /// Placed in some other column.
    Incorrect,
    /// Still in the pool; not counted either way.
    Unplaced,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Verdict::Correct => write!(f, "correct"),
            Verdict::Incorrect => write!(f, "incorrect"),
            Verdict::Unplaced => write!(f, "unplaced"),
        }
    }
}

/// Scoring detail for one word.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordVerdict {
    pub word: WordId,
    /// The word's label, carried so reports are readable on their own.
    pub label: String,
    /// Answer-key category slug.
    pub expected: String,
    /// Where the word sat when scored.
    pub placement: Container,
    pub verdict: Verdict,
}

/// Result of one scoring pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreCard {
    /// One verdict per word, in pool order.
    pub verdicts: Vec<WordVerdict>,
    /// Words placed in their matching column.
    pub correct: usize,
    /// Total word count, fixed by the quiz definition.
    pub total: usize,
}

impl ScoreCard {
    /// The human-readable aggregate score line.
    pub fn summary(&self) -> String {
        format!("You got {} out of {} correct!", self.correct, self.total)
    }
}

/// Score the session's current placements.
///
/// Idempotent given unchanged placements, and safe to call repeatedly
/// across further drags: each pass recomputes every verdict from scratch.
pub fn score(session: &Session) -> ScoreCard {
    let quiz = session.quiz();
    let mut correct = 0usize;

    let verdicts = quiz
        .words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let id = WordId(i);
            let placement = session
                .placement(id)
                .cloned()
                .unwrap_or(Container::Pool);
            let verdict = match &placement {
                Container::Column(slug) if *slug == word.category => {
                    correct += 1;
                    Verdict::Correct
                }
                Container::Column(_) => Verdict::Incorrect,
                Container::Pool => Verdict::Unplaced,
            };
            WordVerdict {
                word: id,
                label: word.label.clone(),
                expected: word.category.clone(),
                placement,
                verdict,
            }
        })
        .collect();

    ScoreCard {
        verdicts,
        correct,
        total: quiz.words.len(),
    }
}
