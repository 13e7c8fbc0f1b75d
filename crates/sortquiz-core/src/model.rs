//! Core data model types for sortquiz.
//!
//! These are the fundamental types the entire sortquiz system uses to
//! represent a quiz: the category columns and the words to be sorted into
//! them. Definitions are immutable after load; only a word's placement
//! (tracked by [`crate::session::Session`]) changes at runtime.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A category column words are sorted into.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    /// Human-readable column title.
    pub name: String,
    /// Unique identifier. Words reference their answer-key category by slug,
    /// and rendered columns are tagged with it.
    pub slug: String,
}

/// A single word to be dragged into a category column.
///
/// Words carry no explicit identifier; their position in [`Quiz::words`] is
/// their identity (see [`WordId`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Word {
    /// The text shown on the draggable tile.
    pub label: String,
    /// Slug of the category this word belongs to. Must reference an
    /// existing [`Category::slug`]; a dangling reference is reported by
    /// validation and makes the word permanently unscoreable as correct.
    pub category: String,
}

/// Index of a word within [`Quiz::words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WordId(pub usize);

impl fmt::Display for WordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A complete quiz definition: the fixed answer key.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier for this quiz.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Description shown on the rendered page.
    #[serde(default)]
    pub description: String,
    /// The category columns, in display order.
    pub categories: Vec<Category>,
    /// The words, in pool display order.
    pub words: Vec<Word>,
}

impl Quiz {
    /// Look up a category by slug.
    pub fn category(&self, slug: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.slug == slug)
    }

    /// Look up a word by its id.
    pub fn word(&self, id: WordId) -> Option<&Word> {
        self.words.get(id.0)
    }

    /// Find the first word with the given label.
    pub fn word_by_label(&self, label: &str) -> Option<WordId> {
        self.words.iter().position(|w| w.label == label).map(WordId)
    }

    /// Iterate over all word ids in pool order.
    pub fn word_ids(&self) -> impl Iterator<Item = WordId> {
        (0..self.words.len()).map(WordId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_quiz() -> Quiz {
        Quiz {
            id: "mini".into(),
            title: "Mini".into(),
            description: String::new(),
            categories: vec![
                Category {
                    name: "Fruit".into(),
                    slug: "fruit".into(),
                },
                Category {
                    name: "Vegetables".into(),
                    slug: "veg".into(),
                },
            ],
            words: vec![
                Word {
                    label: "apple".into(),
                    category: "fruit".into(),
                },
                Word {
                    label: "carrot".into(),
                    category: "veg".into(),
                },
            ],
        }
    }

    #[test]
    fn category_lookup() {
        let quiz = two_column_quiz();
        assert_eq!(quiz.category("fruit").unwrap().name, "Fruit");
        assert!(quiz.category("meat").is_none());
    }

    #[test]
    fn word_lookup_by_id_and_label() {
        let quiz = two_column_quiz();
        assert_eq!(quiz.word(WordId(1)).unwrap().label, "carrot");
        assert!(quiz.word(WordId(9)).is_none());
        assert_eq!(quiz.word_by_label("apple"), Some(WordId(0)));
        assert_eq!(quiz.word_by_label("durian"), None);
    }

    #[test]
    fn quiz_serde_roundtrip() {
        let quiz = two_column_quiz();
        let json = serde_json::to_string(&quiz).unwrap();
        let deserialized: Quiz = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, "mini");
        assert_eq!(deserialized.categories.len(), 2);
        assert_eq!(deserialized.words[0].category, "fruit");
    }

    #[test]
    fn word_id_display() {
        assert_eq!(WordId(3).to_string(), "#3");
    }
}
