//! Drag-and-drop interaction session.
//!
//! The placement map kept here is the source of truth for where every word
//! currently sits; any rendered surface is a projection of it. The drag
//! lifecycle is an explicit two-state machine driven by named transition
//! functions, so the same code paths serve live pointer events and
//! synthetic ones (move scripts, tests).

use serde::{Deserialize, Serialize};

use crate::error::SessionError;
use crate::model::{Quiz, WordId};

/// Where a word currently sits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "slug", rename_all = "lowercase")]
pub enum Container {
    /// The initial pool holding all words before any drag.
    Pool,
    /// A category column, identified by slug.
    Column(String),
}

/// The single piece of drag interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// This word is currently mid-drag.
    Dragging(WordId),
}

/// What a drop event landed on, before resolution to a column.
///
/// Mirrors the fact that a pointer release can land on a column surface, on
/// a word tile sitting inside some container, or outside everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropTarget<'a> {
    /// Directly on a column, by slug.
    Column(&'a str),
    /// On a word tile; resolves to the column holding that word, if any.
    Word(WordId),
    /// Anywhere that is not a column or a word.
    Outside,
}

/// Result of a drop transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dragged word was re-parented into a column.
    Moved { word: WordId, to: String },
    /// Nothing changed: no drag in progress, or the target resolved to no
    /// column.
    Ignored,
}

/// A live quiz session: the quiz definition plus all mutable interaction
/// state. Definitions are injected at construction; there is no process-wide
/// state.
#[derive(Debug, Clone)]
pub struct Session {
    quiz: Quiz,
    /// Placement of each word, indexed by `WordId`.
    placements: Vec<Container>,
    drag: DragState,
}

impl Session {
    /// Start a session with every word in the pool and no drag in progress.
    pub fn new(quiz: Quiz) -> Self {
        let placements = vec![Container::Pool; quiz.words.len()];
        Self {
            quiz,
            placements,
            drag: DragState::Idle,
        }
    }

    pub fn quiz(&self) -> &Quiz {
        &self.quiz
    }

    pub fn drag_state(&self) -> DragState {
        self.drag
    }

    /// Current container of a word.
    pub fn placement(&self, word: WordId) -> Option<&Container> {
        self.placements.get(word.0)
    }

    /// All placements, indexed by word id.
    pub fn placements(&self) -> &[Container] {
        &self.placements
    }

    /// Words currently inside the given container, in pool order.
    pub fn words_in<'a>(
        &'a self,
        container: &'a Container,
    ) -> impl Iterator<Item = WordId> + 'a {
        self.placements
            .iter()
            .enumerate()
            .filter(move |(_, c)| *c == container)
            .map(|(i, _)| WordId(i))
    }

    /// `idle → dragging`: record the word as currently dragged.
    ///
    /// Under platform event ordering dragend always precedes the next
    /// dragstart, so a start-while-dragging cannot occur live; synthetic
    /// callers get last-writer-wins rather than an error.
    pub fn drag_start(&mut self, word: WordId) -> Result<(), SessionError> {
        if self.quiz.word(word).is_none() {
            return Err(SessionError::UnknownWord(word));
        }
        if let DragState::Dragging(prev) = self.drag {
            tracing::debug!("drag_start while {prev} still dragging; replacing");
        }
        self.drag = DragState::Dragging(word);
        Ok(())
    }

    /// `dragging → idle`, whether or not a drop happened.
    pub fn drag_end(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Resolve the drop target to its nearest enclosing column and, if a
    /// drag is in progress, re-parent the dragged word into it.
    ///
    /// The pool is not a drop target: a target that resolves to no column
    /// (a pooled word, or outside everything) leaves all placements
    /// untouched.
    pub fn drop_on(&mut self, target: DropTarget<'_>) -> Result<DropOutcome, SessionError> {
        let column = match target {
            DropTarget::Column(slug) => {
                if self.quiz.category(slug).is_none() {
                    return Err(SessionError::UnknownColumn(slug.to_string()));
                }
                Some(slug.to_string())
            }
            DropTarget::Word(id) => match self.placements.get(id.0) {
                Some(Container::Column(slug)) => Some(slug.clone()),
                Some(Container::Pool) => None,
                None => return Err(SessionError::UnknownWord(id)),
            },
            DropTarget::Outside => None,
        };

        match (self.drag, column) {
            (DragState::Dragging(word), Some(to)) => {
                self.placements[word.0] = Container::Column(to.clone());
                tracing::debug!("moved {word} into column '{to}'");
                Ok(DropOutcome::Moved { word, to })
            }
            _ => Ok(DropOutcome::Ignored),
        }
    }

    /// Return every word to the pool and clear any drag in progress.
    pub fn reset(&mut self) {
        self.placements.fill(Container::Pool);
        self.drag = DragState::Idle;
    }
}
