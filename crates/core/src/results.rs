//! Results view state for one submitted batch.
//!
//! Every card starts out loading. The server answers with the whole batch at once, so `resolve`
//! fills all cards in one step; there is no per-card progress.

use crate::constants::{MISSING_ROAST, REACTIONS, RESULTS_ERROR_MESSAGE};
use crate::error::{RoastError, RoastResult};
use roaster_types::Todo;
use serde::Serialize;

/// A todo paired with the roast produced for it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoastEntry {
    pub todo: String,
    pub roast: String,
}

/// Ordered todo/roast pairs for one submission. Never shorter than the submitted todo list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoastBatch {
    entries: Vec<RoastEntry>,
}

impl RoastBatch {
    /// Pairs `todos[i]` with `roasts[i]`.
    ///
    /// Missing or empty roasts become [`MISSING_ROAST`]; surplus roasts are ignored.
    pub fn new(todos: Vec<Todo>, roasts: Vec<String>) -> Self {
        let mut roasts = roasts.into_iter();
        let entries = todos
            .into_iter()
            .map(|todo| RoastEntry {
                todo: todo.into_inner(),
                roast: roasts
                    .next()
                    .filter(|r| !r.is_empty())
                    .unwrap_or_else(|| MISSING_ROAST.to_string()),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[RoastEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewStatus {
    Loading,
    Ready,
    Failed,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoastCard {
    /// Zero-based position; displayed as `index + 1`.
    pub index: usize,
    pub todo: String,
    pub roast: String,
    pub loading: bool,
    pub reaction: Option<&'static str>,
}

#[derive(Clone, Debug)]
pub struct ResultsView {
    todos: Vec<Todo>,
    cards: Vec<RoastCard>,
    status: ViewStatus,
}

impl ResultsView {
    /// A view with one loading card per todo.
    pub fn pending(todos: Vec<Todo>) -> Self {
        let cards = todos
            .iter()
            .enumerate()
            .map(|(index, todo)| RoastCard {
                index,
                todo: todo.to_string(),
                roast: String::new(),
                loading: true,
                reaction: None,
            })
            .collect();
        Self {
            todos,
            cards,
            status: ViewStatus::Loading,
        }
    }

    /// A view that could not even start, e.g. because the handoff was missing.
    pub fn failed() -> Self {
        Self {
            todos: Vec::new(),
            cards: Vec::new(),
            status: ViewStatus::Failed,
        }
    }

    /// Fills every card from the server response.
    pub fn resolve(&mut self, roasts: Vec<String>) {
        let batch = RoastBatch::new(self.todos.clone(), roasts);
        for (card, entry) in self.cards.iter_mut().zip(batch.entries) {
            card.roast = entry.roast;
            card.loading = false;
        }
        self.status = ViewStatus::Ready;
    }

    /// Switches to the error state.
    pub fn fail(&mut self) {
        self.status = ViewStatus::Failed;
    }

    pub fn status(&self) -> ViewStatus {
        self.status
    }

    pub fn cards(&self) -> &[RoastCard] {
        &self.cards
    }

    pub fn error_message(&self) -> Option<&'static str> {
        (self.status == ViewStatus::Failed).then_some(RESULTS_ERROR_MESSAGE)
    }

    /// The received batch, available once the view is ready.
    pub fn batch(&self) -> Option<RoastBatch> {
        if self.status != ViewStatus::Ready {
            return None;
        }
        Some(RoastBatch {
            entries: self
                .cards
                .iter()
                .map(|card| RoastEntry {
                    todo: card.todo.clone(),
                    roast: card.roast.clone(),
                })
                .collect(),
        })
    }

    /// Toggles `emoji` on the card at zero-based `index`.
    ///
    /// Picking the emoji the card already carries clears it. Returns the card's new reaction.
    ///
    /// # Errors
    /// Returns `RoastError::InvalidInput` if the index is out of range or the emoji is not one of
    /// [`REACTIONS`].
    pub fn react(&mut self, index: usize, emoji: &str) -> RoastResult<Option<&'static str>> {
        let emoji = REACTIONS
            .iter()
            .copied()
            .find(|r| *r == emoji)
            .ok_or_else(|| RoastError::InvalidInput(format!("unsupported reaction {emoji:?}")))?;
        let card = self
            .cards
            .get_mut(index)
            .ok_or_else(|| {
                RoastError::InvalidInput(format!("no roast at position {}", index + 1))
            })?;

        card.reaction = if card.reaction == Some(emoji) {
            None
        } else {
            Some(emoji)
        };
        Ok(card.reaction)
    }
}
