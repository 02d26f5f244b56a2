//! Todo collection before a batch is sent off for roasting.
//!
//! ## Architecture
//!
//! The collector uses the type-state pattern:
//! - `Collector<Editing>` accepts additions and removals.
//! - `submit()` consumes it and yields `Collector<Submitted>` once the list is known to be
//!   non-empty.
//! - `Collector<Submitted>` can only be turned into a [`Handoff`], so a submitted list can no
//!   longer be mutated.
//!
//! Display numbers are always derived from position, so removing an entry renumbers everything
//! after it.

use crate::error::{RoastError, RoastResult};
use crate::handoff::Handoff;
use roaster_types::{NonEmptyText, Todo};
use std::marker::PhantomData;

// ============================================================================
// TYPE-STATE MARKERS
// ============================================================================

/// Marker type: the list is still being edited.
#[derive(Clone, Copy, Debug, Default)]
pub struct Editing;

/// Marker type: the list was submitted and awaits handoff.
#[derive(Clone, Copy, Debug)]
pub struct Submitted;

// ============================================================================
// COLLECTOR
// ============================================================================

/// Ordered list of todos entered by the user.
#[derive(Clone, Debug)]
pub struct Collector<S> {
    todos: Vec<Todo>,
    state: PhantomData<S>,
}

impl Default for Collector<Editing> {
    fn default() -> Self {
        Self::new()
    }
}

impl Collector<Editing> {
    /// Creates an empty collector in the editing state.
    pub fn new() -> Self {
        Self {
            todos: Vec::new(),
            state: PhantomData,
        }
    }

    /// Appends `text` trimmed of surrounding whitespace.
    ///
    /// Returns `true` if an entry was added; blank input is ignored.
    pub fn add(&mut self, text: &str) -> bool {
        match NonEmptyText::new(text) {
            Ok(todo) => {
                self.todos.push(todo);
                true
            }
            Err(_) => false,
        }
    }

    /// Appends every non-blank line of `text`, in order, as one contiguous block.
    ///
    /// Returns the number of entries added.
    pub fn add_bulk(&mut self, text: &str) -> usize {
        let lines = NonEmptyText::from_lines(text);
        let added = lines.len();
        self.todos.extend(lines);
        added
    }

    /// Removes the entry at zero-based `index`.
    ///
    /// Out-of-range indices leave the list untouched and return `None`.
    pub fn remove(&mut self, index: usize) -> Option<Todo> {
        if index < self.todos.len() {
            Some(self.todos.remove(index))
        } else {
            None
        }
    }

    /// Finalises the list.
    ///
    /// # Errors
    /// Returns `RoastError::EmptyBatch` if no todos were collected.
    pub fn submit(self) -> RoastResult<Collector<Submitted>> {
        if self.todos.is_empty() {
            return Err(RoastError::EmptyBatch);
        }
        tracing::debug!("submitting {} todos", self.todos.len());
        Ok(Collector {
            todos: self.todos,
            state: PhantomData,
        })
    }
}

impl Collector<Submitted> {
    /// Hands the submitted list over to the results step.
    pub fn handoff(self) -> Handoff {
        Handoff::new(self.todos)
    }
}

impl<S> Collector<S> {
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Rows as displayed to the user, numbered from 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &str)> + '_ {
        self.todos
            .iter()
            .enumerate()
            .map(|(i, todo)| (i + 1, todo.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts<S>(collector: &Collector<S>) -> Vec<&str> {
        collector.todos().iter().map(NonEmptyText::as_str).collect()
    }

    #[test]
    fn add_trims_and_ignores_blank_input() {
        let mut collector = Collector::new();
        assert!(collector.add("  learn rust  "));
        assert!(!collector.add("   "));
        assert!(!collector.add(""));
        assert_eq!(texts(&collector), vec!["learn rust"]);
    }

    #[test]
    fn add_bulk_drops_blank_lines() {
        let mut collector = Collector::new();
        let added = collector.add_bulk("a\n\nb\n  \nc");
        assert_eq!(added, 3);
        assert_eq!(texts(&collector), vec!["a", "b", "c"]);
    }

    #[test]
    fn add_bulk_appends_after_existing_entries() {
        let mut collector = Collector::new();
        collector.add("first");
        collector.add_bulk(" second \nthird");
        assert_eq!(texts(&collector), vec!["first", "second", "third"]);
    }

    #[test]
    fn remove_shifts_later_entries_and_renumbers() {
        let mut collector = Collector::new();
        collector.add_bulk("x\ny\nz");

        let removed = collector.remove(1).expect("index 1 exists");
        assert_eq!(removed.as_str(), "y");
        assert_eq!(texts(&collector), vec!["x", "z"]);

        let rows: Vec<(usize, &str)> = collector.numbered().collect();
        assert_eq!(rows, vec![(1, "x"), (2, "z")]);
    }

    #[test]
    fn remove_out_of_range_is_a_no_op() {
        let mut collector = Collector::new();
        collector.add("only");
        assert!(collector.remove(5).is_none());
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn duplicates_are_allowed() {
        let mut collector = Collector::new();
        collector.add("taxes");
        collector.add("taxes");
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn submit_rejects_empty_list() {
        let err = Collector::new().submit().unwrap_err();
        assert!(matches!(err, RoastError::EmptyBatch));
    }

    #[test]
    fn submit_hands_off_full_list_in_order() {
        let mut collector = Collector::new();
        collector.add_bulk("gym\ntaxes\ngym");
        let handoff = collector.submit().unwrap().handoff();
        let todos: Vec<String> = handoff.into_todos().into_iter().map(String::from).collect();
        assert_eq!(todos, vec!["gym", "taxes", "gym"]);
    }
}
