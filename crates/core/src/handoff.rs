//! Carrier for a submitted todo list between the collector and the results step.
//!
//! A `Handoff` is written once (by [`Collector::handoff`](crate::Collector::handoff)) and read
//! once (by consuming it). It can also be serialised to the JSON array of strings used by earlier
//! clients under the session key `todos`, which lets the CLI split collecting and roasting across
//! two invocations.

use crate::error::{RoastError, RoastResult};
use roaster_types::Todo;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Handoff {
    todos: Vec<Todo>,
}

impl Handoff {
    pub(crate) fn new(todos: Vec<Todo>) -> Self {
        Self { todos }
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Consumes the handoff, yielding the todos in submission order.
    pub fn into_todos(self) -> Vec<Todo> {
        self.todos
    }

    /// Encodes the list as a JSON array of strings.
    pub fn to_json(&self) -> RoastResult<String> {
        serde_json::to_string(&self.todos).map_err(RoastError::Handoff)
    }

    /// Decodes a list previously written by [`Handoff::to_json`].
    ///
    /// # Errors
    /// - `RoastError::Handoff` if the input is not a JSON array of non-blank strings.
    /// - `RoastError::EmptyBatch` if the array is empty.
    pub fn from_json(input: &str) -> RoastResult<Self> {
        let todos: Vec<Todo> = serde_json::from_str(input).map_err(RoastError::Handoff)?;
        if todos.is_empty() {
            return Err(RoastError::EmptyBatch);
        }
        Ok(Self { todos })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Collector;

    #[test]
    fn json_round_trip_keeps_order() {
        let mut collector = Collector::new();
        collector.add_bulk("call mom\nfix that bug");
        let handoff = collector.submit().unwrap().handoff();

        let json = handoff.to_json().unwrap();
        assert_eq!(json, r#"["call mom","fix that bug"]"#);
        assert_eq!(Handoff::from_json(&json).unwrap(), handoff);
    }

    #[test]
    fn from_json_rejects_malformed_and_empty_input() {
        assert!(matches!(
            Handoff::from_json("{\"todos\":[]}"),
            Err(RoastError::Handoff(_))
        ));
        assert!(matches!(
            Handoff::from_json("[\"ok\", \"  \"]"),
            Err(RoastError::Handoff(_))
        ));
        assert!(matches!(Handoff::from_json("[]"), Err(RoastError::EmptyBatch)));
    }
}
