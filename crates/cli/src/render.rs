//! Plain-text rendering of the collector and the results view.

use roaster_core::{Collector, ResultsView, ViewStatus};
use std::fmt::Write;

pub fn todo_list<S>(collector: &Collector<S>) -> String {
    let mut out = format!("Your Todos ({})\n", collector.len());
    for (number, todo) in collector.numbered() {
        let _ = writeln!(out, "{number:>3}. {todo}");
    }
    out
}

pub fn results(view: &ResultsView) -> String {
    match view.status() {
        ViewStatus::Loading => {
            let mut out = String::from(
                "Roasting Your Todos\nGetting ready to deliver some brutal truths...\n",
            );
            for card in view.cards() {
                let _ = writeln!(out, "{:>3}. {}  ...", card.index + 1, card.todo);
            }
            out
        }
        ViewStatus::Ready => {
            let mut out = format!("Roasted {} todos\n", view.cards().len());
            for card in view.cards() {
                let _ = writeln!(out, "\n{:>3}. {}", card.index + 1, card.todo);
                match card.reaction {
                    Some(emoji) => {
                        let _ = writeln!(out, "     {} \"{}\"", emoji, card.roast);
                    }
                    None => {
                        let _ = writeln!(out, "     \"{}\"", card.roast);
                    }
                }
            }
            out
        }
        ViewStatus::Failed => format!(
            "Oops!\n{}\nTry again: roaster roast <todo>...\n",
            view.error_message().unwrap_or_default()
        ),
    }
}
