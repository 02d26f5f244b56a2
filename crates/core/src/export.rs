//! Sharing a received batch: plain-text download, clipboard text and a pre-filled tweet.
//!
//! All of these work on data already held by the results view and never call the roast service.

use crate::constants::{EXPORT_FILE_PREFIX, TWEET_INTENT_URL};
use crate::error::{RoastError, RoastResult};
use crate::results::RoastBatch;
use chrono::NaiveDate;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use std::fs;
use std::path::{Path, PathBuf};

/// Characters left unescaped by JavaScript's `encodeURIComponent`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

impl RoastBatch {
    /// Numbered list for the `.txt` download.
    ///
    /// ```text
    /// 1. learn rust
    ///    "roast"
    /// ```
    pub fn export_text(&self) -> String {
        self.entries()
            .iter()
            .enumerate()
            .map(|(i, e)| format!("{}. {}\n   \"{}\"", i + 1, e.todo, e.roast))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// `todo: "roast"` pairs separated by blank lines.
    pub fn clipboard_text(&self) -> String {
        self.entries()
            .iter()
            .map(|e| format!("{}: \"{}\"", e.todo, e.roast))
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    pub fn tweet_text(&self) -> String {
        let quoted = self
            .entries()
            .iter()
            .map(|e| format!("\"{}\"", e.roast))
            .collect::<Vec<_>>()
            .join("\n\n");
        format!(
            "Just got roasted on {} todos! 🔥 Here's the brutal truth about my procrastination:\n\n{}\n\nGo get roasted too →",
            self.len(),
            quoted
        )
    }

    /// Compose-a-tweet link carrying [`RoastBatch::tweet_text`].
    pub fn tweet_url(&self) -> String {
        format!(
            "{}?text={}",
            TWEET_INTENT_URL,
            utf8_percent_encode(&self.tweet_text(), URI_COMPONENT)
        )
    }

    /// Writes [`RoastBatch::export_text`] into `dir` under [`export_filename`].
    pub fn write_export(&self, dir: &Path, date: NaiveDate) -> RoastResult<PathBuf> {
        let path = dir.join(export_filename(date, "txt"));
        fs::write(&path, self.export_text()).map_err(RoastError::Export)?;
        tracing::info!("exported {} roasts to {}", self.len(), path.display());
        Ok(path)
    }
}

/// `roasted-todos-YYYY-MM-DD.<extension>`
pub fn export_filename(date: NaiveDate, extension: &str) -> String {
    format!("{}-{}.{}", EXPORT_FILE_PREFIX, date.format("%Y-%m-%d"), extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use roaster_types::NonEmptyText;
    use tempfile::TempDir;

    fn batch() -> RoastBatch {
        RoastBatch::new(
            vec![
                NonEmptyText::new("learn rust").unwrap(),
                NonEmptyText::new("call mom").unwrap(),
            ],
            vec!["The borrow checker is waiting.".into(), "She knows.".into()],
        )
    }

    #[test]
    fn export_text_numbers_entries() {
        assert_eq!(
            batch().export_text(),
            "1. learn rust\n   \"The borrow checker is waiting.\"\n\n2. call mom\n   \"She knows.\""
        );
    }

    #[test]
    fn clipboard_text_pairs_todo_and_roast() {
        assert_eq!(
            batch().clipboard_text(),
            "learn rust: \"The borrow checker is waiting.\"\n\ncall mom: \"She knows.\""
        );
    }

    #[test]
    fn tweet_url_is_fully_encoded() {
        let url = batch().tweet_url();
        assert!(url.starts_with(
            "https://twitter.com/intent/tweet?text=Just%20got%20roasted%20on%202%20todos!%20%F0%9F%94%A5%20Here's%20"
        ));
        assert!(url.contains("%22She%20knows.%22"));
        assert!(url.contains("%0A%0A"));
        assert!(url.ends_with("too%20%E2%86%92"));
    }

    #[test]
    fn export_filename_uses_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(export_filename(date, "txt"), "roasted-todos-2024-03-09.txt");
    }

    #[test]
    fn write_export_creates_dated_file() {
        let temp = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();

        let path = batch().write_export(temp.path(), date).unwrap();
        assert_eq!(path, temp.path().join("roasted-todos-2024-03-09.txt"));
        assert_eq!(fs::read_to_string(path).unwrap(), batch().export_text());
    }

    #[test]
    fn write_export_reports_missing_directory() {
        let temp = TempDir::new().unwrap();
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let err = batch()
            .write_export(&temp.path().join("missing"), date)
            .unwrap_err();
        assert!(matches!(err, RoastError::Export(_)));
    }
}
