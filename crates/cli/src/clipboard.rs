//! System clipboard access for the `--copy` action.

use arboard::Clipboard;

#[derive(Debug, thiserror::Error)]
pub enum ClipboardError {
    #[error("clipboard is unavailable: {0}")]
    Unavailable(#[source] arboard::Error),
    #[error("failed to set clipboard text: {0}")]
    Write(#[source] arboard::Error),
}

/// Replaces the clipboard contents with `text`.
///
/// Headless machines usually have no clipboard, which surfaces as `ClipboardError::Unavailable`.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard.set_text(text).map_err(ClipboardError::Write)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_name_the_failing_step() {
        let err = ClipboardError::Unavailable(arboard::Error::ClipboardNotSupported);
        assert!(err.to_string().starts_with("clipboard is unavailable: "));

        let err = ClipboardError::Write(arboard::Error::ContentNotAvailable);
        assert!(err.to_string().starts_with("failed to set clipboard text: "));
    }
}
