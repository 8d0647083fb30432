//! System clipboard access through `arboard`.
use crate::error::{CrateError, Result};
use arboard::Clipboard;
use log::warn;
use std::time::Duration;

/// How the document ended up on the clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Stored as `text/html`, pasting keeps the italics.
    Html,
    /// Only the raw markup could be stored.
    PlainText,
}

/// Destination for copied content.
pub trait ClipboardSink {
    fn store_html(&mut self, html: &str) -> std::result::Result<(), String>;
    fn store_text(&mut self, text: &str) -> std::result::Result<(), String>;
}

/// The desktop clipboard. On Linux each write blocks until another client takes
/// the selection or `hold` elapses, since the content disappears with this process.
pub struct SystemClipboard {
    inner: Clipboard,
    #[cfg_attr(not(target_os = "linux"), allow(dead_code))]
    hold: Duration,
}

impl SystemClipboard {
    pub fn open(hold: Duration) -> Result<Self> {
        let inner = Clipboard::new()
            .map_err(|e| CrateError::Clipboard(format!("Failed to access clipboard: {}", e)))?;
        Ok(Self { inner, hold })
    }
}

#[cfg(target_os = "linux")]
impl ClipboardSink for SystemClipboard {
    fn store_html(&mut self, html: &str) -> std::result::Result<(), String> {
        use arboard::SetExtLinux;
        let deadline = std::time::Instant::now() + self.hold;
        self.inner
            .set()
            .wait_until(deadline)
            .html(html, Some(html))
            .map_err(|e| e.to_string())
    }

    fn store_text(&mut self, text: &str) -> std::result::Result<(), String> {
        use arboard::SetExtLinux;
        let deadline = std::time::Instant::now() + self.hold;
        self.inner
            .set()
            .wait_until(deadline)
            .text(text)
            .map_err(|e| e.to_string())
    }
}

#[cfg(not(target_os = "linux"))]
impl ClipboardSink for SystemClipboard {
    fn store_html(&mut self, html: &str) -> std::result::Result<(), String> {
        self.inner.set_html(html, Some(html)).map_err(|e| e.to_string())
    }

    fn store_text(&mut self, text: &str) -> std::result::Result<(), String> {
        self.inner.set_text(text).map_err(|e| e.to_string())
    }
}

/// Copies `html` to the desktop clipboard, keeping it served for up to `hold` on Linux.
pub fn copy_html(html: &str, hold: Duration) -> Result<CopyOutcome> {
    let mut clipboard = SystemClipboard::open(hold)?;
    copy_html_to(&mut clipboard, html)
}

/// Stores `html` as rich text, falling back to plain text when the sink refuses HTML.
pub fn copy_html_to(sink: &mut dyn ClipboardSink, html: &str) -> Result<CopyOutcome> {
    match sink.store_html(html) {
        Ok(()) => Ok(CopyOutcome::Html),
        Err(html_error) => {
            warn!(
                "HTML clipboard write failed ({}); copying raw markup instead",
                html_error
            );
            sink.store_text(html).map_err(|e| {
                CrateError::Clipboard(format!("Failed to copy to clipboard: {}", e))
            })?;
            Ok(CopyOutcome::PlainText)
        }
    }
}
