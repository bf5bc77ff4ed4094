//! Clipboard access and transient copy feedback
//!
//! Wraps the system clipboard behind a trait seam so the session and tests
//! never touch the platform API directly, and tracks the per-target
//! "Disalin!"/"Gagal" indicator that expires after a fixed window.

use crate::{Error, Result};
use std::collections::HashMap;
use std::time::{Duration, Instant};

pub trait ClipboardService: Send + Sync {
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Writes through the OS clipboard.
pub struct SystemClipboard;

impl ClipboardService for SystemClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        cli_clipboard::set_contents(text.to_string())
            .map_err(|e| Error::Clipboard(e.to_string()))
    }
}

/// In-memory clipboard for tests. Records every write and can be scripted
/// to fail.
#[derive(Clone, Default)]
pub struct MockClipboard {
    contents: std::sync::Arc<std::sync::Mutex<Vec<String>>>,
    fail: bool,
}

impl MockClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn writes(&self) -> Vec<String> {
        self.contents.lock().unwrap().clone()
    }
}

impl ClipboardService for MockClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        if self.fail {
            return Err(Error::Clipboard("Scripted clipboard failure".to_string()));
        }
        self.contents.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

/// Outcome of the most recent copy attempt for one target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyStatus {
    Copied,
    Failed,
}

impl CopyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CopyStatus::Copied => "Disalin!",
            CopyStatus::Failed => "Gagal",
        }
    }
}

/// How long a copy indicator stays visible.
pub const COPY_FEEDBACK_WINDOW: Duration = Duration::from_secs(2);

/// Per-target transient copy indicators. Each target id is tracked
/// independently; a status silently disappears once its window elapses.
#[derive(Debug, Default)]
pub struct CopyFeedback {
    entries: HashMap<String, (CopyStatus, Instant)>,
    window: Option<Duration>,
}

impl CopyFeedback {
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the display window; used by tests to avoid real 2s waits.
    pub fn with_window(window: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            window: Some(window),
        }
    }

    fn window(&self) -> Duration {
        self.window.unwrap_or(COPY_FEEDBACK_WINDOW)
    }

    pub fn note(&mut self, target_id: &str, status: CopyStatus) {
        self.entries
            .insert(target_id.to_string(), (status, Instant::now()));
    }

    /// Current indicator for a target, or `None` once the window has passed.
    pub fn status(&self, target_id: &str) -> Option<CopyStatus> {
        let (status, at) = self.entries.get(target_id)?;
        if at.elapsed() < self.window() {
            Some(*status)
        } else {
            None
        }
    }
}
