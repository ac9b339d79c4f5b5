use std::path::PathBuf;
use std::time::Instant;

use crossterm::event::{KeyCode, KeyModifiers};
use tokio::sync::watch;

use crate::types::Snapshot;

/// Presentation state. Holds no usage logic, only the latest published
/// snapshot and what the status bar needs.
pub struct App {
    pub snapshot: Snapshot,
    pub session_start: Instant,
    /// Where the running total is persisted, shown in the status bar.
    pub data_file: PathBuf,
}

impl App {
    pub fn new(snapshot: Snapshot, data_file: PathBuf) -> Self {
        Self {
            snapshot,
            session_start: Instant::now(),
            data_file,
        }
    }

    /// Pick up the newest snapshot, if the poller published one.
    pub fn update(&mut self, snapshots: &mut watch::Receiver<Snapshot>) {
        if snapshots.has_changed().unwrap_or(false) {
            self.snapshot = snapshots.borrow_and_update().clone();
        }
    }

    /// Handle a key press. Returns true if the widget should close.
    pub fn handle_key(&self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('c') | KeyCode::Char('C') if modifiers.contains(KeyModifiers::CONTROL) => {
                true
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => true,
            _ => false,
        }
    }
}
