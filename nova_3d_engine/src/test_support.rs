//! Shared helpers for unit tests (no GPU, no window)

use std::sync::{Arc, Mutex};
use glam::Vec2;
use crate::input::{CameraAction, CameraInput};
use crate::log::{Logger, LogEntry};

/// Logger that stores every entry for later inspection
pub struct CapturingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl CapturingLogger {
    pub fn new() -> (Self, Arc<Mutex<Vec<LogEntry>>>) {
        let entries = Arc::new(Mutex::new(Vec::new()));
        (Self { entries: entries.clone() }, entries)
    }

    /// Entries logged under `source`, in order
    pub fn from_source(entries: &Arc<Mutex<Vec<LogEntry>>>, source: &str) -> Vec<LogEntry> {
        entries
            .lock()
            .unwrap()
            .iter()
            .filter(|e| e.source == source)
            .cloned()
            .collect()
    }
}

impl Logger for CapturingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

/// Scripted input for one frame
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    pub actions: Vec<CameraAction>,
    pub look_held: bool,
    pub mouse_delta: Vec2,
}

impl ScriptedInput {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn holding(actions: &[CameraAction]) -> Self {
        Self { actions: actions.to_vec(), ..Self::default() }
    }

    pub fn look(dx: f32, dy: f32) -> Self {
        Self { look_held: true, mouse_delta: Vec2::new(dx, dy), ..Self::default() }
    }
}

impl CameraInput for ScriptedInput {
    fn is_action_down(&self, action: CameraAction) -> bool {
        self.actions.contains(&action)
    }

    fn is_look_held(&self) -> bool {
        self.look_held
    }

    fn mouse_delta(&self) -> Vec2 {
        self.mouse_delta
    }
}
