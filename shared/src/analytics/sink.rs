use std::cell::RefCell;

use super::command::GtagCommand;

/// Owner of the tracking handle (`dataLayer` + `gtag` in the browser).
pub trait AnalyticsSink {
    /// Whether the tracking handle exists.
    fn is_installed(&self) -> bool;

    /// Creates the tracking handle if absent and injects the loader script.
    fn install(&self, loader_url: &str);

    /// Appends one call to the handle's queue.
    fn push(&self, command: GtagCommand);
}

/// Sink that keeps everything in memory, for tests and headless runs.
#[derive(Debug, Default)]
pub struct RecordingSink {
    injected_scripts: RefCell<Vec<String>>,
    commands: RefCell<Vec<GtagCommand>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn injected_scripts(&self) -> Vec<String> {
        self.injected_scripts.borrow().clone()
    }

    pub fn commands(&self) -> Vec<GtagCommand> {
        self.commands.borrow().clone()
    }

    /// Recorded `event` calls with the given name.
    pub fn events_named(&self, name: &str) -> Vec<GtagCommand> {
        self.commands
            .borrow()
            .iter()
            .filter(|c| c.event_name() == Some(name))
            .cloned()
            .collect()
    }
}

impl AnalyticsSink for RecordingSink {
    fn is_installed(&self) -> bool {
        !self.injected_scripts.borrow().is_empty()
    }

    fn install(&self, loader_url: &str) {
        self.injected_scripts.borrow_mut().push(loader_url.to_string());
    }

    fn push(&self, command: GtagCommand) {
        self.commands.borrow_mut().push(command);
    }
}
