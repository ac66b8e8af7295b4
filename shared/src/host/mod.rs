//! Capabilities the core needs from its host environment.
//!
//! The browser build implements these over `web_sys`; tests use the
//! in-memory versions from [`memory`].

use chrono::{DateTime, Utc};

pub mod memory;

pub use memory::{ManualScheduler, MemoryDocument};

/// Identifier of a scheduled timer, used to cancel it before it fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub i32);

/// The page the application runs in.
pub trait Document {
    /// Path portion of the current URL, e.g. `/about`.
    fn location_path(&self) -> String;

    fn title(&self) -> String;

    fn set_title(&self, title: &str);

    /// Registers `handler` for the next click anywhere in the document.
    ///
    /// The listener is removed once it has fired.
    fn on_next_click(&self, handler: Box<dyn FnOnce()>);
}

/// Wall clock and one-shot timers.
pub trait Scheduler {
    fn now(&self) -> DateTime<Utc>;

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId;

    /// Cancels a pending timer. Unknown or already fired ids are ignored.
    fn clear_timeout(&self, id: TimerId);
}
