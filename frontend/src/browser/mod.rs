//! `web_sys` implementations of the host capabilities.

pub mod document;
pub mod gtag;
pub mod history;
pub mod scroll;

pub use document::{BrowserDocument, BrowserScheduler};
pub use gtag::GtagSink;
