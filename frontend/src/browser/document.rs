use chrono::{DateTime, Utc};
use gloo::events::EventListener;
use gloo_timers::callback::Timeout;
use shared::host::{Document, Scheduler, TimerId};

/// The live `window.document`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserDocument;

fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|window| window.document())
}

impl Document for BrowserDocument {
    fn location_path(&self) -> String {
        web_sys::window()
            .and_then(|window| window.location().pathname().ok())
            .unwrap_or_else(|| "/".to_string())
    }

    fn title(&self) -> String {
        document().map(|doc| doc.title()).unwrap_or_default()
    }

    fn set_title(&self, title: &str) {
        if let Some(doc) = document() {
            doc.set_title(title);
        }
    }

    fn on_next_click(&self, handler: Box<dyn FnOnce()>) {
        if let Some(doc) = document() {
            EventListener::once(&doc, "click", move |_| handler()).forget();
        }
    }
}

/// Browser clock and `setTimeout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserScheduler;

impl Scheduler for BrowserScheduler {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> TimerId {
        // forget() hands back the setTimeout handle so it can still be cleared
        let handle = Timeout::new(delay_ms, task).forget();
        TimerId(handle.as_f64().map(|id| id as i32).unwrap_or_default())
    }

    fn clear_timeout(&self, id: TimerId) {
        if let Some(window) = web_sys::window() {
            window.clear_timeout_with_handle(id.0);
        }
    }
}
