use std::rc::Rc;

use log::debug;

use super::table::{RouteMeta, FALLBACK_TITLE};
use crate::analytics::Analytics;
use crate::host::Document;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavigationKind {
    /// First render after page load.
    Initial,
    /// A history entry not seen before: link click, push or replace.
    Push,
    /// Return to an entry settled earlier (browser back/forward).
    Traverse,
}

/// One completed transition, handed to the post-navigation hook.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationEvent {
    pub full_path: String,
    pub kind: NavigationKind,
    /// Metadata of the matched route, `None` when nothing matched.
    pub meta: Option<RouteMeta>,
}

impl NavigationEvent {
    pub fn title(&self) -> &str {
        self.meta
            .as_ref()
            .map(RouteMeta::title_or_fallback)
            .unwrap_or(FALLBACK_TITLE)
    }
}

/// Runs after every settled navigation: page view first, then the title.
#[derive(Clone)]
pub struct NavigationHook {
    analytics: Analytics,
    document: Rc<dyn Document>,
}

impl NavigationHook {
    pub fn new(analytics: Analytics, document: Rc<dyn Document>) -> Self {
        Self {
            analytics,
            document,
        }
    }

    pub fn after_each(&self, event: &NavigationEvent) {
        self.analytics.track_page_view(&event.full_path);
        self.document.set_title(event.title());
        debug!("Navigated to {} ({:?})", event.full_path, event.kind);
    }
}
