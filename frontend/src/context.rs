use std::rc::Rc;

use shared::analytics::Analytics;
use shared::routing::Router;

use crate::views::PageContent;

/// Application-wide handles provided to every component.
#[derive(Clone)]
pub struct AppContext {
    pub analytics: Analytics,
    pub router: Rc<Router<PageContent>>,
}

impl PartialEq for AppContext {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.router, &other.router) && self.analytics == other.analytics
    }
}
