use std::cell::RefCell;
use std::collections::HashSet;

use log::debug;

use super::hooks::{NavigationEvent, NavigationHook, NavigationKind};
use super::location::{strip_base, Location};
use super::scroll::{scroll_behavior, EntryKey, ScrollMemory, ScrollPosition, ScrollTarget};
use super::table::{RouteDefinition, RouteTable};

struct CurrentEntry {
    full_path: String,
    entry: EntryKey,
}

/// Route table plus the state carried between navigations.
pub struct Router<V> {
    table: RouteTable<V>,
    base: String,
    hook: NavigationHook,
    scroll: RefCell<ScrollMemory>,
    visited: RefCell<HashSet<EntryKey>>,
    current: RefCell<Option<CurrentEntry>>,
}

impl<V> Router<V> {
    pub fn new(table: RouteTable<V>, base: &str, hook: NavigationHook) -> Self {
        Self {
            table,
            base: base.to_string(),
            hook,
            scroll: RefCell::new(ScrollMemory::default()),
            visited: RefCell::new(HashSet::new()),
            current: RefCell::new(None),
        }
    }

    pub fn table(&self) -> &RouteTable<V> {
        &self.table
    }

    /// Full path (without base) of the last settled navigation.
    pub fn current_path(&self) -> Option<String> {
        self.current
            .borrow()
            .as_ref()
            .map(|current| current.full_path.clone())
    }

    /// Resolves a browser path, which may include base, query and fragment.
    pub fn resolve(&self, browser_path: &str) -> Option<&RouteDefinition<V>> {
        let location = Location::parse(&strip_base(browser_path, &self.base));
        self.table.resolve(&location.path)
    }

    /// Starts a navigation to the history entry `entry`.
    ///
    /// Returning to an entry settled before counts as back/forward.
    /// Nothing observable happens until the navigation is settled.
    pub fn navigate(&self, browser_path: &str, entry: EntryKey) -> PendingNavigation<'_, V> {
        let location = Location::parse(&strip_base(browser_path, &self.base));
        let route = self.table.resolve(&location.path);
        let kind = if self.current.borrow().is_none() {
            NavigationKind::Initial
        } else if self.visited.borrow().contains(&entry) {
            NavigationKind::Traverse
        } else {
            NavigationKind::Push
        };
        debug!(
            "Navigation to {} pending ({:?}), matched {:?}",
            location.full_path(),
            kind,
            route.map(|r| r.name)
        );
        PendingNavigation {
            router: self,
            location,
            route,
            entry,
            kind,
        }
    }
}

/// A resolved navigation whose hook has not run yet.
#[must_use = "a pending navigation does nothing until settled"]
pub struct PendingNavigation<'a, V> {
    router: &'a Router<V>,
    location: Location,
    route: Option<&'a RouteDefinition<V>>,
    entry: EntryKey,
    kind: NavigationKind,
}

impl<'a, V> PendingNavigation<'a, V> {
    pub fn route(&self) -> Option<&'a RouteDefinition<V>> {
        self.route
    }

    pub fn kind(&self) -> NavigationKind {
        self.kind
    }

    /// Completes the navigation: remembers where the previous entry was
    /// scrolled to, fires the post-navigation hook and returns where to
    /// scroll next.
    pub fn settle(self, leaving_scroll: ScrollPosition) -> ScrollTarget {
        let full_path = self.location.full_path();
        let previous = self.router.current.replace(Some(CurrentEntry {
            full_path: full_path.clone(),
            entry: self.entry.clone(),
        }));
        if let Some(previous) = previous {
            self.router
                .scroll
                .borrow_mut()
                .remember(&previous.entry, leaving_scroll);
        }
        self.router.visited.borrow_mut().insert(self.entry.clone());

        self.router.hook.after_each(&NavigationEvent {
            full_path,
            kind: self.kind,
            meta: self.route.map(|route| route.meta.clone()),
        });

        let saved = match self.kind {
            NavigationKind::Traverse => self.router.scroll.borrow().recall(&self.entry),
            NavigationKind::Initial | NavigationKind::Push => None,
        };
        scroll_behavior(&self.location, saved)
    }
}
