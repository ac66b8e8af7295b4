use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::location::Location;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScrollPosition {
    pub left: f64,
    pub top: f64,
}

impl ScrollPosition {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }
}

/// Where the page should scroll once a navigation has settled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScrollTarget {
    /// Restore a remembered position exactly.
    Restore(ScrollPosition),
    /// Scroll the element with this id into view.
    Element(String),
    Top,
}

/// Saved position first, then the URL fragment, then the top of the page.
pub fn scroll_behavior(to: &Location, saved: Option<ScrollPosition>) -> ScrollTarget {
    if let Some(position) = saved {
        ScrollTarget::Restore(position)
    } else if let Some(id) = to.fragment_id() {
        ScrollTarget::Element(id)
    } else {
        ScrollTarget::Top
    }
}

/// Identifies one browser history entry. Two entries for the same path get
/// different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryKey(pub String);

impl From<&str> for EntryKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

/// Scroll positions of history entries that were navigated away from.
#[derive(Debug, Default)]
pub struct ScrollMemory {
    positions: HashMap<EntryKey, ScrollPosition>,
}

impl ScrollMemory {
    pub fn remember(&mut self, entry: &EntryKey, position: ScrollPosition) {
        self.positions.insert(entry.clone(), position);
    }

    pub fn recall(&self, entry: &EntryKey) -> Option<ScrollPosition> {
        self.positions.get(entry).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_saved_position_wins_over_fragment() {
        let saved = ScrollPosition::new(0.0, 640.0);
        assert_eq!(
            scroll_behavior(&Location::parse("/about#team"), Some(saved)),
            ScrollTarget::Restore(saved)
        );
    }

    #[test]
    fn test_fragment_scrolls_to_element() {
        assert_eq!(
            scroll_behavior(&Location::parse("/anywhere#section"), None),
            ScrollTarget::Element("section".to_string())
        );
    }

    #[test]
    fn test_defaults_to_top() {
        assert_eq!(
            scroll_behavior(&Location::parse("/contact?x=1"), None),
            ScrollTarget::Top
        );
    }

    #[test]
    fn test_memory_keeps_latest_position_per_entry() {
        let mut memory = ScrollMemory::default();
        let first = EntryKey::from("1");
        let second = EntryKey::from("2");
        memory.remember(&first, ScrollPosition::new(0.0, 100.0));
        memory.remember(&first, ScrollPosition::new(0.0, 250.0));
        memory.remember(&second, ScrollPosition::new(0.0, 900.0));

        assert_eq!(memory.recall(&first), Some(ScrollPosition::new(0.0, 250.0)));
        assert_eq!(memory.recall(&second), Some(ScrollPosition::new(0.0, 900.0)));
        assert_eq!(memory.recall(&EntryKey::from("3")), None);
    }
}
