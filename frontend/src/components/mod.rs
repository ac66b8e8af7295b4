pub mod footer;
pub mod nav;
pub mod navigation_tracker;
