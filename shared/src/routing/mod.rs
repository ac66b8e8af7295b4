//! Route table, scroll policy and the post-navigation hook.

pub mod hooks;
pub mod location;
pub mod router;
pub mod scroll;
pub mod table;

pub use hooks::{NavigationEvent, NavigationHook, NavigationKind};
pub use location::{strip_base, Location};
pub use router::{PendingNavigation, Router};
pub use scroll::{scroll_behavior, EntryKey, ScrollMemory, ScrollPosition, ScrollTarget};
pub use table::{
    app_routes, LazyView, RouteDefinition, RouteMeta, RouteTable, ABOUT_TITLE, CONTACT_TITLE,
    FALLBACK_TITLE, HOME_TITLE,
};
