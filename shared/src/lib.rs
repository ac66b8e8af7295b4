pub mod analytics;
pub mod config;
pub mod error;
pub mod host;
pub mod routing;

// Re-export commonly used items
pub use error::{Result, SharedError};

pub use analytics::{params, Analytics, AnalyticsSink, EventParams, GtagCommand, RecordingSink};
pub use config::{AnalyticsConfig, AppConfig};
pub use host::{Document, ManualScheduler, MemoryDocument, Scheduler, TimerId};
pub use routing::{
    app_routes, EntryKey, NavigationEvent, NavigationHook, NavigationKind, RouteMeta, RouteTable, Router,
    ScrollPosition, ScrollTarget, FALLBACK_TITLE,
};
