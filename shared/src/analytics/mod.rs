//! Bridge between application events and Google Analytics / Google Ads.

pub mod command;
pub mod dispatcher;
pub mod sink;

pub use command::{params, EventParams, GtagArg, GtagCommand};
pub use dispatcher::{Analytics, ENGAGEMENT_DELAY_MS};
pub use sink::{AnalyticsSink, RecordingSink};
