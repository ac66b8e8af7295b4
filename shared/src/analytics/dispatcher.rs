use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use log::debug;
use serde_json::{json, Value};

use super::command::{params, EventParams, GtagCommand};
use super::sink::AnalyticsSink;
use crate::config::AnalyticsConfig;
use crate::host::{Document, Scheduler, TimerId};

/// Delay before the engagement click listener is registered.
pub const ENGAGEMENT_DELAY_MS: u32 = 2000;

/// Fire-and-forget analytics dispatcher.
///
/// Every operation silently does nothing when its preconditions are unmet;
/// nothing here can fail or panic into the caller.
#[derive(Clone)]
pub struct Analytics {
    config: Rc<AnalyticsConfig>,
    sink: Rc<dyn AnalyticsSink>,
    document: Rc<dyn Document>,
    scheduler: Rc<dyn Scheduler>,
    initialized: Rc<Cell<bool>>,
    engagement_timer: Rc<Cell<Option<TimerId>>>,
}

impl Analytics {
    pub fn new(
        config: AnalyticsConfig,
        sink: Rc<dyn AnalyticsSink>,
        document: Rc<dyn Document>,
        scheduler: Rc<dyn Scheduler>,
    ) -> Self {
        Self {
            config: Rc::new(config),
            sink,
            document,
            scheduler,
            initialized: Rc::new(Cell::new(false)),
            engagement_timer: Rc::new(Cell::new(None)),
        }
    }

    /// Installs the tracking handle and sends the initial `js`/`config` calls.
    ///
    /// Only the first call on a production build with a measurement id does
    /// anything; later calls are ignored.
    pub fn initialize(&self) {
        let Some(measurement_id) = self.config.active_measurement_id() else {
            debug!("Analytics disabled, skipping initialization");
            return;
        };
        if self.initialized.replace(true) {
            debug!("Analytics already initialized");
            return;
        }

        self.sink.install(&AnalyticsConfig::loader_url(measurement_id));
        self.sink.push(GtagCommand::Js {
            timestamp: self.scheduler.now(),
        });
        self.sink.push(GtagCommand::Config {
            target: measurement_id.to_string(),
            params: Some(params(json!({
                "send_page_view": true,
                "page_path": self.document.location_path(),
            }))),
        });
        if let Some(ads_id) = &self.config.ads_id {
            self.sink.push(GtagCommand::Config {
                target: ads_id.clone(),
                params: None,
            });
        }

        self.schedule_engagement();
        debug!("Analytics initialized for {}", measurement_id);
    }

    /// Registers the one-shot engagement click listener after the delay.
    fn schedule_engagement(&self) {
        let sink = Rc::clone(&self.sink);
        let document = Rc::clone(&self.document);
        let timer = Rc::clone(&self.engagement_timer);

        let id = self.scheduler.set_timeout(
            ENGAGEMENT_DELAY_MS,
            Box::new(move || {
                timer.set(None);
                document.on_next_click(Box::new(move || {
                    sink.push(GtagCommand::event(
                        "user_engagement",
                        params(json!({
                            "event_category": "engagement",
                            "event_label": "click",
                        })),
                    ));
                }));
            }),
        );
        self.engagement_timer.set(Some(id));
    }

    /// Drops the engagement registration if its delay has not elapsed yet.
    pub fn cancel_engagement(&self) {
        if let Some(id) = self.engagement_timer.take() {
            self.scheduler.clear_timeout(id);
            debug!("Engagement tracking cancelled");
        }
    }

    fn is_active(&self) -> bool {
        self.config.enabled && self.sink.is_installed()
    }

    pub fn track_page_view(&self, path: &str) {
        if !self.is_active() {
            return;
        }
        self.sink.push(GtagCommand::event(
            "page_view",
            params(json!({
                "page_path": path,
                "page_title": self.document.title(),
            })),
        ));
    }

    pub fn track_event(&self, name: &str, event_params: EventParams) {
        if !self.is_active() {
            return;
        }
        self.sink.push(GtagCommand::event(name, event_params));
    }

    /// Reports a conversion to `<ads id>/<name>`. Caller params are merged
    /// after `send_to` and may override it.
    pub fn track_conversion(&self, name: &str, conversion_params: EventParams) {
        if !self.is_active() {
            return;
        }
        let Some(ads_id) = &self.config.ads_id else {
            return;
        };

        let mut payload = EventParams::new();
        payload.insert(
            "send_to".to_string(),
            Value::String(format!("{}/{}", ads_id, name)),
        );
        payload.extend(conversion_params);
        self.sink.push(GtagCommand::event("conversion", payload));
    }
}

impl PartialEq for Analytics {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.initialized, &other.initialized)
    }
}

impl fmt::Debug for Analytics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Analytics")
            .field("config", &self.config)
            .field("initialized", &self.initialized.get())
            .finish()
    }
}
