use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

/// Free-form parameters attached to a gtag call.
pub type EventParams = Map<String, Value>;

/// One call into the tracking handle, `gtag(command, target, payload?)`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "command", rename_all = "lowercase")]
pub enum GtagCommand {
    Js {
        timestamp: DateTime<Utc>,
    },
    Config {
        target: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        params: Option<EventParams>,
    },
    Event {
        name: String,
        params: EventParams,
    },
}

impl GtagCommand {
    pub fn event(name: &str, params: EventParams) -> Self {
        Self::Event {
            name: name.to_string(),
            params,
        }
    }

    pub fn command(&self) -> &'static str {
        match self {
            Self::Js { .. } => "js",
            Self::Config { .. } => "config",
            Self::Event { .. } => "event",
        }
    }

    pub fn event_name(&self) -> Option<&str> {
        match self {
            Self::Event { name, .. } => Some(name),
            _ => None,
        }
    }

    pub fn params(&self) -> Option<&EventParams> {
        match self {
            Self::Config { params, .. } => params.as_ref(),
            Self::Event { params, .. } => Some(params),
            Self::Js { .. } => None,
        }
    }

    /// Positional arguments of the `gtag(...)` call, in order.
    pub fn arguments(&self) -> Vec<GtagArg<'_>> {
        let mut args = vec![GtagArg::Text(self.command())];
        match self {
            Self::Js { timestamp } => args.push(GtagArg::Timestamp(*timestamp)),
            Self::Config { target, params } => {
                args.push(GtagArg::Text(target));
                if let Some(params) = params {
                    args.push(GtagArg::Params(params));
                }
            }
            Self::Event { name, params } => {
                args.push(GtagArg::Text(name));
                args.push(GtagArg::Params(params));
            }
        }
        args
    }
}

/// One positional argument of a gtag call.
#[derive(Debug, Clone, PartialEq)]
pub enum GtagArg<'a> {
    Text(&'a str),
    /// Passed to gtag as a JS `Date`.
    Timestamp(DateTime<Utc>),
    Params(&'a EventParams),
}

/// Builds an [`EventParams`] map from a JSON object literal.
///
/// Anything other than an object yields an empty map.
pub fn params(value: Value) -> EventParams {
    match value {
        Value::Object(map) => map,
        _ => EventParams::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_config_without_payload_has_two_arguments() {
        let command = GtagCommand::Config {
            target: "AW-1".to_string(),
            params: None,
        };
        assert_eq!(
            command.arguments(),
            vec![GtagArg::Text("config"), GtagArg::Text("AW-1")]
        );
    }

    #[test]
    fn test_js_arguments_carry_timestamp() {
        let timestamp = DateTime::<Utc>::default();
        let command = GtagCommand::Js { timestamp };
        assert_eq!(
            command.arguments(),
            vec![GtagArg::Text("js"), GtagArg::Timestamp(timestamp)]
        );
    }

    #[test]
    fn test_event_arguments() {
        let payload = params(json!({ "page_path": "/about" }));
        let command = GtagCommand::event("page_view", payload.clone());
        assert_eq!(command.command(), "event");
        assert_eq!(command.event_name(), Some("page_view"));
        assert_eq!(
            command.arguments(),
            vec![
                GtagArg::Text("event"),
                GtagArg::Text("page_view"),
                GtagArg::Params(&payload),
            ]
        );
    }

    #[test]
    fn test_serialized_shape() {
        let command = GtagCommand::event("user_engagement", params(json!({ "event_label": "click" })));
        assert_eq!(
            serde_json::to_value(&command).unwrap(),
            json!({
                "command": "event",
                "name": "user_engagement",
                "params": { "event_label": "click" }
            })
        );
    }

    #[test]
    fn test_params_ignores_non_objects() {
        assert!(params(json!([1, 2, 3])).is_empty());
        assert!(params(Value::Null).is_empty());
    }
}
