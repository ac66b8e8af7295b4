use serde::{Deserialize, Serialize};

use crate::error::{Result, SharedError};

pub const PROD_KEY: &str = "PROD";
pub const MEASUREMENT_ID_KEY: &str = "VITE_GA_MEASUREMENT_ID";
pub const ADS_ID_KEY: &str = "VITE_GA_ADS_ID";
pub const BASE_URL_KEY: &str = "BASE_URL";

const GTAG_LOADER_URL: &str = "https://www.googletagmanager.com/gtag/js";

/// Analytics settings resolved once at startup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Production builds only; gates every analytics effect.
    pub enabled: bool,
    /// Primary GA4 measurement id. `None` disables analytics entirely.
    pub measurement_id: Option<String>,
    /// Google Ads id used for the secondary config call and conversions.
    pub ads_id: Option<String>,
}

impl AnalyticsConfig {
    /// Returns the measurement id when analytics should actually run.
    pub fn active_measurement_id(&self) -> Option<&str> {
        if self.enabled {
            self.measurement_id.as_deref()
        } else {
            None
        }
    }

    pub fn loader_url(measurement_id: &str) -> String {
        format!(
            "{}?id={}",
            GTAG_LOADER_URL,
            urlencoding::encode(measurement_id)
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    pub analytics: AnalyticsConfig,
    /// Base path the router history is mounted under, always starting with `/`.
    pub base_url: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analytics: AnalyticsConfig::default(),
            base_url: "/".to_string(),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from a key lookup.
    ///
    /// Empty values count as unset. `default_prod` applies when `PROD` is absent.
    pub fn from_lookup<F>(lookup: F, default_prod: bool) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let enabled = match value(PROD_KEY) {
            Some(raw) => parse_flag(PROD_KEY, &raw)?,
            None => default_prod,
        };

        Ok(Self {
            analytics: AnalyticsConfig {
                enabled,
                measurement_id: value(MEASUREMENT_ID_KEY),
                ads_id: value(ADS_ID_KEY),
            },
            base_url: normalize_base(value(BASE_URL_KEY).as_deref().unwrap_or("/")),
        })
    }
}

fn parse_flag(key: &str, raw: &str) -> Result<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(SharedError::InvalidFlag {
            key: key.to_string(),
            value: raw.to_string(),
        }),
    }
}

fn normalize_base(raw: &str) -> String {
    let trimmed = raw.trim_matches('/');
    if trimmed.is_empty() || trimmed == "." {
        "/".to_string()
    } else {
        format!("/{}", trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_full_configuration() {
        let config = AppConfig::from_lookup(
            lookup(&[
                ("PROD", "true"),
                ("VITE_GA_MEASUREMENT_ID", "G-TEST123"),
                ("VITE_GA_ADS_ID", "AW-999"),
                ("BASE_URL", "/demo/"),
            ]),
            false,
        )
        .unwrap();

        assert_eq!(
            config,
            AppConfig {
                analytics: AnalyticsConfig {
                    enabled: true,
                    measurement_id: Some("G-TEST123".to_string()),
                    ads_id: Some("AW-999".to_string()),
                },
                base_url: "/demo".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let config = AppConfig::from_lookup(
            lookup(&[("VITE_GA_MEASUREMENT_ID", ""), ("VITE_GA_ADS_ID", "  ")]),
            true,
        )
        .unwrap();

        assert!(config.analytics.enabled);
        assert_eq!(config.analytics.measurement_id, None);
        assert_eq!(config.analytics.ads_id, None);
        assert_eq!(config.base_url, "/");
    }

    #[rstest]
    #[case("true", true)]
    #[case("1", true)]
    #[case("YES", true)]
    #[case("false", false)]
    #[case("0", false)]
    #[case("off", false)]
    fn test_prod_flag_parsing(#[case] raw: &str, #[case] expected: bool) {
        let config = AppConfig::from_lookup(lookup(&[("PROD", raw)]), !expected).unwrap();
        assert_eq!(config.analytics.enabled, expected);
    }

    #[test]
    fn test_invalid_prod_flag() {
        let err = AppConfig::from_lookup(lookup(&[("PROD", "sometimes")]), false).unwrap_err();
        assert_eq!(
            err,
            SharedError::InvalidFlag {
                key: "PROD".to_string(),
                value: "sometimes".to_string(),
            }
        );
    }

    #[test]
    fn test_active_measurement_id_requires_enabled() {
        let mut config = AnalyticsConfig {
            enabled: false,
            measurement_id: Some("G-1".to_string()),
            ads_id: None,
        };
        assert_eq!(config.active_measurement_id(), None);

        config.enabled = true;
        assert_eq!(config.active_measurement_id(), Some("G-1"));
    }

    #[test]
    fn test_loader_url() {
        assert_eq!(
            AnalyticsConfig::loader_url("G-ABC123"),
            "https://www.googletagmanager.com/gtag/js?id=G-ABC123"
        );
    }

    #[rstest]
    #[case("/", "/")]
    #[case("./", "/")]
    #[case("app", "/app")]
    #[case("/nested/app/", "/nested/app")]
    fn test_base_url_normalization(#[case] raw: &str, #[case] expected: &str) {
        let config = AppConfig::from_lookup(lookup(&[("BASE_URL", raw)]), false).unwrap();
        assert_eq!(config.base_url, expected);
    }
}
