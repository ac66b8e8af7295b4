use log::warn;
use shared::config::{AppConfig, ADS_ID_KEY, BASE_URL_KEY, MEASUREMENT_ID_KEY, PROD_KEY};

/// Configuration baked in at build time, e.g.
/// `PROD=true VITE_GA_MEASUREMENT_ID=G-XXXX trunk build --release`.
pub fn compile_time_env(key: &str) -> Option<String> {
    let value = match key {
        PROD_KEY => option_env!("PROD"),
        MEASUREMENT_ID_KEY => option_env!("VITE_GA_MEASUREMENT_ID"),
        ADS_ID_KEY => option_env!("VITE_GA_ADS_ID"),
        BASE_URL_KEY => option_env!("BASE_URL"),
        _ => None,
    };
    value.map(str::to_string)
}

/// Resolves the application configuration once at startup.
pub fn load() -> AppConfig {
    load_with(compile_time_env, !cfg!(debug_assertions))
}

/// Without an explicit `PROD`, `production_default` applies. An unreadable
/// `PROD` disables analytics rather than failing the app.
pub fn load_with<F>(lookup: F, production_default: bool) -> AppConfig
where
    F: Fn(&str) -> Option<String>,
{
    match AppConfig::from_lookup(&lookup, production_default) {
        Ok(config) => config,
        Err(e) => {
            warn!("{}; analytics disabled", e);
            let without_prod = |key: &str| if key == PROD_KEY { None } else { lookup(key) };
            AppConfig::from_lookup(without_prod, false).unwrap_or_default()
        }
    }
}
