use log::LevelFilter;
use sportsdb_api::client::{DEFAULT_API_KEY, DEFAULT_BASE_URL};

pub const ENV_API_KEY: &str = "PITCHSIDE_API_KEY";
pub const ENV_API_BASE: &str = "PITCHSIDE_API_BASE";
pub const ENV_LOG: &str = "PITCHSIDE_LOG";
pub const ENV_SKIP_ONBOARDING: &str = "PITCHSIDE_SKIP_ONBOARDING";

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub full_screen: bool,
    pub log_level: Option<LevelFilter>,
    pub api_key: String,
    pub api_base: String,
    pub skip_onboarding: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            full_screen: false,
            log_level: None,
            api_key: DEFAULT_API_KEY.to_string(),
            api_base: DEFAULT_BASE_URL.to_string(),
            skip_onboarding: false,
        }
    }
}

impl AppSettings {
    pub fn load() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Self::default();
        Self {
            full_screen: false,
            log_level: get(ENV_LOG).and_then(|v| parse_level(&v)),
            api_key: get(ENV_API_KEY).unwrap_or(defaults.api_key),
            api_base: get(ENV_API_BASE)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            skip_onboarding: get(ENV_SKIP_ONBOARDING).is_some(),
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.parse::<LevelFilter>() {
        Ok(level) => Some(level),
        Err(_) => {
            log::warn!("ignoring unknown log level {value:?}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn settings(pairs: &[(&str, &str)]) -> AppSettings {
        let env: HashMap<String, String> =
            pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppSettings::from_lookup(|k| env.get(k).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let s = settings(&[]);
        assert_eq!(s.api_key, "123");
        assert_eq!(s.api_base, DEFAULT_BASE_URL);
        assert_eq!(s.log_level, None);
        assert!(!s.skip_onboarding);
    }

    #[test]
    fn overrides_are_read() {
        let s = settings(&[
            (ENV_API_KEY, "abc"),
            (ENV_API_BASE, "http://localhost:9000/json/"),
            (ENV_LOG, "Debug"),
            (ENV_SKIP_ONBOARDING, "1"),
        ]);
        assert_eq!(s.api_key, "abc");
        assert_eq!(s.api_base, "http://localhost:9000/json");
        assert_eq!(s.log_level, Some(LevelFilter::Debug));
        assert!(s.skip_onboarding);
    }

    #[test]
    fn blank_and_bogus_values_are_ignored() {
        let s = settings(&[(ENV_API_KEY, "  "), (ENV_LOG, "loud"), (ENV_SKIP_ONBOARDING, "")]);
        assert_eq!(s.api_key, "123");
        assert_eq!(s.log_level, None);
        assert!(!s.skip_onboarding);
    }
}
