use log::{warn, Level};
use serde::Deserialize;
use thiserror::Error;

use crate::visibility::ObserverOptions;

pub const CONFIG_ELEMENT_ID: &str = "page-config";

const MIN_AUTO_ADVANCE_MS: u32 = 3000;
const MAX_AUTO_ADVANCE_MS: u32 = 4000;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose ticks and latches when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("auto-advance interval {0}ms is outside 3000..=4000ms")]
    IntervalOutOfRange(u32),
    #[error("visibility threshold {0} is outside [0, 1)")]
    ThresholdOutOfRange(f64),
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub auto_advance_ms: u32,
    pub visibility_threshold: f64,
    pub visibility_root_margin: String,
    pub particle_count: usize,
    pub sparkle_count: usize,
}

impl Default for PageConfig {
    fn default() -> Self {
        let observer = ObserverOptions::default();
        Self {
            auto_advance_ms: MIN_AUTO_ADVANCE_MS,
            visibility_threshold: observer.threshold,
            visibility_root_margin: observer.root_margin,
            particle_count: 15,
            sparkle_count: 5,
        }
    }
}

impl PageConfig {
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(raw)?;
        if !(MIN_AUTO_ADVANCE_MS..=MAX_AUTO_ADVANCE_MS).contains(&config.auto_advance_ms) {
            return Err(ConfigError::IntervalOutOfRange(config.auto_advance_ms));
        }
        if !(0.0..1.0).contains(&config.visibility_threshold) {
            return Err(ConfigError::ThresholdOutOfRange(config.visibility_threshold));
        }
        Ok(config)
    }

    /// Reads overrides from the `page-config` JSON script in index.html.
    pub fn load() -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|e| e.text_content());
        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("{}, using defaults", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }

    pub fn observer_options(&self) -> ObserverOptions {
        ObserverOptions {
            threshold: self.visibility_threshold,
            root_margin: self.visibility_root_margin.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn partial_override() {
        let config = PageConfig::from_json(r#"{"auto_advance_ms": 4000, "particle_count": 3}"#).unwrap();
        assert_eq!(config.auto_advance_ms, 4000);
        assert_eq!(config.particle_count, 3);
        assert_eq!(config.sparkle_count, 5);
        assert_eq!(config.observer_options(), ObserverOptions::default());
    }

    #[test]
    fn interval_must_stay_in_range() {
        let err = PageConfig::from_json(r#"{"auto_advance_ms": 500}"#).unwrap_err();
        assert!(matches!(err, ConfigError::IntervalOutOfRange(500)));
    }

    #[test]
    fn threshold_must_be_a_fraction() {
        let err = PageConfig::from_json(r#"{"visibility_threshold": 1.0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::ThresholdOutOfRange(_)));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = PageConfig::from_json("{auto_advance_ms").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
