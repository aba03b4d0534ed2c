//! UI Configuration
//!
//! Defaults baked into the build, optionally overridden by a JSON object
//! stored in `localStorage` under `resume-builder.config`.

use leptos::prelude::*;
use leptos_dragdrop::{use_sensors, ActivationConstraint, Sensor, DEFAULT_DISTANCE_PX};
use log::LevelFilter;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::store::DEFAULT_HISTORY_LIMIT;

pub const STORAGE_KEY: &str = "resume-builder.config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Drag activation settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SensorConfig {
    /// Pixels a mouse or pointer press must travel before a drag starts
    pub distance_px: f64,
    /// Hold time before a touch press starts a drag
    pub touch_delay_ms: u32,
    /// Movement allowed during the touch hold before it is treated as a scroll
    pub touch_tolerance_px: f64,
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self {
            distance_px: DEFAULT_DISTANCE_PX,
            touch_delay_ms: 250,
            touch_tolerance_px: 5.0,
        }
    }
}

impl SensorConfig {
    /// Mouse, touch and pointer sensors with the configured constraints
    pub fn sensors(&self) -> Vec<Sensor> {
        let distance = ActivationConstraint::Distance(self.distance_px);
        let hold = ActivationConstraint::Delay {
            delay_ms: self.touch_delay_ms,
            tolerance: self.touch_tolerance_px,
        };
        use_sensors([
            Sensor::mouse().with_activation(distance),
            Sensor::touch().with_activation(hold),
            Sensor::pointer().with_activation(distance),
        ])
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UiConfig {
    pub log_level: LevelFilter,
    pub locale: String,
    /// Undo snapshots kept by the store (0 disables undo)
    pub history_limit: usize,
    pub sensors: SensorConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Info,
            locale: "en".to_string(),
            history_limit: DEFAULT_HISTORY_LIMIT,
            sensors: SensorConfig::default(),
        }
    }
}

impl UiConfig {
    pub fn from_json(raw: &str) -> ConfigResult<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Defaults merged with the `localStorage` override, if any
    pub fn load() -> Self {
        let Some(raw) = read_override() else {
            return Self::default();
        };
        match Self::from_json(&raw) {
            Ok(config) => {
                log::info!("loaded config override from {}", STORAGE_KEY);
                config
            }
            Err(err) => {
                log::warn!("ignoring {}: {}", STORAGE_KEY, err);
                Self::default()
            }
        }
    }
}

fn read_override() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage.get_item(STORAGE_KEY).ok()?
}

/// Config provided by the app shell, or defaults when rendered standalone
pub fn use_ui_config() -> UiConfig {
    use_context::<UiConfig>().unwrap_or_default()
}
