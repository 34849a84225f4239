//! Runtime Configuration
//!
//! Host pages may override defaults with
//! `<script type="application/json" id="delete-confirm-config">{...}</script>`.

use log::LevelFilter;
use serde::Deserialize;

use crate::error::ConfigError;

/// Id of the JSON script element read at startup
pub const CONFIG_ELEMENT_ID: &str = "delete-confirm-config";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DeleteConfig {
    /// Prefix of the default delete endpoint, the id and a trailing `/` are appended
    pub api_base: String,
    pub csrf_cookie: String,
    pub redirect_url: String,
    pub redirect_delay_ms: u32,
    /// Elements guarded by the confirm on page ready
    pub trigger_selector: String,
    pub log_level: String,
}

impl Default for DeleteConfig {
    fn default() -> Self {
        Self {
            api_base: "/api/products/".to_string(),
            csrf_cookie: "csrftoken".to_string(),
            redirect_url: "/".to_string(),
            redirect_delay_ms: 2000,
            trigger_selector: "a.delete-btn, button.delete-btn".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl DeleteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse the page-provided JSON, falling back to defaults when absent or broken
    pub fn from_page_json(json: Option<&str>) -> Self {
        match json.map(str::trim).filter(|s| !s.is_empty()) {
            None => Self::default(),
            Some(json) => Self::from_json(json).unwrap_or_else(|e| {
                log::warn!("{}, using defaults", e);
                Self::default()
            }),
        }
    }

    pub fn level_filter(&self) -> LevelFilter {
        self.log_level.parse().unwrap_or(LevelFilter::Info)
    }
}
