use serde::Deserialize;
use log::warn;

use crate::dom;
use crate::error::SiteError;

/// Element id of the optional JSON block that overrides defaults.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[cfg(debug_assertions)]
pub fn default_form_endpoint() -> String {
    "http://localhost:3001/contact".to_string()  // Local form sink while developing
}

#[cfg(not(debug_assertions))]
pub fn default_form_endpoint() -> String {
    "https://formspree.io/f/nexus-contact".to_string()
}

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}

/// Site-wide settings. Every field falls back to its default when the host
/// page leaves it out.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct SiteConfig {
    pub form_endpoint: String,
    pub consent_storage_key: String,
    /// Scroll offset past which the floating CTA shows.
    pub scroll_trigger_offset: f64,
    /// Margin subtracted from the viewport bottom for reveal checks.
    pub visibility_offset: f64,
    pub debounce_ms: u32,
    pub cookie_banner_delay_ms: u32,
    pub cookie_banner_show_delay_ms: u32,
    pub transition_ms: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            form_endpoint: default_form_endpoint(),
            consent_storage_key: "cookieConsent".to_string(),
            scroll_trigger_offset: 800.0,
            visibility_offset: 100.0,
            debounce_ms: 100,
            cookie_banner_delay_ms: 3000,
            cookie_banner_show_delay_ms: 10,
            transition_ms: 400,
        }
    }
}

impl SiteConfig {
    pub fn from_json(raw: &str) -> Result<Self, SiteError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Reads `#site-config` from the document. Missing block means defaults;
    /// a malformed one is logged and then ignored.
    pub fn load() -> Self {
        let raw = dom::document()
            .ok()
            .and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
            .and_then(|element| element.text_content());

        match raw {
            Some(raw) if !raw.trim().is_empty() => Self::from_json(&raw).unwrap_or_else(|e| {
                warn!("Ignoring site config: {}", e);
                Self::default()
            }),
            _ => Self::default(),
        }
    }
}
