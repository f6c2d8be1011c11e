// ABOUTME: Configuration module for the slider-export application
// ABOUTME: Provides configuration settings and environment variable handling

use crate::bundle::{BundleOptions, DEFAULT_FONT_STYLESHEET};
use crate::errors::{Result, SliderError};
use crate::navigation::{CloseVisibility, NavPolicy};
use crate::runtime::RuntimeOptions;
use crate::style::Viewport;
use crate::watch::WatchConfig;
use std::env;
use std::path::PathBuf;

/// Global configuration for the application
pub struct Config {
    pub font_stylesheet: Option<String>,
    pub host_api: String,
    pub dismiss_keyword: String,
    pub viewport: Option<Viewport>,
    pub arrow_policy: NavPolicy,
    pub swipe_policy: NavPolicy,
    pub close_visibility: CloseVisibility,
    pub debounce_ms: u64,
}

/// Per-invocation overrides for a bundle, usually from CLI flags
#[derive(Debug, Clone, Default)]
pub struct BundleOverrides {
    pub title: Option<String>,
    pub viewport: Option<Viewport>,
    pub font_url: Option<String>,
    pub no_font: bool,
    pub arrow_policy: Option<NavPolicy>,
    pub swipe_policy: Option<NavPolicy>,
    pub close_visibility: Option<CloseVisibility>,
}

impl Default for Config {
    fn default() -> Self {
        let runtime = RuntimeOptions::default();
        Self {
            font_stylesheet: Some(DEFAULT_FONT_STYLESHEET.to_string()),
            host_api: runtime.host_api,
            dismiss_keyword: runtime.dismiss_keyword,
            viewport: None,
            arrow_policy: runtime.arrow_policy,
            swipe_policy: runtime.swipe_policy,
            close_visibility: runtime.close_visibility,
            debounce_ms: 500,
        }
    }
}

/// Parse a viewport name; `fluid` (or empty) means no fixed frame
pub fn parse_viewport(value: &str) -> Result<Option<Viewport>> {
    let trimmed = value.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("fluid") {
        return Ok(None);
    }
    trimmed
        .parse::<Viewport>()
        .map(Some)
        .map_err(SliderError::ConfigError)
}

/// Parse `clamp` or `wrap`
pub fn parse_nav_policy(value: &str) -> Result<NavPolicy> {
    value.parse::<NavPolicy>().map_err(SliderError::ConfigError)
}

/// Parse `last-slide` or `first-two`
pub fn parse_close_visibility(value: &str) -> Result<CloseVisibility> {
    value
        .parse::<CloseVisibility>()
        .map_err(SliderError::ConfigError)
}

impl Config {
    /// Create a new configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let font_stylesheet = match env::var("SLIDER_FONT_URL") {
            Ok(url) if url.trim().is_empty() => None,
            Ok(url) => Some(url),
            Err(_) => defaults.font_stylesheet,
        };
        let host_api = env::var("SLIDER_HOST_API").unwrap_or(defaults.host_api);
        let dismiss_keyword =
            env::var("SLIDER_DISMISS_KEYWORD").unwrap_or(defaults.dismiss_keyword);
        let viewport = match env::var("SLIDER_VIEWPORT") {
            Ok(value) => parse_viewport(&value)?,
            Err(_) => defaults.viewport,
        };
        let arrow_policy = match env::var("SLIDER_ARROW_POLICY") {
            Ok(value) => parse_nav_policy(&value)?,
            Err(_) => defaults.arrow_policy,
        };
        let swipe_policy = match env::var("SLIDER_SWIPE_POLICY") {
            Ok(value) => parse_nav_policy(&value)?,
            Err(_) => defaults.swipe_policy,
        };
        let close_visibility = match env::var("SLIDER_CLOSE_VISIBILITY") {
            Ok(value) => parse_close_visibility(&value)?,
            Err(_) => defaults.close_visibility,
        };
        let debounce_ms = env::var("SLIDER_DEBOUNCE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(defaults.debounce_ms);

        Ok(Self {
            font_stylesheet,
            host_api,
            dismiss_keyword,
            viewport,
            arrow_policy,
            swipe_policy,
            close_visibility,
            debounce_ms,
        })
    }

    /// Get bundle options with defaults from this config
    pub fn get_bundle_options(&self, overrides: BundleOverrides) -> BundleOptions {
        let font_stylesheet = if overrides.no_font {
            None
        } else {
            overrides
                .font_url
                .or_else(|| self.font_stylesheet.clone())
        };

        BundleOptions {
            title: overrides.title.unwrap_or_else(|| "Slider".to_string()),
            font_stylesheet,
            viewport: overrides.viewport.or(self.viewport),
            runtime: RuntimeOptions {
                host_api: self.host_api.clone(),
                dismiss_keyword: self.dismiss_keyword.clone(),
                arrow_policy: overrides.arrow_policy.unwrap_or(self.arrow_policy),
                swipe_policy: overrides.swipe_policy.unwrap_or(self.swipe_policy),
                close_visibility: overrides
                    .close_visibility
                    .unwrap_or(self.close_visibility),
                ..RuntimeOptions::default()
            },
        }
    }

    /// Get a watch configuration with defaults from this config
    pub fn get_watch_config(
        &self,
        input: PathBuf,
        output: PathBuf,
        bundle: BundleOptions,
        serve: bool,
        port: Option<u16>,
    ) -> WatchConfig {
        WatchConfig {
            config_path: input,
            html_output: output,
            bundle,
            debounce_ms: self.debounce_ms,
            serve,
            port: port.unwrap_or(8080),
        }
    }
}
