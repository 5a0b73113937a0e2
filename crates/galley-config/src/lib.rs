//! Galley configuration system
//!
//! This crate provides centralized configuration for galley, loading layout
//! defaults from `galley.toml` as an alternative to environment variables.

use galley_text::{Align, LayoutCache, WrappedText};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Main configuration structure for galley
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GalleyConfig {
    /// Text layout settings
    pub text: TextConfig,
    /// Layout cache settings
    pub cache: CacheConfig,
}

/// Text layout configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TextConfig {
    /// Wrap width in pixels, excluding margins
    pub wrap_width: Option<i32>,
    /// Width of a tab character in pixels
    pub tab_width: Option<i32>,
    /// Height of one line within a paragraph, in pixels
    pub line_height: Option<i32>,
    /// Extra spacing between paragraphs, in pixels
    pub paragraph_break: Option<i32>,
    /// Alignment mode: "left", "center", "right", or "justified"
    pub alignment: Option<String>,
}

/// Layout cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CacheConfig {
    /// Maximum number of memoized paragraphs
    pub capacity: Option<usize>,
    /// Generations between cache expiry sweeps
    pub refresh_interval: Option<u64>,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            wrap_width: None,
            tab_width: None,
            line_height: None,
            paragraph_break: None,
            alignment: None,
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: None,
            refresh_interval: None,
        }
    }
}

impl TextConfig {
    /// Parse the alignment field, if present and recognized.
    pub fn alignment(&self) -> Option<Align> {
        match self.alignment.as_deref()?.to_ascii_lowercase().as_str() {
            "left" => Some(Align::Left),
            "center" => Some(Align::Center),
            "right" => Some(Align::Right),
            "justified" => Some(Align::Justified),
            _ => None,
        }
    }
}

impl GalleyConfig {
    /// Load configuration from a TOML file
    ///
    /// # Arguments
    /// * `path` - Path to the galley.toml configuration file
    ///
    /// # Returns
    /// * `Ok(GalleyConfig)` - Successfully loaded configuration
    /// * `Err(String)` - Error message if loading failed
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, String> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| format!("Failed to read config file: {}", e))?;

        toml::from_str(&content).map_err(|e| format!("Failed to parse config file: {}", e))
    }

    /// Load configuration from the default location (galley.toml in the
    /// current directory) or return default configuration if file doesn't
    /// exist
    pub fn load_or_default() -> Self {
        Self::load_from_file("galley.toml").unwrap_or_default()
    }

    /// Merge configuration with environment variables
    ///
    /// Environment variables take precedence over configuration file values.
    /// This allows for temporary overrides without modifying the config file.
    pub fn merge_with_env(&mut self) {
        if let Ok(val) = std::env::var("GALLEY_WRAP_WIDTH") {
            if let Ok(width) = val.parse::<i32>() {
                self.text.wrap_width = Some(width);
            }
        }
        if let Ok(val) = std::env::var("GALLEY_TAB_WIDTH") {
            if let Ok(width) = val.parse::<i32>() {
                self.text.tab_width = Some(width);
            }
        }
        if let Ok(val) = std::env::var("GALLEY_LINE_HEIGHT") {
            if let Ok(height) = val.parse::<i32>() {
                self.text.line_height = Some(height);
            }
        }
        if let Ok(val) = std::env::var("GALLEY_PARAGRAPH_BREAK") {
            if let Ok(height) = val.parse::<i32>() {
                self.text.paragraph_break = Some(height);
            }
        }
        if let Ok(alignment) = std::env::var("GALLEY_ALIGNMENT") {
            self.text.alignment = Some(alignment);
        }
        if let Ok(val) = std::env::var("GALLEY_CACHE_CAPACITY") {
            if let Ok(capacity) = val.parse::<usize>() {
                self.cache.capacity = Some(capacity);
            }
        }
        if let Ok(val) = std::env::var("GALLEY_CACHE_REFRESH") {
            if let Ok(interval) = val.parse::<u64>() {
                self.cache.refresh_interval = Some(interval);
            }
        }
    }

    /// Load configuration with environment variable overrides
    ///
    /// This is the recommended way to load configuration:
    /// 1. Load from galley.toml (or use defaults if not found)
    /// 2. Override with environment variables if present
    pub fn load() -> Self {
        let mut config = Self::load_or_default();
        config.merge_with_env();
        config
    }

    /// Push the configured overrides onto a layout object. Unset fields
    /// leave the layout's current values alone.
    pub fn apply(&self, wrapped: &mut WrappedText) {
        if let Some(width) = self.text.wrap_width {
            wrapped.set_wrap_width(width);
        }
        if let Some(width) = self.text.tab_width {
            wrapped.set_tab_width(width);
        }
        if let Some(height) = self.text.line_height {
            wrapped.set_line_height(height);
        }
        if let Some(height) = self.text.paragraph_break {
            wrapped.set_paragraph_break(height);
        }
        if let Some(alignment) = self.text.alignment() {
            wrapped.set_alignment(alignment);
        }
    }

    /// Build a layout cache from the configured bounds.
    pub fn build_cache(&self) -> LayoutCache {
        let mut cache = match self.cache.capacity {
            Some(capacity) => LayoutCache::with_capacity(capacity),
            None => LayoutCache::new(),
        };
        if let Some(interval) = self.cache.refresh_interval {
            cache.set_refresh_interval(interval);
        }
        cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GalleyConfig::default();
        assert!(config.text.wrap_width.is_none());
        assert!(config.text.alignment().is_none());
        assert!(config.cache.capacity.is_none());
    }

    #[test]
    fn test_toml_round_trip() {
        let mut config = GalleyConfig::default();
        config.text.wrap_width = Some(480);
        config.text.alignment = Some("right".to_string());
        let toml_str = toml::to_string_pretty(&config).unwrap();
        let parsed: GalleyConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed.text.wrap_width, Some(480));
        assert_eq!(parsed.text.alignment(), Some(Align::Right));
    }

    #[test]
    fn test_parse_partial_file() {
        let parsed: GalleyConfig = toml::from_str(
            r#"
            [text]
            wrap_width = 320
            alignment = "Justified"

            [cache]
            capacity = 16
            "#,
        )
        .unwrap();
        assert_eq!(parsed.text.wrap_width, Some(320));
        assert_eq!(parsed.text.alignment(), Some(Align::Justified));
        assert_eq!(parsed.cache.capacity, Some(16));
        assert!(parsed.cache.refresh_interval.is_none());
    }

    #[test]
    fn test_unknown_alignment_is_ignored() {
        let mut config = GalleyConfig::default();
        config.text.alignment = Some("upside-down".to_string());
        assert!(config.text.alignment().is_none());
    }

    #[test]
    fn test_apply_overrides_only_set_fields() {
        let font = galley_text::Monospace::new(10, 10);
        let mut wrapped = WrappedText::with_font(&font);
        let tab_before = wrapped.tab_width();

        let mut config = GalleyConfig::default();
        config.text.wrap_width = Some(240);
        config.text.alignment = Some("center".to_string());
        config.apply(&mut wrapped);

        assert_eq!(wrapped.wrap_width(), 240);
        assert_eq!(wrapped.alignment(), Align::Center);
        assert_eq!(wrapped.tab_width(), tab_before);
    }

    #[test]
    fn test_env_overrides() {
        // Variable names are unique to this test so parallel tests cannot
        // race on them.
        unsafe {
            std::env::set_var("GALLEY_WRAP_WIDTH", "777");
        }
        let mut config = GalleyConfig::default();
        config.merge_with_env();
        assert_eq!(config.text.wrap_width, Some(777));
        unsafe {
            std::env::remove_var("GALLEY_WRAP_WIDTH");
        }
    }

    #[test]
    fn test_load_or_default() {
        // Should not panic even if galley.toml doesn't exist
        let config = GalleyConfig::load_or_default();
        assert!(config.text.line_height.is_none());
    }
}
