//! Config - Library Configuration
//!
//! Defaults for theme, toasts and grids, read from a TOML file.
//!
//! ```toml
//! theme = "dark"
//!
//! [toast]
//! max_visible = 4
//! duration_ms = 3000
//! position = "bottom_right"
//! animation = "slide_left"
//!
//! [grid]
//! page_size = 25
//! multi_sort = true
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::components::composite::data_grid::PaginationState;
use crate::constants::{
    DEFAULT_PAGE_SIZE, DEFAULT_PAGE_SIZE_OPTIONS, TOAST_ALERT_DURATION_MS, TOAST_DURATION_MS,
    TOAST_MAX_VISIBLE,
};
use crate::error::Result;
use crate::helpers::config_file_path;
use crate::motion::AnimationStyle;
use crate::state::toast::{ToastPosition, ToastSeverity};
use crate::theme::ThemePreference;

/// Main library configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Light or dark palette
    pub theme: ThemePreference,
    /// Toast defaults
    pub toast: ToastConfig,
    /// Grid defaults
    pub grid: GridConfig,
}

/// Toast defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToastConfig {
    /// Maximum simultaneously visible toasts
    pub max_visible: usize,
    /// Auto-dismiss duration for info/success
    pub duration_ms: u64,
    /// Auto-dismiss duration for warning/error
    pub alert_duration_ms: u64,
    /// Warning/error toasts wait for an explicit close
    pub sticky_errors: bool,
    pub position: ToastPosition,
    pub animation: AnimationStyle,
    pub pause_on_hover: bool,
    pub show_progress: bool,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            max_visible: TOAST_MAX_VISIBLE,
            duration_ms: TOAST_DURATION_MS,
            alert_duration_ms: TOAST_ALERT_DURATION_MS,
            sticky_errors: false,
            position: ToastPosition::default(),
            animation: AnimationStyle::SlideLeft,
            pause_on_hover: true,
            show_progress: true,
        }
    }
}

impl ToastConfig {
    /// Default lifetime for a severity; `None` means sticky
    pub fn duration_for(&self, severity: ToastSeverity) -> Option<Duration> {
        if severity.is_alert() {
            if self.sticky_errors {
                None
            } else {
                Some(Duration::from_millis(self.alert_duration_ms))
            }
        } else {
            Some(Duration::from_millis(self.duration_ms))
        }
    }
}

/// Grid defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridConfig {
    pub page_size: usize,
    pub page_size_options: Vec<usize>,
    /// Clicking additional columns adds sort keys instead of replacing
    pub multi_sort: bool,
}

impl Default for GridConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            multi_sort: false,
        }
    }
}

impl GridConfig {
    /// Fresh pagination state using these defaults
    pub fn pagination(&self) -> PaginationState {
        PaginationState::new(self.page_size).with_options(self.page_size_options.clone())
    }
}

impl UiConfig {
    /// Parse from TOML text. Blank text yields defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(text)?;
        Ok(config.normalized())
    }

    /// Clamp values that would make components misbehave
    pub fn normalized(mut self) -> Self {
        if self.toast.max_visible == 0 {
            warn!("toast.max_visible = 0, using 1");
            self.toast.max_visible = 1;
        }
        if self.grid.page_size == 0 {
            warn!("grid.page_size = 0, using default");
            self.grid.page_size = DEFAULT_PAGE_SIZE;
        }
        self.grid.page_size_options.retain(|size| *size > 0);
        if self.grid.page_size_options.is_empty() {
            self.grid.page_size_options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }
        self
    }

    /// Load from a path. A missing file yields defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!(path = ?path, "Config file not found, using defaults");
            return Ok(Self::default());
        }
        info!(path = ?path, "Loading config file");
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Load from the default location
    pub fn load() -> Result<Self> {
        Self::load_from(&config_file_path()?)
    }

    /// Write to a path as TOML
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_config_is_default() {
        let config = UiConfig::from_toml_str("  \n").expect("parse");
        assert_eq!(config, UiConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let text = r#"
            theme = "dark"

            [toast]
            max_visible = 3
            position = "bottom_left"
            animation = "bounce"

            [grid]
            multi_sort = true
        "#;
        let config = UiConfig::from_toml_str(text).expect("parse");
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.toast.max_visible, 3);
        assert_eq!(config.toast.position, ToastPosition::BottomLeft);
        assert_eq!(config.toast.animation, AnimationStyle::Bounce);
        assert_eq!(config.toast.duration_ms, TOAST_DURATION_MS);
        assert!(config.grid.multi_sort);
        assert_eq!(config.grid.page_size, DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn test_zero_values_are_normalized() {
        let text = "[toast]\nmax_visible = 0\n[grid]\npage_size = 0\npage_size_options = [0]\n";
        let config = UiConfig::from_toml_str(text).expect("parse");
        assert_eq!(config.toast.max_visible, 1);
        assert_eq!(config.grid.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.grid.page_size_options, DEFAULT_PAGE_SIZE_OPTIONS.to_vec());
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(UiConfig::from_toml_str("theme = [").is_err());
    }

    #[test]
    fn test_sticky_errors() {
        let mut toast = ToastConfig::default();
        assert!(toast.duration_for(ToastSeverity::Error).is_some());
        toast.sticky_errors = true;
        assert_eq!(toast.duration_for(ToastSeverity::Error), None);
        assert_eq!(
            toast.duration_for(ToastSeverity::Info),
            Some(Duration::from_millis(TOAST_DURATION_MS))
        );
    }

    #[test]
    fn test_save_and_load_file() {
        let path = std::env::temp_dir().join(format!("vivid-ui-{}.toml", uuid::Uuid::new_v4()));
        let mut config = UiConfig::default();
        config.grid.page_size = 25;
        config.save_to(&path).expect("save");
        let loaded = UiConfig::load_from(&path).expect("load");
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.grid.page_size, 25);
    }
}
