//! UI Constants
//!
//! Centralized defaults shared by components, state and configuration.

/// Default window dimensions for the gallery
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;
pub const DEFAULT_WINDOW_HEIGHT: f32 = 860.0;

/// Header bar height
pub const HEADER_HEIGHT: f32 = 56.0;

/// Grid defaults
pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [5, 10, 25, 50];
pub const GRID_ROW_HEIGHT: f32 = 36.0;
pub const GRID_HEADER_HEIGHT: f32 = 40.0;

/// Toast defaults
pub const TOAST_MAX_VISIBLE: usize = 5;
pub const TOAST_DURATION_MS: u64 = 4000;
pub const TOAST_ALERT_DURATION_MS: u64 = 8000;
pub const TOAST_TICK_MS: u64 = 50;
pub const TOAST_WIDTH: f32 = 340.0;

/// Motion defaults
pub const ENTER_DURATION_MS: u64 = 220;
pub const HOVER_LIFT_PX: f32 = 2.0;

/// Tooltip fade-in duration
pub const TOOLTIP_FADE_MS: u64 = 120;

/// Config file name and environment override
pub const CONFIG_FILE_NAME: &str = "vivid-ui.toml";
pub const CONFIG_ENV_VAR: &str = "VIVID_UI_CONFIG";
