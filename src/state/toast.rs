//! Toast - Transient Message Types

use std::sync::Arc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::dismiss_timer::DismissTimer;
use crate::motion::AnimationStyle;

/// Time-ordered toast identity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(Uuid);

impl ToastId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ToastId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for ToastId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Severity level for notifications and toasts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastSeverity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl ToastSeverity {
    /// Warning and error get the longer (or sticky) lifetime
    pub fn is_alert(&self) -> bool {
        matches!(self, Self::Warning | Self::Error)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "Info",
            Self::Success => "Success",
            Self::Warning => "Warning",
            Self::Error => "Error",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Self::Info => "ℹ",
            Self::Success => "✓",
            Self::Warning => "!",
            Self::Error => "✕",
        }
    }
}

/// Screen anchor for a toast stack
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToastPosition {
    TopLeft,
    TopCenter,
    #[default]
    TopRight,
    BottomLeft,
    BottomCenter,
    BottomRight,
}

impl ToastPosition {
    pub fn is_top(&self) -> bool {
        matches!(self, Self::TopLeft | Self::TopCenter | Self::TopRight)
    }

    /// Entry animation that moves in from the nearest edge
    pub fn natural_animation(&self) -> AnimationStyle {
        match self {
            Self::TopLeft | Self::BottomLeft => AnimationStyle::SlideRight,
            Self::TopRight | Self::BottomRight => AnimationStyle::SlideLeft,
            Self::TopCenter => AnimationStyle::SlideDown,
            Self::BottomCenter => AnimationStyle::SlideUp,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::TopLeft => "Top left",
            Self::TopCenter => "Top center",
            Self::TopRight => "Top right",
            Self::BottomLeft => "Bottom left",
            Self::BottomCenter => "Bottom center",
            Self::BottomRight => "Bottom right",
        }
    }

    pub fn all() -> &'static [ToastPosition] {
        &[
            Self::TopLeft,
            Self::TopCenter,
            Self::TopRight,
            Self::BottomLeft,
            Self::BottomCenter,
            Self::BottomRight,
        ]
    }
}

/// Request to show a toast. Unset fields fall back to the store's config.
#[derive(Debug, Clone, Default)]
pub struct Toast {
    pub title: Option<Arc<str>>,
    pub message: Arc<str>,
    pub severity: ToastSeverity,
    /// `Some(None)` forces a sticky toast
    pub duration: Option<Option<Duration>>,
    pub position: Option<ToastPosition>,
    pub animation: Option<AnimationStyle>,
    pub pause_on_hover: Option<bool>,
}

impl Toast {
    pub fn new(message: impl Into<Arc<str>>) -> Self {
        Self {
            message: message.into(),
            ..Default::default()
        }
    }

    pub fn info(message: impl Into<Arc<str>>) -> Self {
        Self::new(message).severity(ToastSeverity::Info)
    }

    pub fn success(message: impl Into<Arc<str>>) -> Self {
        Self::new(message).severity(ToastSeverity::Success)
    }

    pub fn warning(message: impl Into<Arc<str>>) -> Self {
        Self::new(message).severity(ToastSeverity::Warning)
    }

    pub fn error(message: impl Into<Arc<str>>) -> Self {
        Self::new(message).severity(ToastSeverity::Error)
    }

    pub fn title(mut self, title: impl Into<Arc<str>>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn severity(mut self, severity: ToastSeverity) -> Self {
        self.severity = severity;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(Some(duration));
        self
    }

    /// Never auto-dismiss
    pub fn sticky(mut self) -> Self {
        self.duration = Some(None);
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn animation(mut self, animation: AnimationStyle) -> Self {
        self.animation = Some(animation);
        self
    }

    pub fn pause_on_hover(mut self, pause: bool) -> Self {
        self.pause_on_hover = Some(pause);
        self
    }
}

/// A toast currently held by the store
#[derive(Debug, Clone)]
pub struct ToastItem {
    pub id: ToastId,
    pub title: Option<Arc<str>>,
    pub message: Arc<str>,
    pub severity: ToastSeverity,
    pub position: ToastPosition,
    pub animation: AnimationStyle,
    pub pause_on_hover: bool,
    pub timer: DismissTimer,
    pub hovered: bool,
    pub created_at: Instant,
}

impl ToastItem {
    pub fn progress_percent(&self, now: Instant) -> f32 {
        self.timer.progress_percent(now)
    }
}
