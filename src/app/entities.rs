//! AppEntities - Global Entity Handles
//!
//! All global GPUI entities are collected here for easy access and management.
//! State is split by update frequency: toasts change on a timer, navigation on
//! clicks, configuration only at startup.

use std::sync::Arc;

use gpui::{App, AppContext, Entity, Global};

use crate::app::navigation::NavigationState;
use crate::domain::UiConfig;
use crate::state::ToastStore;

/// Collection of all global Entity handles
#[derive(Clone)]
pub struct AppEntities {
    /// Configuration loaded at startup
    pub config: Arc<UiConfig>,
    /// Active toasts, shared by every view that raises one
    pub toasts: Entity<ToastStore>,
    /// Gallery page selection
    pub navigation: Entity<NavigationState>,
}

impl Global for AppEntities {}

impl AppEntities {
    /// Initialize all entities from the loaded configuration
    pub fn init(config: UiConfig, cx: &mut App) -> Self {
        let toast_config = config.toast.clone();
        Self {
            config: Arc::new(config),
            toasts: cx.new(|_| ToastStore::new(toast_config)),
            navigation: cx.new(|_| NavigationState::default()),
        }
    }
}
