//! Domain - Configuration Types

pub mod config;

pub use config::{GridConfig, ToastConfig, UiConfig};
