//! Vivid UI Library
//!
//! Animated presentational components for GPUI: buttons, cards, tooltips,
//! modals, notifications, toasts and a data grid with local and server-side
//! sort, filter and pagination. The `vivid-gallery` binary mounts them all.

pub mod app;
pub mod components;
pub mod constants;
pub mod domain;
pub mod error;
pub mod features;
pub mod helpers;
pub mod motion;
pub mod services;
pub mod state;
pub mod theme;
