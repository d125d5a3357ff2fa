//! State - GPUI Entity State Modules
//!
//! State that outlives a single render: the toast store and its timers.

pub mod dismiss_timer;
pub mod toast;
pub mod toast_state;

pub use dismiss_timer::{DismissTimer, TimerPhase};
pub use toast::{Toast, ToastId, ToastItem, ToastPosition, ToastSeverity};
pub use toast_state::{ToastStore, dismiss_toast, show_toast};
