//! Primitive Components
//!
//! Basic building blocks: buttons, progress bars, tooltips.

pub mod button;
pub mod progress_bar;
pub mod tooltip;

pub use button::{Button, ButtonSize, ButtonVariant};
pub use progress_bar::ProgressBar;
pub use tooltip::{Tooltip, TooltipPlacement};
