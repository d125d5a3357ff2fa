//! Layout Components
//!
//! Header and sidebar around the page content.

pub mod header;
pub mod sidebar;

pub use header::{Header, HeaderVariant};
pub use sidebar::Sidebar;
