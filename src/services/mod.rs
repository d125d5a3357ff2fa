//! Service Layer
//!
//! Async plumbing shared by data sources. GPUI drives the UI on its own
//! executor; sources that need tokio (timers, clients) run through the bridge.
//!
//! ```text
//! DataGrid fetch task (GPUI)
//!        │
//!        ▼
//! DataSource::fetch ──► run_in_tokio(async { ... }) ──► tokio runtime
//!        │
//!        ▼
//! FetchPage returned to the grid
//! ```

mod runtime;

pub use runtime::*;
