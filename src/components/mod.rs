//! Components - Reusable UI Components
//!
//! Pure UI components. None of them do I/O; remote data reaches the grid
//! through the `DataSource` trait.

pub mod composite;
pub mod layout;
pub mod primitives;
