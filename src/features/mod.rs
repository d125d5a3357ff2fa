//! Features - Gallery Pages
//!
//! Each feature contains its page and, where it has logic of its own, a
//! controller or data module.

pub mod controls;
pub mod feedback;
pub mod grid;
