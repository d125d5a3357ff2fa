//! Grid Feature - Local and Server-Mode Data Grids

pub mod data;
pub mod page;
