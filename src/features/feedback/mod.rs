//! Feedback Feature - Toasts, Notifications and Modals

pub mod controller;
pub mod page;
