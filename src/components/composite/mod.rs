//! Composite Components
//!
//! Components assembled from primitives: cards, dialogs, notifications,
//! the toast overlay and the data grid.

pub mod card;
pub mod data_grid;
pub mod modal;
pub mod notification;
pub mod toast_container;

pub use card::{Card, CardVariant};
pub use modal::{Modal, ModalSize};
pub use notification::Notification;
pub use toast_container::ToastContainer;
