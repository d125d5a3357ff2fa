//! Navigation - Gallery Pages
//!
//! Defines the pages of the gallery and which one is showing.

use serde::{Deserialize, Serialize};

/// Available pages in the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GalleryPage {
    /// Buttons, cards, tooltips, progress, headers
    #[default]
    Controls,
    /// Toasts, notifications, modal
    Feedback,
    /// Local and server-mode data grids
    Grid,
}

impl GalleryPage {
    pub fn title(&self) -> &'static str {
        match self {
            GalleryPage::Controls => "Controls",
            GalleryPage::Feedback => "Feedback",
            GalleryPage::Grid => "Data grid",
        }
    }

    /// One-line description shown under the header title
    pub fn description(&self) -> &'static str {
        match self {
            GalleryPage::Controls => "Buttons, cards, tooltips and progress",
            GalleryPage::Feedback => "Toasts, inline notifications and dialogs",
            GalleryPage::Grid => "Sorting, filtering and pagination, local and remote",
        }
    }

    /// All pages in sidebar order
    pub fn all() -> &'static [GalleryPage] {
        &[
            GalleryPage::Controls,
            GalleryPage::Feedback,
            GalleryPage::Grid,
        ]
    }
}

/// Page selection state
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub active_page: GalleryPage,
    /// Previously shown pages, most recent last
    history: Vec<GalleryPage>,
}

impl NavigationState {
    /// Switch pages. Returns false if the page is already active.
    pub fn set_active_page(&mut self, page: GalleryPage) -> bool {
        if self.active_page == page {
            return false;
        }
        self.history.push(self.active_page);
        self.active_page = page;
        true
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Return to the previous page, if any
    pub fn back(&mut self) -> Option<GalleryPage> {
        let page = self.history.pop()?;
        self.active_page = page;
        Some(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_active_page_records_history() {
        let mut nav = NavigationState::default();
        assert!(!nav.set_active_page(GalleryPage::Controls));
        assert!(nav.set_active_page(GalleryPage::Grid));
        assert!(nav.set_active_page(GalleryPage::Feedback));
        assert_eq!(nav.back(), Some(GalleryPage::Grid));
        assert_eq!(nav.back(), Some(GalleryPage::Controls));
        assert_eq!(nav.back(), None);
        assert_eq!(nav.active_page, GalleryPage::Controls);
    }
}
