//! Feedback Controller
//!
//! Holds the toast playground selections and turns them into toasts.

use std::time::Duration;

use gpui::App;

use crate::app::entities::AppEntities;
use crate::motion::AnimationStyle;
use crate::state::{Toast, ToastId, ToastPosition, ToastSeverity, show_toast};

/// Toast playground selections
#[derive(Debug, Clone, PartialEq)]
pub struct ToastDraft {
    pub severity: ToastSeverity,
    pub position: ToastPosition,
    /// `None` uses the position's natural slide
    pub animation: Option<AnimationStyle>,
    pub sticky: bool,
    pub pause_on_hover: bool,
    /// `None` uses the store's per-severity default
    pub duration: Option<Duration>,
}

impl Default for ToastDraft {
    fn default() -> Self {
        Self {
            severity: ToastSeverity::Info,
            position: ToastPosition::TopRight,
            animation: None,
            sticky: false,
            pause_on_hover: true,
            duration: None,
        }
    }
}

impl ToastDraft {
    /// Build the `n`-th toast from the current selections
    pub fn build(&self, n: usize) -> Toast {
        let animation = self
            .animation
            .unwrap_or_else(|| self.position.natural_animation());
        let message = match self.severity {
            ToastSeverity::Info => format!("Background sync #{n} started"),
            ToastSeverity::Success => format!("Report #{n} exported"),
            ToastSeverity::Warning => format!("Quota at {}% after upload #{n}", 80 + n % 20),
            ToastSeverity::Error => format!("Upload #{n} failed, retry later"),
        };
        let toast = Toast::new(message)
            .title(self.severity.label())
            .severity(self.severity)
            .position(self.position)
            .animation(animation)
            .pause_on_hover(self.pause_on_hover);
        match (self.sticky, self.duration) {
            (true, _) => toast.sticky(),
            (false, Some(duration)) => toast.duration(duration),
            (false, None) => toast,
        }
    }
}

/// Feedback page controller
pub struct FeedbackController {
    entities: AppEntities,
    pub draft: ToastDraft,
    shown: usize,
}

impl FeedbackController {
    pub fn new(entities: AppEntities) -> Self {
        let draft = ToastDraft {
            position: entities.config.toast.position,
            pause_on_hover: entities.config.toast.pause_on_hover,
            ..ToastDraft::default()
        };
        Self {
            entities,
            draft,
            shown: 0,
        }
    }

    /// Show a toast built from the current draft
    pub fn show(&mut self, cx: &mut App) -> ToastId {
        self.shown += 1;
        show_toast(&self.entities.toasts, self.draft.build(self.shown), cx)
    }

    /// One toast of each severity at every anchor
    pub fn show_burst(&mut self, cx: &mut App) {
        for (i, position) in ToastPosition::all().iter().enumerate() {
            self.shown += 1;
            let severity = [
                ToastSeverity::Info,
                ToastSeverity::Success,
                ToastSeverity::Warning,
                ToastSeverity::Error,
            ][i % 4];
            let draft = ToastDraft {
                severity,
                position: *position,
                ..self.draft.clone()
            };
            show_toast(&self.entities.toasts, draft.build(self.shown), cx);
        }
    }

    pub fn clear(&self, cx: &mut App) {
        self.entities.toasts.update(cx, |store, cx| {
            store.clear();
            cx.notify();
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ToastConfig;
    use crate::state::ToastStore;
    use std::time::Instant;

    #[test]
    fn test_draft_defaults_to_natural_animation() {
        let draft = ToastDraft {
            position: ToastPosition::BottomCenter,
            ..ToastDraft::default()
        };
        let toast = draft.build(1);
        assert_eq!(toast.animation, Some(AnimationStyle::SlideUp));
        assert_eq!(toast.position, Some(ToastPosition::BottomCenter));
        assert_eq!(toast.duration, None);
    }

    #[test]
    fn test_sticky_draft_overrides_duration() {
        let draft = ToastDraft {
            sticky: true,
            duration: Some(Duration::from_secs(1)),
            ..ToastDraft::default()
        };
        assert_eq!(draft.build(1).duration, Some(None));
    }

    #[test]
    fn test_draft_toast_lands_in_store() {
        let mut store = ToastStore::new(ToastConfig::default());
        let draft = ToastDraft {
            severity: ToastSeverity::Error,
            animation: Some(AnimationStyle::Bounce),
            ..ToastDraft::default()
        };
        let id = store.push(draft.build(3), Instant::now());
        let item = store.get(id).unwrap();
        assert_eq!(item.animation, AnimationStyle::Bounce);
        assert_eq!(item.severity, ToastSeverity::Error);
        assert!(item.message.contains("#3"));
    }
}
