//! ToastStore - Active Toasts with FIFO Cap
//!
//! Explicit store passed to whoever shows toasts, held as a GPUI entity in
//! `AppEntities`. All timing goes through `now` arguments; the container
//! view supplies `Instant::now()` on each tick.

use std::time::Instant;

use gpui::{App, Context, Entity};
use tracing::debug;

use super::dismiss_timer::{DismissTimer, TimerPhase};
use super::toast::{Toast, ToastId, ToastItem, ToastPosition};
use crate::domain::ToastConfig;
use crate::helpers::BoundedDeque;

/// State for transient toasts
#[derive(Debug)]
pub struct ToastStore {
    items: BoundedDeque<ToastItem>,
    config: ToastConfig,
}

impl ToastStore {
    pub fn new(config: ToastConfig) -> Self {
        Self {
            items: BoundedDeque::new(config.max_visible),
            config,
        }
    }

    pub fn config(&self) -> &ToastConfig {
        &self.config
    }

    /// Replace defaults; shrinking the cap evicts the oldest toasts
    pub fn set_config(&mut self, config: ToastConfig) {
        for evicted in self.items.set_capacity(config.max_visible) {
            debug!(id = %evicted.id, "Toast evicted by cap change");
        }
        self.config = config;
    }

    /// Add a toast, evicting the oldest when at capacity
    pub fn push(&mut self, toast: Toast, now: Instant) -> ToastId {
        let id = ToastId::new();
        let position = toast.position.unwrap_or(self.config.position);
        let duration = toast
            .duration
            .unwrap_or_else(|| self.config.duration_for(toast.severity));

        let item = ToastItem {
            id,
            title: toast.title,
            message: toast.message,
            severity: toast.severity,
            position,
            animation: toast.animation.unwrap_or(self.config.animation),
            pause_on_hover: toast.pause_on_hover.unwrap_or(self.config.pause_on_hover),
            timer: DismissTimer::start(duration, now),
            hovered: false,
            created_at: now,
        };

        if let Some(evicted) = self.items.push(item) {
            debug!(id = %evicted.id, "Toast evicted by cap");
        }
        debug!(%id, ?position, "Toast shown");
        id
    }

    /// Remove by id. Removing an unknown or already removed id is a no-op.
    pub fn dismiss(&mut self, id: ToastId, now: Instant) -> bool {
        match self.items.remove_first(|item| item.id == id) {
            Some(mut item) => {
                item.timer.remove(now);
                debug!(%id, "Toast dismissed");
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        let removed = self.items.clear();
        if !removed.is_empty() {
            debug!(count = removed.len(), "Toasts cleared");
        }
    }

    /// Hover enter/leave. Pauses or resumes the timer when the toast allows it.
    pub fn set_hovered(&mut self, id: ToastId, hovered: bool, now: Instant) -> bool {
        let Some(item) = self.items.iter_mut().find(|item| item.id == id) else {
            return false;
        };
        if item.hovered == hovered {
            return false;
        }
        item.hovered = hovered;
        if item.pause_on_hover {
            if hovered {
                item.timer.pause(now);
            } else {
                item.timer.resume(now);
            }
        }
        true
    }

    /// Drop every expired toast and return their ids
    pub fn tick(&mut self, now: Instant) -> Vec<ToastId> {
        self.items
            .drain_where(|item| item.timer.is_expired(now))
            .into_iter()
            .map(|item| {
                debug!(id = %item.id, "Toast expired");
                item.id
            })
            .collect()
    }

    /// Whether any toast still needs the clock (scheduled and not sticky)
    pub fn needs_tick(&self) -> bool {
        self.items
            .iter()
            .any(|item| item.timer.phase() == TimerPhase::Scheduled && !item.timer.is_sticky())
    }

    pub fn get(&self, id: ToastId) -> Option<&ToastItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Oldest to newest
    pub fn items(&self) -> impl Iterator<Item = &ToastItem> {
        self.items.iter()
    }

    /// Toasts anchored at one position, oldest first
    pub fn at_position(&self, position: ToastPosition) -> Vec<&ToastItem> {
        self.items
            .iter()
            .filter(|item| item.position == position)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for ToastStore {
    fn default() -> Self {
        Self::new(ToastConfig::default())
    }
}

/// Show a toast through a store entity and notify observers
pub fn show_toast(store: &Entity<ToastStore>, toast: Toast, cx: &mut App) -> ToastId {
    store.update(cx, |store, cx: &mut Context<ToastStore>| {
        let id = store.push(toast, Instant::now());
        cx.notify();
        id
    })
}

/// Dismiss a toast through a store entity and notify observers
pub fn dismiss_toast(store: &Entity<ToastStore>, id: ToastId, cx: &mut App) -> bool {
    store.update(cx, |store, cx: &mut Context<ToastStore>| {
        let removed = store.dismiss(id, Instant::now());
        if removed {
            cx.notify();
        }
        removed
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::toast::ToastSeverity;
    use std::time::Duration;

    fn store(max_visible: usize) -> ToastStore {
        ToastStore::new(ToastConfig {
            max_visible,
            duration_ms: 1000,
            ..ToastConfig::default()
        })
    }

    fn messages(store: &ToastStore) -> Vec<String> {
        store.items().map(|item| item.message.to_string()).collect()
    }

    #[test]
    fn test_cap_evicts_oldest_preserving_order() {
        let now = Instant::now();
        let mut store = store(3);
        for name in ["a", "b", "c"] {
            store.push(Toast::info(name), now);
        }
        store.push(Toast::info("d"), now);
        assert_eq!(messages(&store), vec!["b", "c", "d"]);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let now = Instant::now();
        let mut store = store(3);
        let id = store.push(Toast::info("a"), now);
        store.push(Toast::info("b"), now);
        assert!(store.dismiss(id, now));
        assert!(!store.dismiss(id, now));
        assert_eq!(messages(&store), vec!["b"]);
    }

    #[test]
    fn test_tick_removes_expired_only() {
        let t0 = Instant::now();
        let mut store = store(5);
        let short = store.push(Toast::info("short").duration(Duration::from_millis(100)), t0);
        store.push(Toast::info("default"), t0);
        store.push(Toast::info("sticky").sticky(), t0);

        assert!(store.tick(t0 + Duration::from_millis(99)).is_empty());
        assert_eq!(store.tick(t0 + Duration::from_millis(100)), vec![short]);
        store.tick(t0 + Duration::from_millis(1000));
        assert_eq!(messages(&store), vec!["sticky"]);
    }

    #[test]
    fn test_hover_pauses_dismissal() {
        let t0 = Instant::now();
        let mut store = store(5);
        let id = store.push(Toast::info("hover me"), t0);

        assert!(store.set_hovered(id, true, t0 + Duration::from_millis(400)));
        assert!(store.tick(t0 + Duration::from_secs(60)).is_empty());
        store.set_hovered(id, false, t0 + Duration::from_secs(60));
        assert!(store.tick(t0 + Duration::from_millis(60_599)).is_empty());
        assert_eq!(store.tick(t0 + Duration::from_millis(60_600)), vec![id]);
    }

    #[test]
    fn test_hover_without_pause_keeps_running() {
        let t0 = Instant::now();
        let mut store = store(5);
        let id = store.push(Toast::info("no pause").pause_on_hover(false), t0);
        store.set_hovered(id, true, t0);
        assert_eq!(store.tick(t0 + Duration::from_millis(1000)), vec![id]);
    }

    #[test]
    fn test_defaults_come_from_config() {
        let t0 = Instant::now();
        let mut store = store(5);
        let id = store.push(Toast::error("boom"), t0);
        let item = store.get(id).expect("present");
        assert_eq!(item.position, ToastPosition::TopRight);
        assert_eq!(item.severity, ToastSeverity::Error);
        assert_eq!(
            item.timer.duration(),
            Some(Duration::from_millis(store.config().alert_duration_ms))
        );
    }

    #[test]
    fn test_shrinking_cap_evicts() {
        let now = Instant::now();
        let mut store = store(4);
        for name in ["a", "b", "c", "d"] {
            store.push(Toast::info(name), now);
        }
        store.set_config(ToastConfig {
            max_visible: 2,
            ..store.config().clone()
        });
        assert_eq!(messages(&store), vec!["c", "d"]);
    }
}
