//! Dismiss Timer - Pausable Auto-Removal Clock
//!
//! ```text
//! Scheduled ──pause──► Paused ──resume──► Scheduled
//!     │                   │
//!     └──expire/close─────┴──close──► Removed
//! ```
//!
//! Elapsed time only accumulates while scheduled, so the visible time before
//! expiry equals the configured duration no matter how often it pauses.
//! Time is passed in rather than read so the clock stays testable.

use std::time::{Duration, Instant};

/// Lifecycle phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Scheduled,
    Paused,
    Removed,
}

/// Auto-dismiss clock for one transient item
#[derive(Debug, Clone)]
pub struct DismissTimer {
    /// `None` for sticky items
    duration: Option<Duration>,
    /// Running time banked by earlier scheduled intervals
    banked: Duration,
    /// Start of the current scheduled interval
    running_since: Option<Instant>,
    removed: bool,
}

impl DismissTimer {
    /// Start a scheduled timer at `now`
    pub fn start(duration: Option<Duration>, now: Instant) -> Self {
        Self {
            duration,
            banked: Duration::ZERO,
            running_since: Some(now),
            removed: false,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        if self.removed {
            TimerPhase::Removed
        } else if self.running_since.is_some() {
            TimerPhase::Scheduled
        } else {
            TimerPhase::Paused
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    pub fn is_sticky(&self) -> bool {
        self.duration.is_none()
    }

    /// Total scheduled time observed up to `now`
    pub fn elapsed(&self, now: Instant) -> Duration {
        let running = self
            .running_since
            .map(|since| now.saturating_duration_since(since))
            .unwrap_or_default();
        self.banked + running
    }

    /// Time left before expiry; `None` for sticky items
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.duration
            .map(|duration| duration.saturating_sub(self.elapsed(now)))
    }

    /// Freeze the clock. Returns false if not currently scheduled.
    pub fn pause(&mut self, now: Instant) -> bool {
        match (self.phase(), self.running_since) {
            (TimerPhase::Scheduled, Some(since)) => {
                self.banked += now.saturating_duration_since(since);
                self.running_since = None;
                true
            }
            _ => false,
        }
    }

    /// Restart the clock with the banked time preserved. Returns false if not paused.
    pub fn resume(&mut self, now: Instant) -> bool {
        if self.phase() != TimerPhase::Paused {
            return false;
        }
        self.running_since = Some(now);
        true
    }

    /// Mark as removed; idempotent
    pub fn remove(&mut self, now: Instant) {
        if let Some(since) = self.running_since.take() {
            self.banked += now.saturating_duration_since(since);
        }
        self.removed = true;
    }

    /// Whether the full duration has run while scheduled
    pub fn is_expired(&self, now: Instant) -> bool {
        !self.removed
            && self
                .duration
                .is_some_and(|duration| self.elapsed(now) >= duration)
    }

    /// Remaining share as a percentage in `[0, 100]`, never increasing over time.
    /// Sticky items stay at 100.
    pub fn progress_percent(&self, now: Instant) -> f32 {
        let Some(duration) = self.duration else {
            return 100.0;
        };
        if duration.is_zero() {
            return 0.0;
        }
        let used = self.elapsed(now).as_secs_f32() / duration.as_secs_f32();
        (100.0 * (1.0 - used)).clamp(0.0, 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_expires_after_duration() {
        let t0 = Instant::now();
        let timer = DismissTimer::start(Some(ms(1000)), t0);
        assert!(!timer.is_expired(t0 + ms(999)));
        assert!(timer.is_expired(t0 + ms(1000)));
    }

    #[test]
    fn test_pause_preserves_remaining() {
        let t0 = Instant::now();
        let mut timer = DismissTimer::start(Some(ms(1000)), t0);

        assert!(timer.pause(t0 + ms(300)));
        assert_eq!(timer.phase(), TimerPhase::Paused);
        // Long hover does not consume time
        assert_eq!(timer.remaining(t0 + ms(10_000)), Some(ms(700)));
        assert!(!timer.is_expired(t0 + ms(10_000)));

        assert!(timer.resume(t0 + ms(10_000)));
        assert!(!timer.is_expired(t0 + ms(10_699)));
        assert!(timer.is_expired(t0 + ms(10_700)));
    }

    #[test]
    fn test_many_pauses_sum_to_duration() {
        let t0 = Instant::now();
        let mut timer = DismissTimer::start(Some(ms(1000)), t0);
        let mut now = t0;
        let mut visible = Duration::ZERO;

        // Alternate 100ms visible with 250ms hovered
        for _ in 0..9 {
            now += ms(100);
            visible += ms(100);
            timer.pause(now);
            now += ms(250);
            timer.resume(now);
        }
        assert_eq!(visible, ms(900));
        assert!(!timer.is_expired(now + ms(99)));
        assert!(timer.is_expired(now + ms(100)));
    }

    #[test]
    fn test_pause_resume_guards() {
        let t0 = Instant::now();
        let mut timer = DismissTimer::start(Some(ms(500)), t0);
        assert!(!timer.resume(t0));
        assert!(timer.pause(t0));
        assert!(!timer.pause(t0));
        timer.remove(t0);
        assert_eq!(timer.phase(), TimerPhase::Removed);
        assert!(!timer.resume(t0));
        assert!(!timer.is_expired(t0 + ms(10_000)));
    }

    #[test]
    fn test_progress_decreases_monotonically() {
        let t0 = Instant::now();
        let mut timer = DismissTimer::start(Some(ms(1000)), t0);
        let mut last = timer.progress_percent(t0);
        assert_eq!(last, 100.0);
        for step in 1..=24 {
            let now = t0 + ms(step * 50);
            if step == 8 {
                timer.pause(now);
            }
            if step == 12 {
                timer.resume(now);
            }
            let progress = timer.progress_percent(now);
            assert!(progress <= last);
            last = progress;
        }
        assert_eq!(last, 0.0);
    }

    #[test]
    fn test_sticky_never_expires() {
        let t0 = Instant::now();
        let timer = DismissTimer::start(None, t0);
        assert!(timer.is_sticky());
        assert!(!timer.is_expired(t0 + Duration::from_secs(3600)));
        assert_eq!(timer.progress_percent(t0 + Duration::from_secs(3600)), 100.0);
        assert_eq!(timer.remaining(t0), None);
    }
}
