//! Repeating refresh timer.
//!
//! The timer never sleeps or spawns anything itself. The caller passes in
//! the current instant and asks whether a tick is due, which lets the UI
//! loop and the tests drive it the same way.

use std::time::{Duration, Instant};

use crate::constants::DEFAULT_REFRESH_INTERVAL;

/// Fixed-interval timer re-armed after each completed tick.
///
/// The interval is measured from the end of one tick to the start of the
/// next, so a slow tick pushes every later tick back.
#[derive(Debug, Clone)]
pub struct RefreshTimer {
    interval: Duration,
    next_due: Option<Instant>,
    completed_ticks: u64,
}

impl Default for RefreshTimer {
    fn default() -> Self {
        Self::new(DEFAULT_REFRESH_INTERVAL)
    }
}

impl RefreshTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
            completed_ticks: 0,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Arms the first tick one interval after `now`. No-op when already running.
    pub fn start(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    /// Cancels the pending tick. A stopped timer is never due.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.next_due.is_some_and(|due| now >= due)
    }

    /// Time left before the next tick; zero when overdue, `None` when stopped.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }

    /// Records a finished tick and schedules exactly one successor.
    ///
    /// `now` must be the instant the tick finished. Ignored when the timer
    /// was stopped while the tick ran.
    pub fn complete_tick(&mut self, now: Instant) {
        if self.next_due.is_some() {
            self.completed_ticks += 1;
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn completed_ticks(&self) -> u64 {
        self.completed_ticks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_new_timer_is_stopped() {
        let timer = RefreshTimer::new(SECOND);
        let now = Instant::now();
        assert!(!timer.is_running());
        assert!(!timer.is_due(now + SECOND * 10));
        assert_eq!(timer.time_until_due(now), None);
    }

    #[test]
    fn test_due_after_interval() {
        let mut timer = RefreshTimer::new(SECOND);
        let t0 = Instant::now();
        timer.start(t0);

        assert!(!timer.is_due(t0));
        assert_eq!(timer.time_until_due(t0), Some(SECOND));
        assert!(timer.is_due(t0 + SECOND));
        assert_eq!(timer.time_until_due(t0 + SECOND * 3), Some(Duration::ZERO));
    }

    #[test]
    fn test_rearm_measures_from_tick_end() {
        let mut timer = RefreshTimer::new(SECOND);
        let t0 = Instant::now();
        timer.start(t0);

        // Tick started on time but took 400ms.
        let finished = t0 + SECOND + Duration::from_millis(400);
        timer.complete_tick(finished);

        assert_eq!(timer.completed_ticks(), 1);
        assert!(!timer.is_due(t0 + SECOND * 2));
        assert!(timer.is_due(finished + SECOND));
    }

    #[test]
    fn test_complete_tick_schedules_once() {
        let mut timer = RefreshTimer::new(SECOND);
        let t0 = Instant::now();
        timer.start(t0);
        timer.complete_tick(t0 + SECOND);

        assert!(!timer.is_due(t0 + SECOND));
        assert_eq!(timer.time_until_due(t0 + SECOND), Some(SECOND));
    }

    #[test]
    fn test_start_twice_keeps_schedule() {
        let mut timer = RefreshTimer::new(SECOND);
        let t0 = Instant::now();
        timer.start(t0);
        timer.start(t0 + Duration::from_millis(900));
        assert!(timer.is_due(t0 + SECOND));
    }

    #[test]
    fn test_stop_cancels_and_ignores_late_completion() {
        let mut timer = RefreshTimer::new(SECOND);
        let t0 = Instant::now();
        timer.start(t0);
        timer.stop();
        timer.complete_tick(t0 + SECOND);

        assert!(!timer.is_running());
        assert!(!timer.is_due(t0 + SECOND * 5));
        assert_eq!(timer.completed_ticks(), 0);
    }
}
