//! Cumulative answering-time tracking.
//!
//! A `TimerState` is a plain value: every transition takes the current time in
//! epoch milliseconds and returns the next state, so no real time has to pass in
//! tests.

use serde::{Deserialize, Serialize};

/// Paused/running stopwatch with millisecond resolution.
///
/// `accumulated_ms` only grows, and only when a running segment is closed by
/// [`TimerState::pause`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerState {
    accumulated_ms: u64,
    run_start_ms: Option<i64>,
}

impl TimerState {
    /// A paused stopwatch at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a run segment at `now_ms`. Already running: unchanged.
    #[must_use]
    pub fn resume(self, now_ms: i64) -> Self {
        if self.run_start_ms.is_some() {
            return self;
        }
        Self {
            run_start_ms: Some(now_ms),
            ..self
        }
    }

    /// Close the running segment at `now_ms`. Already paused: unchanged.
    #[must_use]
    pub fn pause(self, now_ms: i64) -> Self {
        let Some(start) = self.run_start_ms else {
            return self;
        };
        Self {
            accumulated_ms: self.accumulated_ms.saturating_add(span_ms(start, now_ms)),
            run_start_ms: None,
        }
    }

    /// Total answering time as of `now_ms`, including the open segment.
    #[must_use]
    pub fn elapsed(&self, now_ms: i64) -> u64 {
        match self.run_start_ms {
            Some(start) => self.accumulated_ms.saturating_add(span_ms(start, now_ms)),
            None => self.accumulated_ms,
        }
    }

    #[must_use]
    pub fn accumulated_ms(&self) -> u64 {
        self.accumulated_ms
    }

    #[must_use]
    pub fn run_start_ms(&self) -> Option<i64> {
        self.run_start_ms
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run_start_ms.is_some()
    }
}

// A clock stepping backwards contributes nothing rather than shrinking the total.
fn span_ms(start: i64, now: i64) -> u64 {
    u64::try_from(now.saturating_sub(start)).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const T0: i64 = 1_700_000_000_000;

    #[test]
    fn new_timer_is_paused_at_zero() {
        let timer = TimerState::new();
        assert!(!timer.is_running());
        assert_eq!(timer.elapsed(T0), 0);
    }

    #[test]
    fn resume_is_idempotent() {
        let timer = TimerState::new().resume(T0);
        let again = timer.resume(T0 + 500);
        assert_eq!(again.run_start_ms(), Some(T0));
        assert_eq!(again.elapsed(T0 + 700), 700);
    }

    #[test]
    fn pause_is_idempotent() {
        let timer = TimerState::new().resume(T0).pause(T0 + 300);
        let again = timer.pause(T0 + 900);
        assert_eq!(again.accumulated_ms(), 300);
        assert_eq!(again.elapsed(T0 + 5_000), 300);
    }

    #[test]
    fn elapsed_equals_accumulated_right_after_pause() {
        let timer = TimerState::new().resume(T0).pause(T0 + 1_234);
        assert_eq!(timer.elapsed(T0 + 1_234), timer.accumulated_ms());
        assert_eq!(timer.accumulated_ms(), 1_234);
    }

    #[test]
    fn resume_boundary_adds_no_time() {
        let paused = TimerState::new().resume(T0).pause(T0 + 400);
        let before = paused.elapsed(T0 + 1_400);
        let resumed = paused.resume(T0 + 1_400);
        assert_eq!(resumed.elapsed(T0 + 1_400), before);
    }

    #[test]
    fn paused_window_is_excluded_across_questions() {
        // answer after 800ms, 1s reveal, answer after 600ms
        let timer = TimerState::new()
            .resume(T0)
            .pause(T0 + 800)
            .resume(T0 + 1_800)
            .pause(T0 + 2_400);
        assert_eq!(timer.accumulated_ms(), 1_400);
    }

    #[test]
    fn elapsed_is_monotonic_in_now() {
        let timer = TimerState::new().resume(T0).pause(T0 + 50).resume(T0 + 100);
        let mut last = 0;
        for step in 0..50 {
            let now = T0 + 90 + step * 37;
            let value = timer.elapsed(now);
            assert!(value >= last, "elapsed went backwards at {now}");
            last = value;
        }
    }

    #[test]
    fn backwards_clock_never_decreases_total() {
        let timer = TimerState::new().resume(T0).pause(T0 + 200).resume(T0 + 500);
        assert_eq!(timer.elapsed(T0 + 100), 200);
        assert_eq!(timer.pause(T0 + 100).accumulated_ms(), 200);
    }
}
