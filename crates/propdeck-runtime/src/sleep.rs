#![forbid(unsafe_code)]

//! Idle-driven sleep state.
//!
//! The host feeds the elapsed idle time into [`SleepStateMachine::tick`] on
//! its own schedule; the machine classifies it against the two thresholds
//! and reports only *transitions*, so upstream can notify subscribers
//! exactly once per state change. Waking is external: any input event
//! resets the idle clock upstream and the next tick classifies back to
//! awake.

use std::time::Duration;

use tracing::debug;

/// Sleep state of the display session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SleepState {
    /// Recent activity.
    #[default]
    Awake,
    /// Idle past the short threshold.
    ShortIdle,
    /// Idle past the short plus long thresholds.
    LongIdle,
}

/// Threshold classifier with transition de-duplication.
#[derive(Debug, Clone)]
pub struct SleepStateMachine {
    short: Duration,
    long: Duration,
    state: SleepState,
}

impl SleepStateMachine {
    /// Default short threshold.
    pub const DEFAULT_SHORT: Duration = Duration::from_secs(60);
    /// Default long threshold.
    pub const DEFAULT_LONG: Duration = Duration::from_secs(120);

    /// Create a machine with explicit thresholds. Long sleep starts after
    /// `short + long` of idle, matching the configuration semantics where
    /// the long timer runs on top of the short one.
    #[must_use]
    pub const fn new(short: Duration, long: Duration) -> Self {
        Self {
            short,
            long,
            state: SleepState::Awake,
        }
    }

    /// Current state.
    #[must_use]
    pub const fn state(&self) -> SleepState {
        self.state
    }

    /// Whether the session is in either idle state.
    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.state != SleepState::Awake
    }

    /// Classify the current idle duration. Returns the new state on a
    /// transition and `None` while the state is unchanged.
    pub fn tick(&mut self, idle: Duration) -> Option<SleepState> {
        let target = if idle >= self.short + self.long {
            SleepState::LongIdle
        } else if idle >= self.short {
            SleepState::ShortIdle
        } else {
            SleepState::Awake
        };
        if target == self.state {
            return None;
        }
        debug!(from = ?self.state, to = ?target, "sleep transition");
        self.state = target;
        Some(target)
    }
}

impl Default for SleepStateMachine {
    fn default() -> Self {
        Self::new(Self::DEFAULT_SHORT, Self::DEFAULT_LONG)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn default_thresholds() {
        let mut sm = SleepStateMachine::default();
        assert_eq!(sm.tick(secs(59)), None);
        assert_eq!(sm.tick(secs(60)), Some(SleepState::ShortIdle));
        assert_eq!(sm.tick(secs(179)), None);
        assert_eq!(sm.tick(secs(180)), Some(SleepState::LongIdle));
    }

    #[test]
    fn transitions_fire_exactly_once() {
        let mut sm = SleepStateMachine::new(secs(10), secs(20));
        assert_eq!(sm.tick(secs(5)), None);
        assert_eq!(sm.tick(secs(12)), Some(SleepState::ShortIdle));
        assert_eq!(sm.tick(secs(13)), None);
        assert_eq!(sm.tick(secs(29)), None);
        assert_eq!(sm.tick(secs(30)), Some(SleepState::LongIdle));
        assert_eq!(sm.tick(secs(31)), None);
    }

    #[test]
    fn wake_up_transitions_back() {
        let mut sm = SleepStateMachine::new(secs(10), secs(20));
        sm.tick(secs(40));
        assert_eq!(sm.state(), SleepState::LongIdle);
        assert!(sm.is_idle());
        assert_eq!(sm.tick(secs(0)), Some(SleepState::Awake));
        assert!(!sm.is_idle());
        assert_eq!(sm.tick(secs(0)), None);
    }

    #[test]
    fn long_idle_is_reachable_in_one_tick() {
        let mut sm = SleepStateMachine::new(secs(10), secs(20));
        assert_eq!(sm.tick(secs(100)), Some(SleepState::LongIdle));
    }
}
