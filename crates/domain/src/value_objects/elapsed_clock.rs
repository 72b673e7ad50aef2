//! Elapsed play time for a single puzzle session

use std::fmt;

/// Whole seconds spent on the current game
///
/// Driven by a one-second display timer; it never runs backwards and is
/// only reset when a different game is shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ElapsedClock {
    seconds: u64,
}

impl ElapsedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seconds(&self) -> u64 {
        self.seconds
    }

    /// Advance by one second
    pub fn tick(&mut self) {
        self.seconds = self.seconds.saturating_add(1);
    }

    pub fn reset(&mut self) {
        self.seconds = 0;
    }
}

/// `m:ss`, minutes unbounded
impl fmt::Display for ElapsedClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{:02}", self.seconds / 60, self.seconds % 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clock_at(seconds: u64) -> ElapsedClock {
        let mut clock = ElapsedClock::new();
        for _ in 0..seconds {
            clock.tick();
        }
        clock
    }

    #[test]
    fn starts_at_zero() {
        assert_eq!(ElapsedClock::new().to_string(), "0:00");
    }

    #[test]
    fn pads_seconds_to_two_digits() {
        assert_eq!(clock_at(7).to_string(), "0:07");
        assert_eq!(clock_at(65).to_string(), "1:05");
    }

    #[test]
    fn minutes_are_not_wrapped_into_hours() {
        assert_eq!(clock_at(3_725).to_string(), "62:05");
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut clock = clock_at(30);
        clock.reset();
        assert_eq!(clock.seconds(), 0);
    }
}
