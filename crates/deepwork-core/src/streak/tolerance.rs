//! Consecutive-miss tracking.
//!
//! ```text
//!             miss               miss
//! Counting ---------> Tolerating ------> Broken
//!    ^                    |
//!    +-------- hit -------+
//! ```
//!
//! `Broken` is terminal: once two workdays in a row are missed, the walk
//! stops and no later event changes the outcome.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissState {
    /// No pending misses.
    Counting,
    /// One workday missed since the last hit.
    Tolerating,
    /// Two consecutive workdays missed.
    Broken,
}

impl MissState {
    pub fn consecutive_misses(self) -> u32 {
        match self {
            MissState::Counting => 0,
            MissState::Tolerating => 1,
            MissState::Broken => 2,
        }
    }
}

/// Drives [`MissState`] from per-workday hit/miss events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissTracker {
    state: MissState,
    used_tolerance: bool,
}

impl Default for MissTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl MissTracker {
    pub fn new() -> Self {
        Self {
            state: MissState::Counting,
            used_tolerance: false,
        }
    }

    pub fn state(&self) -> MissState {
        self.state
    }

    /// Whether the tracker has ever entered `Tolerating`.
    pub fn used_tolerance(&self) -> bool {
        self.used_tolerance
    }

    pub fn consecutive_misses(&self) -> u32 {
        self.state.consecutive_misses()
    }

    /// Workday with an achievement.
    pub fn hit(&mut self) -> MissState {
        if self.state != MissState::Broken {
            self.state = MissState::Counting;
        }
        self.state
    }

    /// Workday without an achievement.
    pub fn miss(&mut self) -> MissState {
        self.state = match self.state {
            MissState::Counting => {
                self.used_tolerance = true;
                MissState::Tolerating
            }
            MissState::Tolerating | MissState::Broken => MissState::Broken,
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_counting_without_tolerance() {
        let tracker = MissTracker::new();
        assert_eq!(tracker.state(), MissState::Counting);
        assert_eq!(tracker.consecutive_misses(), 0);
        assert!(!tracker.used_tolerance());
    }

    #[test]
    fn single_miss_is_tolerated_and_remembered() {
        let mut tracker = MissTracker::new();
        assert_eq!(tracker.miss(), MissState::Tolerating);
        assert_eq!(tracker.consecutive_misses(), 1);
        assert_eq!(tracker.hit(), MissState::Counting);
        assert_eq!(tracker.consecutive_misses(), 0);
        assert!(tracker.used_tolerance());
    }

    #[test]
    fn second_consecutive_miss_breaks() {
        let mut tracker = MissTracker::new();
        tracker.miss();
        assert_eq!(tracker.miss(), MissState::Broken);
        assert_eq!(tracker.state(), MissState::Broken);
        assert_eq!(tracker.consecutive_misses(), 2);
    }

    #[test]
    fn broken_is_terminal() {
        let mut tracker = MissTracker::new();
        tracker.miss();
        tracker.miss();
        assert_eq!(tracker.hit(), MissState::Broken);
        assert_eq!(tracker.miss(), MissState::Broken);
    }

    #[test]
    fn alternating_misses_never_break() {
        let mut tracker = MissTracker::new();
        for _ in 0..10 {
            tracker.hit();
            tracker.miss();
        }
        assert_eq!(tracker.state(), MissState::Tolerating);
        assert!(tracker.used_tolerance());
    }
}
