// Per-banner pull state and roll results
use serde::{Deserialize, Serialize};

use crate::data::Rarity;

/// Per-banner, per-session counter state.
///
/// Mutated exclusively by the roll operations: callers thread state in and
/// get the successor state out, then persist it however they like. Reset is
/// a plain reassignment to `PullState::default()` owned by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullState {
    /// Pulls since the last 6★ result; drives soft-pity escalation.
    pub pity_counter: u32,
    /// Pulls since the last 5★-or-above result; drives the hard guarantee.
    pub guarantee_counter: u32,
    /// Latched true once any 5★-or-above has dropped this session.
    /// Display-only: the engine sets it but never reads it for decisioning.
    pub first_rare_obtained: bool,
}

impl PullState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Successor state after a pull of the given rarity.
    pub fn advance(self, rarity: Rarity) -> Self {
        Self {
            pity_counter: if rarity == Rarity::Six { 0 } else { self.pity_counter + 1 },
            guarantee_counter: if rarity.is_rare() { 0 } else { self.guarantee_counter + 1 },
            first_rare_obtained: self.first_rare_obtained || rarity.is_rare(),
        }
    }
}

/// One roll outcome. Immutable; history management is the caller's concern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PullResult {
    pub operator_id: String,
    pub rarity: Rarity,
    /// Whether the operator came from the banner's featured (rate-up) subset.
    pub featured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_advance_low_rarity_increments_both() {
        let state = PullState::new().advance(Rarity::Three);
        assert_eq!(state.pity_counter, 1);
        assert_eq!(state.guarantee_counter, 1);
        assert!(!state.first_rare_obtained);
    }

    #[test]
    fn test_advance_five_resets_guarantee_only() {
        let state = PullState { pity_counter: 30, guarantee_counter: 7, first_rare_obtained: false };
        let next = state.advance(Rarity::Five);
        assert_eq!(next.pity_counter, 31);
        assert_eq!(next.guarantee_counter, 0);
        assert!(next.first_rare_obtained);
    }

    #[test]
    fn test_advance_six_resets_both() {
        let state = PullState { pity_counter: 61, guarantee_counter: 4, first_rare_obtained: true };
        let next = state.advance(Rarity::Six);
        assert_eq!(next.pity_counter, 0);
        assert_eq!(next.guarantee_counter, 0);
        assert!(next.first_rare_obtained);
    }

    #[test]
    fn test_first_rare_flag_latches() {
        let state = PullState { pity_counter: 0, guarantee_counter: 0, first_rare_obtained: true };
        // A low-rarity pull never clears the latch.
        assert!(state.advance(Rarity::Three).first_rare_obtained);
    }
}
