//! Limit break: the deck-exhaustion fallback.
//!
//! When a combatant's hand, draw pile, and discard pile are all empty,
//! the limit break grants a fixed number of strong, resource-free
//! attacks. `active` implies `remaining_turns > 0`; consuming the last
//! charge deactivates it.

use serde::{Deserialize, Serialize};

/// Limit break state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LimitBreakState {
    active: bool,
    remaining_turns: u32,
}

impl LimitBreakState {
    /// Inactive, no charges.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    #[must_use]
    pub fn remaining_turns(&self) -> u32 {
        self.remaining_turns
    }

    /// Activate with the given number of charges.
    ///
    /// Activation with zero charges is ignored; the invariant is that
    /// an active limit break always has at least one charge left.
    pub fn activate(&mut self, duration: u32) {
        if duration > 0 {
            self.active = true;
            self.remaining_turns = duration;
        }
    }

    /// Spend one charge. Returns `true` if a charge was available.
    ///
    /// Spending the last charge deactivates the limit break.
    pub fn consume(&mut self) -> bool {
        if !self.active {
            return false;
        }
        self.remaining_turns -= 1;
        if self.remaining_turns == 0 {
            self.active = false;
        }
        true
    }

    /// Explicit reset to the inactive state.
    pub fn reset(&mut self) {
        self.active = false;
        self.remaining_turns = 0;
    }
}
