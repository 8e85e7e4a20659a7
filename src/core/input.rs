//! Input surface fed to the core by the renderer collaborator.
//!
//! The core never polls devices. Each tick it receives the discrete
//! events that fired since the last tick (edge-triggered) plus a
//! snapshot of held movement keys (level-triggered, consumed only by
//! the kinematics integration).

use serde::{Deserialize, Serialize};

/// A discrete, edge-triggered input event.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    /// Rotate the hand carousel one slot to the left.
    CycleLeft,
    /// Rotate the hand carousel one slot to the right.
    CycleRight,
    /// Play the selected card (or limit-break attack).
    Confirm,
    /// End the encounter.
    Quit,
}

/// Level-triggered snapshot of held movement keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyState {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
}

impl KeyState {
    /// Net horizontal direction: -1 (left), 0, or +1 (right).
    ///
    /// Both keys held cancel out.
    #[must_use]
    pub fn horizontal(&self) -> i32 {
        i32::from(self.right) - i32::from(self.left)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horizontal_direction() {
        assert_eq!(KeyState::default().horizontal(), 0);

        let left = KeyState {
            left: true,
            ..Default::default()
        };
        assert_eq!(left.horizontal(), -1);

        let right = KeyState {
            right: true,
            ..Default::default()
        };
        assert_eq!(right.horizontal(), 1);

        let both = KeyState {
            left: true,
            right: true,
            jump: false,
        };
        assert_eq!(both.horizontal(), 0);
    }
}
