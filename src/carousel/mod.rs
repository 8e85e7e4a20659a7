//! Hand carousel: the animated card-selection state machine.
//!
//! Two states: `Settled` (offset and target at zero, no pending
//! rotation) and `Rotating` (offset gliding toward the target). A
//! rotation request arriving mid-animation is discarded, not queued -
//! the core's one explicit ordering guarantee. Each completed rotation
//! advances the selected index by exactly one step, modulo hand length.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Scale lost per slot width of distance from the center.
const SCALE_FALLOFF: f32 = 0.35;
/// Smallest card scale the render query reports.
const MIN_SCALE: f32 = 0.5;

/// Carousel animation phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselPhase {
    /// No animation in flight; input is accepted.
    Settled,
    /// Offset gliding toward the target; input is discarded.
    Rotating,
}

/// A visible card slot, in slot-width units relative to screen center.
///
/// Pure render data: the renderer multiplies `offset` by its slot
/// spacing and `scale` by its card size.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardSlot {
    /// Index into the hand.
    pub hand_index: usize,
    /// Horizontal offset from center, animation included.
    pub offset: f32,
    /// Visual scale, 1.0 at center, shrinking with distance.
    pub scale: f32,
}

/// Per-combatant carousel state.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandCarousel {
    selected: usize,
    offset: f32,
    target_offset: f32,
    /// -1, 0, or +1; nonzero exactly while an animation is in flight.
    pending_rotation: i8,
    /// Offset advance per tick, in slot widths.
    speed: f32,
}

impl HandCarousel {
    /// Create a settled carousel with slot 0 selected.
    #[must_use]
    pub fn new(speed: f32) -> Self {
        Self {
            selected: 0,
            offset: 0.0,
            target_offset: 0.0,
            pending_rotation: 0,
            speed,
        }
    }

    /// Currently selected hand index.
    #[must_use]
    pub fn selected(&self) -> usize {
        self.selected
    }

    #[must_use]
    pub fn phase(&self) -> CarouselPhase {
        if self.pending_rotation == 0 {
            CarouselPhase::Settled
        } else {
            CarouselPhase::Rotating
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.phase() == CarouselPhase::Settled
    }

    /// Request a rotation toward the previous card.
    ///
    /// Legal only from `Settled` with at least two cards in hand.
    /// Returns `false` when the request is discarded.
    pub fn cycle_left(&mut self, hand_len: usize) -> bool {
        if !self.is_settled() || hand_len < 2 {
            return false;
        }
        self.pending_rotation = 1;
        self.target_offset = -1.0;
        true
    }

    /// Request a rotation toward the next card.
    ///
    /// Legal only from `Settled` with at least two cards in hand.
    /// Returns `false` when the request is discarded.
    pub fn cycle_right(&mut self, hand_len: usize) -> bool {
        if !self.is_settled() || hand_len < 2 {
            return false;
        }
        self.pending_rotation = -1;
        self.target_offset = 1.0;
        true
    }

    /// Advance the animation one tick.
    ///
    /// When the offset lands within one step of the target it snaps,
    /// the selected index advances exactly once, and the carousel
    /// returns to `Settled`. Returns `true` on that completing tick.
    pub fn tick(&mut self, hand_len: usize) -> bool {
        if self.pending_rotation == 0 {
            return false;
        }

        let delta = self.target_offset - self.offset;
        self.offset += self.speed * delta.signum();

        if (self.offset - self.target_offset).abs() < self.speed {
            self.offset = self.target_offset;
            if hand_len > 0 {
                let len = hand_len as isize;
                let next = (self.selected as isize - self.pending_rotation as isize)
                    .rem_euclid(len);
                self.selected = next as usize;
            }
            self.offset = 0.0;
            self.target_offset = 0.0;
            self.pending_rotation = 0;
            return true;
        }

        false
    }

    /// Clamp the selection after the hand shrinks.
    pub fn clamp_selection(&mut self, hand_len: usize) {
        if hand_len == 0 {
            self.selected = 0;
        } else {
            self.selected = self.selected.min(hand_len - 1);
        }
    }

    /// The three visible slots (previous, selected, next), shifted by
    /// the animation offset and scaled down away from center.
    ///
    /// Pure query: hands of zero or one card yield zero or one slot.
    #[must_use]
    pub fn visible_slots(&self, hand_len: usize) -> SmallVec<[CardSlot; 3]> {
        let mut slots = SmallVec::new();
        if hand_len == 0 {
            return slots;
        }
        if hand_len == 1 {
            slots.push(self.slot_at(0, 0));
            return slots;
        }

        for rel in [-1isize, 0, 1] {
            let index = (self.selected as isize + rel).rem_euclid(hand_len as isize);
            slots.push(self.slot_at(index as usize, rel));
        }
        slots
    }

    fn slot_at(&self, hand_index: usize, rel: isize) -> CardSlot {
        let offset = rel as f32 + self.offset;
        let scale = (1.0 - SCALE_FALLOFF * offset.abs()).max(MIN_SCALE);
        CardSlot {
            hand_index,
            offset,
            scale,
        }
    }
}
