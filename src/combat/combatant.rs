//! Combatants: stats, deck, and hand bookkeeping.
//!
//! A combatant owns its deck and hand exclusively; the three card
//! collections (draw pile, discard pile, hand) partition the deck's
//! original card set at every observation point. The hand mutators here
//! are the only code that moves cards between those collections.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::kinematics::Kinematics;
use super::limit_break::LimitBreakState;
use super::stats::Stats;
use crate::cards::{Card, Deck, DeckList};
use crate::core::{GameRng, StageScaling};

/// Inline capacity for the hand; legacy hands hold 3 cards.
const HAND_INLINE: usize = 8;

/// One side of a battle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub stats: Stats,
    pub limit_break: LimitBreakState,
    /// Present only in the arena build.
    pub kinematics: Option<Kinematics>,
    deck: Deck,
    hand: SmallVec<[Card; HAND_INLINE]>,
}

impl Combatant {
    /// Create a combatant: build and shuffle the deck from `list`, then
    /// draw the starting hand.
    ///
    /// If the draw pile empties mid-fill the hand simply ends up short;
    /// that is valid, not an error.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        stats: Stats,
        list: &DeckList,
        hand_size: usize,
        rng: &mut GameRng,
    ) -> Self {
        let mut combatant = Self {
            name: name.into(),
            stats,
            limit_break: LimitBreakState::new(),
            kinematics: None,
            deck: Deck::from_list(list, rng),
            hand: SmallVec::new(),
        };
        combatant.draw_starting_hand(hand_size);
        combatant
    }

    /// Create the enemy for a stage, with scaled stats.
    #[must_use]
    pub fn enemy_for_stage(
        stage: u32,
        scaling: &StageScaling,
        list: &DeckList,
        hand_size: usize,
        rng: &mut GameRng,
    ) -> Self {
        let stats = Stats::new(scaling.enemy_health(stage), scaling.enemy_attack(stage));
        Self::new(format!("Enemy {stage}"), stats, list, hand_size, rng)
    }

    /// Create a combatant from an explicit, pre-ordered deck.
    ///
    /// No shuffle happens; the top cards of the draw pile become the
    /// starting hand. Useful when a known draw order is needed.
    #[must_use]
    pub fn with_deck(
        name: impl Into<String>,
        stats: Stats,
        deck: Deck,
        hand_size: usize,
    ) -> Self {
        let mut combatant = Self {
            name: name.into(),
            stats,
            limit_break: LimitBreakState::new(),
            kinematics: None,
            deck,
            hand: SmallVec::new(),
        };
        combatant.draw_starting_hand(hand_size);
        combatant
    }

    /// Attach a kinematics capability (arena build).
    #[must_use]
    pub fn with_kinematics(mut self, kinematics: Kinematics) -> Self {
        self.kinematics = Some(kinematics);
        self
    }

    fn draw_starting_hand(&mut self, hand_size: usize) {
        while self.hand.len() < hand_size {
            match self.deck.draw() {
                Some(card) => self.hand.push(card),
                None => break,
            }
        }
    }

    // === Hand access ===

    /// The current hand, in slot order.
    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    #[must_use]
    pub fn hand_len(&self) -> usize {
        self.hand.len()
    }

    #[must_use]
    pub fn is_hand_empty(&self) -> bool {
        self.hand.is_empty()
    }

    /// The owned deck piles (read only; mutation goes through the hand
    /// operations below).
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    // === Hand mutation (used by the turn resolver) ===

    /// Remove and return the card at `pos`, or `None` if out of range.
    pub fn take_card(&mut self, pos: usize) -> Option<Card> {
        if pos < self.hand.len() {
            Some(self.hand.remove(pos))
        } else {
            None
        }
    }

    /// Move a played card to the discard pile.
    pub fn discard(&mut self, card: Card) {
        self.deck.discard(card);
    }

    /// Draw one replacement card and insert it at `pos`.
    ///
    /// Returns `false` when the draw pile is empty; the slot is not
    /// refilled and the hand stays one card shorter.
    pub fn refill_slot(&mut self, pos: usize) -> bool {
        match self.deck.draw() {
            Some(card) => {
                let pos = pos.min(self.hand.len());
                self.hand.insert(pos, card);
                true
            }
            None => false,
        }
    }

    /// Draw one card to the end of the hand (enemy empty-hand retry).
    pub fn draw_to_hand(&mut self) -> bool {
        match self.deck.draw() {
            Some(card) => {
                self.hand.push(card);
                true
            }
            None => false,
        }
    }

    // === Exhaustion ===

    /// Total deck exhaustion: hand, draw pile, and discard pile all
    /// empty. This - not mere hand exhaustion - is the limit break
    /// trigger condition.
    #[must_use]
    pub fn is_fully_exhausted(&self) -> bool {
        self.hand.is_empty() && self.deck.is_empty()
    }

    /// Cards in hand plus both piles; constant for the combatant's
    /// lifetime (conservation invariant).
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.hand.len() + self.deck.len()
    }
}
