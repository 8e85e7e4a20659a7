//! Draw and discard piles.
//!
//! A deck is shuffled exactly once, at construction. There is no
//! reshuffle-discard-into-draw operation anywhere: running dry is a
//! deliberate scarcity mechanic that feeds the limit break.
//!
//! Every card created for a deck is, at all times, in exactly one of
//! {draw pile, discard pile, the owning combatant's hand}. The deck
//! tracks the two piles; the hand belongs to the combatant.

use serde::{Deserialize, Serialize};

use super::card::Card;
use super::effect::CardKind;
use crate::core::GameRng;

/// An ordered list of `(kind, count)` entries describing a deck before
/// it is shuffled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    entries: Vec<(CardKind, usize)>,
}

impl DeckList {
    /// Build a deck list from `(kind, count)` entries.
    #[must_use]
    pub fn new(entries: impl IntoIterator<Item = (CardKind, usize)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    /// The deck the legacy prototypes dealt to both sides:
    /// 3x Attack, 2x Heal, 2x Defense, 2x Buff.
    #[must_use]
    pub fn standard() -> Self {
        Self::new([
            (CardKind::Attack, 3),
            (CardKind::Heal, 2),
            (CardKind::Defense, 2),
            (CardKind::Buff, 2),
        ])
    }

    /// Total number of cards described.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.entries.iter().map(|(_, n)| n).sum()
    }

    /// Materialize the cards, in list order (unshuffled).
    #[must_use]
    pub fn cards(&self) -> Vec<Card> {
        self.entries
            .iter()
            .flat_map(|&(kind, count)| (0..count).map(move |_| Card::basic(kind)))
            .collect()
    }
}

/// A combatant's draw and discard piles.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    /// Face-down stack; the top is the end of the vec.
    draw_pile: Vec<Card>,
    /// Played cards, never reshuffled back.
    discard_pile: Vec<Card>,
}

impl Deck {
    /// Build a deck from a list, shuffling the draw pile once.
    #[must_use]
    pub fn from_list(list: &DeckList, rng: &mut GameRng) -> Self {
        let mut draw_pile = list.cards();
        rng.shuffle(&mut draw_pile);
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Build a deck from explicit cards without shuffling.
    ///
    /// The last card is the top of the draw pile. Used by tests that
    /// need a known draw order.
    #[must_use]
    pub fn from_cards(draw_pile: Vec<Card>) -> Self {
        Self {
            draw_pile,
            discard_pile: Vec::new(),
        }
    }

    /// Remove and return the top card of the draw pile.
    ///
    /// Returns `None` when the pile is exhausted; nothing else changes.
    pub fn draw(&mut self) -> Option<Card> {
        self.draw_pile.pop()
    }

    /// Append a played card to the discard pile.
    ///
    /// The caller must have already removed the card from the hand.
    pub fn discard(&mut self, card: Card) {
        self.discard_pile.push(card);
    }

    /// Number of cards left to draw.
    #[must_use]
    pub fn draw_pile_len(&self) -> usize {
        self.draw_pile.len()
    }

    /// Number of cards played so far.
    #[must_use]
    pub fn discard_pile_len(&self) -> usize {
        self.discard_pile.len()
    }

    /// True when the draw pile is empty.
    #[must_use]
    pub fn is_draw_pile_empty(&self) -> bool {
        self.draw_pile.is_empty()
    }

    /// True when both piles are empty (the hand may still hold cards).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.draw_pile.is_empty() && self.discard_pile.is_empty()
    }

    /// Cards in both piles, for the conservation invariant.
    #[must_use]
    pub fn len(&self) -> usize {
        self.draw_pile.len() + self.discard_pile.len()
    }
}
