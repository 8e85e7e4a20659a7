//! Cards, effects, and the draw/discard piles.

pub mod card;
pub mod deck;
pub mod effect;

pub use card::Card;
pub use deck::{Deck, DeckList};
pub use effect::CardKind;
