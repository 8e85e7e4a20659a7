//! Card values.

use serde::{Deserialize, Serialize};

use super::effect::CardKind;

/// A card: a display name paired with an effect kind.
///
/// Cards are plain values, immutable after creation and equal by
/// name + kind. A deck may hold several copies of the same card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub name: String,
    pub kind: CardKind,
}

impl Card {
    /// Create a card with an explicit name.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: CardKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Create a card carrying the kind's canonical name.
    #[must_use]
    pub fn basic(kind: CardKind) -> Self {
        Self::new(kind.name(), kind)
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}
