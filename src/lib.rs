//! # whitecastle
//!
//! The battle core of a small 2D action/card game: a player draws from
//! a finite deck of effect cards, cycles the hand through an animated
//! carousel, and trades blows with stage-scaled enemies. When the deck
//! runs completely dry a Limit Break grants a short burst of strong,
//! resource-free attacks.
//!
//! ## Design
//!
//! 1. **Deterministic**: the only randomness is the one-time deck
//!    shuffle and the enemy's card choice, both driven by a seeded
//!    `GameRng`. A match replays identically from its seed.
//!
//! 2. **Core only**: rendering, audio, and input polling live in the
//!    host. The core consumes `InputEvent`s and a held-key snapshot
//!    per tick and exposes a pure `BattleView`.
//!
//! 3. **Composition over inheritance**: platformer movement is an
//!    optional `Kinematics` capability a combatant carries, not a
//!    base class.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, input types
//! - `cards`: card kinds, effects, draw/discard piles
//! - `combat`: combatant stats, hand management, limit break, kinematics
//! - `carousel`: hand-selection animation state machine
//! - `battle`: turn resolution, enemy policy, encounter loop, view

pub mod battle;
pub mod cards;
pub mod carousel;
pub mod combat;
pub mod core;

// Re-export commonly used types
pub use crate::core::{
    BattleConfig, EffectValues, GameRng, GameRngState, InputEvent, KeyState, MeleeRange,
    PhysicsConfig, StageReward, StageScaling,
};

pub use crate::cards::{Card, CardKind, Deck, DeckList};

pub use crate::combat::{can_hit, Combatant, Facing, Kinematics, LimitBreakState, Stats};

pub use crate::carousel::{CardSlot, CarouselPhase, HandCarousel};

pub use crate::battle::{
    enemy_take_turn, resolve_action, ActionOutcome, BattleEvent, BattleView, CombatantView,
    Encounter, HandSlotView, MatchOutcome, TickEvents, TurnPhase,
};
