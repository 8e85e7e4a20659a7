//! Core building blocks: RNG, configuration, input types.
//!
//! Everything here is independent of the battle rules; the battle
//! modules consume these via explicit parameters rather than globals.

pub mod config;
pub mod input;
pub mod rng;

pub use config::{
    BattleConfig, EffectValues, MeleeRange, PhysicsConfig, StageReward, StageScaling,
};
pub use input::{InputEvent, KeyState};
pub use rng::{GameRng, GameRngState};
