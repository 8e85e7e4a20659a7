//! Card effect kinds and their application.
//!
//! The legacy prototypes bound effect functions to cards at creation
//! time. Here effects are a closed tag set dispatched by `CardKind`,
//! which keeps every effect a pure stat transformation that can be
//! tested in isolation.

use serde::{Deserialize, Serialize};

use crate::combat::Stats;
use crate::core::EffectValues;

/// The four card effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardKind {
    /// Damage the target by `attack_power - defense`, floored at zero.
    Attack,
    /// Restore the actor's health, clamped at max health.
    Heal,
    /// Permanently raise the actor's defense.
    Defense,
    /// Permanently raise the actor's attack power.
    Buff,
}

impl CardKind {
    /// All kinds, in the legacy deck order.
    pub const ALL: [CardKind; 4] = [
        CardKind::Attack,
        CardKind::Heal,
        CardKind::Defense,
        CardKind::Buff,
    ];

    /// Canonical display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            CardKind::Attack => "Attack",
            CardKind::Heal => "Heal",
            CardKind::Defense => "Defense",
            CardKind::Buff => "Buff",
        }
    }

    /// Whether this effect touches the target at all.
    ///
    /// Only target-facing effects are subject to the melee gate.
    #[must_use]
    pub fn targets_opponent(self) -> bool {
        matches!(self, CardKind::Attack)
    }

    /// Apply this effect to the actor/target stat pair.
    ///
    /// Attack damage is floored at zero; it never heals the target.
    /// Health is not clamped at zero here - the defeat check belongs to
    /// the encounter loop, so health may transiently read negative.
    pub fn apply(self, actor: &mut Stats, target: &mut Stats, values: &EffectValues) {
        match self {
            CardKind::Attack => {
                let damage = (actor.attack_power - target.defense).max(0);
                target.health -= damage;
            }
            CardKind::Heal => {
                actor.health = (actor.health + values.heal_amount).min(actor.max_health);
            }
            CardKind::Defense => {
                actor.defense += values.defense_bonus;
            }
            CardKind::Buff => {
                actor.attack_power += values.buff_bonus;
            }
        }
    }
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
