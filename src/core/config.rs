//! Battle configuration.
//!
//! The legacy prototypes kept tuning values in module-level globals.
//! Here everything lives in one immutable `BattleConfig` value handed to
//! the encounter at construction; the core itself holds no global state.

use serde::{Deserialize, Serialize};

/// Magnitudes applied by card effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectValues {
    /// Health restored by a Heal card (clamped at max health).
    pub heal_amount: i32,
    /// Defense granted by a Defense card.
    pub defense_bonus: i32,
    /// Attack power granted by a Buff card.
    pub buff_bonus: i32,
}

impl Default for EffectValues {
    fn default() -> Self {
        Self {
            heal_amount: 10,
            defense_bonus: 5,
            buff_bonus: 5,
        }
    }
}

/// Melee-range gate for the arena build.
///
/// When present, Attack cards and limit-break attacks only land if the
/// target is within reach of the actor's facing side.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MeleeRange {
    /// Maximum horizontal distance between centers.
    pub reach: f32,
    /// Maximum vertical distance between centers.
    pub vertical_tolerance: f32,
}

impl Default for MeleeRange {
    fn default() -> Self {
        Self {
            reach: 80.0,
            vertical_tolerance: 60.0,
        }
    }
}

/// Enemy stat scaling across stages.
///
/// Stages are 1-based: the first enemy spawns at stage 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageScaling {
    pub base_health: i32,
    pub health_per_stage: i32,
    pub base_attack: i32,
    pub attack_per_stage: i32,
}

impl StageScaling {
    /// Max health for the enemy spawned at `stage`.
    #[must_use]
    pub fn enemy_health(&self, stage: u32) -> i32 {
        self.base_health + self.health_per_stage * stage as i32
    }

    /// Attack power for the enemy spawned at `stage`.
    #[must_use]
    pub fn enemy_attack(&self, stage: u32) -> i32 {
        self.base_attack + self.attack_per_stage * stage as i32
    }
}

impl Default for StageScaling {
    fn default() -> Self {
        Self {
            base_health: 80,
            health_per_stage: 20,
            base_attack: 10,
            attack_per_stage: 5,
        }
    }
}

/// Player reward granted when a stage is cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageReward {
    /// Partial heal (clamped at max health).
    pub heal_amount: i32,
    /// Permanent attack power increase.
    pub attack_increase: i32,
    /// Permanent defense increase.
    pub defense_increase: i32,
}

impl Default for StageReward {
    fn default() -> Self {
        Self {
            heal_amount: 30,
            attack_increase: 2,
            defense_increase: 1,
        }
    }
}

/// Tuning for the optional platformer kinematics capability.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PhysicsConfig {
    /// Downward acceleration per tick.
    pub gravity: f32,
    /// Initial upward velocity of a jump (screen coordinates grow down).
    pub jump_velocity: f32,
    /// Horizontal speed while a direction key is held.
    pub move_speed: f32,
    /// Y coordinate of the floor.
    pub ground_y: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 0.8,
            jump_velocity: -15.0,
            move_speed: 5.0,
            ground_y: 600.0,
        }
    }
}

/// Immutable configuration for one encounter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleConfig {
    /// Player starting max health.
    pub player_health: i32,
    /// Player starting attack power.
    pub player_attack: i32,
    /// Cards held at once; the hand is refilled toward this size.
    pub hand_size: usize,
    /// Card effect magnitudes.
    pub effects: EffectValues,
    /// Strong attacks granted when the deck is fully exhausted.
    pub limit_break_duration: u32,
    /// Carousel offset advance per tick, in slot widths.
    pub carousel_speed: f32,
    /// Ticks of forced pause between the player's action and the
    /// enemy's response. Not interruptible by input.
    pub turn_delay_ticks: u32,
    /// Melee gate; `None` for the turn-based duel build.
    pub melee: Option<MeleeRange>,
    /// Enemy stat scaling per stage.
    pub scaling: StageScaling,
    /// Player reward on stage clear.
    pub reward: StageReward,
    /// Kinematics tuning (only used when combatants carry kinematics).
    pub physics: PhysicsConfig,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            player_health: 100,
            player_attack: 15,
            hand_size: 3,
            effects: EffectValues::default(),
            limit_break_duration: 5,
            carousel_speed: 0.15,
            turn_delay_ticks: 45,
            melee: None,
            scaling: StageScaling::default(),
            reward: StageReward::default(),
            physics: PhysicsConfig::default(),
        }
    }
}

impl BattleConfig {
    /// Configuration for the arena build: melee gating enabled.
    #[must_use]
    pub fn arena() -> Self {
        Self {
            melee: Some(MeleeRange::default()),
            ..Self::default()
        }
    }
}
