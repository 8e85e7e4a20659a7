//! Platformer kinematics, composed into combatants that need it.
//!
//! The arena build's prototypes derived Player/Enemy from a physics
//! base class. Here movement is a capability a combatant optionally
//! carries: stats and cards work identically with or without it.

use serde::{Deserialize, Serialize};

use crate::core::{KeyState, MeleeRange, PhysicsConfig};

/// Horizontal facing, set by the last movement direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Facing {
    Left,
    Right,
}

/// Position, velocity, and facing for one combatant.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Kinematics {
    /// Top-left corner; y grows downward.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub vx: f32,
    pub vy: f32,
    pub facing: Facing,
    pub on_ground: bool,
}

impl Kinematics {
    /// Spawn standing on the ground at `x`.
    #[must_use]
    pub fn standing_at(x: f32, width: f32, height: f32, physics: &PhysicsConfig) -> Self {
        Self {
            x,
            y: physics.ground_y - height,
            width,
            height,
            vx: 0.0,
            vy: 0.0,
            facing: Facing::Right,
            on_ground: true,
        }
    }

    /// Center point of the bounding box.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Integrate one tick from the held-key snapshot.
    ///
    /// Horizontal movement updates facing; gravity pulls until the
    /// floor clamps the fall.
    pub fn step(&mut self, keys: &KeyState, physics: &PhysicsConfig) {
        let dir = keys.horizontal();
        self.vx = dir as f32 * physics.move_speed;
        if dir < 0 {
            self.facing = Facing::Left;
        } else if dir > 0 {
            self.facing = Facing::Right;
        }

        if keys.jump && self.on_ground {
            self.vy = physics.jump_velocity;
            self.on_ground = false;
        }

        self.vy += physics.gravity;
        self.x += self.vx;
        self.y += self.vy;

        let floor = physics.ground_y - self.height;
        if self.y >= floor {
            self.y = floor;
            self.vy = 0.0;
            self.on_ground = true;
        }
    }
}

/// Melee-range predicate for the arena build.
///
/// A hit requires all three: vertical center distance within tolerance,
/// the actor facing toward the target (Left means the target sits at
/// non-positive relative dx, Right at non-negative), and horizontal
/// center distance within reach.
#[must_use]
pub fn can_hit(actor: &Kinematics, target: &Kinematics, melee: &MeleeRange) -> bool {
    let (ax, ay) = actor.center();
    let (tx, ty) = target.center();
    let dx = tx - ax;
    let dy = ty - ay;

    if dy.abs() > melee.vertical_tolerance {
        return false;
    }

    let facing_target = match actor.facing {
        Facing::Left => dx <= 0.0,
        Facing::Right => dx >= 0.0,
    };

    facing_target && dx.abs() <= melee.reach
}
