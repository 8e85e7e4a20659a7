//! Combatants: stats, hand management, limit break, and the optional
//! kinematics capability.

pub mod combatant;
pub mod kinematics;
pub mod limit_break;
pub mod stats;

pub use combatant::Combatant;
pub use kinematics::{can_hit, Facing, Kinematics};
pub use limit_break::LimitBreakState;
pub use stats::Stats;
