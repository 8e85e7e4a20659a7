//! Turn resolution, enemy policy, the encounter loop, and the render
//! view.

pub mod encounter;
pub mod policy;
pub mod resolver;
pub mod view;

pub use encounter::{BattleEvent, Encounter, MatchOutcome, TickEvents, TurnPhase};
pub use policy::enemy_take_turn;
pub use resolver::{resolve_action, ActionOutcome};
pub use view::{BattleView, CombatantView, HandSlotView};
