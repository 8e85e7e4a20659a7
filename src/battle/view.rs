//! The per-frame snapshot handed to the renderer collaborator.
//!
//! The core draws nothing. Each frame the host asks for a `BattleView`
//! and turns it into whatever pixels it likes; building the view never
//! mutates encounter state.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::combat::Combatant;

use super::encounter::{Encounter, MatchOutcome, TurnPhase};

/// Render data for one combatant.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CombatantView {
    pub name: String,
    pub health: i32,
    pub max_health: i32,
    pub attack_power: i32,
    pub defense: i32,
    pub limit_break_active: bool,
    pub limit_break_remaining: u32,
    /// Bounding-box center, when the combatant has kinematics.
    pub position: Option<(f32, f32)>,
}

impl CombatantView {
    fn of(combatant: &Combatant) -> Self {
        Self {
            name: combatant.name.clone(),
            health: combatant.stats.health,
            max_health: combatant.stats.max_health,
            attack_power: combatant.stats.attack_power,
            defense: combatant.stats.defense,
            limit_break_active: combatant.limit_break.is_active(),
            limit_break_remaining: combatant.limit_break.remaining_turns(),
            position: combatant.kinematics.as_ref().map(|k| k.center()),
        }
    }
}

/// One of the up-to-three visible hand cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HandSlotView {
    pub card_name: String,
    /// Horizontal offset from screen center, in slot widths.
    pub offset: f32,
    /// Visual scale, 1.0 at center.
    pub scale: f32,
    /// True for the selected (center) slot.
    pub selected: bool,
}

/// Full frame snapshot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattleView {
    pub stage: u32,
    pub phase: TurnPhase,
    pub outcome: Option<MatchOutcome>,
    pub player: CombatantView,
    pub enemy: CombatantView,
    pub hand: SmallVec<[HandSlotView; 3]>,
}

impl Encounter {
    /// Build the render snapshot for the current frame.
    #[must_use]
    pub fn view(&self) -> BattleView {
        let player = self.player();
        let carousel = self.carousel();

        let hand = carousel
            .visible_slots(player.hand_len())
            .into_iter()
            .map(|slot| HandSlotView {
                card_name: player.hand()[slot.hand_index].name.clone(),
                offset: slot.offset,
                scale: slot.scale,
                selected: slot.hand_index == carousel.selected() && slot.offset.abs() < 0.5,
            })
            .collect();

        BattleView {
            stage: self.stage(),
            phase: self.phase(),
            outcome: self.outcome(),
            player: CombatantView::of(player),
            enemy: CombatantView::of(self.enemy()),
            hand,
        }
    }
}
