//! Turn resolution: one exchange, one outcome.
//!
//! `resolve_action` is the single entry point both sides use to act.
//! Every recognized non-fatal condition (empty hand, empty draw pile,
//! out-of-range swing) resolves to an `ActionOutcome` value; nothing in
//! here errors or panics.

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::combat::{can_hit, Combatant};
use crate::core::BattleConfig;

/// What one call to `resolve_action` did.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ActionOutcome {
    /// A card was played and its effect applied.
    CardPlayed { card: Card },
    /// An Attack card whiffed on the melee gate. The card is still
    /// consumed; no stats changed.
    CardMissed { card: Card },
    /// A limit-break attack landed for `damage` (defense ignored).
    LimitBreakAttack { damage: i32 },
    /// A limit-break attack whiffed on the melee gate. The charge is
    /// still spent; no stats changed.
    LimitBreakMissed,
    /// Total deck exhaustion just activated the limit break.
    LimitBreakTriggered,
    /// Empty hand, no limit break: nothing legal to do.
    NoAction,
}

impl ActionOutcome {
    /// Whether the actor actually spent its turn.
    #[must_use]
    pub fn consumed_turn(&self) -> bool {
        !matches!(self, ActionOutcome::NoAction)
    }
}

/// Melee gate check. Passes trivially when the config carries no melee
/// rule or either side lacks kinematics (turn-based duel build).
fn in_melee_range(actor: &Combatant, target: &Combatant, config: &BattleConfig) -> bool {
    match (&config.melee, &actor.kinematics, &target.kinematics) {
        (Some(melee), Some(a), Some(t)) => can_hit(a, t, melee),
        _ => true,
    }
}

/// Resolve one action by `actor` against `target`.
///
/// With the limit break active: a resource-free attack for full attack
/// power, ignoring defense, spending one charge (melee-gated).
///
/// Otherwise: play the card at `selected`, apply its effect (Attack
/// melee-gated), move it to the discard pile, and draw a replacement
/// into the same slot (the hand shrinks when the draw pile is empty).
///
/// With an empty hand: activate the limit break if hand, draw pile, and
/// discard pile are all empty; otherwise report `NoAction`.
///
/// The limit break trigger is re-evaluated after every card play. The
/// caller is responsible for re-clamping its selection index to the new
/// hand length.
pub fn resolve_action(
    actor: &mut Combatant,
    target: &mut Combatant,
    selected: usize,
    config: &BattleConfig,
) -> ActionOutcome {
    if actor.limit_break.is_active() {
        let in_range = in_melee_range(actor, target, config);
        actor.limit_break.consume();
        if in_range {
            let damage = actor.stats.attack_power;
            target.stats.health -= damage;
            return ActionOutcome::LimitBreakAttack { damage };
        }
        return ActionOutcome::LimitBreakMissed;
    }

    match actor.take_card(selected) {
        Some(card) => {
            let hit = !card.kind.targets_opponent() || in_melee_range(actor, target, config);
            if hit {
                let kind = card.kind;
                kind.apply(&mut actor.stats, &mut target.stats, &config.effects);
            }
            let outcome = if hit {
                ActionOutcome::CardPlayed { card: card.clone() }
            } else {
                ActionOutcome::CardMissed { card: card.clone() }
            };
            actor.discard(card);
            actor.refill_slot(selected);

            if actor.is_fully_exhausted() {
                actor.limit_break.activate(config.limit_break_duration);
            }
            outcome
        }
        None => {
            if actor.is_fully_exhausted() {
                actor.limit_break.activate(config.limit_break_duration);
                ActionOutcome::LimitBreakTriggered
            } else {
                ActionOutcome::NoAction
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, DeckList};
    use crate::combat::{Facing, Kinematics, Stats};
    use crate::core::GameRng;

    fn duelist(list: &DeckList) -> Combatant {
        let mut rng = GameRng::new(42);
        Combatant::new("Player", Stats::new(100, 15), list, 3, &mut rng)
    }

    fn attack_only() -> DeckList {
        DeckList::new([(CardKind::Attack, 8)])
    }

    #[test]
    fn test_attack_card_resolution() {
        let config = BattleConfig::default();
        let mut actor = duelist(&attack_only());
        let mut target = duelist(&attack_only());

        let outcome = resolve_action(&mut actor, &mut target, 0, &config);

        match outcome {
            ActionOutcome::CardPlayed { card } => assert_eq!(card.kind, CardKind::Attack),
            other => panic!("expected CardPlayed, got {other:?}"),
        }

        // defense 0: full attack power lands
        assert_eq!(target.stats.health, 85);
        // played card discarded, slot refilled
        assert_eq!(actor.hand_len(), 3);
        assert_eq!(actor.deck().discard_pile_len(), 1);
        assert_eq!(actor.deck().draw_pile_len(), 4);
        assert_eq!(actor.total_cards(), 8);
    }

    #[test]
    fn test_hand_replacement_scenario() {
        // hand = [Attack, Heal, Defense], draw pile of 5 buffs, discard
        // empty; play the Attack at slot 0
        let config = BattleConfig::default();
        let mut cards = vec![crate::cards::Card::basic(CardKind::Buff); 5];
        cards.push(crate::cards::Card::basic(CardKind::Defense));
        cards.push(crate::cards::Card::basic(CardKind::Heal));
        cards.push(crate::cards::Card::basic(CardKind::Attack));
        let deck = crate::cards::Deck::from_cards(cards);

        let mut actor = Combatant::with_deck("Player", Stats::new(100, 15), deck, 3);
        let mut target = duelist(&attack_only());

        assert_eq!(actor.hand()[0].kind, CardKind::Attack);
        assert_eq!(actor.hand()[1].kind, CardKind::Heal);
        assert_eq!(actor.hand()[2].kind, CardKind::Defense);
        assert_eq!(actor.deck().draw_pile_len(), 5);

        let outcome = resolve_action(&mut actor, &mut target, 0, &config);

        assert!(matches!(outcome, ActionOutcome::CardPlayed { .. }));
        assert_eq!(target.stats.health, 100 - actor.stats.attack_power);

        // One fresh Buff in slot 0, the rest of the hand unmoved
        assert_eq!(actor.hand_len(), 3);
        assert_eq!(actor.hand()[0].kind, CardKind::Buff);
        assert_eq!(actor.hand()[1].kind, CardKind::Heal);
        assert_eq!(actor.hand()[2].kind, CardKind::Defense);
        assert_eq!(actor.deck().discard_pile_len(), 1);
        assert_eq!(actor.deck().draw_pile_len(), 4);
    }

    #[test]
    fn test_empty_hand_not_exhausted_is_noop() {
        let config = BattleConfig::default();
        let list = DeckList::new([(CardKind::Attack, 1)]);
        let mut rng = GameRng::new(42);
        let mut actor = Combatant::new("Player", Stats::new(100, 15), &list, 1, &mut rng);
        let mut target = duelist(&attack_only());

        // Play the only card; hand shrinks to zero, discard holds it
        resolve_action(&mut actor, &mut target, 0, &config);
        assert!(actor.is_hand_empty());
        assert!(!actor.is_fully_exhausted());

        let health_before = target.stats.health;
        let outcome = resolve_action(&mut actor, &mut target, 0, &config);

        assert_eq!(outcome, ActionOutcome::NoAction);
        assert!(!outcome.consumed_turn());
        assert_eq!(target.stats.health, health_before);
        assert!(!actor.limit_break.is_active());
    }

    #[test]
    fn test_limit_break_trigger_and_expiry() {
        let config = BattleConfig::default();
        let mut rng = GameRng::new(42);
        let mut actor =
            Combatant::new("Player", Stats::new(100, 15), &DeckList::new([]), 3, &mut rng);
        let mut target = duelist(&attack_only());

        assert!(actor.is_fully_exhausted());

        // First use_card on total exhaustion activates, not attacks
        let outcome = resolve_action(&mut actor, &mut target, 0, &config);
        assert_eq!(outcome, ActionOutcome::LimitBreakTriggered);
        assert!(actor.limit_break.is_active());
        assert_eq!(actor.limit_break.remaining_turns(), 5);

        // Five limit-break attacks, defense ignored, then deactivation
        target.stats.defense = 100;
        let mut health = target.stats.health;
        for _ in 0..5 {
            let outcome = resolve_action(&mut actor, &mut target, 0, &config);
            assert_eq!(
                outcome,
                ActionOutcome::LimitBreakAttack {
                    damage: actor.stats.attack_power
                }
            );
            health -= actor.stats.attack_power;
            assert_eq!(target.stats.health, health);
        }
        assert!(!actor.limit_break.is_active());
    }

    fn arena_pair(apart: f32) -> (Combatant, Combatant, BattleConfig) {
        let config = BattleConfig::arena();
        let physics = config.physics;
        let actor = duelist(&attack_only()).with_kinematics(Kinematics::standing_at(
            100.0, 40.0, 60.0, &physics,
        ));
        let target = duelist(&attack_only()).with_kinematics(Kinematics::standing_at(
            100.0 + apart,
            40.0,
            60.0,
            &physics,
        ));
        (actor, target, config)
    }

    #[test]
    fn test_melee_gate_miss_consumes_card() {
        let (mut actor, mut target, config) = arena_pair(500.0);

        let outcome = resolve_action(&mut actor, &mut target, 0, &config);

        assert!(matches!(outcome, ActionOutcome::CardMissed { .. }));
        assert_eq!(target.stats.health, 100);
        // Whiffed card is still consumed and replaced
        assert_eq!(actor.deck().discard_pile_len(), 1);
        assert_eq!(actor.hand_len(), 3);
    }

    #[test]
    fn test_melee_gate_hit() {
        let (mut actor, mut target, config) = arena_pair(50.0);

        let outcome = resolve_action(&mut actor, &mut target, 0, &config);

        assert!(matches!(outcome, ActionOutcome::CardPlayed { .. }));
        assert_eq!(target.stats.health, 85);
    }

    #[test]
    fn test_melee_gate_facing_away() {
        let (mut actor, mut target, config) = arena_pair(50.0);
        if let Some(k) = actor.kinematics.as_mut() {
            k.facing = Facing::Left;
        }

        let outcome = resolve_action(&mut actor, &mut target, 0, &config);
        assert!(matches!(outcome, ActionOutcome::CardMissed { .. }));
        assert_eq!(target.stats.health, 100);
    }

    #[test]
    fn test_melee_gate_spares_self_effects() {
        let (mut actor, mut target, config) = arena_pair(500.0);
        actor.stats.health = 50;

        // Swap in a heal: self-effects ignore the melee gate
        let list = DeckList::new([(CardKind::Heal, 4)]);
        let mut rng = GameRng::new(7);
        let mut healer = Combatant::new("Healer", Stats::new(100, 15), &list, 3, &mut rng)
            .with_kinematics(actor.kinematics.unwrap());
        healer.stats.health = 50;

        let outcome = resolve_action(&mut healer, &mut target, 0, &config);
        assert!(matches!(outcome, ActionOutcome::CardPlayed { .. }));
        assert_eq!(healer.stats.health, 60);
    }

    #[test]
    fn test_limit_break_melee_miss_spends_charge() {
        let (mut actor, mut target, config) = arena_pair(500.0);
        actor.limit_break.activate(5);

        let outcome = resolve_action(&mut actor, &mut target, 0, &config);

        assert_eq!(outcome, ActionOutcome::LimitBreakMissed);
        assert_eq!(target.stats.health, 100);
        assert_eq!(actor.limit_break.remaining_turns(), 4);
    }
}
