//! Enemy turn policy.
//!
//! The enemy picks uniformly at random among the cards currently in its
//! hand and then resolves exactly like the player: discard, refill,
//! limit-break trigger check. The legacy prototypes sometimes drew from
//! the full original card template instead of the hand; that variant is
//! treated as a bug and not implemented.

use crate::combat::Combatant;
use crate::core::{BattleConfig, GameRng};

use super::resolver::{resolve_action, ActionOutcome};

/// Take the enemy's turn against `player`.
///
/// With an empty hand the enemy first attempts one draw; if the hand is
/// still empty the turn resolves to `NoAction` (or activates the limit
/// break on total exhaustion).
pub fn enemy_take_turn(
    enemy: &mut Combatant,
    player: &mut Combatant,
    rng: &mut GameRng,
    config: &BattleConfig,
) -> ActionOutcome {
    if !enemy.limit_break.is_active() && enemy.is_hand_empty() {
        enemy.draw_to_hand();
    }

    let selected = rng.choose_index(enemy.hand_len()).unwrap_or(0);
    resolve_action(enemy, player, selected, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardKind, DeckList};
    use crate::combat::Stats;

    fn enemy_with(list: &DeckList, hand_size: usize) -> Combatant {
        let mut rng = GameRng::new(99);
        Combatant::new("Enemy", Stats::new(100, 10), list, hand_size, &mut rng)
    }

    fn player() -> Combatant {
        let mut rng = GameRng::new(1);
        Combatant::new(
            "Player",
            Stats::new(100, 15),
            &DeckList::standard(),
            3,
            &mut rng,
        )
    }

    #[test]
    fn test_enemy_plays_from_hand() {
        let config = BattleConfig::default();
        let mut rng = GameRng::new(5);
        let mut enemy = enemy_with(&DeckList::new([(CardKind::Attack, 6)]), 3);
        let mut player = player();

        let total = enemy.total_cards();
        let outcome = enemy_take_turn(&mut enemy, &mut player, &mut rng, &config);

        assert!(matches!(outcome, ActionOutcome::CardPlayed { .. }));
        assert_eq!(player.stats.health, 90);
        assert_eq!(enemy.hand_len(), 3);
        assert_eq!(enemy.deck().discard_pile_len(), 1);
        assert_eq!(enemy.total_cards(), total);
    }

    #[test]
    fn test_enemy_choice_is_deterministic_per_seed() {
        let config = BattleConfig::default();
        let list = DeckList::standard();

        let run = |seed: u64| {
            let mut rng = GameRng::new(seed);
            let mut enemy = enemy_with(&list, 3);
            let mut player = player();
            (0..5)
                .map(|_| enemy_take_turn(&mut enemy, &mut player, &mut rng, &config))
                .collect::<Vec<_>>()
        };

        assert_eq!(run(123), run(123));
    }

    #[test]
    fn test_empty_hand_draws_once_then_acts() {
        let config = BattleConfig::default();
        let mut rng = GameRng::new(5);
        // hand_size 0: everything stays in the draw pile
        let mut enemy = enemy_with(&DeckList::new([(CardKind::Attack, 4)]), 0);
        let mut player = player();

        assert!(enemy.is_hand_empty());
        let outcome = enemy_take_turn(&mut enemy, &mut player, &mut rng, &config);

        assert!(matches!(outcome, ActionOutcome::CardPlayed { .. }));
        assert_eq!(player.stats.health, 90);
    }

    #[test]
    fn test_empty_hand_and_pile_is_noop() {
        let config = BattleConfig::default();
        let mut rng = GameRng::new(5);
        let mut enemy = enemy_with(&DeckList::new([(CardKind::Attack, 1)]), 1);
        let mut player = player();

        // Exhaust the single card
        enemy_take_turn(&mut enemy, &mut player, &mut rng, &config);
        let health = player.stats.health;

        let outcome = enemy_take_turn(&mut enemy, &mut player, &mut rng, &config);
        assert_eq!(outcome, ActionOutcome::NoAction);
        assert_eq!(player.stats.health, health);
    }

    #[test]
    fn test_exhausted_enemy_triggers_limit_break() {
        let config = BattleConfig::default();
        let mut rng = GameRng::new(5);
        let mut enemy = enemy_with(&DeckList::new([]), 3);
        let mut player = player();

        let outcome = enemy_take_turn(&mut enemy, &mut player, &mut rng, &config);
        assert_eq!(outcome, ActionOutcome::LimitBreakTriggered);
        assert!(enemy.limit_break.is_active());

        let outcome = enemy_take_turn(&mut enemy, &mut player, &mut rng, &config);
        assert!(matches!(outcome, ActionOutcome::LimitBreakAttack { .. }));
        assert_eq!(player.stats.health, 90);
    }
}
