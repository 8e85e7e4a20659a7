//! The deck conservation invariant, as a property:
//! `|draw pile| + |discard pile| + |hand|` equals the deck's original
//! card count at every observation point.

use proptest::prelude::*;

use whitecastle::{
    resolve_action, BattleConfig, CardKind, Combatant, DeckList, GameRng, Stats,
};

fn deck_list_strategy() -> impl Strategy<Value = DeckList> {
    (0usize..4, 0usize..4, 0usize..4, 0usize..4).prop_map(|(a, h, d, b)| {
        DeckList::new([
            (CardKind::Attack, a),
            (CardKind::Heal, h),
            (CardKind::Defense, d),
            (CardKind::Buff, b),
        ])
    })
}

proptest! {
    #[test]
    fn conservation_holds_across_arbitrary_play(
        list in deck_list_strategy(),
        hand_size in 0usize..5,
        seed in any::<u64>(),
        positions in proptest::collection::vec(0usize..6, 0..40),
    ) {
        let config = BattleConfig::default();
        let mut rng = GameRng::new(seed);
        let mut actor = Combatant::new(
            "Player",
            Stats::new(1_000_000, 15),
            &list,
            hand_size,
            &mut rng,
        );
        let mut target = Combatant::new(
            "Enemy",
            Stats::new(1_000_000, 15),
            &DeckList::standard(),
            3,
            &mut rng,
        );

        let expected = list.card_count();
        prop_assert_eq!(actor.total_cards(), expected);

        for pos in positions {
            resolve_action(&mut actor, &mut target, pos, &config);

            // Conservation at every observation point
            prop_assert_eq!(actor.total_cards(), expected);
            prop_assert_eq!(
                actor.hand_len()
                    + actor.deck().draw_pile_len()
                    + actor.deck().discard_pile_len(),
                expected
            );

            // The limit break is active only after total exhaustion
            if actor.limit_break.is_active() {
                prop_assert!(actor.is_fully_exhausted());
                prop_assert!(actor.limit_break.remaining_turns() > 0);
            }
        }
    }

    #[test]
    fn draw_from_empty_pile_never_invents_cards(
        seed in any::<u64>(),
        extra_draws in 1usize..20,
    ) {
        let list = DeckList::new([(CardKind::Attack, 3)]);
        let mut rng = GameRng::new(seed);
        let mut deck = whitecastle::Deck::from_list(&list, &mut rng);

        for _ in 0..3 {
            prop_assert!(deck.draw().is_some());
        }
        for _ in 0..extra_draws {
            prop_assert!(deck.draw().is_none());
            prop_assert_eq!(deck.len(), 0);
        }
    }
}
