//! The encounter loop: phases, stages, and terminal states.
//!
//! Single-threaded and frame-driven: the host calls `tick` once per
//! rendered frame with the input events that fired since the last tick
//! and the held-key snapshot. All card/hand/carousel state is owned
//! here; nothing is shared or locked.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::DeckList;
use crate::carousel::HandCarousel;
use crate::combat::{Combatant, Kinematics, Stats};
use crate::core::{BattleConfig, GameRng, InputEvent, KeyState};

use super::policy::enemy_take_turn;
use super::resolver::{resolve_action, ActionOutcome};

/// Whose move the encounter is waiting on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for the player's confirm.
    AwaitingPlayer,
    /// Fixed pause before the enemy responds. Not interruptible:
    /// confirm events are ignored until it elapses.
    EnemyDelay { ticks_left: u32 },
}

/// How a match ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchOutcome {
    /// Player health reached zero.
    Defeat,
    /// Player quit.
    Quit,
}

/// Noteworthy things that happened during one tick, for the host to
/// display or log.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum BattleEvent {
    PlayerAction(ActionOutcome),
    EnemyAction(ActionOutcome),
    /// The enemy fell; `stage` is the stage just cleared.
    StageCleared { stage: u32 },
    MatchEnded(MatchOutcome),
}

/// Events produced by one tick.
pub type TickEvents = SmallVec<[BattleEvent; 4]>;

/// One running match: the player, the current enemy, and the stage
/// progression around them.
#[derive(Clone, Debug)]
pub struct Encounter {
    config: BattleConfig,
    rng: GameRng,
    player: Combatant,
    enemy: Combatant,
    carousel: HandCarousel,
    enemy_list: DeckList,
    stage: u32,
    phase: TurnPhase,
    outcome: Option<MatchOutcome>,
}

impl Encounter {
    /// Start an encounter with the standard deck on both sides.
    #[must_use]
    pub fn new(config: BattleConfig, seed: u64) -> Self {
        Self::with_decks(config, seed, &DeckList::standard(), DeckList::standard())
    }

    /// Start an encounter with explicit deck lists. The enemy list is
    /// reused for every stage spawn.
    #[must_use]
    pub fn with_decks(
        config: BattleConfig,
        seed: u64,
        player_list: &DeckList,
        enemy_list: DeckList,
    ) -> Self {
        let mut rng = GameRng::new(seed);
        let stage = 1;

        let player_stats = Stats::new(config.player_health, config.player_attack);
        let mut player =
            Combatant::new("Player", player_stats, player_list, config.hand_size, &mut rng);

        let mut stage_rng = rng.fork();
        let mut enemy = Combatant::enemy_for_stage(
            stage,
            &config.scaling,
            &enemy_list,
            config.hand_size,
            &mut stage_rng,
        );

        if config.melee.is_some() {
            let physics = config.physics;
            player = player
                .with_kinematics(Kinematics::standing_at(300.0, 50.0, 80.0, &physics));
            enemy = enemy.with_kinematics(Kinematics::standing_at(800.0, 50.0, 80.0, &physics));
        }

        let carousel = HandCarousel::new(config.carousel_speed);

        Self {
            config,
            rng,
            player,
            enemy,
            carousel,
            enemy_list,
            stage,
            phase: TurnPhase::AwaitingPlayer,
            outcome: None,
        }
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    #[must_use]
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    #[must_use]
    pub fn carousel(&self) -> &HandCarousel {
        &self.carousel
    }

    #[must_use]
    pub fn stage(&self) -> u32 {
        self.stage
    }

    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    #[must_use]
    pub fn outcome(&self) -> Option<MatchOutcome> {
        self.outcome
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    // === Frame tick ===

    /// Advance one frame.
    ///
    /// Order within a tick: kinematics integration, carousel animation,
    /// the inter-turn delay countdown (the enemy acts when it elapses),
    /// input handling, then the terminal checks (once, after all
    /// resolution). Running the countdown before input keeps the pause
    /// at exactly `turn_delay_ticks` full frames after a confirm.
    pub fn tick(&mut self, events: &[InputEvent], keys: &KeyState) -> TickEvents {
        let mut out = TickEvents::new();
        if self.is_over() {
            return out;
        }

        self.step_kinematics(keys);
        self.carousel.tick(self.player.hand_len());
        self.run_enemy_delay(&mut out);
        self.handle_events(events, &mut out);

        self.check_terminal(&mut out);
        out
    }

    fn step_kinematics(&mut self, keys: &KeyState) {
        if self.config.melee.is_none() {
            return;
        }
        let physics = self.config.physics;
        if let Some(k) = self.player.kinematics.as_mut() {
            k.step(keys, &physics);
        }
        // The enemy stands its ground; gravity still applies
        if let Some(k) = self.enemy.kinematics.as_mut() {
            k.step(&KeyState::default(), &physics);
        }
    }

    fn handle_events(&mut self, events: &[InputEvent], out: &mut TickEvents) {
        for &event in events {
            match event {
                InputEvent::Quit => {
                    self.outcome = Some(MatchOutcome::Quit);
                    out.push(BattleEvent::MatchEnded(MatchOutcome::Quit));
                    return;
                }
                InputEvent::CycleLeft => {
                    self.carousel.cycle_left(self.player.hand_len());
                }
                InputEvent::CycleRight => {
                    self.carousel.cycle_right(self.player.hand_len());
                }
                InputEvent::Confirm => self.handle_confirm(out),
            }
        }
    }

    fn handle_confirm(&mut self, out: &mut TickEvents) {
        // One action per confirm, only from a settled carousel on the
        // player's turn; everything else is discarded.
        if self.phase != TurnPhase::AwaitingPlayer || !self.carousel.is_settled() {
            return;
        }

        let outcome = resolve_action(
            &mut self.player,
            &mut self.enemy,
            self.carousel.selected(),
            &self.config,
        );
        self.carousel.clamp_selection(self.player.hand_len());

        out.push(BattleEvent::PlayerAction(outcome));

        // Every confirm hands the exchange to the enemy, `NoAction`
        // included: a player with no legal action must not stall the
        // opponent's turns.
        self.phase = TurnPhase::EnemyDelay {
            ticks_left: self.config.turn_delay_ticks,
        };
    }

    fn run_enemy_delay(&mut self, out: &mut TickEvents) {
        let TurnPhase::EnemyDelay { ticks_left } = self.phase else {
            return;
        };

        if ticks_left > 0 {
            self.phase = TurnPhase::EnemyDelay {
                ticks_left: ticks_left - 1,
            };
            return;
        }

        // Skip the enemy turn if the player already felled it this
        // exchange; the stage check below will spawn the next one.
        if !self.enemy.stats.is_defeated() {
            let outcome = enemy_take_turn(
                &mut self.enemy,
                &mut self.player,
                &mut self.rng,
                &self.config,
            );
            out.push(BattleEvent::EnemyAction(outcome));
        }
        self.phase = TurnPhase::AwaitingPlayer;
    }

    fn check_terminal(&mut self, out: &mut TickEvents) {
        if self.outcome.is_some() {
            return;
        }

        if self.enemy.stats.is_defeated() {
            out.push(BattleEvent::StageCleared { stage: self.stage });
            self.advance_stage();
        }

        if self.player.stats.is_defeated() {
            self.outcome = Some(MatchOutcome::Defeat);
            out.push(BattleEvent::MatchEnded(MatchOutcome::Defeat));
        }
    }

    fn advance_stage(&mut self) {
        self.stage += 1;

        let reward = self.config.reward;
        self.player.stats.heal(reward.heal_amount);
        self.player.stats.attack_power += reward.attack_increase;
        self.player.stats.defense += reward.defense_increase;

        let mut stage_rng = self.rng.fork();
        let mut enemy = Combatant::enemy_for_stage(
            self.stage,
            &self.config.scaling,
            &self.enemy_list,
            self.config.hand_size,
            &mut stage_rng,
        );
        if self.config.melee.is_some() {
            enemy = enemy.with_kinematics(Kinematics::standing_at(
                800.0,
                50.0,
                80.0,
                &self.config.physics,
            ));
        }
        self.enemy = enemy;
        self.phase = TurnPhase::AwaitingPlayer;
    }
}
