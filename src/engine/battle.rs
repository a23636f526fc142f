//! The battle turn state machine.
//!
//! One round cycles player → all living enemies → player, until a terminal
//! outcome. Phases within a round:
//!
//! 1. Player turn start: block to 0, energy reset, draw the starting hand.
//! 2. Intent forecast: every living enemy picks its action for this round
//!    *before* the player acts; forecasts are not revised as the board
//!    changes during the player's turn.
//! 3. Player action loop: play cards or end the turn. Invalid choices
//!    (bad index, unaffordable cost, dead target) are rejected and
//!    re-requested, never fatal.
//! 4. Player turn end: the whole remaining hand is discarded, statuses
//!    tick.
//! 5. Enemy phase: each living enemy, in the stable order established at
//!    battle start, resets block, executes its forecast action, and ticks.
//!
//! Termination (`PlayerDefeated` / `AllEnemiesDefeated`) is checked after
//! every damage-dealing step; the engine emits `BattleEnded` and returns
//! the outcome to its caller rather than exiting, so one process can run
//! many battles.

use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::cards::{Piles, PlayContext};
use crate::core::{BattleRng, CombatantId, PlayerCharacter};
use crate::enemies::{Enemy, Intent};
use crate::engine::events::{BattleEvent, BattleOutcome, EventSink};
use crate::engine::input::{BattleInput, PlayerAction};
use crate::error::PlayError;

/// A battle between the player character and one or more enemies.
pub struct Battle<I: BattleInput, S: EventSink> {
    player: PlayerCharacter,
    enemies: Vec<Enemy>,
    piles: Piles,
    rng: BattleRng,
    turn: u32,
    input: I,
    sink: S,
}

impl<I: BattleInput, S: EventSink> Battle<I, S> {
    /// Set up a battle: the permanent deck is instantiated and shuffled
    /// into the draw pile, and enemies take their stable battle-order
    /// identities.
    pub fn new(player: PlayerCharacter, mut enemies: Vec<Enemy>, seed: u64, input: I, sink: S) -> Self {
        assert!(!enemies.is_empty(), "a battle needs at least one enemy");

        let mut rng = BattleRng::new(seed);
        let piles = Piles::build(&player.deck, &mut rng);

        for (i, enemy) in enemies.iter_mut().enumerate() {
            enemy.combatant.id = CombatantId::Enemy(i);
        }

        Self {
            player,
            enemies,
            piles,
            rng,
            turn: 0,
            input,
            sink,
        }
    }

    /// Run the battle to its terminal outcome.
    pub fn run(&mut self) -> BattleOutcome {
        loop {
            self.turn += 1;
            debug!(turn = self.turn, "round started");

            // Player turn start.
            self.player.combatant.reset_block();
            self.player.reset_energy();
            self.sink.emit(BattleEvent::TurnStarted {
                actor: CombatantId::Player,
                turn: self.turn,
            });
            self.sink.emit(BattleEvent::EnergyReset {
                amount: self.player.energy,
            });
            self.piles
                .draw(self.player.starting_hand_size, &mut self.rng, &mut self.sink);

            // Forecast intents for every living enemy.
            let intents = self.forecast_intents();

            // Player action loop.
            if let Some(outcome) = self.player_action_loop() {
                return self.finish(outcome);
            }

            // Player turn end.
            let hand_size = self.piles.hand.len();
            self.piles
                .discard_from_hand(hand_size, &mut self.input, &mut self.sink);
            for (status, value) in self.player.combatant.end_of_turn_tick() {
                self.sink.emit(BattleEvent::StatusChanged {
                    who: CombatantId::Player,
                    status,
                    value,
                });
            }
            self.sink.emit(BattleEvent::TurnEnded {
                actor: CombatantId::Player,
            });

            // Enemy phase, in stable battle order. Enemies defeated during
            // the player's turn forecast an intent but never execute it.
            if let Some(outcome) = self.enemy_phase(intents) {
                return self.finish(outcome);
            }
        }
    }

    fn forecast_intents(&mut self) -> SmallVec<[(usize, Intent); 4]> {
        let mut intents = SmallVec::new();
        for (idx, enemy) in self.enemies.iter().enumerate() {
            if !enemy.combatant.is_alive() {
                continue;
            }
            let intent = enemy.choose_intent(&self.player.combatant, self.turn, &mut self.rng);
            self.sink.emit(BattleEvent::IntentRevealed {
                enemy: idx,
                text: intent.text.clone(),
                action: intent.action,
            });
            intents.push((idx, intent));
        }
        intents
    }

    fn player_action_loop(&mut self) -> Option<BattleOutcome> {
        loop {
            let action = self.input.choose_action(&self.piles.hand, self.player.energy);
            let card_index = match action {
                PlayerAction::EndTurn => return None,
                PlayerAction::Play { card_index } => card_index,
            };

            if let Err(err) = self.validate_play(card_index) {
                warn!(%err, "rejected card selection");
                continue;
            }

            let kind = self.piles.hand[card_index].kind;
            let target_index = if kind.requires_target() {
                Some(self.select_target())
            } else {
                None
            };

            self.play_card(card_index, target_index);

            if let Some(outcome) = self.check_termination() {
                return Some(outcome);
            }
        }
    }

    fn validate_play(&self, card_index: usize) -> Result<(), PlayError> {
        if card_index >= self.piles.hand.len() {
            return Err(PlayError::InvalidCardSelection {
                index: card_index,
                hand_size: self.piles.hand.len(),
            });
        }
        let kind = self.piles.hand[card_index].kind;
        if !self.player.can_afford(kind.cost()) {
            return Err(PlayError::InsufficientEnergy {
                kind,
                cost: kind.cost(),
                available: self.player.energy,
            });
        }
        Ok(())
    }

    /// Pick the target of a targeted card. A single-enemy battle
    /// auto-targets; otherwise the input collaborator chooses among the
    /// living enemies, re-asked until the answer is one of them.
    fn select_target(&mut self) -> usize {
        if self.enemies.len() == 1 {
            return 0;
        }

        let living: Vec<usize> = self
            .enemies
            .iter()
            .enumerate()
            .filter(|(_, e)| e.combatant.is_alive())
            .map(|(i, _)| i)
            .collect();

        loop {
            let index = self.input.choose_target(&living);
            if living.contains(&index) {
                return index;
            }
            let err = PlayError::InvalidTargetSelection { index };
            warn!(%err, "rejected target selection");
        }
    }

    fn play_card(&mut self, card_index: usize, target_index: Option<usize>) {
        let card = self.piles.hand.remove(card_index);
        let cost = card.kind.cost();
        self.sink.emit(BattleEvent::CardPlayed {
            kind: card.kind,
            cost,
        });

        {
            let target = match target_index {
                Some(i) => Some(&mut self.enemies[i].combatant),
                None => None,
            };
            let mut ctx = PlayContext {
                actor: &mut self.player.combatant,
                target,
                piles: &mut self.piles,
                rng: &mut self.rng,
                input: &mut self.input,
                sink: &mut self.sink,
            };
            card.kind.apply(&mut ctx);
        }

        self.player.spend_energy(cost);
        // Played cards always land in the discard pile; only a card's own
        // effect can route itself to exhaust, which none of the roster do.
        self.piles.discard_played(card);
    }

    fn enemy_phase(&mut self, intents: SmallVec<[(usize, Intent); 4]>) -> Option<BattleOutcome> {
        for (idx, intent) in intents {
            if !self.enemies[idx].combatant.is_alive() {
                continue;
            }

            let id = self.enemies[idx].combatant.id;
            self.sink.emit(BattleEvent::TurnStarted {
                actor: id,
                turn: self.turn,
            });
            self.enemies[idx].combatant.reset_block();

            let enemy = &mut self.enemies[idx];
            enemy.execute_action(&mut self.player.combatant, intent.action, &mut self.sink);

            if let Some(outcome) = self.check_termination() {
                return Some(outcome);
            }

            for (status, value) in self.enemies[idx].combatant.end_of_turn_tick() {
                self.sink.emit(BattleEvent::StatusChanged {
                    who: id,
                    status,
                    value,
                });
            }
            self.sink.emit(BattleEvent::TurnEnded { actor: id });
        }
        None
    }

    fn check_termination(&self) -> Option<BattleOutcome> {
        if !self.player.combatant.is_alive() {
            return Some(BattleOutcome::PlayerDefeated);
        }
        if self.enemies.iter().all(|e| !e.combatant.is_alive()) {
            return Some(BattleOutcome::AllEnemiesDefeated);
        }
        None
    }

    fn finish(&mut self, outcome: BattleOutcome) -> BattleOutcome {
        debug!(?outcome, turn = self.turn, "battle ended");
        self.sink.emit(BattleEvent::BattleEnded { outcome });
        outcome
    }

    // === Accessors ===

    #[must_use]
    pub fn player(&self) -> &PlayerCharacter {
        &self.player
    }

    #[must_use]
    pub fn enemies(&self) -> &[Enemy] {
        &self.enemies
    }

    #[must_use]
    pub fn piles(&self) -> &Piles {
        &self.piles
    }

    /// Rounds started so far (1-based once the battle is running).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Tear down the battle, recovering the character (with the permanent
    /// deck untouched) and the event sink.
    #[must_use]
    pub fn into_parts(self) -> (PlayerCharacter, S) {
        (self.player, self.sink)
    }
}
