//! Game orchestration.
//!
//! [`Game`] owns everything a running game needs: configuration, state,
//! scheduler and the three injected collaborators. Each [`Game::step`]
//! closes out the previous turn, checks whether the game is over, and plays
//! the next turn.
//!
//! ## Example
//!
//! ```
//! use rust_monopoly::{Game, GameConfig, GameRng, NullSink, StandingOrders};
//!
//! let config = GameConfig::new(3).with_max_turns(60);
//! let mut game = Game::new(config, GameRng::new(7), StandingOrders::buy_everything(), NullSink)?;
//! let result = game.run()?;
//! assert!(game.state().player_ids().any(|p| p == result.leader()));
//! # Ok::<(), rust_monopoly::GameError>(())
//! ```

use crate::board::Board;
use crate::core::{BankruptcyPolicy, GameConfig, GameError, GameState, Money, PlayerId};
use crate::events::{EventSink, GameEvent};
use crate::providers::{DecisionProvider, DiceSource};
use crate::rules::{transactions, FieldResolver, GameResult, TurnSummary};
use crate::schedule::{Advance, Scheduler};

/// A game in progress.
pub struct Game<D, P, S> {
    config: GameConfig,
    state: GameState,
    scheduler: Scheduler,
    dice: D,
    decisions: P,
    sink: S,
    last_turn: Option<TurnSummary>,
    result: Option<GameResult>,
}

impl<D, P, S> Game<D, P, S>
where
    D: DiceSource,
    P: DecisionProvider,
    S: EventSink,
{
    /// Start a game on the reference board with every player on Start.
    pub fn new(config: GameConfig, dice: D, decisions: P, sink: S) -> Result<Self, GameError> {
        config.validate()?;
        let state = GameState::new(Board::reference(), config.player_count, config.starting_cash);
        Self::with_state(config, state, dice, decisions, sink)
    }

    /// Start a game from a prepared state.
    ///
    /// The state must seat exactly `config.player_count` players.
    pub fn with_state(
        config: GameConfig,
        state: GameState,
        dice: D,
        decisions: P,
        sink: S,
    ) -> Result<Self, GameError> {
        config.validate()?;
        if state.player_count() != config.player_count {
            return Err(GameError::InvalidPlayerCount(state.player_count()));
        }

        let scheduler = Scheduler::new(state.player_ids());
        tracing::info!(
            players = config.player_count,
            starting_cash = config.starting_cash,
            board = state.board().size(),
            "game created"
        );

        Ok(Self {
            config,
            state,
            scheduler,
            dice,
            decisions,
            sink,
            last_turn: None,
            result: None,
        })
    }

    /// Play until the game produces a result.
    pub fn run(&mut self) -> Result<GameResult, GameError> {
        loop {
            if let Some(result) = self.step()? {
                return Ok(result);
            }
        }
    }

    /// Advance the scheduler and play one turn.
    ///
    /// Returns `Some` when the game ended during this step; no turn is
    /// played in that case.
    pub fn step(&mut self) -> Result<Option<GameResult>, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }

        let advance = self.scheduler.advance(&self.state, &mut self.sink)?;
        if let Some(bankrupt) = advance.bankrupted() {
            self.settle_bankruptcy(bankrupt)?;
        }

        let player = match advance {
            Advance::GameOver { winner, .. } => {
                return Ok(Some(self.finish(GameResult::Winner(winner))));
            }
            Advance::Next { player, .. } => player,
        };

        if let Some(limit) = self.config.max_turns {
            if self.state.turn_number >= limit {
                let leader = self.leader()?;
                self.sink.emit(GameEvent::TurnLimitReached {
                    turns: self.state.turn_number,
                    leader,
                });
                return Ok(Some(self.finish(GameResult::TurnLimit { leader })));
            }
        }

        self.play_turn(player)?;
        Ok(None)
    }

    /// Sell a property back to the bank between turns.
    ///
    /// Only players still in the rotation may sell. Returns the sell value
    /// credited.
    pub fn sell_property(&mut self, player: PlayerId, field: usize) -> Result<u32, GameError> {
        if self.result.is_some() {
            return Err(GameError::GameOver);
        }
        self.state.account(player)?;
        if !self.scheduler.contains(player) {
            return Err(GameError::PlayerEliminated(player));
        }

        let value = transactions::sell_to_bank(&mut self.state, player, field)?;
        self.sink.emit(GameEvent::PropertySold {
            player,
            field,
            value,
        });
        Ok(value)
    }

    fn play_turn(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.state.turn_number += 1;
        self.sink.emit(GameEvent::TurnStarted {
            player,
            turn: self.state.turn_number,
        });

        let summary = FieldResolver::new(
            &mut self.state,
            &self.config,
            &mut self.dice,
            &mut self.decisions,
            &mut self.sink,
        )
        .run_turn(player)?;

        self.last_turn = Some(summary);
        Ok(())
    }

    fn settle_bankruptcy(&mut self, player: PlayerId) -> Result<(), GameError> {
        match self.config.bankruptcy {
            BankruptcyPolicy::KeepHoldings => {}
            BankruptcyPolicy::ReturnToBank => {
                let fields = transactions::release_holdings(&mut self.state, player)?;
                if !fields.is_empty() {
                    tracing::info!(
                        player = %player,
                        count = fields.len(),
                        "holdings returned to bank"
                    );
                    self.sink.emit(GameEvent::PropertiesReturned { player, fields });
                }
            }
        }
        Ok(())
    }

    /// Highest net worth among remaining players. Ties go to the earlier seat.
    fn leader(&self) -> Result<PlayerId, GameError> {
        let mut best: Option<(PlayerId, Money)> = None;
        for &player in self.scheduler.rotation().order() {
            let worth = self.state.net_worth(player)?;
            if best.map_or(true, |(_, top)| worth > top) {
                best = Some((player, worth));
            }
        }
        // A rotation always holds at least one seat.
        Ok(best.map_or(self.scheduler.rotation().current(), |(player, _)| player))
    }

    fn finish(&mut self, result: GameResult) -> GameResult {
        if let GameResult::Winner(player) = result {
            self.sink.emit(GameEvent::GameWon { player });
        }
        tracing::info!(?result, turns = self.state.turn_number, "game over");
        self.result = Some(result);
        result
    }
}

impl<D, P, S> Game<D, P, S> {
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    #[must_use]
    pub fn dice(&self) -> &D {
        &self.dice
    }

    #[must_use]
    pub fn decisions(&self) -> &P {
        &self.decisions
    }

    /// Player whose turn was played last. `None` before the first step.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerId> {
        self.scheduler.current()
    }

    /// Players still in the rotation, in seat order.
    #[must_use]
    pub fn remaining_players(&self) -> &[PlayerId] {
        self.scheduler.rotation().order()
    }

    #[must_use]
    pub fn last_turn(&self) -> Option<&TurnSummary> {
        self.last_turn.as_ref()
    }

    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.result.is_some()
    }

    /// Take the game apart, returning its state and collaborators.
    pub fn into_parts(self) -> (GameState, D, P, S) {
        (self.state, self.dice, self.decisions, self.sink)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Account;
    use crate::events::RecordingSink;
    use crate::providers::{Choice, ScriptedDecisions, ScriptedDice, StandingOrders};

    type TestGame = Game<ScriptedDice, ScriptedDecisions, RecordingSink>;

    fn p(i: u8) -> PlayerId {
        PlayerId::new(i)
    }

    fn game(
        accounts: Vec<Account>,
        config: GameConfig,
        rolls: &[(u8, u8)],
        answers: &[Choice],
    ) -> TestGame {
        let state = GameState::from_accounts(Board::reference(), accounts).unwrap();
        Game::with_state(
            config,
            state,
            ScriptedDice::new(rolls.iter().copied()),
            ScriptedDecisions::new(answers.iter().copied()),
            RecordingSink::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_new_validates_player_count() {
        let result = Game::new(
            GameConfig::new(1),
            ScriptedDice::new([(1, 1)]),
            StandingOrders::buy_everything(),
            RecordingSink::new(),
        );
        assert!(matches!(result, Err(GameError::InvalidPlayerCount(1))));
    }

    #[test]
    fn test_with_state_rejects_mismatched_seats() {
        let state = GameState::new(Board::reference(), 3, 1500);
        let result = Game::with_state(
            GameConfig::new(2),
            state,
            ScriptedDice::new([(1, 1)]),
            StandingOrders::buy_everything(),
            RecordingSink::new(),
        );
        assert!(matches!(result, Err(GameError::InvalidPlayerCount(3))));
    }

    #[test]
    fn test_step_plays_turns_in_order() {
        let accounts = vec![Account::new(p(0), 1500), Account::new(p(1), 1500)];
        let mut game = game(accounts, GameConfig::new(2), &[(1, 2)], &[]);

        assert_eq!(game.step(), Ok(None));
        assert_eq!(game.current_player(), Some(p(0)));
        assert_eq!(game.step(), Ok(None));
        assert_eq!(game.current_player(), Some(p(1)));
        assert_eq!(game.state().turn_number, 2);

        let started: Vec<_> = game
            .sink()
            .matching(|e| matches!(e, GameEvent::TurnStarted { .. }))
            .cloned()
            .collect();
        assert_eq!(
            started,
            vec![
                GameEvent::TurnStarted { player: p(0), turn: 1 },
                GameEvent::TurnStarted { player: p(1), turn: 2 },
            ]
        );
    }

    #[test]
    fn test_bankruptcy_ends_two_player_game() {
        // Player 0 lands on player 1's brown 1 with 10 in cash.
        let accounts = vec![Account::new(p(0), 10).at(30), Account::new(p(1), 1000)];
        let mut game = game(accounts, GameConfig::new(2).with_pass_start_bonus(0), &[(1, 1)], &[]);
        transactions::purchase(&mut game.state, p(1), 1).unwrap();

        let result = game.run().unwrap();

        assert_eq!(result, GameResult::Winner(p(1)));
        assert_eq!(game.state().account(p(0)).unwrap().cash(), -10);
        assert_eq!(game.state().account(p(1)).unwrap().cash(), 950);
        assert_eq!(game.remaining_players(), &[p(1)]);
        let events: Vec<_> = game.sink().events().cloned().collect();
        assert!(events.contains(&GameEvent::PlayerBankrupted {
            player: p(0),
            cash: -10
        }));
        assert_eq!(events.last(), Some(&GameEvent::GameWon { player: p(1) }));
    }

    #[test]
    fn test_step_after_game_over() {
        // Income tax on field 3 overdraws player 0.
        let accounts = vec![Account::new(p(0), 50).at(1), Account::new(p(1), 100)];
        let mut game = game(accounts, GameConfig::new(2), &[(1, 1)], &[]);

        assert_eq!(game.step(), Ok(None));
        assert_eq!(game.state().account(p(0)).unwrap().cash(), -50);
        assert_eq!(game.step(), Ok(Some(GameResult::Winner(p(1)))));
        assert_eq!(game.step(), Err(GameError::GameOver));
        assert!(game.is_over());
    }

    #[test]
    fn test_return_to_bank_policy() {
        let accounts = vec![
            Account::new(p(0), 100).at(1),
            Account::new(p(1), 1000),
            Account::new(p(2), 1000),
        ];
        let config = GameConfig::new(3).with_bankruptcy_policy(BankruptcyPolicy::ReturnToBank);
        let mut game = game(accounts, config, &[(1, 1)], &[]);
        transactions::purchase(&mut game.state, p(0), 1).unwrap();
        // 40 left; income tax takes 100.

        game.step().unwrap();
        game.step().unwrap();

        assert_eq!(game.state().board().property(1).unwrap().owner(), None);
        assert!(game.state().account(p(0)).unwrap().inventory().is_empty());
        assert!(game.sink().events().any(|e| *e
            == GameEvent::PropertiesReturned {
                player: p(0),
                fields: vec![1]
            }));
        assert_eq!(game.remaining_players(), &[p(1), p(2)]);
    }

    #[test]
    fn test_turn_limit_picks_richest() {
        let accounts = vec![
            Account::new(p(0), 500),
            Account::new(p(1), 500),
            Account::new(p(2), 400),
        ];
        let config = GameConfig::new(3).with_max_turns(0);
        let mut game = game(accounts, config, &[(1, 1)], &[]);
        transactions::purchase(&mut game.state, p(2), 1).unwrap();

        // Player 2: 340 cash + 30 sell value. Players 0 and 1 tie on 500.
        let result = game.run().unwrap();

        assert_eq!(result, GameResult::TurnLimit { leader: p(0) });
        assert_eq!(
            game.sink().last(),
            Some(&GameEvent::TurnLimitReached {
                turns: 0,
                leader: p(0)
            })
        );
        assert_eq!(game.state().turn_number, 0);
    }

    #[test]
    fn test_sell_property() {
        let accounts = vec![Account::new(p(0), 1000), Account::new(p(1), 1000)];
        let mut game = game(accounts, GameConfig::new(2), &[(1, 1)], &[]);
        transactions::purchase(&mut game.state, p(0), 1).unwrap();

        assert_eq!(game.sell_property(p(0), 1), Ok(30));
        assert_eq!(game.state().account(p(0)).unwrap().cash(), 970);
        assert_eq!(
            game.sink().last(),
            Some(&GameEvent::PropertySold {
                player: p(0),
                field: 1,
                value: 30
            })
        );
        assert_eq!(
            game.sell_property(p(5), 1),
            Err(GameError::UnknownPlayer(p(5)))
        );
    }

    #[test]
    fn test_eliminated_player_cannot_sell() {
        let accounts = vec![
            Account::new(p(0), 60).at(1),
            Account::new(p(1), 1000),
            Account::new(p(2), 1000),
        ];
        let mut game = game(accounts, GameConfig::new(3), &[(1, 1)], &[]);
        transactions::purchase(&mut game.state, p(0), 1).unwrap();

        // Player 0 has nothing left and pays income tax.
        game.step().unwrap();
        game.step().unwrap();

        assert_eq!(game.sell_property(p(0), 1), Err(GameError::PlayerEliminated(p(0))));
    }

    #[test]
    fn test_invalid_dice_propagate() {
        let accounts = vec![Account::new(p(0), 1000), Account::new(p(1), 1000)];
        let mut game = game(accounts, GameConfig::new(2), &[(7, 1)], &[]);

        assert_eq!(game.run(), Err(GameError::InvalidDice(7, 1)));
        assert_eq!(game.state().account(p(0)).unwrap().position(), 0);
        assert!(!game.is_over());
    }
}
