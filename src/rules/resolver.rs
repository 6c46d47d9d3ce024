//! Field resolution: one player's turn as an explicit state machine.
//!
//! ```text
//! AwaitRoll ──(jailed)──────────────────────────► JailDecision ──► EndTurn
//!     │
//!     ▼
//!  Moving ──► ResolveField ──► EndTurn
//! ```
//!
//! The only suspension points are the dice source (`AwaitRoll`, and a
//! release attempt in `JailDecision`) and the decision provider (an unowned
//! property in `ResolveField`, and `JailDecision`). Both are plain blocking
//! calls; nothing else touches the state while the resolver waits.

use crate::board::Field;
use crate::core::{GameConfig, GameError, GameState, PlayerId, TransactionError};
use crate::events::{EventSink, GameEvent, ReleaseMethod};
use crate::providers::{Choice, DecisionProvider, DiceSource, Prompt, Roll};

use super::transactions;

/// Where a turn currently is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnPhase {
    /// Waiting on the dice. Jailed players skip straight to `JailDecision`.
    AwaitRoll,
    /// Applying a validated roll.
    Moving(Roll),
    /// Executing the effect of the field the player stands on.
    ResolveField,
    /// A player who began the turn jailed chooses how to try for release.
    JailDecision,
    /// Turn over; control goes back to the scheduler.
    EndTurn,
}

/// What a finished turn looked like.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub player: PlayerId,
    /// Movement roll. `None` for a turn spent in jail.
    pub roll: Option<Roll>,
    pub from: usize,
    pub to: usize,
    /// Jailed when the turn ended.
    pub jailed: bool,
}

/// Runs turns against a game state, blocking on the injected providers.
pub struct FieldResolver<'a, D: ?Sized, P: ?Sized, S: ?Sized> {
    state: &'a mut GameState,
    config: &'a GameConfig,
    dice: &'a mut D,
    decisions: &'a mut P,
    sink: &'a mut S,
}

impl<'a, D, P, S> FieldResolver<'a, D, P, S>
where
    D: DiceSource + ?Sized,
    P: DecisionProvider + ?Sized,
    S: EventSink + ?Sized,
{
    pub fn new(
        state: &'a mut GameState,
        config: &'a GameConfig,
        dice: &'a mut D,
        decisions: &'a mut P,
        sink: &'a mut S,
    ) -> Self {
        Self {
            state,
            config,
            dice,
            decisions,
            sink,
        }
    }

    /// Play one full turn for `player`.
    ///
    /// Only a broken provider contract (malformed dice) or an unknown player
    /// is an error; every gameplay outcome is reported through the sink.
    #[tracing::instrument(level = "debug", skip_all, fields(player = %player))]
    pub fn run_turn(&mut self, player: PlayerId) -> Result<TurnSummary, GameError> {
        let from = self.state.account(player)?.position();
        let mut roll = None;
        let mut phase = TurnPhase::AwaitRoll;

        loop {
            phase = match phase {
                TurnPhase::AwaitRoll => {
                    if self.state.account(player)?.is_jailed() {
                        TurnPhase::JailDecision
                    } else {
                        let drawn = self.roll(player)?;
                        roll = Some(drawn);
                        TurnPhase::Moving(drawn)
                    }
                }
                TurnPhase::Moving(drawn) => {
                    self.advance(player, drawn)?;
                    TurnPhase::ResolveField
                }
                TurnPhase::ResolveField => {
                    self.resolve_field(player)?;
                    TurnPhase::EndTurn
                }
                TurnPhase::JailDecision => {
                    self.jail_decision(player)?;
                    TurnPhase::EndTurn
                }
                TurnPhase::EndTurn => break,
            };
        }

        let account = self.state.account(player)?;
        Ok(TurnSummary {
            player,
            roll,
            from,
            to: account.position(),
            jailed: account.is_jailed(),
        })
    }

    fn roll(&mut self, player: PlayerId) -> Result<Roll, GameError> {
        let roll = Roll::draw(&mut *self.dice)?;
        self.sink.emit(GameEvent::DiceRolled {
            player,
            first: roll.first(),
            second: roll.second(),
        });
        Ok(roll)
    }

    fn advance(&mut self, player: PlayerId, roll: Roll) -> Result<(), GameError> {
        let size = self.state.board().size();
        let account = self.state.account_mut(player)?;
        let from = account.position();
        let wraps = account.move_by(roll.total(), size);
        let to = account.position();

        tracing::debug!(from, to, wraps, "moved");
        self.sink.emit(GameEvent::Moved { player, from, to });

        let bonus = self.config.pass_start_bonus;
        for _ in 0..wraps {
            transactions::pay_bonus(self.state, player, bonus)?;
            self.sink.emit(GameEvent::PassedStart { player, bonus });
        }
        Ok(())
    }

    fn resolve_field(&mut self, player: PlayerId) -> Result<(), GameError> {
        let position = self.state.account(player)?.position();
        let field = self.state.board().field_at(position).clone();

        match field {
            Field::Start { .. } | Field::CarPark { .. } => {}
            Field::Property(property) => match property.owner() {
                None => {
                    let price = property.price();
                    self.offer_property(player, position, property.name().to_string(), price)?;
                }
                Some(owner) if owner == player => {}
                Some(_) => {
                    let receipt = transactions::collect_rent(self.state, player, position)?;
                    self.sink.emit(GameEvent::RentPaid {
                        payer: player,
                        owner: receipt.owner,
                        field: position,
                        due: receipt.due,
                        paid: receipt.paid,
                    });
                }
            },
            Field::Tax { amount, .. } => {
                transactions::pay_tax(self.state, player, amount)?;
                self.sink.emit(GameEvent::TaxPaid { player, amount });
            }
            Field::GoToJail => self.send_to_jail(player)?,
            // Just visiting: only a player who starts a turn jailed is held here.
            Field::Jail { .. } => {}
        }
        Ok(())
    }

    fn offer_property(
        &mut self,
        player: PlayerId,
        field: usize,
        name: String,
        price: u32,
    ) -> Result<(), GameError> {
        self.sink.emit(GameEvent::PropertyOffered {
            player,
            field,
            name: name.clone(),
            price,
        });

        loop {
            let prompt = Prompt::Purchase {
                field,
                name: name.clone(),
                price,
                cash: self.state.account(player)?.cash(),
            };
            match self.ask(player, &prompt) {
                Choice::Accept => {
                    match transactions::purchase(self.state, player, field) {
                        Ok(paid) => self.sink.emit(GameEvent::PropertyPurchased {
                            player,
                            field,
                            name,
                            price: paid,
                        }),
                        Err(GameError::Transaction(TransactionError::Unaffordable {
                            price,
                            cash,
                        })) => self.sink.emit(GameEvent::PurchaseFailed {
                            player,
                            field,
                            price,
                            cash,
                        }),
                        Err(err) => return Err(err),
                    }
                    return Ok(());
                }
                Choice::Decline | Choice::Abandon => {
                    self.sink.emit(GameEvent::PurchaseDeclined { player, field });
                    return Ok(());
                }
                Choice::RollForRelease | Choice::PayBail => continue,
            }
        }
    }

    fn send_to_jail(&mut self, player: PlayerId) -> Result<(), GameError> {
        let jail = self.state.board().jail_index().ok_or(GameError::MissingJail)?;
        let account = self.state.account_mut(player)?;
        account.set_jailed(true);
        account.teleport(jail);

        tracing::info!(jail, "sent to jail");
        self.sink.emit(GameEvent::JailEntered { player });
        Ok(())
    }

    fn jail_decision(&mut self, player: PlayerId) -> Result<(), GameError> {
        let bail = self.state.board().bail().ok_or(GameError::MissingJail)?;

        loop {
            let prompt = Prompt::JailRelease {
                bail,
                cash: self.state.account(player)?.cash(),
            };
            match self.ask(player, &prompt) {
                Choice::RollForRelease => {
                    let roll = self.roll(player)?;
                    if roll.is_double() {
                        self.state.account_mut(player)?.set_jailed(false);
                        self.sink.emit(GameEvent::JailReleased {
                            player,
                            method: ReleaseMethod::Doubles,
                        });
                    } else {
                        self.sink.emit(GameEvent::StayedInJail { player });
                    }
                    return Ok(());
                }
                Choice::PayBail => match transactions::pay_bail(self.state, player, bail) {
                    Ok(()) => {
                        self.sink.emit(GameEvent::JailReleased {
                            player,
                            method: ReleaseMethod::Bail,
                        });
                        return Ok(());
                    }
                    Err(GameError::Transaction(TransactionError::Unaffordable { cash, .. })) => {
                        self.sink.emit(GameEvent::BailRefused { player, bail, cash });
                    }
                    Err(err) => return Err(err),
                },
                Choice::Abandon => {
                    self.sink.emit(GameEvent::StayedInJail { player });
                    return Ok(());
                }
                Choice::Accept | Choice::Decline => continue,
            }
        }
    }

    /// Ask until the provider returns a choice `prompt` offers.
    fn ask(&mut self, player: PlayerId, prompt: &Prompt) -> Choice {
        loop {
            let choice = self.decisions.decide(player, prompt);
            if prompt.accepts(choice) {
                return choice;
            }
            tracing::warn!(?choice, ?prompt, "decision rejected");
            self.sink.emit(GameEvent::DecisionRejected { player, choice });
        }
    }
}
