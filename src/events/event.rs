//! Game event types.
//!
//! Events are the engine's only output. They describe what happened, in the
//! order it happened, and carry enough data for a presenter to render a
//! status line without looking at the state.

use serde::{Deserialize, Serialize};

use crate::core::{Money, PlayerId};
use crate::providers::Choice;

/// How a player got out of jail.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReleaseMethod {
    /// Rolled a double on a release attempt.
    Doubles,
    /// Paid the bail.
    Bail,
}

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    TurnStarted {
        player: PlayerId,
        turn: u32,
    },
    DiceRolled {
        player: PlayerId,
        first: u8,
        second: u8,
    },
    Moved {
        player: PlayerId,
        from: usize,
        to: usize,
    },
    /// One event per wrap past Start.
    PassedStart {
        player: PlayerId,
        bonus: u32,
    },
    PropertyOffered {
        player: PlayerId,
        field: usize,
        name: String,
        price: u32,
    },
    PropertyPurchased {
        player: PlayerId,
        field: usize,
        name: String,
        price: u32,
    },
    PurchaseDeclined {
        player: PlayerId,
        field: usize,
    },
    /// The player accepted but could not pay.
    PurchaseFailed {
        player: PlayerId,
        field: usize,
        price: u32,
        cash: Money,
    },
    /// `due` is the full rent charged to the payer; `paid` is what reached
    /// the owner.
    RentPaid {
        payer: PlayerId,
        owner: PlayerId,
        field: usize,
        due: u32,
        paid: u32,
    },
    TaxPaid {
        player: PlayerId,
        amount: u32,
    },
    JailEntered {
        player: PlayerId,
    },
    JailReleased {
        player: PlayerId,
        method: ReleaseMethod,
    },
    /// Turn ended with the player still jailed.
    StayedInJail {
        player: PlayerId,
    },
    BailRefused {
        player: PlayerId,
        bail: u32,
        cash: Money,
    },
    /// The decision provider answered with a choice the prompt does not offer.
    DecisionRejected {
        player: PlayerId,
        choice: Choice,
    },
    PropertySold {
        player: PlayerId,
        field: usize,
        value: u32,
    },
    PropertiesReturned {
        player: PlayerId,
        fields: Vec<usize>,
    },
    PlayerBankrupted {
        player: PlayerId,
        cash: Money,
    },
    GameWon {
        player: PlayerId,
    },
    TurnLimitReached {
        turns: u32,
        leader: PlayerId,
    },
}

impl GameEvent {
    /// Player the event is about, if it concerns exactly one.
    #[must_use]
    pub fn player(&self) -> Option<PlayerId> {
        match self {
            GameEvent::TurnStarted { player, .. }
            | GameEvent::DiceRolled { player, .. }
            | GameEvent::Moved { player, .. }
            | GameEvent::PassedStart { player, .. }
            | GameEvent::PropertyOffered { player, .. }
            | GameEvent::PropertyPurchased { player, .. }
            | GameEvent::PurchaseDeclined { player, .. }
            | GameEvent::PurchaseFailed { player, .. }
            | GameEvent::TaxPaid { player, .. }
            | GameEvent::JailEntered { player }
            | GameEvent::JailReleased { player, .. }
            | GameEvent::StayedInJail { player }
            | GameEvent::BailRefused { player, .. }
            | GameEvent::DecisionRejected { player, .. }
            | GameEvent::PropertySold { player, .. }
            | GameEvent::PropertiesReturned { player, .. }
            | GameEvent::PlayerBankrupted { player, .. }
            | GameEvent::GameWon { player } => Some(*player),
            GameEvent::RentPaid { payer, .. } => Some(*payer),
            GameEvent::TurnLimitReached { .. } => None,
        }
    }

    /// Whether this event ends the game.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            GameEvent::GameWon { .. } | GameEvent::TurnLimitReached { .. }
        )
    }
}
