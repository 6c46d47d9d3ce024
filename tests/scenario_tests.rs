//! Turn-by-turn scenarios on the reference board.
//!
//! Each test seats players at chosen positions, scripts the dice and the
//! answers, and checks cash, ownership and the event stream.

use rust_monopoly::rules::transactions;
use rust_monopoly::{
    Account, Board, Choice, Game, GameConfig, GameEvent, GameResult, GameState, JailStrategy,
    PlayerId, Prompt, RecordingSink, ReleaseMethod, ScriptedDecisions, ScriptedDice,
    StandingOrders,
};

const BROWN_1: usize = 1;
const JAIL: usize = 7;

type ScriptedGame = Game<ScriptedDice, ScriptedDecisions, RecordingSink>;

fn p(i: u8) -> PlayerId {
    PlayerId::new(i)
}

fn scripted(
    state: GameState,
    config: GameConfig,
    rolls: &[(u8, u8)],
    answers: &[Choice],
) -> ScriptedGame {
    Game::with_state(
        config,
        state,
        ScriptedDice::new(rolls.iter().copied()),
        ScriptedDecisions::new(answers.iter().copied()),
        RecordingSink::new(),
    )
    .expect("valid setup")
}

fn events(game: &ScriptedGame) -> Vec<GameEvent> {
    game.sink().events().cloned().collect()
}

/// Player A lands on unowned brown 1 with 1000 and buys it.
#[test]
fn test_buy_brown_1() {
    let a = p(0);
    let accounts = vec![Account::new(a, 1000).at(30), Account::new(p(1), 1000)];
    let state = GameState::from_accounts(Board::reference(), accounts).unwrap();
    let config = GameConfig::new(2).with_pass_start_bonus(0);
    let mut game = scripted(state, config, &[(1, 1)], &[Choice::Accept]);

    assert_eq!(game.step(), Ok(None));

    let account = game.state().account(a).unwrap();
    assert_eq!(account.position(), BROWN_1);
    assert_eq!(account.cash(), 940);
    assert!(account.owns(BROWN_1));
    assert_eq!(game.state().board().property(BROWN_1).unwrap().owner(), Some(a));
    assert_eq!(game.state().board().find("brown 1"), Some(BROWN_1));

    match &game.decisions().asked()[0] {
        (player, Prompt::Purchase { name, price, cash, .. }) => {
            assert_eq!(*player, a);
            assert_eq!(name, "brown 1");
            assert_eq!(*price, 60);
            assert_eq!(*cash, 1000);
        }
        other => panic!("unexpected prompt {other:?}"),
    }
}

/// Player B with 10 lands on A's brown 1, overdraws, and leaves the rotation.
#[test]
fn test_rent_bankrupts_payer() {
    let (b, a, c) = (p(0), p(1), p(2));
    let accounts = vec![
        Account::new(b, 10).at(30),
        Account::new(a, 1000),
        Account::new(c, 1000),
    ];
    let mut state = GameState::from_accounts(Board::reference(), accounts).unwrap();
    transactions::purchase(&mut state, a, BROWN_1).unwrap();
    let config = GameConfig::new(3).with_pass_start_bonus(0);
    let mut game = scripted(state, config, &[(1, 1)], &[]);

    // B's turn.
    game.step().unwrap();
    assert_eq!(game.state().account(b).unwrap().cash(), -10);
    assert_eq!(game.state().account(a).unwrap().cash(), 950);
    assert!(events(&game).contains(&GameEvent::RentPaid {
        payer: b,
        owner: a,
        field: BROWN_1,
        due: 20,
        paid: 10
    }));
    assert_eq!(game.remaining_players(), &[b, a, c]);

    // Removed when the scheduler closes the turn.
    game.step().unwrap();
    assert_eq!(game.remaining_players(), &[a, c]);
    assert_eq!(game.current_player(), Some(a));
    assert!(events(&game).contains(&GameEvent::PlayerBankrupted { player: b, cash: -10 }));
    assert_eq!(game.state().board().property(BROWN_1).unwrap().owner(), Some(a));
}

/// Jailed player C rolls a double and leaves jail without moving.
#[test]
fn test_jail_release_by_doubles() {
    let c = p(0);
    let accounts = vec![Account::new(c, 1000).jailed_at(JAIL), Account::new(p(1), 1000)];
    let state = GameState::from_accounts(Board::reference(), accounts).unwrap();
    let mut game = scripted(state, GameConfig::new(2), &[(3, 3)], &[Choice::RollForRelease]);

    game.step().unwrap();

    let account = game.state().account(c).unwrap();
    assert!(!account.is_jailed());
    assert_eq!(account.position(), JAIL);
    assert_eq!(game.last_turn().unwrap().roll, None);

    let log = events(&game);
    assert!(log.contains(&GameEvent::JailReleased {
        player: c,
        method: ReleaseMethod::Doubles
    }));
    assert!(!log.iter().any(|e| matches!(e, GameEvent::Moved { .. })));
}

/// Two players; one goes bankrupt on tax and the other wins.
#[test]
fn test_two_player_win() {
    let accounts = vec![Account::new(p(0), 20), Account::new(p(1), 1000)];
    let state = GameState::from_accounts(Board::reference(), accounts).unwrap();
    let mut game = scripted(state, GameConfig::new(2), &[(1, 2)], &[]);

    let result = game.run().unwrap();

    assert_eq!(result, GameResult::Winner(p(1)));
    assert!(result.is_winner(p(1)));
    assert_eq!(game.state().account(p(0)).unwrap().cash(), -80);
    let log = events(&game);
    assert_eq!(
        &log[log.len() - 2..],
        &[
            GameEvent::PlayerBankrupted {
                player: p(0),
                cash: -80
            },
            GameEvent::GameWon { player: p(1) },
        ]
    );
}

/// Landing on GoToJail ends the turn; the prompt comes on the next turn.
#[test]
fn test_jail_prompt_waits_for_next_turn() {
    let (a, b) = (p(0), p(1));
    let accounts = vec![Account::new(a, 1000).at(16), Account::new(b, 1000)];
    let state = GameState::from_accounts(Board::reference(), accounts).unwrap();
    let mut game = scripted(
        state,
        GameConfig::new(2),
        &[(2, 3), (1, 2), (1, 4)],
        &[Choice::PayBail],
    );

    game.step().unwrap();
    assert!(game.state().account(a).unwrap().is_jailed());
    assert_eq!(game.state().account(a).unwrap().position(), JAIL);
    assert!(game.decisions().asked().is_empty());

    // B lands on income tax; no prompt.
    game.step().unwrap();
    assert!(game.decisions().asked().is_empty());

    game.step().unwrap();
    assert_eq!(
        game.decisions().asked(),
        &[(a, Prompt::JailRelease { bail: 50, cash: 1000 })]
    );
    let account = game.state().account(a).unwrap();
    assert!(!account.is_jailed());
    assert_eq!(account.cash(), 950);
    assert_eq!(account.position(), JAIL);
    // The bail turn drew no dice.
    assert_eq!(game.dice().rolls_drawn(), 2);
}

/// A player who cannot afford the price is told so and keeps their cash.
#[test]
fn test_unaffordable_purchase() {
    let accounts = vec![Account::new(p(0), 90).at(3), Account::new(p(1), 1000)];
    let state = GameState::from_accounts(Board::reference(), accounts).unwrap();
    let mut game = scripted(state, GameConfig::new(2), &[(1, 2)], &[Choice::Accept]);

    game.step().unwrap();

    assert_eq!(game.state().account(p(0)).unwrap().cash(), 90);
    assert_eq!(game.state().board().property(6).unwrap().owner(), None);
    assert_eq!(
        game.sink().last(),
        Some(&GameEvent::PurchaseFailed {
            player: p(0),
            field: 6,
            price: 120,
            cash: 90
        })
    );
}

/// Selling between turns can save a player who ended a turn in debt.
#[test]
fn test_sale_restores_solvency() {
    let accounts = vec![Account::new(p(0), 150), Account::new(p(1), 1000)];
    let mut state = GameState::from_accounts(Board::reference(), accounts).unwrap();
    transactions::purchase(&mut state, p(0), BROWN_1).unwrap();
    let mut game = scripted(state, GameConfig::new(2), &[(1, 2)], &[]);

    // Income tax takes 100 of the remaining 90.
    game.step().unwrap();
    assert_eq!(game.state().account(p(0)).unwrap().cash(), -10);

    assert_eq!(game.sell_property(p(0), BROWN_1), Ok(30));
    game.step().unwrap();

    assert_eq!(game.remaining_players(), &[p(0), p(1)]);
    assert_eq!(game.current_player(), Some(p(1)));
    assert!(!game
        .sink()
        .events()
        .any(|e| matches!(e, GameEvent::PlayerBankrupted { .. })));
}

/// A jailed player who cannot cover the bail under a pay-bail order rolls
/// instead, and the turn ends.
#[test]
fn test_pay_bail_order_with_no_cash_ends_turn() {
    let broke = p(0);
    let accounts = vec![Account::new(broke, 10).jailed_at(JAIL), Account::new(p(1), 1000)];
    let state = GameState::from_accounts(Board::reference(), accounts).unwrap();
    let orders =
        StandingOrders::buy_everything().with_jail_strategy(JailStrategy::PayWhenAffordable);
    let mut game = Game::with_state(
        GameConfig::new(2),
        state,
        ScriptedDice::new([(2, 5)]),
        orders,
        RecordingSink::new(),
    )
    .unwrap();

    assert_eq!(game.step(), Ok(None));

    let account = game.state().account(broke).unwrap();
    assert!(account.is_jailed());
    assert_eq!(account.cash(), 10);
    assert_eq!(game.dice().rolls_drawn(), 1);
    assert!(!game
        .sink()
        .events()
        .any(|e| matches!(e, GameEvent::BailRefused { .. })));
    assert_eq!(game.sink().last(), Some(&GameEvent::StayedInJail { player: broke }));
}
