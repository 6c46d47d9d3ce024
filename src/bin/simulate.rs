//! Play a game on the reference board.
//!
//! Environment:
//! - `BOARD_SEED`: dice seed (default 42)
//! - `BOARD_PLAYERS`: 2..=8 (default 2)
//! - `BOARD_MAX_TURNS`: stop after this many turns (default: play to the end)
//! - `BOARD_AUTOPLAY`: if set, every player buys everything and rolls for
//!   doubles in jail instead of reading answers from stdin
//! - `RUST_LOG`: tracing filter (default `rust_monopoly=info`)

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rust_monopoly::{
    Choice, DecisionProvider, Game, GameConfig, GameResult, GameRng, PlayerId, Prompt,
    StandingOrders, TracingSink,
};

/// Reads answers line by line, writing each question before it reads.
///
/// A failed write or read, or end of input, abandons the prompt.
struct ConsoleDecisions<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsoleDecisions<R, W> {
    fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn parse(line: &str) -> Option<Choice> {
        match line.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" | "buy" => Some(Choice::Accept),
            "n" | "no" => Some(Choice::Decline),
            "r" | "roll" => Some(Choice::RollForRelease),
            "b" | "bail" | "pay" => Some(Choice::PayBail),
            "q" | "quit" => Some(Choice::Abandon),
            _ => None,
        }
    }
}

impl<R: BufRead, W: Write> DecisionProvider for ConsoleDecisions<R, W> {
    fn decide(&mut self, player: PlayerId, prompt: &Prompt) -> Choice {
        let question = match prompt {
            Prompt::Purchase {
                name, price, cash, ..
            } => format!("{player}: buy {name} for {price}? (cash {cash}) [y/n] "),
            Prompt::JailRelease { bail, cash } => {
                format!("{player}: in jail. roll for doubles or pay {bail}? (cash {cash}) [r/b] ")
            }
        };

        loop {
            let shown = self
                .output
                .write_all(question.as_bytes())
                .and_then(|()| self.output.flush());
            if shown.is_err() {
                return Choice::Abandon;
            }

            let mut line = String::new();
            match self.input.read_line(&mut line) {
                Ok(0) | Err(_) => return Choice::Abandon,
                Ok(_) => {}
            }
            if let Some(choice) = Self::parse(&line) {
                return choice;
            }
        }
    }
}

fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("invalid {key}: {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_monopoly=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let seed: u64 = env_or("BOARD_SEED", 42)?;
    let players: usize = env_or("BOARD_PLAYERS", 2)?;
    let max_turns: Option<u32> = match std::env::var("BOARD_MAX_TURNS") {
        Ok(_) => Some(env_or("BOARD_MAX_TURNS", 0)?),
        Err(_) => None,
    };
    let autoplay = std::env::var_os("BOARD_AUTOPLAY").is_some();

    let mut config = GameConfig::new(players);
    if let Some(turns) = max_turns {
        config = config.with_max_turns(turns);
    }

    tracing::info!(seed, players, ?max_turns, autoplay, "starting simulation");

    let decisions: Box<dyn DecisionProvider> = if autoplay {
        Box::new(StandingOrders::buy_everything())
    } else {
        Box::new(ConsoleDecisions::new(io::stdin().lock(), io::stdout()))
    };

    let mut game = Game::new(config, GameRng::new(seed), decisions, TracingSink)
        .context("failed to set up game")?;
    let result = game.run().context("game aborted")?;

    match result {
        GameResult::Winner(player) => {
            println!("{player} wins after {} turns", game.state().turn_number);
        }
        GameResult::TurnLimit { leader } => {
            println!("turn limit reached; {leader} leads");
        }
    }
    for account in game.state().accounts() {
        println!(
            "  {}: cash {}, {} properties",
            account.id(),
            account.cash(),
            account.inventory().len()
        );
    }
    Ok(())
}
