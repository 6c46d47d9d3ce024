//! Event sinks.
//!
//! The engine writes to a sink and never reads back from it.

use im::Vector;

use super::event::GameEvent;

/// Consumer of the engine's event stream.
pub trait EventSink {
    /// Receive the next event. Called in the order events happen.
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Discards every event.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: GameEvent) {}
}

/// Keeps every event for later inspection.
///
/// Backed by a persistent vector, so taking a snapshot mid-game is cheap.
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Vector<GameEvent>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events so far, oldest first.
    pub fn events(&self) -> impl Iterator<Item = &GameEvent> {
        self.events.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    #[must_use]
    pub fn last(&self) -> Option<&GameEvent> {
        self.events.last()
    }

    /// Events matching `pred`, oldest first.
    pub fn matching<'a>(
        &'a self,
        pred: impl Fn(&GameEvent) -> bool + 'a,
    ) -> impl Iterator<Item = &'a GameEvent> + 'a {
        self.events.iter().filter(move |e| pred(e))
    }

    /// Drop everything recorded so far.
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Copy of the current log.
    #[must_use]
    pub fn snapshot(&self) -> Vector<GameEvent> {
        self.events.clone()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: GameEvent) {
        self.events.push_back(event);
    }
}

/// Forwards every event to `tracing` at info level.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: GameEvent) {
        match event.player() {
            Some(player) => tracing::info!(player = %player, event = ?event, "game event"),
            None => tracing::info!(event = ?event, "game event"),
        }
    }
}
