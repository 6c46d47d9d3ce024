//! Structured game events and the sinks that consume them.
//!
//! The engine never formats text. Every visible outcome of a turn is a
//! [`GameEvent`] handed to an [`EventSink`]:
//!
//! ```
//! use rust_monopoly::core::PlayerId;
//! use rust_monopoly::events::{EventSink, GameEvent, RecordingSink};
//!
//! let mut sink = RecordingSink::new();
//! sink.emit(GameEvent::JailEntered { player: PlayerId::new(0) });
//! assert_eq!(sink.len(), 1);
//! ```

mod event;
mod sink;

pub use event::{GameEvent, ReleaseMethod};
pub use sink::{EventSink, NullSink, RecordingSink, TracingSink};
