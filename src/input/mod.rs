//! Input handling: platform-agnostic event types, the per-frame input
//! contract the camera reads, and the event accumulator that implements it.

/// Platform-agnostic input events.
pub mod event;
/// Per-frame input contract consumed by camera rigs.
pub mod source;

/// Accumulates raw events into per-frame input state.
pub mod collector;

pub use collector::InputCollector;
pub use event::{InputEvent, Key, MouseButton};
pub use source::InputSource;
