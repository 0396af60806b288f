//! Input handling: event types and the processor that converts raw host
//! events into composer commands.

/// Platform-agnostic input events.
pub mod event;
/// Converts raw events into composer commands.
pub mod processor;

pub use event::{InputEvent, MouseButton};
pub use processor::{InputProcessor, SceneCommand};
