//! Terminal input module (loop-facing).
//!
//! The demo has no interactive controls. The only input it reacts to is the
//! environment asking the session to end, which is mapped to a
//! [`ControlSignal`] the frame loop turns into a stop request.

pub mod map;

pub use map::{control_for_event, should_quit, ControlSignal};
