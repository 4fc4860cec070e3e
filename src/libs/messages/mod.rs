//! User-facing text and the macros that print it.
//!
//! Text lives in [`Message`] and its `Display` impl; the `msg_*!` macros decide
//! whether it goes to the terminal or into the tracing subscriber.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
