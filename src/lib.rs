//! A typing reflex game: a word or phrase is shown and the player must type
//! it back before the countdown runs out. Each success advances to a harder
//! level, and every fifth level shortens the time budget; one failure ends
//! the session.
//!
//! The core ([`game::Game`]) is a pure state machine with no I/O or timing of
//! its own. A host drives it (start/reset calls, one
//! [`decrement_time`](game::Game::decrement_time) per elapsed second, one
//! [`validate_input`](game::Game::validate_input) per attempt) and observes
//! it through the listener traits in [`events`]. The [`driver`] module
//! provides the terminal host.

pub mod driver;
pub mod events;
pub mod game;
