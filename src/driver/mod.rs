use thiserror::Error;

use crate::game::Game;

pub mod terminal;

/// Defines a host that can drive game sessions: it owns the tick source and
/// the input source, and feeds both into the game core.
pub trait Driver {
    /// Construct a new instance of the driver hosting the given game.
    fn new(game: Game) -> Result<Self, DriverError>
    where
        Self: Sized;

    /// Play sessions until the player quits.
    fn play(&mut self) -> Result<(), DriverError>;
}

/// Failure modes for drivers.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("host event channel disconnected")]
    ChannelClosed,
    #[error("io error")]
    Io(#[from] std::io::Error),
}
