// error.rs - Failures that end the simulation

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Writing a frame or escape sequence to the terminal failed.
    #[error("terminal write failed: {0}")]
    Write(#[from] std::io::Error),
    /// Listening for the interrupt signal failed.
    #[error("waiting for interrupt failed: {0}")]
    Signal(#[source] std::io::Error),
    /// The render loop stopped without reporting a write failure.
    #[error("render loop stopped: {0}")]
    Driver(String),
}

pub type Result<T> = std::result::Result<T, Error>;
