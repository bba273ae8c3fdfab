use thiserror::Error;

/// Errors surfaced by the terminal front end.  The simulation itself cannot fail.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Terminal(#[from] std::io::Error),
    #[error("could not initialise logging: {0}")]
    Logger(String),
}

pub type Result<T> = std::result::Result<T, GameError>;
