use thiserror::Error;

/// Errors reported by the game model and the solvers.
#[derive(Debug, Error)]
pub enum Error {
    /// The position itself breaks the rules: wrong owl count, a cell or
    /// sun step off the track, or two owls sharing a cell before the nest.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Malformed caller input, such as a hand of the wrong size or an
    /// unrecognized card name.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The search never reached any of the candidate actions.
    #[error("insufficient search data, rerun with more iterations")]
    InsufficientData,
}

pub type Result<T> = std::result::Result<T, Error>;
