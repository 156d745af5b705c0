use thiserror::Error;

use crate::board::Color;

/// Fatal invariant violations inside the rules engine. Coordinate parse
/// failures are not errors in this sense; they surface as `None` from
/// `sq_from_alg` and are handled locally.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Legality filtering was asked about a position holding no king of the
    /// requested color. Cannot happen in normal play; it means something
    /// external corrupted the position.
    #[error("no {color} king on the board")]
    MissingKing { color: Color },
}
