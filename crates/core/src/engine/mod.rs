//! Move-legality oracle behind the session controller
//!
//! The session never answers rule questions itself. It hands a position to
//! an [`Engine`] and stores whatever comes back, so any legality backend
//! (in-process library, external process) can sit behind the trait.

mod shakmaty;

pub use self::shakmaty::ShakmatyEngine;

use std::collections::HashMap;

use crate::error::Result;

/// Legal destinations per origin square, keyed by square name ("e2").
pub type AvailableMoves = HashMap<String, Vec<String>>;

/// Result of applying one move to a position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Serialized position after the move.
    pub fen: String,
    /// The side to move in the resulting position is in check.
    pub is_check: bool,
    /// The move captured a piece (en passant included).
    pub is_capture: bool,
}

/// A stateless legality oracle. Each call returns a definitive verdict or a
/// transport failure; no retries happen at this layer.
pub trait Engine {
    /// Applies `from` -> `to` to the position in `fen`.
    fn apply(&self, fen: &str, from: &str, to: &str) -> Result<MoveOutcome>;

    /// Maps every origin square to its legal destination squares.
    fn legal_moves(&self, fen: &str) -> Result<AvailableMoves>;

    /// Whether the side to move is in check. Also validates the FEN, which
    /// is how user-supplied starting positions are vetted.
    fn is_check(&self, fen: &str) -> Result<bool>;
}
