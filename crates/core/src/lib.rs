//! Chess Session Core Library
//!
//! Owns the game history and view cursor for a single GUI-driven chess
//! session. All rule questions (legality, check, captures) are delegated to
//! a pluggable [`Engine`]; the default backend is [`ShakmatyEngine`].

pub mod engine;
pub mod error;
pub mod session;

pub use engine::{AvailableMoves, Engine, MoveOutcome, ShakmatyEngine};
pub use error::{Error, Result};
pub use session::{GameState, Session, STARTING_FEN};
