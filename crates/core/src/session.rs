//! Linear game history with a navigable cursor
//!
//! One [`Session`] exists per server process. It records every position
//! reached during the game and a cursor marking the position the client is
//! currently looking at. Rewinding moves the cursor; playing from a rewound
//! cursor discards the positions after it before appending the new one, so
//! the history stays a single line with no sidelines.

use serde::{Deserialize, Serialize};

use crate::engine::{AvailableMoves, Engine};
use crate::error::Result;

/// FEN of the standard chess starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// A reached position plus the flags of the move that produced it. The root
/// entry has no producing move, so its capture flag is false.
#[derive(Debug, Clone, PartialEq, Eq)]
struct HistoryEntry {
    fen: String,
    is_check: bool,
    is_takes: bool,
}

/// Snapshot handed back by every session operation. `available_moves` is
/// recomputed from the engine on each call, never cached across mutations.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub fen: String,
    pub is_check: bool,
    pub is_takes: bool,
    pub available_moves: AvailableMoves,
}

#[derive(Debug)]
pub struct Session<E> {
    engine: E,
    history: Vec<HistoryEntry>,
    cursor: usize,
}

impl<E: Engine> Session<E> {
    /// Session starting from the standard position.
    pub fn new(engine: E) -> Result<Self> {
        Self::from_fen(engine, STARTING_FEN)
    }

    /// Session starting from an arbitrary position. The FEN is vetted by
    /// the engine before the root entry is created.
    pub fn from_fen(engine: E, fen: &str) -> Result<Self> {
        let is_check = engine.is_check(fen)?;
        Ok(Session {
            engine,
            history: vec![HistoryEntry {
                fen: fen.to_string(),
                is_check,
                is_takes: false,
            }],
            cursor: 0,
        })
    }

    /// Plays `from` -> `to` on the cursor position. Success truncates
    /// everything after the cursor, appends the resulting position and moves
    /// the cursor to the new tip. Any error leaves history and cursor
    /// exactly as they were.
    pub fn play(&mut self, from: &str, to: &str) -> Result<GameState> {
        let outcome = self.engine.apply(&self.history[self.cursor].fen, from, to)?;
        let available_moves = self.engine.legal_moves(&outcome.fen)?;

        self.history.truncate(self.cursor + 1);
        self.history.push(HistoryEntry {
            fen: outcome.fen,
            is_check: outcome.is_check,
            is_takes: outcome.is_capture,
        });
        self.cursor = self.history.len() - 1;

        Ok(self.snapshot(available_moves))
    }

    /// Pure read of the cursor position.
    pub fn state(&self) -> Result<GameState> {
        let available_moves = self.engine.legal_moves(&self.history[self.cursor].fen)?;
        Ok(self.snapshot(available_moves))
    }

    /// Moves the cursor `back` steps toward the start, clamping at the root
    /// rather than failing. History itself is untouched, but a later `play`
    /// will overwrite the line from the new cursor on.
    pub fn navigate_back(&mut self, back: u32) -> Result<GameState> {
        self.cursor = self.cursor.saturating_sub(back as usize);
        self.state()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn snapshot(&self, available_moves: AvailableMoves) -> GameState {
        let entry = &self.history[self.cursor];
        GameState {
            fen: entry.fen.clone(),
            is_check: entry.is_check,
            is_takes: entry.is_takes,
            available_moves,
        }
    }
}
