//! In-process legality backend over the `shakmaty` crate.

use std::collections::HashMap;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode, File, Move, Position, Role, Square};

use super::{AvailableMoves, Engine, MoveOutcome};
use crate::error::{Error, Result};

/// Legality oracle backed by shakmaty's move generation.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShakmatyEngine;

impl Engine for ShakmatyEngine {
    fn apply(&self, fen: &str, from: &str, to: &str) -> Result<MoveOutcome> {
        let position = parse_position(fen)?;
        let from_square = parse_square(from)?;
        let to_square = parse_square(to)?;

        let mv = find_move(&position, from_square, to_square).ok_or_else(|| Error::IllegalMove {
            from: from.to_string(),
            to: to.to_string(),
        })?;

        let is_capture = mv.is_capture();
        // The move came out of legal_moves, so play can only fail if the
        // move generator and the validator disagree.
        let next = position.play(mv).map_err(|_| {
            Error::EngineUnavailable(format!("backend rejected generated move {from}{to}"))
        })?;

        Ok(MoveOutcome {
            fen: write_fen(&next),
            is_check: next.is_check(),
            is_capture,
        })
    }

    fn legal_moves(&self, fen: &str) -> Result<AvailableMoves> {
        let position = parse_position(fen)?;
        let mut map: AvailableMoves = HashMap::with_capacity(32);
        for mv in position.legal_moves() {
            let Some((from, to)) = move_endpoints(&mv) else {
                continue;
            };
            let targets = map.entry(from.to_string()).or_insert_with(Vec::new);
            let to = to.to_string();
            // Promotions generate four moves to the same square.
            if !targets.contains(&to) {
                targets.push(to);
            }
        }
        Ok(map)
    }

    fn is_check(&self, fen: &str) -> Result<bool> {
        let position = parse_position(fen)?;
        Ok(position.is_check())
    }
}

fn parse_position(fen: &str) -> Result<Chess> {
    let setup: Fen = fen
        .parse()
        .map_err(|e| Error::InvalidFen(format!("{e}: {fen}")))?;
    setup
        .into_position(CastlingMode::Standard)
        .map_err(|e| Error::InvalidFen(format!("{e}: {fen}")))
}

fn write_fen(position: &Chess) -> String {
    Fen::from_position(position, EnPassantMode::Legal).to_string()
}

fn parse_square(name: &str) -> Result<Square> {
    name.parse()
        .map_err(|_| Error::MalformedSquare(name.to_string()))
}

/// Resolves a GUI `(from, to)` pair against the legal move list. Promotions
/// default to a queen; underpromotion would need a richer request shape.
fn find_move(position: &Chess, from: Square, to: Square) -> Option<Move> {
    let mut queen_promotion = None;
    for mv in position.legal_moves() {
        match move_endpoints(&mv) {
            Some((f, t)) if f == from && t == to => {}
            _ => continue,
        }
        match mv.promotion() {
            None => return Some(mv),
            Some(Role::Queen) => queen_promotion = Some(mv),
            Some(_) => {}
        }
    }
    queen_promotion
}

/// The squares a client sees for a move. Castling is addressed by the king's
/// two-square hop, which is how boards present it.
fn move_endpoints(mv: &Move) -> Option<(Square, Square)> {
    match *mv {
        Move::Normal { from, to, .. } => Some((from, to)),
        Move::EnPassant { from, to } => Some((from, to)),
        Move::Castle { king, rook } => {
            let file = if rook.file() > king.file() { File::G } else { File::C };
            Some((king, Square::from_coords(file, king.rank())))
        }
        Move::Put { .. } => None,
    }
}
