//! Snapshot records and the fixed-capacity stack behind `make_move` /
//! `unmake_move`.
//!
//! A snapshot captures every mutable field of the board, so restoration is a
//! verbatim overwrite with no replay logic.

use crate::errors::{EngineError, EngineResult};
use crate::game_state::chess_rules::MAX_DEPTH;
use crate::game_state::chess_types::{CastlingRights, Color, Move, Square};

/// Full pre-move snapshot paired with the move that produced the next state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoState {
    pub mv: Move,

    pub pieces: [[u64; 6]; 2],
    pub occupancy_by_color: [u64; 2],
    pub occupancy_all: u64,

    pub side_to_move: Color,
    pub castling_rights: CastlingRights,
    pub en_passant_square: Option<Square>,
    pub halfmove_clock: u16,
    pub fullmove_number: u16,
    pub king_square: [Square; 2],
}

/// Bounded history stack. Capacity is `MAX_DEPTH`; pushing past it is a
/// reported precondition violation, never a silent overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoStack {
    entries: Vec<UndoState>,
}

impl Default for UndoStack {
    fn default() -> Self {
        Self::new()
    }
}

impl UndoStack {
    pub fn new() -> Self {
        Self {
            entries: Vec::with_capacity(MAX_DEPTH),
        }
    }

    pub fn try_push(&mut self, entry: UndoState) -> EngineResult<()> {
        if self.entries.len() >= MAX_DEPTH {
            return Err(EngineError::UndoStackFull {
                capacity: MAX_DEPTH,
            });
        }
        self.entries.push(entry);
        Ok(())
    }

    pub fn pop(&mut self) -> Option<UndoState> {
        self.entries.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_entry() -> UndoState {
        UndoState {
            mv: 0,
            pieces: [[0; 6]; 2],
            occupancy_by_color: [0; 2],
            occupancy_all: 0,
            side_to_move: Color::White,
            castling_rights: 0,
            en_passant_square: None,
            halfmove_clock: 0,
            fullmove_number: 1,
            king_square: [4, 60],
        }
    }

    #[test]
    fn push_past_capacity_reports_exhaustion() {
        let mut stack = UndoStack::new();
        for _ in 0..MAX_DEPTH {
            stack
                .try_push(dummy_entry())
                .expect("pushes within capacity should succeed");
        }

        assert_eq!(
            stack.try_push(dummy_entry()),
            Err(EngineError::UndoStackFull {
                capacity: MAX_DEPTH
            })
        );
        assert_eq!(stack.len(), MAX_DEPTH);
    }

    #[test]
    fn pop_on_empty_stack_returns_none() {
        let mut stack = UndoStack::new();
        assert!(stack.pop().is_none());
    }
}
