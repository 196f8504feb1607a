//! Piece identity generator.
//!
//! Hands out pieces with a shape taken from the fixed cycle
//! `I → O → T → L → J → S → Z` and a strictly increasing id starting at 1.
//! The generator is a plain value owned by the session, so a test can inject
//! any starting state and replay the exact same sequence.

use tetris_stack_types::{Piece, PieceKind, PIECE_CYCLE, PIECE_KIND_COUNT};

/// Deterministic piece source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceGenerator {
    /// Id assigned to the next generated piece. Never reused, never reset.
    next_id: u32,
    /// Index into [`PIECE_CYCLE`], advanced modulo the cycle length.
    cursor: usize,
}

impl PieceGenerator {
    /// Create a generator at the canonical starting state (id 1, shape I).
    pub fn new() -> Self {
        Self::with_state(1, 0)
    }

    /// Create a generator at an arbitrary state.
    ///
    /// `cursor` is reduced modulo the cycle length so any value is valid.
    pub fn with_state(next_id: u32, cursor: usize) -> Self {
        Self {
            next_id,
            cursor: cursor % PIECE_KIND_COUNT,
        }
    }

    /// Produce the next piece, advancing both the id counter and the shape
    /// cursor. Always succeeds.
    pub fn generate(&mut self) -> Piece {
        let piece = Piece::new(PIECE_CYCLE[self.cursor], self.next_id);
        self.next_id += 1;
        self.cursor = (self.cursor + 1) % PIECE_KIND_COUNT;
        piece
    }

    /// Shape the next call to [`generate`](Self::generate) will produce.
    pub fn peek_kind(&self) -> PieceKind {
        PIECE_CYCLE[self.cursor]
    }

    /// Id the next call to [`generate`](Self::generate) will assign.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::new()
    }
}
