//! Fixed-capacity stack of banked pieces.
//!
//! Backed by an [`ArrayVec`], so pushes and pops are O(1) with no heap
//! allocation and a full stack reports the violation instead of growing.

use arrayvec::{ArrayVec, CapacityError};
use tetris_stack_types::{Piece, RESERVE_CAP};

/// LIFO reserve of up to [`RESERVE_CAP`] pieces.
///
/// Fill level is entirely player-driven: the session never refills it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReserveStack {
    slots: ArrayVec<Piece, RESERVE_CAP>,
}

impl ReserveStack {
    /// Create an empty stack.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.slots.is_full()
    }

    /// Number of pieces currently banked.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Fixed capacity of the stack.
    pub const fn capacity(&self) -> usize {
        RESERVE_CAP
    }

    /// Push a piece on top.
    ///
    /// On a full stack nothing is mutated and the rejected piece travels back
    /// to the caller inside the error.
    pub fn push(&mut self, piece: Piece) -> Result<(), CapacityError<Piece>> {
        self.slots.try_push(piece)
    }

    /// Remove and return the top piece, or `None` if empty.
    pub fn pop(&mut self) -> Option<Piece> {
        self.slots.pop()
    }

    /// The top piece, without removing it.
    pub fn top(&self) -> Option<&Piece> {
        self.slots.last()
    }

    /// Iterate the banked pieces from base to top.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        self.slots.iter()
    }
}
