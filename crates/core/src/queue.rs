//! Fixed-capacity ring buffer holding the upcoming pieces.
//!
//! The queue never reallocates: it is a flat array of [`QUEUE_CAP`] slots with
//! a head index and a length, all operations O(1). Raw indices stay private;
//! callers only see [`enqueue`](NextQueue::enqueue) / [`dequeue`](NextQueue::dequeue)
//! / [`front`](NextQueue::front) and head-to-tail iteration.

use arrayvec::CapacityError;
use tetris_stack_types::{Piece, QUEUE_CAP};

/// FIFO lookahead queue of upcoming pieces.
///
/// The session keeps it perpetually full; on its own it is just a bounded
/// queue that reports capacity violations instead of growing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NextQueue {
    slots: [Option<Piece>; QUEUE_CAP],
    head: usize,
    len: usize,
}

impl NextQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            slots: [None; QUEUE_CAP],
            head: 0,
            len: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == QUEUE_CAP
    }

    /// Number of pieces currently queued.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Fixed capacity of the queue.
    pub const fn capacity(&self) -> usize {
        QUEUE_CAP
    }

    /// Append a piece at the back.
    ///
    /// On a full queue nothing is mutated and the rejected piece travels back
    /// to the caller inside the error.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), CapacityError<Piece>> {
        if self.is_full() {
            return Err(CapacityError::new(piece));
        }
        let tail = (self.head + self.len) % QUEUE_CAP;
        self.slots[tail] = Some(piece);
        self.len += 1;
        Ok(())
    }

    /// The piece at the front, without removing it.
    pub fn front(&self) -> Option<&Piece> {
        self.slots[self.head].as_ref()
    }

    /// Remove and return the piece at the front, or `None` if empty.
    pub fn dequeue(&mut self) -> Option<Piece> {
        let piece = self.slots[self.head].take()?;
        self.head = (self.head + 1) % QUEUE_CAP;
        self.len -= 1;
        Some(piece)
    }

    /// Iterate the queued pieces from front to back.
    pub fn iter(&self) -> impl Iterator<Item = &Piece> {
        (0..self.len).filter_map(move |i| self.slots[(self.head + i) % QUEUE_CAP].as_ref())
    }
}

impl Default for NextQueue {
    fn default() -> Self {
        Self::new()
    }
}
