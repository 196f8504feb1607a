//! Piece flow session - the controller behind the menu actions.
//!
//! Owns the next queue, the reserve stack and the generator, and exposes the
//! three player actions. The central invariant is that the queue is always
//! full: every action that removes a piece from the queue immediately
//! generates and enqueues a replacement before returning.
//!
//! Each action is atomic with respect to the visible state: a rejected action
//! leaves both containers exactly as they were.

use std::error::Error;
use std::fmt;

use tetris_stack_types::{Piece, SessionAction};

use crate::generator::PieceGenerator;
use crate::queue::NextQueue;
use crate::reserve::ReserveStack;
use crate::snapshot::SessionSnapshot;

/// Why a session action did not hand back a piece.
///
/// The reserve variants are ordinary gameplay outcomes. The queue variants
/// are defensive: the always-full invariant makes them unreachable in normal
/// operation, and they exist so a violated invariant surfaces as a report
/// instead of a crash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionError {
    /// Reserve rejected because the stack is full.
    ReserveFull,
    /// UseReserved rejected because the stack is empty.
    ReserveEmpty,
    /// The queue was empty when an action tried to remove its front.
    QueueUnderflow,
    /// The queue was already full when a refill tried to enqueue.
    QueueOverflow,
}

impl ActionError {
    /// True for the queue-side variants that indicate a broken invariant
    /// rather than a legitimate rejection.
    pub fn is_unexpected(&self) -> bool {
        matches!(self, ActionError::QueueUnderflow | ActionError::QueueOverflow)
    }
}

impl fmt::Display for ActionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionError::ReserveFull => {
                write!(f, "reserve stack is full, use a reserved piece first")
            }
            ActionError::ReserveEmpty => write!(f, "no reserved pieces to use"),
            ActionError::QueueUnderflow => {
                write!(f, "next queue is empty (always-full invariant violated)")
            }
            ActionError::QueueOverflow => {
                write!(f, "next queue rejected a refill (always-full invariant violated)")
            }
        }
    }
}

impl Error for ActionError {}

/// One interactive piece-flow session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    next: NextQueue,
    reserved: ReserveStack,
    generator: PieceGenerator,
    /// Invariant violation recorded by the last refill, if any.
    warning: Option<ActionError>,
}

impl Session {
    /// Start a session from the canonical generator state.
    ///
    /// The queue comes up already filled to capacity.
    pub fn new() -> Self {
        Self::with_generator(PieceGenerator::new())
    }

    /// Start a session from an injected generator state.
    pub fn with_generator(generator: PieceGenerator) -> Self {
        let mut session = Self {
            next: NextQueue::new(),
            reserved: ReserveStack::new(),
            generator,
            warning: None,
        };
        while !session.next.is_full() {
            // Cannot fail below capacity; the loop guard keeps us there.
            let piece = session.generator.generate();
            let _ = session.next.enqueue(piece);
        }
        session
    }

    /// Play the piece at the front of the queue.
    ///
    /// The consumed slot is refilled from the generator before returning.
    /// A refill that finds the queue already full (impossible while the
    /// always-full invariant holds) is recorded as a warning next to the
    /// played piece, not instead of it; see
    /// [`take_warning`](Self::take_warning).
    pub fn play(&mut self) -> Result<Piece, ActionError> {
        let piece = self.next.dequeue().ok_or(ActionError::QueueUnderflow)?;
        self.refill();
        Ok(piece)
    }

    /// Move the piece at the front of the queue onto the reserve stack.
    ///
    /// Stack capacity is checked before the queue is touched, so a rejected
    /// reserve leaves the queue front in place. On success the queue is
    /// refilled exactly as in [`play`](Self::play).
    pub fn reserve(&mut self) -> Result<Piece, ActionError> {
        if self.reserved.is_full() {
            return Err(ActionError::ReserveFull);
        }
        let piece = self.next.dequeue().ok_or(ActionError::QueueUnderflow)?;
        self.reserved
            .push(piece)
            .map_err(|_| ActionError::ReserveFull)?;
        self.refill();
        Ok(piece)
    }

    /// Take back the piece on top of the reserve stack.
    ///
    /// The queue is never touched by this action.
    pub fn use_reserved(&mut self) -> Result<Piece, ActionError> {
        self.reserved.pop().ok_or(ActionError::ReserveEmpty)
    }

    /// Dispatch a player action, returning the piece that moved.
    pub fn apply(&mut self, action: SessionAction) -> Result<Piece, ActionError> {
        match action {
            SessionAction::Play => self.play(),
            SessionAction::Reserve => self.reserve(),
            SessionAction::UseReserved => self.use_reserved(),
        }
    }

    /// Read-only view of the next queue (front to back).
    pub fn next_queue(&self) -> &NextQueue {
        &self.next
    }

    /// Read-only view of the reserve stack (base to top).
    pub fn reserve_stack(&self) -> &ReserveStack {
        &self.reserved
    }

    /// Current generator state.
    pub fn generator(&self) -> &PieceGenerator {
        &self.generator
    }

    /// Copy the container contents into a render-ready snapshot.
    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    /// Warning recorded by the last action, clearing it.
    ///
    /// Set only when a refill found the queue already full, which the
    /// always-full invariant makes unreachable in normal operation. The
    /// action that triggered it still hands back its piece; callers report
    /// the warning alongside that outcome.
    pub fn take_warning(&mut self) -> Option<ActionError> {
        self.warning.take()
    }

    /// Generate one piece and enqueue it at the back of the queue.
    ///
    /// Every refill follows exactly one dequeue, so the enqueue cannot find
    /// the queue full while the invariant holds. If it does anyway, the
    /// violation is recorded for [`take_warning`](Self::take_warning) rather
    /// than displacing the action's own result.
    fn refill(&mut self) {
        let piece = self.generator.generate();
        if self.next.enqueue(piece).is_err() {
            self.warning = Some(ActionError::QueueOverflow);
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tetris_stack_types::{PieceKind, QUEUE_CAP, RESERVE_CAP};

    #[test]
    fn starts_with_a_full_queue_and_empty_stack() {
        let session = Session::new();
        assert_eq!(session.next_queue().len(), QUEUE_CAP);
        assert!(session.reserve_stack().is_empty());

        let ids: Vec<u32> = session.next_queue().iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn play_consumes_front_and_refills() {
        let mut session = Session::new();
        let played = session.play().unwrap();
        assert_eq!(played, Piece::new(PieceKind::I, 1));
        assert_eq!(session.next_queue().len(), QUEUE_CAP);
        assert_eq!(session.next_queue().front().map(|p| p.id), Some(2));
    }

    #[test]
    fn reserve_moves_front_onto_stack() {
        let mut session = Session::new();
        let reserved = session.reserve().unwrap();
        assert_eq!(reserved.id, 1);
        assert_eq!(session.reserve_stack().top(), Some(&reserved));
        assert_eq!(session.next_queue().len(), QUEUE_CAP);
    }

    #[test]
    fn reserve_on_full_stack_mutates_nothing() {
        let mut session = Session::new();
        for _ in 0..RESERVE_CAP {
            session.reserve().unwrap();
        }

        let front_before = session.next_queue().front().copied();
        let stack_before: Vec<Piece> = session.reserve_stack().iter().copied().collect();

        assert_eq!(session.reserve(), Err(ActionError::ReserveFull));

        assert_eq!(session.next_queue().front().copied(), front_before);
        let stack_after: Vec<Piece> = session.reserve_stack().iter().copied().collect();
        assert_eq!(stack_after, stack_before);
    }

    #[test]
    fn use_reserved_on_empty_stack_mutates_nothing() {
        let mut session = Session::new();
        let queue_before: Vec<Piece> = session.next_queue().iter().copied().collect();

        assert_eq!(session.use_reserved(), Err(ActionError::ReserveEmpty));

        let queue_after: Vec<Piece> = session.next_queue().iter().copied().collect();
        assert_eq!(queue_after, queue_before);
        assert!(session.reserve_stack().is_empty());
    }

    #[test]
    fn use_reserved_leaves_queue_untouched() {
        let mut session = Session::new();
        session.reserve().unwrap();
        let queue_before: Vec<Piece> = session.next_queue().iter().copied().collect();

        let used = session.use_reserved().unwrap();
        assert_eq!(used.id, 1);

        let queue_after: Vec<Piece> = session.next_queue().iter().copied().collect();
        assert_eq!(queue_after, queue_before);
    }

    #[test]
    fn queue_stays_full_across_mixed_actions() {
        let mut session = Session::new();
        for step in 0..50 {
            match step % 4 {
                0 | 1 => {
                    session.play().unwrap();
                }
                2 => {
                    let _ = session.reserve();
                }
                _ => {
                    let _ = session.use_reserved();
                }
            }
            assert_eq!(session.next_queue().len(), QUEUE_CAP);
            assert!(session.reserve_stack().len() <= RESERVE_CAP);
        }
    }

    #[test]
    fn successful_actions_record_no_warning() {
        let mut session = Session::new();
        session.play().unwrap();
        session.reserve().unwrap();
        session.use_reserved().unwrap();
        assert_eq!(session.take_warning(), None);
    }

    #[test]
    fn refill_into_a_full_queue_records_warning_without_dropping_state() {
        let mut session = Session::new();

        // Force the impossible state directly: refill with no preceding
        // dequeue, so the queue is still full.
        session.refill();

        assert_eq!(session.take_warning(), Some(ActionError::QueueOverflow));
        assert_eq!(session.next_queue().len(), QUEUE_CAP);

        // Taking the warning clears it.
        assert_eq!(session.take_warning(), None);

        // The session keeps working; the next play still hands back a piece.
        let played = session.play().unwrap();
        assert_eq!(played.id, 1);
        assert_eq!(session.take_warning(), None);
    }

    #[test]
    fn error_classification() {
        assert!(!ActionError::ReserveFull.is_unexpected());
        assert!(!ActionError::ReserveEmpty.is_unexpected());
        assert!(ActionError::QueueUnderflow.is_unexpected());
        assert!(ActionError::QueueOverflow.is_unexpected());
    }
}
