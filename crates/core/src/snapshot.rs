//! Read-only snapshot of the session containers.
//!
//! The render layer works from a [`SessionSnapshot`] rather than borrowing
//! the live containers, keeping rendering decoupled from the core. Snapshots
//! are fixed-capacity copies, so capturing one does not allocate.

use arrayvec::ArrayVec;
use tetris_stack_types::{Piece, QUEUE_CAP, RESERVE_CAP};

use crate::session::Session;

/// Container contents at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// Queued pieces, front first.
    pub next: ArrayVec<Piece, QUEUE_CAP>,
    /// Banked pieces, base first.
    pub reserved: ArrayVec<Piece, RESERVE_CAP>,
}

impl SessionSnapshot {
    /// Copy the current container contents out of a session.
    pub fn capture(session: &Session) -> Self {
        Self {
            next: session.next_queue().iter().copied().collect(),
            reserved: session.reserve_stack().iter().copied().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_reflects_container_contents() {
        let mut session = Session::new();
        session.reserve().unwrap();

        let snap = session.snapshot();
        assert_eq!(snap.next.len(), QUEUE_CAP);
        assert_eq!(snap.reserved.len(), 1);
        assert_eq!(snap.reserved[0].id, 1);
        assert_eq!(snap.next[0].id, 2);
    }

    #[test]
    fn snapshot_is_detached_from_the_session() {
        let mut session = Session::new();
        let snap = session.snapshot();
        session.play().unwrap();
        assert_eq!(snap.next[0].id, 1);
    }
}
