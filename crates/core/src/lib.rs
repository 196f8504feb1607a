//! Core piece-flow logic - pure, deterministic, and testable
//!
//! This module contains the containers and the session controller that manage
//! the stream of upcoming pieces. It has **zero dependencies** on UI or I/O,
//! making it:
//!
//! - **Deterministic**: the generator state fully determines every piece
//! - **Testable**: every action is a plain method on owned state
//! - **Allocation-free**: both containers and snapshots are fixed-capacity
//!
//! # Module Structure
//!
//! - [`generator`]: cycling shape sequence with strictly increasing piece ids
//! - [`queue`]: fixed-capacity ring buffer holding the next pieces
//! - [`reserve`]: fixed-capacity stack of banked pieces
//! - [`session`]: the three player actions and the always-full queue invariant
//! - [`snapshot`]: read-only copies of container contents for rendering
//!
//! # Rules
//!
//! - The next queue holds exactly [`tetris_stack_types::QUEUE_CAP`] pieces:
//!   every removal is immediately compensated by generating and enqueuing a
//!   fresh piece.
//! - The reserve stack holds up to [`tetris_stack_types::RESERVE_CAP`] pieces
//!   and is entirely player-driven; it is never refilled automatically.
//! - A rejected action mutates nothing.
//!
//! # Example
//!
//! ```
//! use tetris_stack_core::Session;
//! use tetris_stack_types::{PieceKind, QUEUE_CAP};
//!
//! let mut session = Session::new();
//! assert_eq!(session.next_queue().len(), QUEUE_CAP);
//!
//! // Play the front piece; the queue is refilled behind it.
//! let played = session.play().unwrap();
//! assert_eq!(played.kind, PieceKind::I);
//! assert_eq!(played.id, 1);
//! assert_eq!(session.next_queue().len(), QUEUE_CAP);
//! ```

pub mod generator;
pub mod queue;
pub mod reserve;
pub mod session;
pub mod snapshot;

pub use tetris_stack_types as types;

// Re-export commonly used types for convenience
pub use generator::PieceGenerator;
pub use queue::NextQueue;
pub use reserve::ReserveStack;
pub use session::{ActionError, Session};
pub use snapshot::SessionSnapshot;
