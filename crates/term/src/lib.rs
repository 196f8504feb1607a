//! Terminal output module.
//!
//! This is a small, menu-oriented rendering layer for the piece-flow session.
//! Text layout lives in a pure view that can be unit-tested; the console
//! renderer adds per-piece colors and flushes to stdout.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the rendered text identical with and without colors
//! - Depend only on read-only snapshots of the containers

pub mod console;
pub mod view;

pub use tetris_stack_core as core;
pub use tetris_stack_types as types;

pub use console::{piece_color, ConsoleRenderer};
pub use view::{SessionView, EMPTY_MARKER, MENU, PROMPT, QUEUE_SEP, RESERVE_SEP, TITLE};
