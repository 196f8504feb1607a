//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input parsing, terminal rendering).
//!
//! # Container Capacities
//!
//! Both containers have fixed, compile-time capacities:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAP` | 5 | Lookahead queue capacity (kept perpetually full) |
//! | `RESERVE_CAP` | 3 | Reserve stack capacity (fill level is player-driven) |
//!
//! # Piece Cycle
//!
//! The generator hands out shapes in a fixed repeating order:
//! I → O → T → L → J → S → Z, restarting every [`PIECE_KIND_COUNT`]
//! generations. Ids start at 1 and only ever increase.
//!
//! # Examples
//!
//! ```
//! use tetris_stack_types::{Piece, PieceKind, SessionAction, QUEUE_CAP, RESERVE_CAP};
//!
//! // Create a piece
//! let piece = Piece::new(PieceKind::T, 3);
//! assert_eq!(piece.to_string(), "T#3");
//!
//! // Parse a piece kind (case-insensitive)
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! // Menu command codes
//! let action = SessionAction::from_code(1).unwrap();
//! assert_eq!(action, SessionAction::Play);
//!
//! // Capacities
//! assert_eq!(QUEUE_CAP, 5);
//! assert_eq!(RESERVE_CAP, 3);
//! ```

use std::fmt;

/// Lookahead queue capacity (5 upcoming pieces, always full)
pub const QUEUE_CAP: usize = 5;

/// Reserve stack capacity (up to 3 banked pieces)
pub const RESERVE_CAP: usize = 3;

/// Number of distinct piece shapes
pub const PIECE_KIND_COUNT: usize = 7;

/// The seven tetromino piece kinds
///
/// Each piece is identified by its shape letter:
/// - **I**: Cyan, horizontal bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

/// Generator cycle order, repeating every [`PIECE_KIND_COUNT`] pieces.
pub const PIECE_CYCLE: [PieceKind; PIECE_KIND_COUNT] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::L,
    PieceKind::J,
    PieceKind::S,
    PieceKind::Z,
];

impl PieceKind {
    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Uppercase letter used in rendered piece labels
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An upcoming or banked piece.
///
/// Pieces are immutable values: the id is assigned at creation, never reused
/// and never changed afterwards. They move between containers by copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    /// Renders the `K#id` label used everywhere pieces are shown.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.kind, self.id)
    }
}

/// Player actions that can be applied to the piece flow session
///
/// Each action maps to a menu command code; code 0 (exit) is handled by the
/// input layer and never reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionAction {
    /// Consume the piece at the front of the queue
    Play,
    /// Move the queue front onto the reserve stack
    Reserve,
    /// Consume the piece on top of the reserve stack
    UseReserved,
}

impl SessionAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_stack_types::SessionAction;
    ///
    /// assert_eq!(SessionAction::from_str("play"), Some(SessionAction::Play));
    /// assert_eq!(SessionAction::from_str("useReserved"), Some(SessionAction::UseReserved));
    /// assert_eq!(SessionAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(SessionAction::Play),
            "reserve" => Some(SessionAction::Reserve),
            "usereserved" => Some(SessionAction::UseReserved),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionAction::Play => "play",
            SessionAction::Reserve => "reserve",
            SessionAction::UseReserved => "useReserved",
        }
    }

    /// Map a menu command code to an action (1, 2 or 3)
    ///
    /// Code 0 is the exit command and other codes are unrecognized; both
    /// return `None` here and are handled by the input layer.
    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            1 => Some(SessionAction::Play),
            2 => Some(SessionAction::Reserve),
            3 => Some(SessionAction::UseReserved),
            _ => None,
        }
    }

    /// Menu command code for this action
    pub fn code(&self) -> i64 {
        match self {
            SessionAction::Play => 1,
            SessionAction::Reserve => 2,
            SessionAction::UseReserved => 3,
        }
    }
}
