//! SessionView: maps a `core::SessionSnapshot` into menu text.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::types::{Piece, QUEUE_CAP, RESERVE_CAP};

/// Banner shown above the container state.
pub const TITLE: &str = "=== TETRIS STACK ===";

/// Prompt printed before each command read.
pub const PROMPT: &str = "Choice: ";

/// Separator between queued pieces (front to back).
pub const QUEUE_SEP: &str = " -> ";

/// Separator between banked pieces (base to top).
pub const RESERVE_SEP: &str = " | ";

/// Placeholder for a container with no pieces.
pub const EMPTY_MARKER: &str = "(empty)";

/// Menu lines, one per command.
pub const MENU: [&str; 5] = [
    "Menu:",
    "1 - Play piece (consumes the front of the queue)",
    "2 - Reserve piece (moves the front onto the stack)",
    "3 - Use reserved piece (pops the stack)",
    "0 - Exit",
];

/// Text layout for the two container state lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionView;

impl SessionView {
    pub fn new() -> Self {
        Self
    }

    /// Header of the queue line, including the fill counter.
    pub fn queue_header(&self, snap: &SessionSnapshot) -> String {
        format!(
            "Next queue (front -> back) [{}/{}]: ",
            snap.next.len(),
            QUEUE_CAP
        )
    }

    /// Header of the reserve line, including the fill counter.
    pub fn reserve_header(&self, snap: &SessionSnapshot) -> String {
        format!(
            "Reserve stack (base -> top) [{}/{}]: ",
            snap.reserved.len(),
            RESERVE_CAP
        )
    }

    /// Full queue line, front to back.
    pub fn queue_line(&self, snap: &SessionSnapshot) -> String {
        let mut line = self.queue_header(snap);
        line.push_str(&join_pieces(&snap.next, QUEUE_SEP));
        line
    }

    /// Full reserve line, base to top.
    pub fn reserve_line(&self, snap: &SessionSnapshot) -> String {
        let mut line = self.reserve_header(snap);
        line.push_str(&join_pieces(&snap.reserved, RESERVE_SEP));
        line
    }

    /// Both state lines, ready to print.
    pub fn frame(&self, snap: &SessionSnapshot) -> String {
        format!("{}\n{}\n", self.queue_line(snap), self.reserve_line(snap))
    }
}

/// Bracketed piece label, as shown in every state line.
pub fn piece_label(piece: &Piece) -> String {
    format!("[{piece}]")
}

fn join_pieces(pieces: &[Piece], sep: &str) -> String {
    if pieces.is_empty() {
        return EMPTY_MARKER.to_string();
    }
    let mut out = String::new();
    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        out.push_str(&piece_label(piece));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    #[test]
    fn queue_line_lists_front_to_back() {
        let snap = Session::new().snapshot();
        let view = SessionView::new();
        assert_eq!(
            view.queue_line(&snap),
            "Next queue (front -> back) [5/5]: [I#1] -> [O#2] -> [T#3] -> [L#4] -> [J#5]"
        );
    }

    #[test]
    fn empty_reserve_renders_placeholder() {
        let snap = Session::new().snapshot();
        let view = SessionView::new();
        assert_eq!(
            view.reserve_line(&snap),
            "Reserve stack (base -> top) [0/3]: (empty)"
        );
    }

    #[test]
    fn reserve_line_lists_base_to_top() {
        let mut session = Session::new();
        session.reserve().unwrap();
        session.reserve().unwrap();

        let view = SessionView::new();
        assert_eq!(
            view.reserve_line(&session.snapshot()),
            "Reserve stack (base -> top) [2/3]: [I#1] | [O#2]"
        );
    }

    #[test]
    fn frame_is_two_terminated_lines() {
        let snap = Session::new().snapshot();
        let frame = SessionView::new().frame(&snap);
        assert_eq!(frame.lines().count(), 2);
        assert!(frame.ends_with('\n'));
    }
}
