//! ConsoleRenderer: flushes session state to a real terminal.
//!
//! Rendering queues crossterm commands into an internal buffer and writes it
//! out in one go, so a frame never appears half-drawn. The text matches
//! [`SessionView`] exactly; colors are the only addition.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    style::{Color, Print, ResetColor, SetForegroundColor},
    QueueableCommand,
};

use crate::core::SessionSnapshot;
use crate::types::{Piece, PieceKind};
use crate::view::{piece_label, SessionView, EMPTY_MARKER, MENU, PROMPT, QUEUE_SEP, RESERVE_SEP, TITLE};

pub struct ConsoleRenderer {
    stdout: io::Stdout,
    view: SessionView,
    buf: Vec<u8>,
}

impl ConsoleRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            view: SessionView::new(),
            buf: Vec::with_capacity(1024),
        }
    }

    /// Print the banner and both container state lines.
    pub fn draw(&mut self, snap: &SessionSnapshot) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print("\n"))?;
        self.buf.queue(Print(TITLE))?;
        self.buf.queue(Print("\n"))?;

        let header = self.view.queue_header(snap);
        encode_piece_row_into(&header, &snap.next, QUEUE_SEP, &mut self.buf)?;

        let header = self.view.reserve_header(snap);
        encode_piece_row_into(&header, &snap.reserved, RESERVE_SEP, &mut self.buf)?;

        self.flush_buf()
    }

    /// Print the menu and the command prompt, leaving the cursor on the
    /// prompt line.
    pub fn prompt(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print("\n"))?;
        for line in MENU {
            self.buf.queue(Print(line))?;
            self.buf.queue(Print("\n"))?;
        }
        self.buf.queue(Print(PROMPT))?;
        self.flush_buf()
    }

    /// Print a feedback line for the outcome of an action.
    pub fn feedback(&mut self, text: &str) -> Result<()> {
        self.buf.clear();
        self.buf.queue(Print(">> "))?;
        self.buf.queue(Print(text))?;
        self.buf.queue(Print("\n"))?;
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode one container state line with colored piece labels into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_piece_row_into(
    header: &str,
    pieces: &[Piece],
    sep: &str,
    out: &mut Vec<u8>,
) -> Result<()> {
    out.queue(Print(header))?;

    if pieces.is_empty() {
        out.queue(Print(EMPTY_MARKER))?;
        out.queue(Print("\n"))?;
        return Ok(());
    }

    for (i, piece) in pieces.iter().enumerate() {
        if i > 0 {
            out.queue(Print(sep))?;
        }
        out.queue(SetForegroundColor(piece_color(piece.kind)))?;
        out.queue(Print(piece_label(piece)))?;
        out.queue(ResetColor)?;
    }
    out.queue(Print("\n"))?;
    Ok(())
}

/// Label color for each piece kind.
pub fn piece_color(kind: PieceKind) -> Color {
    match kind {
        PieceKind::I => Color::Rgb { r: 80, g: 220, b: 220 },
        PieceKind::O => Color::Rgb { r: 240, g: 220, b: 80 },
        PieceKind::T => Color::Rgb { r: 200, g: 120, b: 220 },
        PieceKind::L => Color::Rgb { r: 255, g: 165, b: 0 },
        PieceKind::J => Color::Rgb { r: 80, g: 120, b: 220 },
        PieceKind::S => Color::Rgb { r: 100, g: 220, b: 120 },
        PieceKind::Z => Color::Rgb { r: 220, g: 80, b: 80 },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    fn decode(buf: &[u8]) -> String {
        String::from_utf8_lossy(buf).into_owned()
    }

    #[test]
    fn encoded_row_contains_every_label() {
        let snap = Session::new().snapshot();
        let mut buf = Vec::new();
        encode_piece_row_into("Next: ", &snap.next, QUEUE_SEP, &mut buf).unwrap();

        let text = decode(&buf);
        for piece in &snap.next {
            assert!(text.contains(&piece_label(piece)));
        }
        assert!(text.contains(QUEUE_SEP));
    }

    #[test]
    fn encoded_empty_row_uses_placeholder() {
        let mut buf = Vec::new();
        encode_piece_row_into("Reserve: ", &[], RESERVE_SEP, &mut buf).unwrap();
        assert!(decode(&buf).contains(EMPTY_MARKER));
    }

    #[test]
    fn every_kind_has_a_distinct_color() {
        let kinds = [
            PieceKind::I,
            PieceKind::O,
            PieceKind::T,
            PieceKind::L,
            PieceKind::J,
            PieceKind::S,
            PieceKind::Z,
        ];
        for a in kinds {
            for b in kinds {
                if a != b {
                    assert_ne!(piece_color(a), piece_color(b));
                }
            }
        }
    }
}
