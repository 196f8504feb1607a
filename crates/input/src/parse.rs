//! Parsing of menu command lines.
//!
//! One integer command per line: `0` exits, `1`-`3` map to session actions,
//! any other integer is an unrecognized command the caller should reject
//! without touching state. Anything that is not an integer at all is a
//! [`ParseError`], which ends the interactive loop.

use std::error::Error;
use std::fmt;

use crate::types::SessionAction;

/// A parsed menu command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// Command `0`: end the session.
    Exit,
    /// Commands `1`-`3`: apply a session action.
    Action(SessionAction),
    /// Any other integer: rejected, no state change.
    Unknown(i64),
}

/// Input that was not an integer command at all.
///
/// Treated as fatal by the menu loop: the session ends cleanly instead of
/// looping on garbage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    input: String,
}

impl ParseError {
    /// The offending input, trimmed.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid input {:?}: expected an integer command", self.input)
    }
}

impl Error for ParseError {}

/// Map a raw input line to a menu choice.
pub fn parse_choice(line: &str) -> Result<MenuChoice, ParseError> {
    let trimmed = line.trim();
    let code: i64 = trimmed.parse().map_err(|_| ParseError {
        input: trimmed.to_string(),
    })?;

    if code == 0 {
        return Ok(MenuChoice::Exit);
    }
    Ok(match SessionAction::from_code(code) {
        Some(action) => MenuChoice::Action(action),
        None => MenuChoice::Unknown(code),
    })
}
