//! Menu input module (session-facing).
//!
//! This module is intentionally independent of any UI framework. It maps raw
//! input lines to menu choices and leaves the reading of lines to the caller.

pub mod parse;

pub use tetris_stack_types as types;

pub use parse::{parse_choice, MenuChoice, ParseError};
