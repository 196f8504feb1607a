//! Interactive Tetris Stack menu (default binary).
//!
//! One command per line: play the queue front, reserve it, or use a reserved
//! piece. The session ends on command 0, on end of input, or on any input
//! that is not an integer.

use std::io;

use anyhow::Result;

use tetris_stack::core::Session;
use tetris_stack::input::{parse_choice, MenuChoice};
use tetris_stack::term::ConsoleRenderer;
use tetris_stack::types::SessionAction;

fn main() -> Result<()> {
    let mut term = ConsoleRenderer::new();
    let mut session = Session::new();
    let stdin = io::stdin();

    loop {
        term.draw(&session.snapshot())?;
        term.prompt()?;

        let mut line = String::new();
        if stdin.read_line(&mut line)? == 0 {
            // End of input: finish like an exit command.
            println!();
            break;
        }

        match parse_choice(&line) {
            Ok(MenuChoice::Exit) => {
                term.feedback("Done. Thanks for playing Tetris Stack!")?;
                break;
            }
            Ok(MenuChoice::Action(action)) => {
                match session.apply(action) {
                    Ok(piece) => {
                        term.feedback(&format!("{}: [{piece}]", action_verb(action)))?;
                    }
                    Err(err) if err.is_unexpected() => {
                        term.feedback(&format!("warning: {err}"))?;
                    }
                    Err(err) => {
                        term.feedback(&err.to_string())?;
                    }
                }
                // A refill anomaly is reported next to the action outcome,
                // never instead of it.
                if let Some(warning) = session.take_warning() {
                    term.feedback(&format!("warning: {warning}"))?;
                }
            }
            Ok(MenuChoice::Unknown(code)) => {
                term.feedback(&format!("unrecognized command: {code}"))?;
            }
            Err(err) => {
                // Malformed input ends the session cleanly, not as a failure.
                term.feedback(&err.to_string())?;
                break;
            }
        }
    }

    Ok(())
}

fn action_verb(action: SessionAction) -> &'static str {
    match action {
        SessionAction::Play => "Played",
        SessionAction::Reserve => "Reserved",
        SessionAction::UseReserved => "Used reserved",
    }
}
