//! The stdin/stdout loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use chess_core::Rules;
use chess_session::{Feedback, SessionHost};
use tracing::{debug, info};

use crate::command::{parse_event_json, Command, HELP};
use crate::pattern::PatternPolicy;
use crate::render::render_view;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Human-readable commands in, drawn boards out
    #[default]
    Text,
    /// One JSON event per input line, one JSON projection per output line
    Json,
}

pub struct Repl<R: Rules, F: Feedback> {
    host: SessionHost<R, F>,
    policy: PatternPolicy,
    mode: Mode,
}

impl<R: Rules, F: Feedback> Repl<R, F> {
    pub fn new(host: SessionHost<R, F>, policy: PatternPolicy, mode: Mode) -> Self {
        Self { host, policy, mode }
    }

    pub fn host(&self) -> &SessionHost<R, F> {
        &self.host
    }

    /// Serve `input` until it ends or the user quits.
    ///
    /// Bad input is reported on `output` and skipped. A session that cannot
    /// be reset ends the loop with an error.
    pub fn run(&mut self, input: impl BufRead, mut output: impl Write) -> Result<()> {
        info!(mode = ?self.mode, "accepting input");
        self.emit_view(&mut output)?;

        for line in input.lines() {
            let line = line.context("failed to read input")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let keep_going = match self.mode {
                Mode::Text => self.text_line(line, &mut output)?,
                Mode::Json => self.json_line(line, &mut output)?,
            };
            output.flush()?;
            if !keep_going {
                break;
            }
        }
        info!("input closed");
        Ok(())
    }

    fn text_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                debug!(line, error = %err, "unparsable command");
                writeln!(out, "error: {err} (type `help` for commands)")?;
                return Ok(true);
            }
        };

        match command {
            Command::Input(event) => match self.host.dispatch(event)? {
                Some(view) => write!(out, "{}", render_view(&view))?,
                None => writeln!(out, "(nothing to do)")?,
            },
            Command::Show => self.emit_view(out)?,
            Command::Fen => writeln!(out, "{}", self.host.session().rules().fen())?,
            Command::Submit => {
                let view = self.host.view();
                match self.policy.accept(&view) {
                    Ok(notation) => {
                        info!(half_moves = view.half_move_count, "pattern accepted");
                        writeln!(out, "pattern accepted: {notation}")?;
                    }
                    Err(err) => writeln!(out, "pattern rejected: {err}")?,
                }
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
        }
        Ok(true)
    }

    fn json_line(&mut self, line: &str, out: &mut impl Write) -> Result<bool> {
        let event = match parse_event_json(line) {
            Ok(event) => event,
            Err(err) => {
                debug!(line, error = %err, "unparsable event");
                let reply = serde_json::json!({ "error": err.to_string() });
                writeln!(out, "{reply}")?;
                return Ok(true);
            }
        };
        if let Some(view) = self.host.dispatch(event)? {
            writeln!(out, "{}", serde_json::to_string(&view)?)?;
        }
        Ok(true)
    }

    fn emit_view(&self, out: &mut impl Write) -> Result<()> {
        let view = self.host.view();
        match self.mode {
            Mode::Text => write!(out, "{}", render_view(&view))?,
            Mode::Json => writeln!(out, "{}", serde_json::to_string(&view)?)?,
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "repl_tests.rs"]
mod repl_tests;
