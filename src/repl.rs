//! Interactive read-eval-print loop.
//!
//! Generic over its input and output so tests can drive it with in-memory
//! buffers. Built-in words (`help`, `clear`, `exit`) are handled before the
//! line reaches the parser.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::commands::help::render_help;
use crate::commands::output::format_table;
use crate::commands::{dispatch, CommandOutput, CommandRouter, ControlAction, Session};
use crate::error::Result;

const CLEAR_SCREEN: &str = "\x1b[H\x1b[2J";

/// Whether the loop should keep reading lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// The shell loop state.
pub struct Repl<W> {
    router: CommandRouter,
    session: Session,
    prompt: String,
    out: W,
}

impl<W: Write> Repl<W> {
    /// Creates a REPL writing to `out`.
    pub fn new(session: Session, prompt: impl Into<String>, out: W) -> Self {
        Self {
            router: CommandRouter::new(),
            session,
            prompt: prompt.into(),
            out,
        }
    }

    /// Returns the current session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Consumes the REPL, returning its writer.
    pub fn into_writer(self) -> W {
        self.out
    }

    /// Reads and executes lines until EOF or an exit command.
    ///
    /// Lines are read as raw bytes; invalid UTF-8 is replaced rather than
    /// ending the session.
    pub fn run<R: BufRead>(&mut self, mut input: R) -> Result<()> {
        let mut buf = Vec::new();
        loop {
            write!(self.out, "{}", self.prompt)?;
            self.out.flush()?;

            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                writeln!(self.out)?;
                return Ok(());
            }

            let line = String::from_utf8_lossy(&buf);
            if self.execute(&line)? == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Executes lines in order without prompting, stopping at an exit command.
    pub fn run_batch<I, S>(&mut self, lines: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            if self.execute(line.as_ref())? == Flow::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Executes a single line.
    pub fn execute(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();

        match line {
            "" => return Ok(Flow::Continue),
            "exit" | "quit" => return Ok(Flow::Exit),
            "help" | "h" => {
                writeln!(self.out, "{}", render_help())?;
                return Ok(Flow::Continue);
            }
            "clear" | "cls" => {
                self.render(&CommandOutput::clear_screen())?;
                return Ok(Flow::Continue);
            }
            _ => {}
        }

        let output = match self.router.parse(line) {
            Ok(parsed) => {
                debug!(command = %parsed.def.name(), "Dispatching");
                dispatch(&mut self.session, &parsed.command)
            }
            Err(e) => {
                debug!(error = %e, "Failed to parse line");
                CommandOutput::error(e.to_string())
            }
        };

        self.render(&output)?;
        Ok(Flow::Continue)
    }

    fn render(&mut self, output: &CommandOutput) -> Result<()> {
        match output {
            CommandOutput::Info(msg) => writeln!(self.out, "{msg}")?,
            CommandOutput::Error(msg) => writeln!(self.out, "error: {msg}")?,
            CommandOutput::Table { headers, rows } => {
                writeln!(self.out, "{}", format_table(headers, rows))?
            }
            CommandOutput::Control(ControlAction::ClearScreen) => {
                write!(self.out, "{CLEAR_SCREEN}")?;
                self.out.flush()?;
            }
            CommandOutput::Multiple(outputs) => {
                for output in outputs {
                    self.render(output)?;
                }
            }
        }
        Ok(())
    }
}
