//! Read-eval-print loop driving one engine.
use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use cat_core::{GameEngine, GameError, Position};
use tracing::{debug, warn};

use crate::command::Command;
use crate::render;

/// Whether the loop keeps reading after a command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Shell<R, W> {
    engine: GameEngine,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(engine: GameEngine, input: R, output: W) -> Self {
        Self {
            engine,
            input,
            output,
        }
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    /// Consumes the shell, returning the writer so callers can inspect output.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.output, "Trap the cat! Type `help` for commands.")?;
        self.print_board()?;

        let mut line = String::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            let read = self
                .input
                .read_line(&mut line)
                .context("failed to read command")?;
            if read == 0 {
                writeln!(self.output)?;
                return Ok(());
            }
            if line.trim().is_empty() {
                continue;
            }

            if self.execute_line(&line)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    /// Parses and executes one line of input.
    pub fn execute_line(&mut self, line: &str) -> Result<Flow> {
        match line.parse::<Command>() {
            Ok(command) => self.execute(command),
            Err(err) => {
                warn!(input = line.trim(), error = %err, "rejected input");
                writeln!(self.output, "{err}")?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!(?command, "executing command");
        match command {
            Command::Block(position) => self.block(position)?,
            Command::Pixel(point) => match self.engine.pixel_to_cell(point) {
                Some(position) => self.block(position)?,
                None => {
                    warn!(x = point.x, y = point.y, "click outside any cell");
                    writeln!(self.output, "No cell at ({}, {}).", point.x, point.y)?;
                }
            },
            Command::Hint => {
                let route = self.engine.escape_route();
                writeln!(self.output, "{}", render::hint(route.as_ref()))?;
            }
            Command::Board => self.print_board()?,
            Command::Reset(seed) => {
                self.engine.restart(seed);
                self.announce_board()?;
            }
            Command::Size { size, seed } => match self.engine.reset(size, seed) {
                Ok(()) => self.announce_board()?,
                Err(err) => {
                    warn!(size, error = %err, code = err.error_code(), "reset rejected");
                    writeln!(self.output, "Can't resize: {err}.")?;
                }
            },
            Command::Help => writeln!(self.output, "{}", render::HELP)?,
            Command::Quit => {
                writeln!(self.output, "Bye.")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    fn block(&mut self, position: Position) -> Result<()> {
        match self.engine.attempt_block(position) {
            Ok(report) => {
                self.print_board()?;
                writeln!(
                    self.output,
                    "{}",
                    render::block_outcome(&report, self.engine.moves())
                )?;
                if report.outcome.is_terminal() {
                    writeln!(self.output, "Type `reset` to play again.")?;
                }
            }
            Err(err) => {
                warn!(
                    %position,
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    "block rejected"
                );
                writeln!(self.output, "{}", render::rejection(&err))?;
            }
        }
        Ok(())
    }

    fn announce_board(&mut self) -> Result<()> {
        writeln!(
            self.output,
            "New {size}x{size} board (seed {seed}).",
            size = self.engine.size(),
            seed = self.engine.seed()
        )?;
        self.print_board()
    }

    fn print_board(&mut self) -> Result<()> {
        write!(self.output, "{}", render::board(&self.engine))?;
        Ok(())
    }
}
