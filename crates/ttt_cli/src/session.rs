//! One interactive game: owns the authoritative board and alternates
//! between the human (reading `row col` lines) and the engine.

use anyhow::{bail, Result};
use std::io::{BufRead, Write};
use tracing::debug;
use ttt_core::{classify, parse_move, Engine, GameError, Move, Outcome, Position, Side};

pub struct Session<R, W, E> {
    input: R,
    output: W,
    engine: E,
    board: Position,
    human: Option<Side>,
}

impl<R: BufRead, W: Write, E: Engine> Session<R, W, E> {
    pub fn new(input: R, output: W, engine: E) -> Self {
        Self {
            input,
            output,
            engine,
            board: Position::empty(),
            human: None,
        }
    }

    /// Skips the side prompt.
    pub fn with_human_side(mut self, side: Side) -> Self {
        self.human = Some(side);
        self
    }

    pub fn board(&self) -> &Position {
        &self.board
    }

    /// Plays one game to the end and returns its outcome.
    pub fn run(&mut self) -> Result<Outcome> {
        let human = match self.human {
            Some(side) => side,
            None => self.choose_side()?,
        };
        self.human = Some(human);
        self.engine.new_game();

        loop {
            writeln!(self.output, "{}", self.board)?;

            let outcome = classify(&self.board);
            if outcome.is_terminal() {
                self.announce(outcome)?;
                return Ok(outcome);
            }

            let side = self.board.side_to_move();
            let mv = if side == human {
                self.read_human_move()?
            } else {
                let result = self.engine.search(&self.board, side)?;
                debug!(mv = %result.best_move, score = result.score, nodes = result.nodes, "engine reply");
                writeln!(self.output, "{} plays {}", side, result.best_move)?;
                result.best_move
            };
            self.board.try_place(mv, side)?;
        }
    }

    fn read_line(&mut self) -> Result<String> {
        self.output.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            bail!("input closed");
        }
        Ok(line)
    }

    fn choose_side(&mut self) -> Result<Side> {
        loop {
            write!(self.output, "Do you want to play as X or O? ")?;
            let line = self.read_line()?;
            let mut chars = line.trim().chars();
            match (chars.next().and_then(Side::from_symbol), chars.next()) {
                (Some(side), None) => return Ok(side),
                _ => writeln!(self.output, "Please answer X or O.")?,
            }
        }
    }

    fn read_human_move(&mut self) -> Result<Move> {
        loop {
            write!(self.output, "Enter your move (row and column): ")?;
            let line = self.read_line()?;
            match parse_move(&line) {
                Ok(mv) if self.board.cell(mv).is_empty() => return Ok(mv),
                Ok(mv) => debug!(error = %GameError::Occupied(mv), "rejected input"),
                Err(e) => debug!(error = %e, "rejected input"),
            }
            writeln!(self.output, "Invalid move. Try again.")?;
        }
    }

    fn announce(&mut self, outcome: Outcome) -> Result<()> {
        match outcome {
            Outcome::WonBy(side) => writeln!(self.output, "{side} wins!")?,
            Outcome::Draw => writeln!(self.output, "It's a tie!")?,
            Outcome::InProgress => {}
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod session_tests;
