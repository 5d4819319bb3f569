//! Console move entry.
//!
//! Squares are typed as their board index (`34` is row 3, column 4). Blank
//! lines are ignored; anything that is not a legal square is answered with a
//! re-prompt.

use std::io::{self, BufRead, BufReader, Cursor, Read, Stdin, Stdout, Write};

use othello::{Board, GameError, Player, Square, Strategy};

/// A source of typed lines.
///
/// Stdin is locked only for the duration of each `read_line`, so several
/// console players can share it.
pub trait LineSource {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        Stdin::read_line(&*self, buf)
    }
}

impl<T: AsRef<[u8]>> LineSource for Cursor<T> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

pub struct HumanStrategy<R, W> {
    input: R,
    output: W,
}

impl HumanStrategy<Stdin, Stdout> {
    pub fn stdio() -> Self {
        HumanStrategy::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> HumanStrategy<R, W> {
    pub fn new(input: R, output: W) -> Self {
        HumanStrategy { input, output }
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }

    fn read_move(&mut self, player: Player, board: &Board) -> io::Result<Option<Square>> {
        writeln!(self.output, "Your move?")?;
        let mut line = String::new();

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }

            let entry = line.trim();
            if entry.is_empty() {
                continue;
            }

            match entry.parse::<Square>() {
                Ok(square) if board.check(square, player) => return Ok(Some(square)),
                _ => writeln!(self.output, "Illegal move--try again.")?,
            }
        }
    }
}

impl<R: LineSource, W: Write> Strategy for HumanStrategy<R, W> {
    fn name(&self) -> &str {
        "human"
    }

    fn select(&mut self, player: Player, board: Board) -> Result<Square, GameError> {
        match self.read_move(player, &board) {
            Ok(Some(square)) => Ok(square),
            Ok(None) => Err(GameError::Input {
                player,
                reason: "input closed".to_string(),
            }),
            Err(e) => Err(GameError::Input {
                player,
                reason: e.to_string(),
            }),
        }
    }
}
