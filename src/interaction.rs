use regex::Regex;
use std::collections::VecDeque;
use std::io::{self, BufRead};

use super::board::{Point, GRID_SIZE};
use super::error::InputError;
use super::session::Round;
use super::InputSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    SelectTile(Point),
    ToggleMode,
    Replay(bool)
}

/// Turns raw player text into an [`Action`], checking it against the
/// current round so that nothing ineligible reaches the engine.
pub struct CommandParser {
    tile: Regex
}

impl CommandParser {
    pub fn new() -> Result<CommandParser, regex::Error> {
        let tile = Regex::new(r"^(\d)([A-Z])$")?;
        Ok(CommandParser{tile})
    }

    pub fn parse(&self, input: &str, round: &Round) -> Result<Action, InputError> {
        let input = input.trim().to_uppercase();
        if round.state().is_terminal() {
            return match input.as_str() {
                "Y" => Ok(Action::Replay(true)),
                "N" => Ok(Action::Replay(false)),
                _ => Err(InputError::Malformed)
            }
        }
        if input == "!" {
            return Ok(Action::ToggleMode)
        }
        let point = self.tile_from_string(&input)?;
        let visibility = round.board().visibility(&point);
        if visibility.is_revealed() {
            Err(InputError::AlreadyRevealed)
        }
        else if visibility.is_flagged() && !round.flag_placing_mode() {
            Err(InputError::FlaggedTile)
        }
        else {
            Ok(Action::SelectTile(point))
        }
    }

    fn tile_from_string(&self, input: &str) -> Result<Point, InputError> {
        let cap = self.tile.captures(input).ok_or(InputError::Malformed)?;
        let row = cap[1].chars().next().and_then(|c| c.to_digit(10)).ok_or(InputError::Malformed)? as usize;
        let col = cap[2].bytes().next().map(|b| (b - b'A') as usize).ok_or(InputError::Malformed)?;
        Point::checked(row, col).ok_or(InputError::OutOfRange{row, col})
    }
}

/// Reads whitespace-separated commands from a line-oriented reader, one token
/// at a time. The binary wraps locked stdin.
pub struct TokenReader<B: BufRead> {
    reader: B,
    pending: VecDeque<String>
}

impl<B: BufRead> TokenReader<B> {
    pub fn new(reader: B) -> TokenReader<B> {
        TokenReader{reader, pending: VecDeque::new()}
    }
}

impl<B: BufRead> InputSource for TokenReader<B> {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        while self.pending.is_empty() {
            let mut line = String::new();
            if self.reader.read_line(&mut line)? == 0 {
                return Ok(None)
            }
            self.pending.extend(line.split_whitespace().map(String::from));
        }
        Ok(self.pending.pop_front())
    }
}
