use rand::Rng;

use crate::board::{Board, Point};
use crate::error::GameError;
use crate::flag::{self, NUM_FLAGS};
use crate::interaction::Action;
use crate::reveal::{self, RevealOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundState {
    InProgress,
    Won,
    Lost
}

impl RoundState {
    pub fn is_terminal(&self) -> bool {
        match *self {
            RoundState::InProgress => false,
            _ => true
        }
    }
}

/// What an applied action did, for the caller to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    ModeToggled(bool),
    Revealed(usize),
    FlagPlaced(Point),
    FlagRemoved(Point),
    Won,
    Lost(Point),
    NewRound,
    Quit
}

/// State for one round. Replaced wholesale on replay.
#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    flags_remaining: usize,
    flag_placing_mode: bool,
    state: RoundState,
    triggered_mine: Option<Point>
}

impl Round {
    pub fn new(board: Board) -> Round {
        Round {
            board,
            flags_remaining: NUM_FLAGS,
            flag_placing_mode: false,
            state: RoundState::InProgress,
            triggered_mine: None
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn flags_remaining(&self) -> usize {
        self.flags_remaining
    }

    pub fn flag_placing_mode(&self) -> bool {
        self.flag_placing_mode
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn triggered_mine(&self) -> Option<Point> {
        self.triggered_mine
    }

    fn toggle_mode(&mut self) -> Event {
        self.flag_placing_mode = flag::toggle_mode(self.flag_placing_mode);
        Event::ModeToggled(self.flag_placing_mode)
    }

    fn select(&mut self, point: Point) -> Result<Event, GameError> {
        if self.flag_placing_mode {
            let previous = self.flags_remaining;
            self.flags_remaining = flag::toggle_flag(&mut self.board, &point, previous)?;
            return Ok(if self.flags_remaining < previous {
                Event::FlagPlaced(point)
            } else {
                Event::FlagRemoved(point)
            })
        }

        match reveal::reveal(&mut self.board, &point)? {
            RevealOutcome::Mine => {
                log::info!("round lost on {}", point);
                self.finish(RoundState::Lost);
                self.triggered_mine = Some(point);
                Ok(Event::Lost(point))
            }
            RevealOutcome::Revealed(count) if reveal::check_won(&self.board) => {
                log::info!("round won after revealing {} tiles on {}", count, point);
                self.finish(RoundState::Won);
                Ok(Event::Won)
            }
            RevealOutcome::Revealed(count) => Ok(Event::Revealed(count))
        }
    }

    fn finish(&mut self, state: RoundState) {
        self.state = state;
        reveal::reveal_all(&mut self.board);
    }
}

/// Drives rounds one after another until the player declines a replay.
pub struct GameSession<R: Rng> {
    rng: R,
    round: Round,
    terminated: bool,
    rounds_played: usize
}

impl<R: Rng> GameSession<R> {
    pub fn new(mut rng: R) -> GameSession<R> {
        let round = Round::new(Board::generate(&mut rng));
        GameSession {rng, round, terminated: false, rounds_played: 1}
    }

    /// Starts from a prepared round instead of a random board.
    pub fn with_round(rng: R, round: Round) -> GameSession<R> {
        GameSession {rng, round, terminated: false, rounds_played: 1}
    }

    pub fn round(&self) -> &Round {
        &self.round
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    pub fn apply(&mut self, action: Action) -> Result<Event, GameError> {
        if self.terminated {
            return Err(GameError::SessionEnded)
        }
        let terminal = self.round.state.is_terminal();
        let result = match (action, terminal) {
            (Action::ToggleMode, false) => Ok(self.round.toggle_mode()),
            (Action::SelectTile(point), false) => self.round.select(point),
            (Action::Replay(true), true) => {
                self.round = Round::new(Board::generate(&mut self.rng));
                self.rounds_played += 1;
                log::info!("starting round {}", self.rounds_played);
                Ok(Event::NewRound)
            }
            (Action::Replay(false), true) => {
                self.terminated = true;
                Ok(Event::Quit)
            }
            (Action::Replay(_), false) => Err(GameError::RoundInProgress),
            (_, true) => Err(GameError::RoundOver)
        };
        if let Err(err) = &result {
            log::debug!("rejected {:?}: {}", action, err);
        }
        result
    }

    /// Ends the session without a replay prompt, e.g. when input runs out.
    pub fn terminate(&mut self) {
        self.terminated = true;
    }
}
