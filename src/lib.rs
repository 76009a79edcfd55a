pub mod board;
pub mod error;
pub mod flag;
pub mod interaction;
pub mod logging;
pub mod render;
pub mod reveal;
pub mod session;
use std::io;

use rand::Rng;

use board::NUM_MINES;
use interaction::CommandParser;
use session::{Event, GameSession, Round};

/// Where player commands come from. `None` means input has ended.
pub trait InputSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Something that can show the round and talk to the player.
pub trait Renderer {
    fn render(&mut self, round: &Round) -> io::Result<()>;
    fn message(&mut self, text: &str) -> io::Result<()>;
}

pub fn display_intro<W: Renderer>(renderer: &mut W) -> io::Result<()> {
    renderer.message(&format!("\n{:>20}\n", "Minesweeper"))?;
    renderer.message(concat!(
        "Presented to you is a field with mines hidden beneath the surface.\n",
        "Each square represents one tile of land. Your task is to clean the\n",
        "field while avoiding the mines. The number on a tile indicates\n",
        "how many mines are adjacent to it.\n\n",
        "- input NUMBERLETTER (e.g. 5E) to uncover a tile\n",
        "- input ! to enable/disable flag-placing mode.\n"))?;
    renderer.message(&format!("There are {} mines you must avoid. Good luck!\n", NUM_MINES))
}

const FAREWELL: &str = "Thanks for playing! Goodbye.";

fn describe(event: &Event) -> Option<&'static str> {
    match event {
        Event::ModeToggled(true) => Some("Flag-placing mode has been enabled."),
        Event::ModeToggled(false) => Some("Flag-placing mode has been disabled."),
        Event::Won => Some("Congrats! You successfully avoided all the mines!"),
        Event::Lost(_) => Some("Sorry, you landed on a mine"),
        Event::Quit => Some(FAREWELL),
        _ => None
    }
}

/// Reads until a command parses, reporting each rejection. `None` once input ends.
fn read_action<R: Rng, I: InputSource, W: Renderer>(
    session: &GameSession<R>, parser: &CommandParser, input: &mut I, renderer: &mut W
) -> io::Result<Option<interaction::Action>> {
    loop {
        let line = match input.next_line()? {
            None => return Ok(None),
            Some(line) => line
        };
        match parser.parse(&line, session.round()) {
            Ok(action) => return Ok(Some(action)),
            Err(err) => {
                log::debug!("rejected input {:?}: {:?}", line, err);
                renderer.message(&err.to_string())?;
            }
        }
    }
}

/// Plays rounds until the player declines a replay or input runs out.
pub fn game_loop<R: Rng, I: InputSource, W: Renderer>(
    session: &mut GameSession<R>, input: &mut I, renderer: &mut W
) -> io::Result<()> {
    let parser = CommandParser::new().map_err(|err| io::Error::new(io::ErrorKind::Other, err))?;
    display_intro(renderer)?;

    // round results are held back until the fully revealed board is drawn
    let mut outcome: Option<&str> = None;

    while !session.is_terminated() {
        let round = session.round();
        renderer.render(round)?;
        if let Some(text) = outcome.take() {
            renderer.message(text)?;
        }
        if round.state().is_terminal() {
            renderer.message("Would you like to play again? (Y/N)")?;
        }

        let action = match read_action(session, &parser, input, renderer)? {
            Some(action) => action,
            None => {
                log::info!("input ended, leaving after {} rounds", session.rounds_played());
                session.terminate();
                renderer.message(FAREWELL)?;
                break
            }
        };

        match session.apply(action) {
            Ok(event) => match event {
                Event::Won | Event::Lost(_) => outcome = describe(&event),
                _ => {
                    if let Some(text) = describe(&event) {
                        renderer.message(text)?;
                    }
                }
            },
            Err(err) => renderer.message(&err.to_string())?
        }
    }
    Ok(())
}
