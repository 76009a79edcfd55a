use std::io::{self, Write};

use crate::board::{Board, Point, GRID_SIZE};
use crate::session::Round;
use crate::Renderer;

fn column_header() -> String {
    let mut result = format!("{:4}", "");
    for col in 0..GRID_SIZE {
        result.push((b'A' + col as u8) as char);
        result.push(' ');
    }
    result
}

/// The grid with letter headers above and below and row numbers on both sides.
/// The mine that ended the round, if any, is drawn as `*`.
pub fn draw_grid(board: &Board, triggered_mine: Option<Point>) -> String {
    let mut result = column_header();
    result += "\n\n";
    for row in 0..GRID_SIZE {
        result += &format!("{:<4}", row);
        for col in 0..GRID_SIZE {
            let point = Point(row, col);
            if triggered_mine == Some(point) {
                result += "*";
            } else {
                result += &board.retrieve_cell(&point).glyph();
            }
            result += " ";
        }
        result += &format!("{:>3}\n", row);
    }
    result += "\n";
    result += &column_header();
    result += "\n";
    result
}

pub struct TerminalRenderer<W: Write> {
    out: W
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W) -> TerminalRenderer<W> {
        TerminalRenderer{out}
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, round: &Round) -> io::Result<()> {
        writeln!(self.out, "Flags: {}", round.flags_remaining())?;
        writeln!(self.out, "----------------------------\n")?;
        writeln!(self.out, "{}", draw_grid(round.board(), round.triggered_mine()))?;
        self.out.flush()
    }

    fn message(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod render_tests {
    use super::*;
    use crate::board::Visibility;

    #[test]
    fn grid_has_headers_and_row_labels() {
        let board = Board::from_mines(&[Point(0, 0)]);
        let grid = draw_grid(&board, None);
        let lines: Vec<&str> = grid.lines().collect();
        assert_eq!(lines[0].trim_end(), "    A B C D E F G H I");
        assert_eq!(lines[1], "");
        assert_eq!(lines[2], "0   □ □ □ □ □ □ □ □ □   0");
        assert_eq!(lines[10], "8   □ □ □ □ □ □ □ □ □   8");
        assert_eq!(lines[12].trim_end(), "    A B C D E F G H I");
    }

    #[test]
    fn grid_shows_visible_state() {
        let mut board = Board::from_mines(&[Point(0, 0)]);
        board.set_visibility(&Point(0, 0), Visibility::Revealed);
        board.set_visibility(&Point(0, 1), Visibility::Revealed);
        board.set_visibility(&Point(0, 2), Visibility::Revealed);
        board.set_visibility(&Point(0, 3), Visibility::Flagged);
        let grid = draw_grid(&board, None);
        assert!(grid.lines().nth(2).unwrap().starts_with("0   X 1 _ ▶ □"));
    }

    #[test]
    fn triggered_mine_is_marked() {
        let mut board = Board::from_mines(&[Point(0, 0), Point(0, 2)]);
        crate::reveal::reveal_all(&mut board);
        let grid = draw_grid(&board, Some(Point(0, 2)));
        assert!(grid.lines().nth(2).unwrap().starts_with("0   X 2 * 1"));
    }

    #[test]
    fn renderer_writes_stats_then_grid() {
        let round = Round::new(Board::from_mines(&[]));
        let mut renderer = TerminalRenderer::new(Vec::new());
        renderer.render(&round).unwrap();
        renderer.message("hello").unwrap();
        let out = String::from_utf8(renderer.into_inner()).unwrap();
        assert!(out.starts_with("Flags: 10\n----------------------------\n\n"));
        assert!(out.contains("    A B C D E F G H I"));
        assert!(out.ends_with("hello\n"));
    }
}
