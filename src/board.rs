use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;
use itertools::iproduct;

pub const GRID_SIZE: usize = 9;
pub const NUM_MINES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Content {
    Mine,
    Empty
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Flagged,
    Revealed
}

impl Visibility {
    pub fn is_revealed(&self) -> bool {
        match *self {
            Visibility::Revealed => true,
            _ => false
        }
    }

    pub fn is_flagged(&self) -> bool {
        match *self {
            Visibility::Flagged => true,
            _ => false
        }
    }

    pub fn is_hidden(&self) -> bool {
        match *self {
            Visibility::Hidden => true,
            _ => false
        }
    }
}

#[derive(Debug, Clone)]
pub struct Cell {
    pub content: Content,
    pub mined_neighbor_count: usize,
    pub visibility: Visibility
}

impl Cell {
    fn create_empty() -> Cell {
        Cell{content: Content::Empty, mined_neighbor_count: 0, visibility: Visibility::Hidden}
    }

    pub fn is_mine(&self) -> bool {
        self.content == Content::Mine
    }

    pub fn glyph(&self) -> String {
        match (&self.visibility, &self.content) {
            (Visibility::Flagged, _) => String::from("▶"),
            (Visibility::Hidden, _) => String::from("□"),
            (_, Content::Mine) => String::from("X"),
            (_, Content::Empty) => {
                if self.mined_neighbor_count == 0 {
                    String::from("_")
                }
                else{
                    self.mined_neighbor_count.to_string()
                }
            }
        }
    }
}

/// A tile coordinate as `(row, col)`.
#[derive(Debug, Eq, PartialEq, Clone, Hash, Copy)]
pub struct Point(pub usize, pub usize);

impl Point {
    pub fn checked(row: usize, col: usize) -> Option<Point> {
        if row < GRID_SIZE && col < GRID_SIZE {
            Some(Point(row, col))
        } else {
            None
        }
    }

    pub fn from_integer(x: usize) -> Option<Point> {
        if x >= GRID_SIZE * GRID_SIZE {
            return None
        }
        Some(Point(x / GRID_SIZE, x % GRID_SIZE))
    }

    pub fn is_adjacent_to(&self, other: &Point) -> bool {
        let rows = (self.0 as i64 - other.0 as i64).abs();
        let cols = (self.1 as i64 - other.1 as i64).abs();
        rows.max(cols) == 1
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.0, (b'A' + self.1 as u8) as char)
    }
}

fn sample_points<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<Point> {
    let mut possible: Vec<usize> = (0..GRID_SIZE * GRID_SIZE).collect();
    possible.shuffle(rng);
    possible.into_iter().take(n).filter_map(Point::from_integer).collect()
}

/// The minefield for a single round. Mine layout and counts are fixed at
/// construction; only per-cell visibility changes afterwards.
#[derive(Debug, Clone)]
pub struct Board {
    field: Vec<Vec<Cell>>,
    mine_count: usize,
}

impl Board {
    fn empty() -> Board {
        let mut field = Vec::with_capacity(GRID_SIZE);
        for _ in 0..GRID_SIZE {
            let mut row_vec = Vec::with_capacity(GRID_SIZE);
            for _ in 0..GRID_SIZE {
                row_vec.push(Cell::create_empty());
            }
            field.push(row_vec);
        }
        Board {field, mine_count: 0}
    }

    pub fn generate<R: Rng + ?Sized>(rng: &mut R) -> Board {
        let mines = sample_points(NUM_MINES, rng);
        log::debug!("placed mines at {:?}", mines);
        Board::from_mines(&mines)
    }

    /// Builds a board with exactly the given mines. Duplicates are ignored.
    pub fn from_mines(mines: &[Point]) -> Board {
        let mut board = Board::empty();
        for point in mines {
            let cell = board.retrieve_cell_mutable(point);
            if cell.is_mine() {
                continue
            }
            cell.content = Content::Mine;
            board.mine_count += 1;
        }
        board.count_neighbors();
        board
    }

    fn count_neighbors(&mut self) {
        let mines: Vec<Point> = self.points().into_iter()
            .filter(|point| self.is_mine(point))
            .collect();
        for point in self.points() {
            let count = mines.iter().filter(|mine| mine.is_adjacent_to(&point)).count();
            let cell = self.retrieve_cell_mutable(&point);
            if !cell.is_mine() {
                cell.mined_neighbor_count = count;
            }
        }
    }

    pub fn points(&self) -> Vec<Point> {
        iproduct!(0..GRID_SIZE, 0..GRID_SIZE).map(|(i, j)| Point(i, j)).collect()
    }

    pub fn retrieve_cell(&self, point: &Point) -> &Cell {
        &self.field[point.0][point.1]
    }

    fn retrieve_cell_mutable(&mut self, point: &Point) -> &mut Cell {
        &mut self.field[point.0][point.1]
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.field.iter().flatten()
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn is_mine(&self, point: &Point) -> bool {
        self.retrieve_cell(point).is_mine()
    }

    pub fn adjacent_mine_count(&self, point: &Point) -> usize {
        self.retrieve_cell(point).mined_neighbor_count
    }

    pub fn visibility(&self, point: &Point) -> Visibility {
        self.retrieve_cell(point).visibility
    }

    pub fn set_visibility(&mut self, point: &Point, visibility: Visibility) {
        self.retrieve_cell_mutable(point).visibility = visibility;
    }

    pub fn revealed_count(&self) -> usize {
        self.cells().filter(|cell| cell.visibility.is_revealed()).count()
    }

    pub fn flagged_count(&self) -> usize {
        self.cells().filter(|cell| cell.visibility.is_flagged()).count()
    }

    pub fn neighbor_points(&self, point: &Point) -> Vec<Point> {
        iproduct!(-1..2i64, -1..2i64)
            .filter(|&(i, j)| i != 0 || j != 0)
            .map(|(i, j)| (i + point.0 as i64, j + point.1 as i64))
            .filter(|&(x, y)| x >= 0 && x < GRID_SIZE as i64 && y >= 0 && y < GRID_SIZE as i64)
            .map(|(x, y)| Point(x as usize, y as usize))
            .collect()
    }
}

#[cfg(test)]
use proptest::prelude::*;
