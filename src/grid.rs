//! Row-major character grids and the points that index them.

#![allow(dead_code)]

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("Invalid point {0:?} for a {1}x{2} grid")]
    InvalidPoint(Point, usize, usize),

    #[error("Row {0} has {1} cells, expected {2}")]
    RaggedRow(usize, usize, usize),
}

/// A movement direction between grid cells.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

const DIRECTIONS: [Direction; 4] = [
    Direction::North,
    Direction::West,
    Direction::East,
    Direction::South,
];

impl Direction {
    /// Enumerates all directions of movement in "reading order",
    /// i.e. such that the resulting points are in reading order
    /// from the current position.
    pub fn all() -> impl Iterator<Item = Self> {
        DIRECTIONS.iter().cloned()
    }

    /// Rotates the direction a quarter turn counter-clockwise.
    pub fn turn_left(&self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
            Direction::West => Direction::South,
        }
    }

    /// Rotates the direction a quarter turn clockwise.
    pub fn turn_right(&self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::South => Direction::West,
            Direction::East => Direction::South,
            Direction::West => Direction::North,
        }
    }

    /// Offset of one step in this direction, as (row, column).
    fn offset(&self) -> (i64, i64) {
        match self {
            Direction::North => (-1, 0),
            Direction::South => (1, 0),
            Direction::East => (0, 1),
            Direction::West => (0, -1),
        }
    }
}

/// A location on a grid, addressed as row then column so that
/// points sort in reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Point {
    pub row: i64,
    pub col: i64,
}

impl Point {
    /// Build a new point from coordinates.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns a point at (0, 0)
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// The adjacent point one step away in the given direction.
    pub fn step(self, direction: Direction) -> Point {
        let (dr, dc) = direction.offset();
        Point {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Taxicab distance to another point.
    pub fn manhattan_distance(self, other: Point) -> u64 {
        ((self.row - other.row).abs() + (self.col - other.col).abs()) as u64
    }
}

impl From<(i64, i64)> for Point {
    fn from(coordinates: (i64, i64)) -> Self {
        Point::new(coordinates.0, coordinates.1)
    }
}

/// A dense rectangular grid stored in row-major order.
#[derive(Debug, Clone)]
pub struct Grid<T> {
    cells: Vec<Vec<T>>,
    height: usize,
    width: usize,
}

impl<T> Grid<T> {
    /// Build a grid from rows of cells. All rows must have the
    /// same width.
    pub fn new(cells: Vec<Vec<T>>) -> Result<Self, GridError> {
        let height = cells.len();
        let width = cells.first().map(|row| row.len()).unwrap_or(0);
        for (index, row) in cells.iter().enumerate() {
            if row.len() != width {
                return Err(GridError::RaggedRow(index, row.len(), width));
            }
        }
        Ok(Grid {
            cells,
            height,
            width,
        })
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Whether the point falls inside the grid bounds.
    pub fn contains(&self, point: Point) -> bool {
        (0..self.height as i64).contains(&point.row) && (0..self.width as i64).contains(&point.col)
    }

    /// The cell at the given point, or [GridError::InvalidPoint]
    /// when the point is out of bounds.
    pub fn get(&self, point: Point) -> Result<&T, GridError> {
        if !self.contains(point) {
            return Err(GridError::InvalidPoint(point, self.width, self.height));
        }
        Ok(&self.cells[point.row as usize][point.col as usize])
    }

    /// Replace the cell at the given point.
    pub fn set(&mut self, point: Point, value: T) -> Result<(), GridError> {
        if !self.contains(point) {
            return Err(GridError::InvalidPoint(point, self.width, self.height));
        }
        self.cells[point.row as usize][point.col as usize] = value;
        Ok(())
    }
}

impl<T> Grid<T>
where
    T: Clone,
{
    /// Build a grid of the given dimensions with every cell set
    /// to `value`.
    pub fn filled(height: usize, width: usize, value: T) -> Self {
        Grid {
            cells: vec![vec![value; width]; height],
            height,
            width,
        }
    }
}
