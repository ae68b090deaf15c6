//! Day 16: navigate a reindeer maze, where moving forward costs 1
//! and turning costs 1000.

use std::collections::HashSet;
use std::io::Read;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use graphsearch::GraphSearcher;

use crate::grid::{Direction, Grid, Point};

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
enum MazeCell {
    Wall,
    Empty,
    Start,
    End,
}

/// A grid position combined with the direction of travel. Reaching
/// the same tile while facing a different way is a different state,
/// since turning has its own cost.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
struct ReindeerPosition {
    point: Point,
    heading: Direction,
}

impl ReindeerPosition {
    fn ahead(self) -> ReindeerPosition {
        ReindeerPosition {
            point: self.point.step(self.heading),
            heading: self.heading,
        }
    }

    fn facing(self, heading: Direction) -> ReindeerPosition {
        ReindeerPosition {
            point: self.point,
            heading,
        }
    }
}

#[derive(Debug)]
struct ReindeerMaze {
    grid: Grid<MazeCell>,
    start: ReindeerPosition,
    end: Point,
}

impl FromStr for ReindeerMaze {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut rows = Vec::new();
        let mut start = None;
        let mut end = None;

        for (row, line) in s.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut cells = Vec::new();
            for (col, c) in line.trim().chars().enumerate() {
                let cell = match c {
                    '#' => MazeCell::Wall,
                    '.' => MazeCell::Empty,
                    'S' => MazeCell::Start,
                    'E' => MazeCell::End,
                    _ => return Err(anyhow!("Unknown maze tile: {}", c)),
                };
                let point = Point::new(row as i64, col as i64);
                match cell {
                    MazeCell::Start => start = Some(point),
                    MazeCell::End => end = Some(point),
                    _ => {}
                }
                cells.push(cell);
            }
            rows.push(cells);
        }

        let grid = Grid::new(rows)?;
        let start = start.ok_or_else(|| anyhow!("Maze has no start tile"))?;
        let end = end.ok_or_else(|| anyhow!("Maze has no end tile"))?;

        Ok(ReindeerMaze {
            grid,
            start: ReindeerPosition {
                point: start,
                heading: Direction::East,
            },
            end,
        })
    }
}

impl GraphSearcher for ReindeerMaze {
    type Node = ReindeerPosition;
    type Weight = usize;

    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node> {
        let mut positions = vec![
            node.facing(node.heading.turn_left()),
            node.facing(node.heading.turn_right()),
        ];

        let ahead = node.ahead();
        if let Ok(cell) = self.grid.get(ahead.point) {
            if *cell != MazeCell::Wall {
                positions.push(ahead);
            }
        }
        positions
    }

    fn edge_weight(&self, origin: &Self::Node, neighbor: &Self::Node) -> usize {
        if origin.heading != neighbor.heading {
            1000
        } else {
            1
        }
    }

    fn is_terminal(&self, node: &Self::Node) -> bool {
        node.point == self.end
    }

    // Admissible: every remaining tile still costs at least one step.
    fn heuristic(&self, node: &Self::Node) -> usize {
        node.point.manhattan_distance(self.end) as usize
    }
}

fn part1(maze: &ReindeerMaze) -> Result<usize, Error> {
    let (_, score) = maze.best_path(maze.start)?;
    Ok(score)
}

fn part2(maze: &ReindeerMaze) -> Result<usize, Error> {
    let (paths, score) = maze.all_best_paths(maze.start);
    if score.is_none() {
        return Err(anyhow!("No route through the maze"));
    }

    let tiles: HashSet<Point> = paths
        .iter()
        .flatten()
        .map(|position| position.point)
        .collect();
    Ok(tiles.len())
}

fn read(mut input: Box<dyn Read + 'static>) -> Result<ReindeerMaze, Error> {
    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;
    buffer.parse()
}

pub(crate) fn main(input: Box<dyn Read + 'static>) -> ::std::result::Result<(), Error> {
    let maze = read(input)?;

    println!("Part 1: {}", part1(&maze)?);
    println!("Part 2: {}", part2(&maze)?);

    Ok(())
}

#[cfg(test)]
mod test {

    use super::*;

    const FIRST_EXAMPLE: &str = "
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND_EXAMPLE: &str = "
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    // Two routes around the central wall, identical in steps and
    // turns, so both tie for the best score.
    const RING: &str = "
#######
#.....#
#S###E#
#.....#
#######
";

    #[test]
    fn first_example() {
        let maze: ReindeerMaze = FIRST_EXAMPLE.parse().unwrap();
        assert_eq!(part1(&maze).unwrap(), 7036);
        assert_eq!(part2(&maze).unwrap(), 45);
    }

    #[test]
    fn second_example() {
        let maze: ReindeerMaze = SECOND_EXAMPLE.parse().unwrap();
        assert_eq!(part1(&maze).unwrap(), 11048);
        assert_eq!(part2(&maze).unwrap(), 64);
    }

    #[test]
    fn tied_routes() {
        let maze: ReindeerMaze = RING.parse().unwrap();

        let (paths, score) = maze.all_best_paths(maze.start);
        assert_eq!(score, Some(3006));
        assert_eq!(paths.len(), 2);
        assert_eq!(part2(&maze).unwrap(), 12);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!("##\n#X".parse::<ReindeerMaze>().is_err());
    }
}
