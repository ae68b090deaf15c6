//! Day 18: escape a memory grid while corrupted bytes fall onto it.
//!
//! The input's first line is `width,height,cutoff`; each remaining
//! line is the `x,y` address of a falling byte.

use std::io::Read;
use std::str::FromStr;

use anyhow::{anyhow, Error};
use graphsearch::{GraphSearcher, SearchError};

use crate::grid::{Direction, Grid, Point};

#[derive(Debug)]
struct RamRun {
    height: usize,
    width: usize,
    bytes: Vec<Point>,
    cutoff: usize,
}

impl RamRun {
    /// The memory grid after the first `count` bytes have fallen.
    fn after(&self, count: usize) -> Result<MemoryGrid, Error> {
        let mut corrupted = Grid::filled(self.height, self.width, false);
        for byte in self.bytes.iter().take(count) {
            corrupted.set(*byte, true)?;
        }

        Ok(MemoryGrid {
            exit: Point::new(self.height as i64 - 1, self.width as i64 - 1),
            corrupted,
        })
    }
}

impl FromStr for RamRun {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines().filter(|l| !l.trim().is_empty());

        let header: Vec<usize> = lines
            .next()
            .ok_or_else(|| anyhow!("Missing header line"))?
            .trim()
            .split(',')
            .map(|field| field.parse::<usize>())
            .collect::<Result<_, _>>()?;
        let (width, height, cutoff) = match header[..] {
            [width, height, cutoff] => (width, height, cutoff),
            _ => return Err(anyhow!("Expected width,height,cutoff header")),
        };

        // Byte addresses arrive as x,y but points index row,col.
        let bytes = lines
            .map(|line| {
                let mut fields = line.trim().split(',');
                let x: i64 = fields
                    .next()
                    .ok_or_else(|| anyhow!("Missing x coordinate: {}", line))?
                    .parse()?;
                let y: i64 = fields
                    .next()
                    .ok_or_else(|| anyhow!("Missing y coordinate: {}", line))?
                    .parse()?;
                Ok(Point::new(y, x))
            })
            .collect::<Result<Vec<Point>, Error>>()?;

        Ok(RamRun {
            height,
            width,
            bytes,
            cutoff,
        })
    }
}

#[derive(Debug)]
struct MemoryGrid {
    corrupted: Grid<bool>,
    exit: Point,
}

impl GraphSearcher for MemoryGrid {
    type Node = Point;
    type Weight = usize;

    fn neighbors(&self, node: &Self::Node) -> Vec<Self::Node> {
        Direction::all()
            .map(|direction| node.step(direction))
            .filter(|point| {
                self.corrupted
                    .get(*point)
                    .map(|corrupted| !corrupted)
                    .unwrap_or(false)
            })
            .collect()
    }

    fn edge_weight(&self, _origin: &Self::Node, _neighbor: &Self::Node) -> usize {
        1
    }

    fn is_terminal(&self, node: &Self::Node) -> bool {
        *node == self.exit
    }

    fn heuristic(&self, node: &Self::Node) -> usize {
        node.manhattan_distance(self.exit) as usize
    }
}

fn part1(run: &RamRun) -> Result<usize, Error> {
    let memory = run.after(run.cutoff)?;
    let (_, steps) = memory.best_path(Point::origin())?;
    Ok(steps)
}

/// The first byte whose fall cuts off the exit, reported as `x,y`.
fn part2(run: &RamRun) -> Result<String, Error> {
    for count in run.cutoff.max(1)..=run.bytes.len() {
        let memory = run.after(count)?;
        match memory.best_path(Point::origin()) {
            Ok(_) => continue,
            Err(SearchError::NoPathFound) => {
                let byte = run.bytes[count - 1];
                return Ok(format!("{},{}", byte.col, byte.row));
            }
        }
    }

    Err(anyhow!("Every byte leaves the exit reachable"))
}

fn read(mut input: Box<dyn Read + 'static>) -> Result<RamRun, Error> {
    let mut buffer = String::new();
    input.read_to_string(&mut buffer)?;
    buffer.parse()
}

pub(crate) fn main(input: Box<dyn Read + 'static>) -> ::std::result::Result<(), Error> {
    let run = read(input)?;

    println!("Part 1: {}", part1(&run)?);
    println!("Part 2: {}", part2(&run)?);

    Ok(())
}
