use anyhow::Context;
use arrayvec::ArrayVec;
use itertools::Itertools;

use crate::geometry::{Direction, Grid, Point};
use crate::search::{find_minimum_cost, Cost};

const STEP: Cost = 1;
const TURN: Cost = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Reindeer {
    at: Point,
    facing: Direction,
}

impl Reindeer {
    fn moves(self, maze: &Grid) -> ArrayVec<(Reindeer, Cost), 3> {
        let mut moves = ArrayVec::new();
        let ahead = self.at.step(self.facing);
        if maze.get(ahead).is_some_and(|cell| cell != b'#') {
            moves.push((Reindeer { at: ahead, ..self }, STEP));
        }
        moves.push((Reindeer { facing: self.facing.clockwise(), ..self }, TURN));
        moves.push((Reindeer { facing: self.facing.anticlockwise(), ..self }, TURN));
        moves
    }
}

pub fn day16(part: u8, input: &str) -> anyhow::Result<String> {
    let maze = Grid::parse(input)?;
    let start = maze.find(b'S').context("maze has no start tile")?;
    let end = maze.find(b'E').context("maze has no end tile")?;

    let runs = find_minimum_cost(
        Reindeer { at: start, facing: Direction::East },
        |reindeer| reindeer.moves(&maze),
        |reindeer| reindeer.at == end,
    )?;

    if part == 1 {
        Ok(runs.min_cost().to_string())
    } else {
        let seats = runs.states_on_optimal_paths()?.into_iter().map(|reindeer| reindeer.at).unique().count();
        Ok(seats.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIRST: &str = "\
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

    const SECOND: &str = "\
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

    #[test]
    fn lowest_scores() {
        assert_eq!(day16(1, FIRST).unwrap(), "7036");
        assert_eq!(day16(1, SECOND).unwrap(), "11048");
    }

    #[test]
    fn seats_on_best_paths() {
        assert_eq!(day16(2, FIRST).unwrap(), "45");
        assert_eq!(day16(2, SECOND).unwrap(), "64");
    }

    #[test]
    fn straight_corridor() {
        let maze = "\
#####
#S.E#
#####
";
        assert_eq!(day16(1, maze).unwrap(), "2");
        assert_eq!(day16(2, maze).unwrap(), "3");
    }

    #[test]
    fn walled_off_end_is_an_error() {
        let maze = "\
#####
#S#E#
#####
";
        assert!(day16(1, maze).is_err());
    }
}
