use anyhow::{bail, Context};
use itertools::Itertools;

use crate::geometry::{Direction, Grid, Point};

/// Doubles every tile horizontally; boxes become `[]` and the robot keeps the left half.
fn widen(map: &str) -> String {
    map.lines()
        .map(|line| {
            line.bytes()
                .map(|cell| match cell {
                    b'#' => "##",
                    b'O' => "[]",
                    b'@' => "@.",
                    _ => "..",
                })
                .collect::<String>()
        })
        .join("\n")
}

/// Tries to move the robot one step, shoving every box in the way.
/// Returns where the robot ends up; nothing moves if any box would hit a wall.
fn shove(warehouse: &mut Grid, robot: Point, direction: Direction) -> Point {
    let mut moving = vec![robot];
    let mut ix = 0;
    while let Some(&at) = moving.get(ix) {
        ix += 1;
        let next = at.step(direction);
        let pushed = match warehouse.get(next) {
            Some(b'.') => continue,
            Some(b'O') => [Some(next), None],
            Some(b'[') => [Some(next), Some(next.step(Direction::East))],
            Some(b']') => [Some(next), Some(next.step(Direction::West))],
            _ => return robot,
        };
        for cell in pushed.into_iter().flatten() {
            if !moving.contains(&cell) {
                moving.push(cell);
            }
        }
    }

    let lifted = moving.iter().filter_map(|&at| Some((at, warehouse.get(at)?))).collect_vec();
    for &(at, _) in &lifted {
        if let Some(cell) = warehouse.get_mut(at) {
            *cell = b'.';
        }
    }
    for (at, content) in lifted {
        if let Some(cell) = warehouse.get_mut(at.step(direction)) {
            *cell = content;
        }
    }
    robot.step(direction)
}

fn gps_sum(warehouse: &Grid) -> i64 {
    warehouse
        .points()
        .filter(|&at| matches!(warehouse.get(at), Some(b'O' | b'[')))
        .map(|at| 100 * i64::from(at.y) + i64::from(at.x))
        .sum()
}

pub fn day15(part: u8, input: &str) -> anyhow::Result<String> {
    let input = input.replace("\r\n", "\n");
    let (map, moves) = input
        .trim()
        .split_once("\n\n")
        .context("expected the warehouse map and the moves separated by a blank line")?;
    let moves = moves
        .bytes()
        .filter(|byte| !byte.is_ascii_whitespace())
        .map(|byte| -> anyhow::Result<Direction> {
            Ok(match byte {
                b'^' => Direction::North,
                b'>' => Direction::East,
                b'v' => Direction::South,
                b'<' => Direction::West,
                _ => bail!("unexpected move '{}'", byte as char),
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut warehouse = if part == 1 { Grid::parse(map)? } else { Grid::parse(&widen(map))? };
    let mut robot = warehouse.find(b'@').context("warehouse has no robot")?;
    for direction in moves {
        robot = shove(&mut warehouse, robot, direction);
    }
    log::debug!("robot stopped at {:?}", robot);
    Ok(gps_sum(&warehouse).to_string())
}
