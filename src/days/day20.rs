use anyhow::Context;
use arrayvec::ArrayVec;
use rustc_hash::FxHashMap;

use crate::geometry::{Grid, Point};
use crate::search::{find_minimum_cost, Cost};

const WORTHWHILE: Cost = 100;

/// Picoseconds from the start to every track cell.
fn race(track: &Grid) -> anyhow::Result<FxHashMap<Point, Cost>> {
    let start = track.find(b'S').context("track has no start")?;
    let end = track.find(b'E').context("track has no end")?;
    let run = find_minimum_cost(
        start,
        |&at| {
            at.neighbors()
                .into_iter()
                .filter(|&next| track.get(next).is_some_and(|cell| cell != b'#'))
                .map(|next| (next, 1 as Cost))
                .collect::<ArrayVec<_, 4>>()
        },
        |&at| at == end,
    )?;
    log::debug!("honest race takes {} picoseconds", run.min_cost());

    Ok(track
        .points()
        .filter_map(|at| {
            run.best_cost(&at)
                .filter(|&cost| cost <= run.min_cost())
                .map(|cost| (at, cost))
        })
        .collect())
}

fn count_cheats(times: &FxHashMap<Point, Cost>, limit: i32, min_saving: Cost) -> usize {
    let offsets = (-limit..=limit)
        .flat_map(|dx| (-limit..=limit).map(move |dy| (dx, dy)))
        .filter(|&(dx, dy)| dx.abs() + dy.abs() <= limit)
        .collect::<Vec<_>>();

    times
        .iter()
        .map(|(&from, &before)| {
            offsets
                .iter()
                .filter(|&&(dx, dy)| {
                    let to = Point::new(from.x + dx, from.y + dy);
                    times.get(&to).is_some_and(|&after| {
                        let skipped = Cost::from(from.manhattan(to));
                        after >= before + skipped + min_saving
                    })
                })
                .count()
        })
        .sum()
}

pub fn day20(part: u8, input: &str) -> anyhow::Result<String> {
    let times = race(&Grid::parse(input)?)?;
    let limit = if part == 1 { 2 } else { 20 };
    Ok(count_cheats(&times, limit, WORTHWHILE).to_string())
}
