use arrayvec::ArrayVec;

use crate::geometry::{Grid, Point};
use crate::search::{find_minimum_cost, Cost, Search, SearchError};

fn hike(map: &Grid, trailhead: Point) -> Result<Search<Point>, SearchError> {
    find_minimum_cost(
        trailhead,
        |&at| {
            let uphill = map.get(at).map(|height| height + 1);
            at.neighbors()
                .into_iter()
                .filter(|&next| map.get(next) == uphill)
                .map(|next| (next, 1 as Cost))
                .collect::<ArrayVec<_, 4>>()
        },
        |&at| map.get(at) == Some(b'9'),
    )
}

pub fn day10(part: u8, input: &str) -> anyhow::Result<String> {
    let map = Grid::parse(input)?;
    let mut total = 0;
    for trailhead in map.positions(b'0') {
        let trails = match hike(&map, trailhead) {
            Ok(trails) => trails,
            Err(SearchError::Unreachable) => continue,
            Err(err) => return Err(err.into()),
        };
        total += if part == 1 {
            trails.goals().len() as u64
        } else {
            trails.count_optimal_paths()?
        };
    }
    Ok(total.to_string())
}
