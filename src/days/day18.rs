use anyhow::{bail, Context};
use arrayvec::ArrayVec;
use bitvec::prelude::*;
use itertools::Itertools;

use crate::geometry::Point;
use crate::search::{find_minimum_cost, Cost, Search, SearchError};

struct MemorySpace {
    bytes: Vec<Point>,
    exit: Point,
}

impl MemorySpace {
    fn parse(input: &str) -> anyhow::Result<Self> {
        let bytes = input
            .trim()
            .lines()
            .map(|line| -> anyhow::Result<Point> {
                let (x, y) = line.split_once(',').with_context(|| format!("cannot parse {} as x,y", line))?;
                Ok(Point::new(x.trim().parse()?, y.trim().parse()?))
            })
            .collect::<anyhow::Result<Vec<_>>>()?;
        if bytes.iter().any(|byte| byte.x < 0 || byte.y < 0) {
            bail!("byte coordinates must not be negative");
        }
        let exit = Point::new(
            bytes.iter().map(|byte| byte.x).max().unwrap_or(0),
            bytes.iter().map(|byte| byte.y).max().unwrap_or(0),
        );
        Ok(MemorySpace { bytes, exit })
    }

    /// How many bytes have fallen when part one is asked; the 7x7 example uses fewer.
    fn first_fall(&self) -> usize {
        let fallen = if self.exit == Point::new(6, 6) { 12 } else { 1024 };
        fallen.min(self.bytes.len())
    }

    fn escape(&self, fallen: usize) -> Result<Search<Point>, SearchError> {
        let width = self.exit.x as usize + 1;
        let index = |point: Point| point.y as usize * width + point.x as usize;
        let mut corrupted = bitvec![0; width * (self.exit.y as usize + 1)];
        for &byte in &self.bytes[..fallen] {
            corrupted.set(index(byte), true);
        }
        if corrupted[index(Point::new(0, 0))] {
            return Err(SearchError::Unreachable);
        }

        find_minimum_cost(
            Point::new(0, 0),
            |&at| {
                at.neighbors()
                    .into_iter()
                    .filter(|next| {
                        (0..=self.exit.x).contains(&next.x)
                            && (0..=self.exit.y).contains(&next.y)
                            && !corrupted[index(*next)]
                    })
                    .map(|next| (next, 1 as Cost))
                    .collect::<ArrayVec<_, 4>>()
            },
            |&at| at == self.exit,
        )
    }
}

pub fn day18(part: u8, input: &str) -> anyhow::Result<String> {
    let space = MemorySpace::parse(input)?;
    if part == 1 {
        return Ok(space.escape(space.first_fall())?.min_cost().to_string());
    }

    let counts = (1..=space.bytes.len()).collect_vec();
    let blocked_at = counts.partition_point(|&fallen| space.escape(fallen).is_ok());
    let Some(byte) = space.bytes.get(blocked_at) else {
        bail!("the exit stays reachable after all {} bytes", space.bytes.len());
    };
    log::debug!("exit blocked once {} bytes have fallen", blocked_at + 1);
    Ok(format!("{},{}", byte.x, byte.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
5,4
4,2
4,5
3,0
2,1
6,3
2,4
1,5
0,6
3,3
2,6
5,1
1,2
5,5
2,5
6,5
1,4
0,4
6,4
1,1
6,1
1,0
0,5
1,6
2,0
";

    #[test]
    fn shortest_escape() {
        assert_eq!(day18(1, EXAMPLE).unwrap(), "22");
    }

    #[test]
    fn first_blocking_byte() {
        assert_eq!(day18(2, EXAMPLE).unwrap(), "6,1");
    }

    #[test]
    fn open_space_never_blocks() {
        assert!(day18(2, "0,2\n2,0\n").is_err());
    }
}
