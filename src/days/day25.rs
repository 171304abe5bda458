use anyhow::bail;
use itertools::Itertools;

/// Column heights of one schematic, not counting its solid base row.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Schematic {
    lock: bool,
    heights: Vec<usize>,
    /// Room between the two base rows.
    space: usize,
}

impl Schematic {
    fn parse(block: &str) -> anyhow::Result<Self> {
        let rows = block.lines().map(str::trim).map(str::as_bytes).collect_vec();
        let (Some(first), Some(last)) = (rows.first(), rows.last()) else {
            bail!("empty schematic");
        };
        if rows.iter().any(|row| row.len() != first.len()) {
            bail!("schematic rows differ in width:\n{}", block);
        }
        let lock = first.iter().all(|&cell| cell == b'#');
        if lock == last.iter().all(|&cell| cell == b'#') {
            bail!("schematic is neither a lock nor a key:\n{}", block);
        }
        let heights = (0..first.len())
            .map(|col| rows.iter().filter(|row| row[col] == b'#').count() - 1)
            .collect();
        Ok(Schematic { lock, heights, space: rows.len() - 2 })
    }

    fn fits(&self, key: &Schematic) -> bool {
        self.heights.len() == key.heights.len()
            && self.heights.iter().zip(&key.heights).all(|(pin, tooth)| pin + tooth <= self.space)
    }
}

pub fn day25(part: u8, input: &str) -> anyhow::Result<String> {
    if part != 1 {
        bail!("day 25 has only one part");
    }
    let input = input.replace("\r\n", "\n");
    let (locks, keys): (Vec<_>, Vec<_>) = input
        .trim()
        .split("\n\n")
        .map(Schematic::parse)
        .collect::<anyhow::Result<Vec<_>>>()?
        .into_iter()
        .partition(|schematic| schematic.lock);
    log::debug!("{} locks, {} keys", locks.len(), keys.len());
    let fitting = locks.iter().cartesian_product(&keys).filter(|(lock, key)| lock.fits(key)).count();
    Ok(fitting.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
#####
.####
.####
.####
.#.#.
.#...
.....

#####
##.##
.#.##
...##
...#.
...#.
.....

.....
#....
#....
#...#
#.#.#
#.###
#####

.....
.....
#.#..
###..
###.#
###.#
#####

.....
.....
.....
#....
#.#..
#.#.#
#####
";

    #[test]
    fn heights() {
        let schematics = EXAMPLE.split("\n\n").map(|block| Schematic::parse(block).unwrap()).collect_vec();
        assert_eq!(schematics[0].heights, [0, 5, 3, 4, 3]);
        assert!(schematics[0].lock);
        assert_eq!(schematics[2].heights, [5, 0, 2, 1, 3]);
        assert!(!schematics[2].lock);
        assert_eq!(schematics[2].space, 5);
    }

    #[test]
    fn fitting_pairs() {
        assert_eq!(day25(1, EXAMPLE).unwrap(), "3");
    }

    #[test]
    fn no_second_part() {
        assert!(day25(2, EXAMPLE).is_err());
    }

    #[test]
    fn schematic_without_a_base_is_rejected() {
        assert!(day25(1, ".....\n.#...\n.....").is_err());
    }
}
