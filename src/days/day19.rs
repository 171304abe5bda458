use anyhow::Context;
use itertools::Itertools;

/// Ways to build `design` from `towels`, counted over suffix start positions.
fn arrangements(design: &str, towels: &[&str]) -> u64 {
    let design = design.as_bytes();
    let mut ways = vec![0u64; design.len() + 1];
    ways[design.len()] = 1;
    for start in (0..design.len()).rev() {
        let count = towels
            .iter()
            .filter(|towel| design[start..].starts_with(towel.as_bytes()))
            .map(|towel| ways[start + towel.len()])
            .sum::<u64>();
        ways[start] = count;
    }
    ways[0]
}

pub fn day19(part: u8, input: &str) -> anyhow::Result<String> {
    let mut lines = input.trim().lines();
    let towels = lines
        .next()
        .context("missing towel list")?
        .split(',')
        .map(str::trim)
        .filter(|towel| !towel.is_empty())
        .collect_vec();
    let counts = lines.filter(|line| !line.is_empty()).map(|design| arrangements(design, &towels));

    if part == 1 {
        Ok(counts.filter(|&ways| ways > 0).count().to_string())
    } else {
        Ok(counts.sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrwb
";

    #[test]
    fn possible_designs() {
        assert_eq!(day19(1, EXAMPLE).unwrap(), "6");
    }

    #[test]
    fn all_arrangements() {
        assert_eq!(day19(2, EXAMPLE).unwrap(), "16");
    }

    #[test]
    fn single_design_counts() {
        let towels = ["r", "wr", "b", "g", "bwu", "rb", "gb", "br"];
        assert_eq!(arrangements("brwrr", &towels), 2);
        assert_eq!(arrangements("rrbgbr", &towels), 6);
        assert_eq!(arrangements("ubwu", &towels), 0);
    }

    #[test]
    fn designs_outside_ascii() {
        assert_eq!(arrangements("brü", &["b", "r", "ü"]), 1);
        assert_eq!(arrangements("brü", &["b", "r"]), 0);
        assert_eq!(day19(1, "r, b\n\nrüb\nbr\n").unwrap(), "1");
    }
}
