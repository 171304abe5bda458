use rustc_hash::FxHashMap;

fn blink(stone: u64) -> (u64, Option<u64>) {
    if stone == 0 {
        return (1, None);
    }
    let digits = stone.ilog10() + 1;
    if digits % 2 == 0 {
        let half = 10u64.pow(digits / 2);
        (stone / half, Some(stone % half))
    } else {
        (stone * 2024, None)
    }
}

/// Stone order never matters, so only the multiplicity of each engraving is tracked.
fn count_stones(stones: &[u64], blinks: usize) -> u64 {
    let mut counts: FxHashMap<u64, u64> = FxHashMap::default();
    for &stone in stones {
        *counts.entry(stone).or_default() += 1;
    }
    for _ in 0..blinks {
        let mut next: FxHashMap<u64, u64> = FxHashMap::default();
        for (stone, n) in counts {
            let (left, right) = blink(stone);
            *next.entry(left).or_default() += n;
            if let Some(right) = right {
                *next.entry(right).or_default() += n;
            }
        }
        counts = next;
    }
    log::debug!("{} distinct engravings after {} blinks", counts.len(), blinks);
    counts.values().sum()
}

pub fn day11(part: u8, input: &str) -> anyhow::Result<String> {
    let stones = input.split_whitespace().map(str::parse).collect::<Result<Vec<u64>, _>>()?;
    let blinks = if part == 1 { 25 } else { 75 };
    Ok(count_stones(&stones, blinks).to_string())
}
