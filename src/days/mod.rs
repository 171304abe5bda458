mod day10;
mod day11;
mod day15;
mod day16;
mod day17;
mod day18;
mod day19;
mod day20;
mod day21;
mod day23;
mod day24;
mod day25;

pub use day10::day10;
pub use day11::day11;
pub use day15::day15;
pub use day16::day16;
pub use day17::day17;
pub use day18::day18;
pub use day19::day19;
pub use day20::day20;
pub use day21::day21;
pub use day23::day23;
pub use day24::day24;
pub use day25::day25;

/// Answers one part (1 or 2) of a day's puzzle for the given input text.
pub type Solver = fn(u8, &str) -> anyhow::Result<String>;

pub fn solver(day: u8) -> Option<Solver> {
    let solver: Solver = match day {
        10 => day10,
        11 => day11,
        15 => day15,
        16 => day16,
        17 => day17,
        18 => day18,
        19 => day19,
        20 => day20,
        21 => day21,
        23 => day23,
        24 => day24,
        25 => day25,
        _ => return None,
    };
    Some(solver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_solved_days_dispatch() {
        let solved = (1..=25).filter(|&day| solver(day).is_some()).collect::<Vec<_>>();
        assert_eq!(solved, [10, 11, 15, 16, 17, 18, 19, 20, 21, 23, 24, 25]);
    }

    #[test]
    fn dispatch_reaches_the_solver() {
        let solve = solver(11).unwrap();
        assert_eq!(solve(1, "125 17").unwrap(), "55312");
        let solve = solver(21).unwrap();
        assert_eq!(solve(1, "029A\n").unwrap(), (68 * 29).to_string());
    }
}
