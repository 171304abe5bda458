use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use advent2024::input::read_input;
use advent2024::timing::{timed, TimeUnit};

#[derive(Parser, Debug)]
#[command(about = "Advent of Code 2024 solutions")]
struct Args {
    /// Puzzle day
    day: u8,
    /// Puzzle part
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    part: u8,
    /// Read example input N (dayDtestN.in) instead of dayD.in
    #[arg(short, long)]
    test: Option<u32>,
    /// Directory holding the input files
    #[arg(long, default_value = "inputs")]
    inputs: PathBuf,
    /// Unit for the elapsed time
    #[arg(long, value_enum, default_value_t = TimeUnit::S)]
    unit: TimeUnit,
    /// Log more; repeat for trace output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let solve = advent2024::solver(args.day).with_context(|| format!("no solution for day {}", args.day))?;
    let input = read_input(&args.inputs, args.day, args.test)?;
    let (answer, elapsed) = timed(|| solve(args.part, &input));
    println!("{}", answer?);
    println!("{} elapsed", args.unit.format(elapsed));
    Ok(())
}
