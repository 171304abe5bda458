use anyhow::{bail, Context};
use itertools::Itertools;
use regex::Regex;

#[derive(Debug, Clone)]
struct Computer {
    a: u64,
    b: u64,
    c: u64,
    program: Vec<u8>,
}

fn combo(operand: u8, a: u64, b: u64, c: u64) -> anyhow::Result<u64> {
    Ok(match operand {
        0..=3 => u64::from(operand),
        4 => a,
        5 => b,
        6 => c,
        _ => bail!("combo operand {} is reserved", operand),
    })
}

fn shift(value: u64, by: u64) -> u64 {
    u32::try_from(by).ok().and_then(|by| value.checked_shr(by)).unwrap_or(0)
}

impl Computer {
    fn parse(input: &str) -> anyhow::Result<Self> {
        let register = |name: &str| -> anyhow::Result<u64> {
            let re = Regex::new(&format!(r"Register {}: (\d+)", name))?;
            let caps = re.captures(input).with_context(|| format!("register {} is missing", name))?;
            Ok(caps[1].parse()?)
        };
        let program = Regex::new(r"Program: ([\d,]+)")?
            .captures(input)
            .context("program is missing")?[1]
            .split(',')
            .map(str::parse)
            .collect::<Result<Vec<u8>, _>>()?;
        if let Some(&bad) = program.iter().find(|&&word| word > 7) {
            bail!("{} is not a 3-bit number", bad);
        }
        Ok(Computer { a: register("A")?, b: register("B")?, c: register("C")?, program })
    }

    /// Runs the program from a fresh instruction pointer with register A replaced.
    fn run(&self, a: u64) -> anyhow::Result<Vec<u8>> {
        let (mut a, mut b, mut c) = (a, self.b, self.c);
        let mut ip = 0;
        let mut output = vec![];
        while let Some(&[opcode, operand]) = self.program.get(ip..ip + 2) {
            match opcode {
                0 => a = shift(a, combo(operand, a, b, c)?),
                1 => b ^= u64::from(operand),
                2 => b = combo(operand, a, b, c)? % 8,
                3 if a != 0 => {
                    ip = usize::from(operand);
                    continue;
                }
                3 => {}
                4 => b ^= c,
                5 => output.push((combo(operand, a, b, c)? % 8) as u8),
                6 => b = shift(a, combo(operand, a, b, c)?),
                7 => c = shift(a, combo(operand, a, b, c)?),
                _ => bail!("invalid opcode {}", opcode),
            }
            ip += 2;
        }
        Ok(output)
    }

    /// Lowest positive A for which the program prints itself.
    ///
    /// Each loop of the program emits one value and drops three bits of A, so A
    /// is grown three bits at a time, matching the output against ever longer
    /// tails of the program.
    fn find_quine(&self) -> anyhow::Result<u64> {
        let mut candidates = vec![0u64];
        for from in (0..self.program.len()).rev() {
            let mut next = vec![];
            for &prefix in &candidates {
                for bits in 0..8 {
                    let a = prefix << 3 | bits;
                    if self.run(a)?[..] == self.program[from..] {
                        next.push(a);
                    }
                }
            }
            log::debug!("{} candidates reproduce the last {} values", next.len(), self.program.len() - from);
            candidates = next;
        }
        candidates
            .into_iter()
            .filter(|&a| a > 0)
            .min()
            .context("no value of register A makes the program print itself")
    }
}

pub fn day17(part: u8, input: &str) -> anyhow::Result<String> {
    let computer = Computer::parse(input)?;
    if part == 1 {
        Ok(computer.run(computer.a)?.iter().join(","))
    } else {
        Ok(computer.find_quine()?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn computer(a: u64, program: &[u8]) -> Computer {
        Computer { a, b: 0, c: 0, program: program.to_vec() }
    }

    #[test]
    fn example_output() {
        let input = "\
Register A: 729
Register B: 0
Register C: 0

Program: 0,1,5,4,3,0
";
        assert_eq!(day17(1, input).unwrap(), "4,6,3,5,6,3,5,2,1,0");
    }

    #[test]
    fn small_programs() {
        assert_eq!(computer(10, &[5, 0, 5, 1, 5, 4]).run(10).unwrap(), [0, 1, 2]);
        assert_eq!(
            computer(2024, &[0, 1, 5, 4, 3, 0]).run(2024).unwrap(),
            [4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]
        );
        let mut with_c = computer(0, &[2, 6, 5, 5]);
        with_c.c = 9;
        assert_eq!(with_c.run(0).unwrap(), [1]);
    }

    #[test]
    fn reserved_combo_operand_fails() {
        assert!(computer(1, &[5, 7]).run(1).is_err());
    }

    #[test]
    fn unknown_opcode_fails() {
        assert!(computer(1, &[8, 0]).run(1).is_err());
        assert!(day17(1, "Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 9,0\n").is_err());
    }

    #[test]
    fn quine() {
        let input = "\
Register A: 2024
Register B: 0
Register C: 0

Program: 0,3,5,4,3,0
";
        assert_eq!(day17(2, input).unwrap(), "117440");
    }
}
