use anyhow::bail;
use itertools::Itertools;
use regex::Regex;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    And,
    Or,
    Xor,
}

#[derive(Debug, Clone, Copy)]
struct Gate<'a> {
    a: &'a str,
    op: Op,
    b: &'a str,
    out: &'a str,
}

impl Gate<'_> {
    fn reads(&self, wire: &str) -> bool {
        self.a == wire || self.b == wire
    }

    fn reads_inputs(&self) -> bool {
        [self.a, self.b].iter().all(|wire| wire.starts_with('x') || wire.starts_with('y'))
    }

    fn reads_first_bit(&self) -> bool {
        self.reads_inputs() && self.a.ends_with("00") && self.b.ends_with("00")
    }
}

struct Circuit<'a> {
    wires: FxHashMap<&'a str, bool>,
    gates: Vec<Gate<'a>>,
}

impl<'a> Circuit<'a> {
    fn parse(input: &'a str) -> anyhow::Result<Self> {
        let wire_re = Regex::new(r"^(\w+): ([01])$")?;
        let gate_re = Regex::new(r"^(\w+) (AND|OR|XOR) (\w+) -> (\w+)$")?;
        let mut wires = FxHashMap::default();
        let mut gates = vec![];
        for line in input.trim().lines().map(str::trim).filter(|line| !line.is_empty()) {
            if let Some(caps) = wire_re.captures(line) {
                let (_, [wire, value]) = caps.extract();
                wires.insert(wire, value == "1");
            } else if let Some(caps) = gate_re.captures(line) {
                let (_, [a, op, b, out]) = caps.extract();
                let op = match op {
                    "AND" => Op::And,
                    "OR" => Op::Or,
                    _ => Op::Xor,
                };
                gates.push(Gate { a, op, b, out });
            } else {
                bail!("cannot parse {} as a wire or a gate", line);
            }
        }
        Ok(Circuit { wires, gates })
    }

    /// Settles every gate, repeating passes until each one has both inputs.
    fn settle(&mut self) -> anyhow::Result<()> {
        let mut pending = self.gates.clone();
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|gate| {
                let (Some(&a), Some(&b)) = (self.wires.get(gate.a), self.wires.get(gate.b)) else {
                    return true;
                };
                let value = match gate.op {
                    Op::And => a & b,
                    Op::Or => a | b,
                    Op::Xor => a ^ b,
                };
                self.wires.insert(gate.out, value);
                false
            });
            if pending.len() == before {
                bail!("{} gates never get both inputs, starting with {:?}", pending.len(), pending[0]);
            }
        }
        Ok(())
    }

    /// Reads the wires starting with `prefix` as a binary number, `00` being the lowest bit.
    fn number(&self, prefix: char) -> u64 {
        self.wires
            .iter()
            .filter(|(wire, _)| wire.starts_with(prefix))
            .sorted()
            .rev()
            .fold(0, |number, (_, &bit)| number << 1 | u64::from(bit))
    }

    fn feeds(&self, wire: &str, op: Op) -> bool {
        self.gates.iter().any(|gate| gate.op == op && gate.reads(wire))
    }

    /// Outputs that break the shape of a ripple-carry adder.
    ///
    /// Every `z` wire but the top one comes from an XOR and the top one from
    /// an OR. An XOR of carries must write a `z` wire. An XOR of input bits must
    /// feed another XOR, and an AND must feed the carry OR, except on bit zero
    /// where the half adder has no incoming carry.
    fn miswired(&self) -> Vec<&'a str> {
        let top = self.gates.iter().map(|gate| gate.out).filter(|out| out.starts_with('z')).max();
        self.gates
            .iter()
            .filter(|gate| {
                if Some(gate.out) == top {
                    gate.op != Op::Or
                } else if gate.out.starts_with('z') {
                    gate.op != Op::Xor
                } else {
                    match gate.op {
                        Op::Xor if !gate.reads_inputs() => true,
                        Op::Xor => !gate.reads_first_bit() && !self.feeds(gate.out, Op::Xor),
                        Op::And => !gate.reads_first_bit() && !self.feeds(gate.out, Op::Or),
                        Op::Or => false,
                    }
                }
            })
            .map(|gate| gate.out)
            .sorted()
            .dedup()
            .collect()
    }
}

pub fn day24(part: u8, input: &str) -> anyhow::Result<String> {
    let mut circuit = Circuit::parse(input)?;
    if part == 1 {
        circuit.settle()?;
        return Ok(circuit.number('z').to_string());
    }

    let miswired = circuit.miswired();
    if miswired.len() != 8 {
        log::warn!("expected four swapped pairs, found {} suspicious wires", miswired.len());
    }
    let (x, y) = (circuit.number('x'), circuit.number('y'));
    match circuit.settle() {
        Ok(()) => log::debug!("{} + {} came out as {}", x, y, circuit.number('z')),
        Err(err) => log::debug!("{} + {} does not settle: {}", x, y, err),
    }
    Ok(miswired.join(","))
}
