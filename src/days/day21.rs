use anyhow::Context;
use arrayvec::ArrayVec;
use itertools::iproduct;

use crate::geometry::{Direction, Point};
use crate::search::{find_minimum_cost, Cost};

const NUMERIC: Keypad = Keypad(&["789", "456", "123", " 0A"]);
const DIRECTIONAL: Keypad = Keypad(&[" ^A", "<v>"]);

/// Directional keys in table order: the four arrows in `Direction` order, then `A`.
const BUTTONS: [u8; 5] = *b"^>v<A";
const ACTIVATE: usize = 4;

/// `presses[from][to]`: operator presses needed to move an arm resting on
/// directional key `from` over to key `to` and press it.
type Presses = [[Cost; 5]; 5];

#[derive(Debug, Clone, Copy)]
struct Keypad(&'static [&'static str]);

impl Keypad {
    fn key_at(self, at: Point) -> Option<u8> {
        let row = self.0.get(usize::try_from(at.y).ok()?)?;
        let key = *row.as_bytes().get(usize::try_from(at.x).ok()?)?;
        (key != b' ').then_some(key)
    }

    fn position(self, key: u8) -> Option<Point> {
        self.0.iter().enumerate().find_map(|(y, row)| {
            row.bytes().position(|k| k == key && k != b' ').map(|x| Point::new(x as i32, y as i32))
        })
    }
}

fn button(direction: Direction) -> usize {
    direction as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum Arm {
    /// This pad's arm is over `at`; the arm controlling it last pressed button `last`.
    Hovering { at: Point, last: usize },
    Pressed,
}

/// Cheapest way to move the arm on `pad` from `from` to `to` and press it, when
/// every directional press above costs what `above` says.
fn press_cost(pad: Keypad, from: Point, to: Point, above: &Presses) -> anyhow::Result<Cost> {
    let pressed = find_minimum_cost(
        Arm::Hovering { at: from, last: ACTIVATE },
        |&arm| {
            let mut moves = ArrayVec::<(Arm, Cost), 5>::new();
            if let Arm::Hovering { at, last } = arm {
                for direction in Direction::ALL {
                    let next = at.step(direction);
                    if pad.key_at(next).is_some() {
                        let last_next = button(direction);
                        moves.push((Arm::Hovering { at: next, last: last_next }, above[last][last_next]));
                    }
                }
                if at == to {
                    moves.push((Arm::Pressed, above[last][ACTIVATE]));
                }
            }
            moves
        },
        |&arm| arm == Arm::Pressed,
    )?;
    Ok(pressed.min_cost())
}

/// Press costs one robot further from the operator.
fn relay(above: &Presses) -> anyhow::Result<Presses> {
    let mut presses = [[0; 5]; 5];
    for (from, to) in iproduct!(0..BUTTONS.len(), 0..BUTTONS.len()) {
        let start = DIRECTIONAL.position(BUTTONS[from]).context("directional keypad lacks a button")?;
        let end = DIRECTIONAL.position(BUTTONS[to]).context("directional keypad lacks a button")?;
        presses[from][to] = press_cost(DIRECTIONAL, start, end, above)?;
    }
    Ok(presses)
}

/// Operator presses needed to type `code` on the door with `robots` directional
/// keypads in between.
fn typing_cost(code: &str, robots: usize) -> anyhow::Result<Cost> {
    let mut presses = [[1; 5]; 5];
    for _ in 0..robots {
        presses = relay(&presses)?;
    }

    let mut at = NUMERIC.position(b'A').context("numeric keypad lacks A")?;
    let mut total = 0;
    for key in code.bytes() {
        let next = NUMERIC.position(key).with_context(|| format!("no key {} on the door", key as char))?;
        total += press_cost(NUMERIC, at, next, &presses)?;
        at = next;
    }
    Ok(total)
}

pub fn day21(part: u8, input: &str) -> anyhow::Result<String> {
    let robots = if part == 1 { 2 } else { 25 };
    let mut total = 0;
    for code in input.trim().lines().map(str::trim) {
        let presses = typing_cost(code, robots)?;
        let value: u64 = code
            .trim_end_matches('A')
            .parse()
            .with_context(|| format!("code {} has no numeric part", code))?;
        log::debug!("{}: {} presses", code, presses);
        total += presses * value;
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
029A
980A
179A
456A
379A
";

    #[test]
    fn button_table_follows_direction_order() {
        assert_eq!(Direction::ALL.map(|direction| BUTTONS[button(direction)]), *b"^>v<");
        assert_eq!(BUTTONS[ACTIVATE], b'A');
        assert_eq!(DIRECTIONAL.key_at(Point::new(0, 0)), None);
        assert_eq!(NUMERIC.key_at(Point::new(0, 3)), None);
        assert_eq!(NUMERIC.position(b'0'), Some(Point::new(1, 3)));
    }

    #[test]
    fn typing_directly_costs_the_walk() {
        assert_eq!(typing_cost("029A", 0).unwrap(), 12);
    }

    #[test]
    fn presses_per_code() {
        let lengths = EXAMPLE.lines().map(|code| typing_cost(code, 2).unwrap()).collect::<Vec<_>>();
        assert_eq!(lengths, [68, 60, 68, 64, 64]);
    }

    #[test]
    fn complexity_sum() {
        assert_eq!(day21(1, EXAMPLE).unwrap(), "126384");
        assert_eq!(day21(2, EXAMPLE).unwrap(), "154115708116294");
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(day21(1, "12BA").is_err());
    }
}
