use anyhow::Context;
use itertools::Itertools;
use rustc_hash::{FxHashMap, FxHashSet};

/// Undirected LAN links keyed by computer name.
struct Network<'a> {
    links: FxHashMap<&'a str, FxHashSet<&'a str>>,
}

impl<'a> Network<'a> {
    fn parse(input: &'a str) -> anyhow::Result<Self> {
        let mut links: FxHashMap<&str, FxHashSet<&str>> = FxHashMap::default();
        for line in input.trim().lines() {
            let (a, b) = line.trim().split_once('-').with_context(|| format!("cannot parse {} as a-b", line))?;
            links.entry(a).or_default().insert(b);
            links.entry(b).or_default().insert(a);
        }
        Ok(Network { links })
    }

    fn linked(&self, a: &str, b: &str) -> bool {
        self.links.get(a).is_some_and(|links| links.contains(b))
    }

    fn neighbors(&self, computer: &str) -> impl Iterator<Item = &'a str> + '_ {
        self.links.get(computer).into_iter().flatten().copied()
    }

    fn degree(&self, computer: &str) -> usize {
        self.links.get(computer).map_or(0, |links| links.len())
    }

    /// Every triangle once, with its names in ascending order.
    fn triangles(&self) -> impl Iterator<Item = [&'a str; 3]> + '_ {
        self.links.keys().flat_map(move |&a| {
            self.neighbors(a).filter(move |&b| a < b).flat_map(move |b| {
                self.neighbors(b).filter(move |&c| b < c && self.linked(a, c)).map(move |c| [a, b, c])
            })
        })
    }

    /// Bron–Kerbosch with pivoting; `best` keeps the largest clique seen so far.
    fn grow(
        &self,
        clique: &mut Vec<&'a str>,
        mut candidates: FxHashSet<&'a str>,
        mut excluded: FxHashSet<&'a str>,
        best: &mut Vec<&'a str>,
    ) {
        let Some(pivot) = candidates.iter().chain(&excluded).copied().max_by_key(|&c| self.degree(c)) else {
            if clique.len() > best.len() {
                *best = clique.clone();
            }
            return;
        };
        let picks = candidates.iter().copied().filter(|&c| !self.linked(pivot, c)).collect_vec();
        for pick in picks {
            clique.push(pick);
            let next_candidates = candidates.iter().copied().filter(|&c| self.linked(pick, c)).collect();
            let next_excluded = excluded.iter().copied().filter(|&c| self.linked(pick, c)).collect();
            self.grow(clique, next_candidates, next_excluded, best);
            clique.pop();
            candidates.remove(pick);
            excluded.insert(pick);
        }
    }

    fn largest_clique(&self) -> Vec<&'a str> {
        let mut best = vec![];
        self.grow(&mut vec![], self.links.keys().copied().collect(), FxHashSet::default(), &mut best);
        best
    }
}

pub fn day23(part: u8, input: &str) -> anyhow::Result<String> {
    let network = Network::parse(input)?;
    if part == 1 {
        let chief = network
            .triangles()
            .filter(|triangle| triangle.iter().any(|name| name.starts_with('t')))
            .count();
        Ok(chief.to_string())
    } else {
        let party = network.largest_clique();
        log::debug!("largest party has {} computers", party.len());
        Ok(party.into_iter().sorted().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = "\
kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    #[test]
    fn triangles_are_counted_once() {
        let network = Network::parse(EXAMPLE).unwrap();
        assert_eq!(network.triangles().count(), 12);
        assert_eq!(day23(1, EXAMPLE).unwrap(), "7");
    }

    #[test]
    fn lan_party_password() {
        assert_eq!(day23(2, EXAMPLE).unwrap(), "co,de,ka,ta");
    }

    #[test]
    fn complete_graph_is_one_clique() {
        let network = Network::parse("a-b\nb-c\na-c\nc-d\na-d\nb-d\nd-e").unwrap();
        assert_eq!(network.largest_clique().into_iter().sorted().collect_vec(), ["a", "b", "c", "d"]);
    }

    #[test]
    fn malformed_link_is_rejected() {
        assert!(day23(1, "ab-cd\nefgh").is_err());
    }
}
