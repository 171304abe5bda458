use std::path::{Path, PathBuf};

use anyhow::Context;

/// `day{day}.in` for the real puzzle input, `day{day}test{n}.in` for the n-th example.
pub fn input_path(dir: &Path, day: u8, test: Option<u32>) -> PathBuf {
    match test {
        None => dir.join(format!("day{}.in", day)),
        Some(test) => dir.join(format!("day{}test{}.in", day, test)),
    }
}

pub fn read_input(dir: &Path, day: u8, test: Option<u32>) -> anyhow::Result<String> {
    let path = input_path(dir, day, test);
    log::debug!("reading {}", path.display());
    std::fs::read_to_string(&path).with_context(|| format!("cannot read input file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_names() {
        let dir = Path::new("inputs");
        assert_eq!(input_path(dir, 16, None), Path::new("inputs/day16.in"));
        assert_eq!(input_path(dir, 16, Some(2)), Path::new("inputs/day16test2.in"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_input(Path::new("no-such-dir"), 3, None).unwrap_err();
        assert!(err.to_string().contains("day3.in"), "{err}");
    }
}
