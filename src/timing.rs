use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum TimeUnit {
    #[default]
    S,
    Ms,
    Us,
    Min,
    Hr,
}

impl TimeUnit {
    pub fn format(self, elapsed: Duration) -> String {
        let secs = elapsed.as_secs_f64();
        match self {
            TimeUnit::S => format!("{:.4} s", secs),
            TimeUnit::Ms => format!("{:.4} ms", secs * 1e3),
            TimeUnit::Us => format!("{:.4} us", secs * 1e6),
            TimeUnit::Min => format!("{:.4} min", secs / 60.),
            TimeUnit::Hr => format!("{:.4} hr", secs / 3600.),
        }
    }
}

pub fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_in_each_unit() {
        let elapsed = Duration::from_millis(1500);
        assert_eq!(TimeUnit::S.format(elapsed), "1.5000 s");
        assert_eq!(TimeUnit::Ms.format(elapsed), "1500.0000 ms");
        assert_eq!(TimeUnit::Us.format(elapsed), "1500000.0000 us");
        assert_eq!(TimeUnit::Min.format(Duration::from_secs(90)), "1.5000 min");
        assert_eq!(TimeUnit::Hr.format(Duration::from_secs(5400)), "1.5000 hr");
    }

    #[test]
    fn timed_passes_the_result_through() {
        let (value, _) = timed(|| 6 * 7);
        assert_eq!(value, 42);
    }
}
