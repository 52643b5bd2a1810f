//! Millisecond timing for the benchmark drivers.

use std::sync::OnceLock;
use std::time::Instant;

static EPOCH: OnceLock<Instant> = OnceLock::new();

/// Monotonic milliseconds since the first call in this process.
pub fn now_millis() -> u64 {
    let epoch = *EPOCH.get_or_init(Instant::now);
    epoch.elapsed().as_millis() as u64
}

/// Runs `f` and returns its result with the elapsed whole milliseconds.
///
/// Includes call/return overhead, which is noise at the sizes these
/// benchmarks are meant for.
pub fn time_millis<T, F>(f: F) -> (T, u64)
where
    F: FnOnce() -> T,
{
    let start = now_millis();
    let out = f();
    (out, now_millis() - start)
}

/// Elapsed milliseconds for each multiplication variant in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatmulTimings {
    pub naive: u64,
    /// B realigned to column-major.
    pub realigned: u64,
    /// Loop interchange (i-k-j).
    pub interchange: u64,
    pub blocked: u64,
}

/// Elapsed milliseconds for each transpose variant in one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransposeTimings {
    pub naive: u64,
    pub blocked: u64,
    pub interchange: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let first = now_millis();
        let second = now_millis();
        assert!(second >= first);
    }

    #[test]
    fn test_time_millis_returns_result() {
        let (value, elapsed) = time_millis(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < 60_000);
    }
}
