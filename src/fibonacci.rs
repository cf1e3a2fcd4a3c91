use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::logger::{Logger, NullLogger};

/// Message every [`Fibonacci::generate`] log line is filed under.
pub const GENERATE: &str = "Fibonacci::generate";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum FibonacciError {
    #[error("Negative index: {0}")]
    NegativeIndex(i64),
    #[error("Index out of range for this platform: {0}")]
    IndexOutOfRange(i64),
}

/// Generates numbers in the Fibonacci sequence, remembering every value it
/// has computed.
///
/// The cache is seeded with `F(0)` and `F(1)` and only ever grows. Because a
/// miss at `n` recursively fills `n - 1` and `n - 2` first, the cache never has
/// gaps: it always holds `F(0)..=F(max requested)`.
///
/// The logger is passed in at construction rather than looked up globally, so
/// each generator reports to whatever it was given and tests can hand it a
/// recording double.
///
/// # Example
/// ```
/// use fibonacci_memo::Fibonacci;
/// use num_bigint::BigUint;
///
/// let mut generator = Fibonacci::new();
/// assert_eq!(generator.generate(7), BigUint::from(13u32));
///
/// let cache: Vec<u32> = [0, 1, 1, 2, 3, 5, 8, 13].to_vec();
/// let cache: Vec<BigUint> = cache.into_iter().map(BigUint::from).collect();
/// assert_eq!(generator.cache(), cache.as_slice());
/// ```
#[derive(Clone, Debug)]
pub struct Fibonacci<L = NullLogger> {
    cache: Vec<BigUint>,
    logger: L,
}

impl Fibonacci {
    pub fn new() -> Self {
        Self::with_logger(NullLogger)
    }
}

impl Default for Fibonacci {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: Logger> Fibonacci<L> {
    pub fn with_logger(logger: L) -> Self {
        Fibonacci {
            cache: vec![BigUint::zero(), BigUint::one()],
            logger,
        }
    }

    /// Returns `F(n)`, computing and caching any missing values below it.
    ///
    /// A cache hit is O(1). The first call at a fresh index recurses once per
    /// uncached index, so its stack depth is `n - self.cached_len()`; keep
    /// that in mind before asking a fresh generator for a very large `n`.
    pub fn generate(&mut self, n: usize) -> BigUint {
        self.logger.log(GENERATE, &[&n]);

        if let Some(value) = self.cache.get(n) {
            let note = format!("{n} was already cached.");
            self.logger.log(GENERATE, &[&note]);
            return value.clone();
        }

        let note = format!("{n} was not yet cached.");
        self.logger.log(GENERATE, &[&note]);

        // n >= 2 here since 0 and 1 are always cached
        let value = self.generate(n - 1) + self.generate(n - 2);
        debug_assert_eq!(self.cache.len(), n);
        self.cache.push(value.clone());
        value
    }

    /// Like [`generate`](Self::generate) but accepts a signed index, failing
    /// before any logging or caching when it cannot be an index.
    pub fn try_generate(&mut self, n: i64) -> Result<BigUint, FibonacciError> {
        if n < 0 {
            return Err(FibonacciError::NegativeIndex(n));
        }
        let index = usize::try_from(n).map_err(|_| FibonacciError::IndexOutOfRange(n))?;
        Ok(self.generate(index))
    }

    /// Every value computed so far, indexed from 0 with no gaps.
    ///
    /// This borrows the live cache; it cannot change while the slice is held.
    pub fn cache(&self) -> &[BigUint] {
        &self.cache
    }

    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    pub fn logger(&self) -> &L {
        &self.logger
    }

    pub fn logger_mut(&mut self) -> &mut L {
        &mut self.logger
    }

    pub fn into_logger(self) -> L {
        self.logger
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logger::{BufferedLogger, LogEntry, SwitchableLogger};
    use crate::math;
    use crate::spy::{RecordingLogger, Spy};
    use std::rc::Rc;

    fn big(values: &[u64]) -> Vec<BigUint> {
        values.iter().copied().map(BigUint::from).collect()
    }

    #[test]
    fn test_generates_0() {
        let mut generator = Fibonacci::new();
        assert_eq!(generator.generate(0), BigUint::zero(), "The 0th number should be 0.");
    }

    #[test]
    fn test_generates_1() {
        let mut generator = Fibonacci::new();
        assert_eq!(generator.generate(1), BigUint::one(), "The 1st number should be 1.");
    }

    #[test]
    fn test_generates_a_large_number() {
        let mut generator = Fibonacci::new();
        assert_eq!(generator.generate(7), BigUint::from(13u32), "The 7th number should be 13.");
    }

    #[test]
    fn test_fresh_cache_is_seeded() {
        let generator = Fibonacci::default();
        assert_eq!(generator.cache(), big(&[0, 1]).as_slice());
        assert_eq!(generator.cached_len(), 2);
    }

    #[test]
    fn test_caches_numbers() {
        let mut generator = Fibonacci::new();
        generator.generate(7);

        assert_eq!(
            generator.cache(),
            big(&[0, 1, 1, 2, 3, 5, 8, 13]).as_slice(),
            "Fibonacci numbers should have been cached."
        );
    }

    #[test]
    fn test_smaller_index_does_not_grow_cache() {
        let mut generator = Fibonacci::new();
        generator.generate(10);
        generator.generate(4);
        assert_eq!(generator.cached_len(), 11);
    }

    #[test]
    fn test_generate_is_idempotent() {
        let mut generator = Fibonacci::new();
        let first = generator.generate(20);
        let snapshot = generator.cache().to_vec();

        let second = generator.generate(20);

        assert_eq!(first, second);
        assert_eq!(generator.cache(), snapshot.as_slice());
    }

    #[test]
    fn test_cache_satisfies_recurrence() {
        let mut generator = Fibonacci::new();
        generator.generate(60);

        let cache = generator.cache();
        assert_eq!(cache.len(), 61);
        for i in 2..cache.len() {
            assert_eq!(cache[i], &cache[i - 1] + &cache[i - 2], "F({i})");
        }
    }

    #[test]
    fn test_matches_matrix_evaluation() {
        let mut generator = Fibonacci::new();
        for n in [0, 1, 2, 5, 17, 93, 94, 100, 250] {
            assert_eq!(generator.generate(n), math::nth(n), "F({n})");
        }
    }

    #[test]
    fn test_separate_generators_have_separate_caches() {
        let mut warm = Fibonacci::new();
        warm.generate(15);
        let cold = Fibonacci::new();
        assert_eq!(cold.cached_len(), 2);
    }

    #[test]
    fn test_try_generate_rejects_negative_index() {
        let recorder = RecordingLogger::new();
        let mut generator = Fibonacci::with_logger(&recorder);

        assert_eq!(generator.try_generate(-1), Err(FibonacciError::NegativeIndex(-1)));
        assert_eq!(generator.cached_len(), 2);
        assert!(recorder.is_empty());
    }

    #[test]
    fn test_try_generate_accepts_non_negative_index() {
        let mut generator = Fibonacci::new();
        assert_eq!(generator.try_generate(7), Ok(BigUint::from(13u32)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(FibonacciError::NegativeIndex(-3).to_string(), "Negative index: -3");
    }

    #[test]
    fn test_logs_cache_hit() {
        let recorder = RecordingLogger::new();
        let mut generator = Fibonacci::with_logger(&recorder);

        generator.generate(1);

        assert_eq!(
            recorder.entries(),
            vec![
                LogEntry::new(GENERATE, ["1"]),
                LogEntry::new(GENERATE, ["1 was already cached."]),
            ]
        );
    }

    #[test]
    fn test_logs_recursive_fill_in_order() {
        let recorder = RecordingLogger::new();
        let mut generator = Fibonacci::with_logger(&recorder);

        generator.generate(2);

        assert_eq!(
            recorder.entries(),
            vec![
                LogEntry::new(GENERATE, ["2"]),
                LogEntry::new(GENERATE, ["2 was not yet cached."]),
                LogEntry::new(GENERATE, ["1"]),
                LogEntry::new(GENERATE, ["1 was already cached."]),
                LogEntry::new(GENERATE, ["0"]),
                LogEntry::new(GENERATE, ["0 was already cached."]),
            ]
        );
    }

    #[test]
    fn test_second_request_is_a_hit() {
        let recorder = Rc::new(RecordingLogger::new());
        let mut generator = Fibonacci::with_logger(Rc::clone(&recorder));

        generator.generate(7);
        assert!(recorder.contains("7 was not yet cached."));
        recorder.clear();

        generator.generate(7);
        assert_eq!(recorder.len(), 2);
        assert!(recorder.contains("7 was already cached."));
    }

    #[test]
    fn test_disabled_logger_sees_nothing() {
        let logger = SwitchableLogger::new(RecordingLogger::new());
        logger.disable();
        let mut generator = Fibonacci::with_logger(&logger);

        generator.generate(5);

        assert!(logger.inner().is_empty());
    }

    #[test]
    fn test_logger_accessors() {
        let mut generator = Fibonacci::with_logger(SwitchableLogger::new(RecordingLogger::new()));
        generator.logger_mut().disable();
        generator.generate(4);

        let logger = generator.into_logger();
        assert!(!logger.is_enabled());
        assert!(logger.into_inner().is_empty());
    }

    #[test]
    fn test_buffered_logger_flushes_through_generator() {
        let spy = Spy::new();
        let mut generator =
            Fibonacci::with_logger(BufferedLogger::new(|logs: Vec<LogEntry>| spy.record(logs)));

        generator.generate(3);
        assert!(!spy.called());

        generator.logger().send_logs();

        assert_eq!(spy.call_count(), 1);
        let sent = spy.call(0).unwrap_or_default();
        // calls at 3, 2, 1, 0 and then 1 again, two entries each
        assert_eq!(sent.len(), 10);
        assert!(generator.logger().pending().is_empty());
    }
}
