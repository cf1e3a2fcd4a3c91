//! # Memoized Fibonacci Library
//!
//! This library computes Fibonacci numbers on demand with a memoizing generator, and ships the
//! small set of loggers and test doubles needed to observe that generator from tests. Values are
//! arbitrary precision (`BigUint`), so no index overflows.
//!
//! ## Key Features
//! - **Memoization**: Every value the generator computes is cached, so repeated requests are O(1)
//!   and a first request at a fresh index costs O(n).
//! - **Injected Logging**: The generator reports its cache hits and misses to a logger handed to it
//!   at construction instead of reaching for a process-wide singleton.
//! - **Test Doubles**: Spies and a recording logger let tests assert on interactions without
//!   touching shared state.
//!
//! ## Overview of Modules
//!
//! ### `fibonacci`
//! `Fibonacci` generates the value at index `n`, filling the cache recursively for every smaller
//! index it is missing. `FibonacciError` is returned by `try_generate` for indices that cannot be
//! used, such as negative ones.
//!
//! ### `logger`
//! The `Logger` contract (`log(message, info...)`) and its implementations:
//! - `NullLogger` discards everything.
//! - `SwitchableLogger` can be enabled and disabled.
//! - `BufferedLogger` queues entries and delivers them to a `LogSink` on `send_logs`, clearing
//!   the buffer afterwards.
//! - `TracingLogger` forwards to `tracing` at `DEBUG` level.
//!
//! ### `spy`
//! `Spy` records the argument of every call; `RecordingLogger` is a `Logger` built on it.
//!
//! ### `math`
//! Matrix exponentiation computing `F(n)` directly in O(log n) multiplications, without a cache.
//! Used to cross-check the generator.
//!
//! ## Usage Example
//! ```rust
//! use fibonacci_memo::{Fibonacci, RecordingLogger};
//! use num_bigint::BigUint;
//!
//! let logger = RecordingLogger::new();
//! let mut generator = Fibonacci::with_logger(&logger);
//! assert_eq!(
//!     generator.generate(99),
//!     BigUint::parse_bytes(b"218922995834555169026", 10).unwrap()
//! );
//! assert!(logger.contains("99 was not yet cached."));
//! ```

pub mod fibonacci;
pub mod logger;
pub mod math;
pub mod spy;

pub use fibonacci::{Fibonacci, FibonacciError};
pub use logger::{
    BufferedLogger, LogEntry, LogSink, Logger, NullLogger, SwitchableLogger, TracingLogger,
};
pub use spy::{RecordingLogger, Spy};
