#![warn(missing_docs)]
//! # mapbench
//!
//! Times two ways of building the same elementwise mapping over a large
//! sequence:
//! - **Explicit accumulation**: a `for` loop pushing onto an empty `Vec`
//! - **Declarative transform**: `iter().map(f).collect()`
//!
//! Two workloads are measured, random characters mapped to their code points
//! and consecutive integers mapped to their squares. Each strategy is timed
//! once per workload with a monotonic clock, and the outputs are checked for
//! equality outside the timed region.
//!
//! ## Quick Start
//!
//! ```ignore
//! use mapbench::prelude::*;
//!
//! let input = [0u64, 1, 2, 3];
//! let (squares, elapsed) = time_operation(|| map_elementwise(input, square, Strategy::Collect));
//! assert_eq!(squares, vec![0, 1, 4, 9]);
//! println!("list comp ran in {:.6} s", elapsed.as_secs_f64());
//! ```

// Re-export core types
pub use mapbench_core::{
    DEFAULT_ALPHABET, DEFAULT_CHARACTER_COUNT, DEFAULT_INTEGER_COUNT, MAX_INTEGER_COUNT,
    SequenceError, Strategy, Timer, TimingSample, Workload, char_code, generate_random_sequence,
    integer_sequence, map_accumulate, map_collect, map_elementwise, square, time_operation,
};

// Re-export report types
pub use mapbench_report::{
    EquivalenceCheck, OutputFormat, Report, StrategyComparison, generate_csv_report,
    generate_json_report, parse_json_report,
};

// Re-export the runner
pub use mapbench_cli::{
    ExecutionConfig, ExecutionResult, Executor, MapbenchConfig, build_report,
    format_human_output,
};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Strategy, Workload, char_code, generate_random_sequence, map_elementwise, square,
        time_operation,
    };
}

/// Run the mapbench CLI harness.
pub use mapbench_cli::run;
