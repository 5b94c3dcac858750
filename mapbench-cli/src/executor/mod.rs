//! Benchmark Executor
//!
//! Runs the workloads and turns the measurements into a report.
//!
//! ## Pipeline Overview
//!
//! ```text
//! ExecutionConfig (defaults ← mapbench.toml ← CLI)
//!       │
//!       ▼
//! ┌─────────────┐
//! │  execution  │  Generate input, time each strategy, check equivalence
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │   report    │  Build Report with metadata and speedups
//! └──────┬──────┘
//!        │
//!        ▼
//! ┌─────────────┐
//! │ formatting  │  Human-readable output
//! └─────────────┘
//! ```

mod execution;
mod formatting;
mod metadata;
mod report;

pub use execution::{ExecutionConfig, ExecutionResult, Executor};
pub use formatting::{format_alphabet, format_human_output, format_timing_line};
pub use report::build_report;
