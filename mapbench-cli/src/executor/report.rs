//! Report Building
//!
//! Turns an `ExecutionResult` into the serializable `Report`: metadata,
//! samples, equivalence checks and one strategy comparison per workload
//! (declarative transform measured against explicit accumulation).

use super::execution::{ExecutionConfig, ExecutionResult};
use super::metadata::build_report_meta;
use mapbench_core::{Strategy, Workload};
use mapbench_report::{Report, ReportSummary, StrategyComparison};

/// Build a complete Report from an execution result
pub fn build_report(result: &ExecutionResult, config: &ExecutionConfig) -> Report {
    let comparisons: Vec<StrategyComparison> = Workload::ALL
        .iter()
        .filter_map(|&workload| {
            let find = |strategy: Strategy| {
                result
                    .samples
                    .iter()
                    .find(|s| s.workload == workload && s.strategy == strategy)
            };
            let baseline = find(Strategy::Accumulate)?;
            let candidate = find(Strategy::Collect)?;
            Some(StrategyComparison::from_samples(baseline, candidate))
        })
        .collect();

    for cmp in &comparisons {
        match cmp.speedup {
            Some(speedup) => tracing::info!(
                workload = %cmp.workload,
                "{} is {:.2}x the speed of {}",
                cmp.candidate,
                speedup,
                cmp.baseline
            ),
            None => tracing::info!(workload = %cmp.workload, "{} measured zero time", cmp.candidate),
        }
    }

    let summary = ReportSummary {
        total_samples: result.samples.len(),
        equivalence_failures: result.mismatches().count(),
        total_duration_ms: result.duration_ns as f64 / 1_000_000.0,
    };

    Report {
        meta: build_report_meta(config),
        alphabet: result.alphabet.clone(),
        samples: result.samples.clone(),
        equivalence: result.equivalence.clone(),
        comparisons,
        summary,
    }
}
