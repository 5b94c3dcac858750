//! Report Data Structures

use chrono::{DateTime, Utc};
use mapbench_core::{Strategy, TimingSample, Workload};
use serde::{Deserialize, Serialize};

/// Version of the serialized report layout
pub const SCHEMA_VERSION: u32 = 1;

/// Complete benchmark report
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    /// Version, timestamp, host and configuration
    pub meta: ReportMeta,
    /// Alphabet the character workload drew from
    pub alphabet: Vec<char>,
    /// Timing samples in execution order
    pub samples: Vec<TimingSample>,
    /// One check per workload; empty when verification was off
    pub equivalence: Vec<EquivalenceCheck>,
    /// `list comp` against `for loop`, one per workload
    pub comparisons: Vec<StrategyComparison>,
    /// Totals over the whole run
    pub summary: ReportSummary,
}

impl Report {
    /// Samples recorded for one workload, in execution order
    pub fn samples_for(&self, workload: Workload) -> impl Iterator<Item = &TimingSample> {
        self.samples.iter().filter(move |s| s.workload == workload)
    }
}

/// Report metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportMeta {
    /// Layout version, see [`SCHEMA_VERSION`]
    pub schema_version: u32,
    /// mapbench version that produced the report
    pub version: String,
    /// When the report was built (UTC)
    pub timestamp: DateTime<Utc>,
    /// Host the run executed on
    pub system: SystemInfo,
    /// Effective configuration after layering
    pub config: ReportConfig,
}

/// Execution configuration captured in report metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Alphabet as a string, one character per entry
    pub alphabet: String,
    /// Random characters mapped by the character workload
    pub character_count: usize,
    /// Length of the integer sequence
    pub integer_count: usize,
    /// Generator seed; `None` means entropy
    pub seed: Option<u64>,
    /// Whether outputs were compared after timing
    pub verify_equivalence: bool,
}

/// System information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemInfo {
    /// Operating system name
    pub os: String,
    /// CPU architecture
    pub arch: String,
    /// CPU model name, `Unknown` when unavailable
    pub cpu: String,
    /// Logical core count
    pub cpu_cores: u32,
}

/// Whether both strategies produced the same output for a workload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EquivalenceCheck {
    /// Workload whose outputs were compared
    pub workload: Workload,
    /// Length of each compared output
    pub elements: usize,
    /// True when all strategies matched element for element
    pub equivalent: bool,
}

/// Relative speed of two strategies on the same workload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrategyComparison {
    /// Workload both samples came from
    pub workload: Workload,
    /// Strategy measured against
    pub baseline: Strategy,
    /// Strategy being compared
    pub candidate: Strategy,
    /// Baseline elapsed time in nanoseconds
    pub baseline_ns: u64,
    /// Candidate elapsed time in nanoseconds
    pub candidate_ns: u64,
    /// Baseline time divided by candidate time (>1.0 = candidate faster).
    /// `None` when the candidate measured zero and the baseline did not.
    pub speedup: Option<f64>,
}

impl StrategyComparison {
    /// Compare `candidate` against `baseline`; both must come from the same workload
    pub fn from_samples(baseline: &TimingSample, candidate: &TimingSample) -> Self {
        let speedup = match (baseline.elapsed_ns, candidate.elapsed_ns) {
            (0, 0) => Some(1.0),
            (_, 0) => None,
            (b, c) => Some(b as f64 / c as f64),
        };
        Self {
            workload: baseline.workload,
            baseline: baseline.strategy,
            candidate: candidate.strategy,
            baseline_ns: baseline.elapsed_ns,
            candidate_ns: candidate.elapsed_ns,
            speedup,
        }
    }
}

/// Report summary
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of timing samples
    pub total_samples: usize,
    /// Workloads whose strategies disagreed
    pub equivalence_failures: usize,
    /// Wall-clock time of the whole run in milliseconds
    pub total_duration_ms: f64,
}


#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use std::time::Duration;

    /// Small report with both workloads timed
    pub(crate) fn sample_report() -> Report {
        use mapbench_core::Strategy::{Accumulate, Collect};
        use mapbench_core::Workload::{Characters, Integers};

        let samples = vec![
            TimingSample::new(Characters, Accumulate, 5, Duration::from_micros(120)),
            TimingSample::new(Characters, Collect, 5, Duration::from_micros(40)),
            TimingSample::new(Integers, Accumulate, 4, Duration::from_nanos(1_234_567)),
            TimingSample::new(Integers, Collect, 4, Duration::from_nanos(654_321)),
        ];
        let comparisons = vec![
            StrategyComparison::from_samples(&samples[0], &samples[1]),
            StrategyComparison::from_samples(&samples[2], &samples[3]),
        ];
        Report {
            meta: ReportMeta {
                schema_version: SCHEMA_VERSION,
                version: "0.1.0".to_string(),
                timestamp: Utc::now(),
                system: SystemInfo {
                    os: "linux".to_string(),
                    arch: "x86_64".to_string(),
                    cpu: "Unknown".to_string(),
                    cpu_cores: 1,
                },
                config: ReportConfig {
                    alphabet: "abcdefghijklmn".to_string(),
                    character_count: 5,
                    integer_count: 4,
                    seed: Some(7),
                    verify_equivalence: true,
                },
            },
            alphabet: "abcdefghijklmn".chars().collect(),
            equivalence: vec![
                EquivalenceCheck {
                    workload: Characters,
                    elements: 5,
                    equivalent: true,
                },
                EquivalenceCheck {
                    workload: Integers,
                    elements: 4,
                    equivalent: true,
                },
            ],
            summary: ReportSummary {
                total_samples: samples.len(),
                equivalence_failures: 0,
                total_duration_ms: 2.0,
            },
            samples,
            comparisons,
        }
    }
}
