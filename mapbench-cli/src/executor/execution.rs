//! Benchmark Execution
//!
//! Runs every workload under every strategy, in a fixed order, on the
//! calling thread.
//!
//! ## Data Flow
//!
//! ```text
//!   ExecutionConfig
//!        │
//!        ▼
//! ┌──────────────────┐
//! │    Executor      │  Generate input → time Accumulate → time Collect
//! └────────┬─────────┘     (per workload: characters, then integers)
//!          │
//!          ▼
//!  ExecutionResult (alphabet, timing samples, equivalence checks)
//! ```
//!
//! Output equality is checked after both strategies of a workload have been
//! timed, so the comparison never lands inside a measured region.

use indicatif::{ProgressBar, ProgressStyle};
use mapbench_core::{
    DEFAULT_ALPHABET, DEFAULT_CHARACTER_COUNT, DEFAULT_INTEGER_COUNT, MAX_INTEGER_COUNT,
    SequenceError, Strategy, TimingSample, Workload, char_code, generate_random_sequence,
    integer_sequence, map_elementwise, square, time_operation,
};
use mapbench_report::EquivalenceCheck;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::Instant;

/// Configuration for benchmark execution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionConfig {
    /// Characters the character workload draws from
    pub alphabet: Vec<char>,
    /// Number of random characters to map
    pub character_count: usize,
    /// Length of the integer sequence to map
    pub integer_count: usize,
    /// Seed for the random generator (entropy when `None`)
    pub seed: Option<u64>,
    /// Compare the strategies' outputs after timing
    pub verify_equivalence: bool,
}

impl Default for ExecutionConfig {
    fn default() -> Self {
        Self {
            alphabet: DEFAULT_ALPHABET.chars().collect(),
            character_count: DEFAULT_CHARACTER_COUNT,
            integer_count: DEFAULT_INTEGER_COUNT,
            seed: None,
            verify_equivalence: true,
        }
    }
}

impl ExecutionConfig {
    /// Reject configurations that would fail part-way through a run.
    pub fn validate(&self) -> Result<(), SequenceError> {
        if self.alphabet.is_empty() && self.character_count > 0 {
            return Err(SequenceError::InvalidArgument(format!(
                "cannot draw {} characters from an empty alphabet",
                self.character_count
            )));
        }
        if self.integer_count as u64 > MAX_INTEGER_COUNT {
            return Err(SequenceError::InvalidArgument(format!(
                "integer count {} exceeds {}",
                self.integer_count, MAX_INTEGER_COUNT
            )));
        }
        Ok(())
    }
}

/// Everything measured during one run
#[derive(Debug)]
pub struct ExecutionResult {
    /// Alphabet the character input was drawn from
    pub alphabet: Vec<char>,
    /// Timing samples in execution order
    pub samples: Vec<TimingSample>,
    /// One entry per workload when verification is enabled
    pub equivalence: Vec<EquivalenceCheck>,
    /// Wall-clock time of the whole run, input generation included
    pub duration_ns: u64,
}

impl ExecutionResult {
    /// Workloads whose strategies disagreed
    pub fn mismatches(&self) -> impl Iterator<Item = &EquivalenceCheck> {
        self.equivalence.iter().filter(|c| !c.equivalent)
    }
}

/// Runs the workloads (in-process, single-threaded)
pub struct Executor {
    config: ExecutionConfig,
    rng: StdRng,
    show_progress: bool,
}

impl Executor {
    /// Create an executor; the generator is seeded from `config.seed` when set
    pub fn new(config: ExecutionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            config,
            rng,
            show_progress: false,
        }
    }

    /// Draw a progress bar on stderr while running
    pub fn with_progress(mut self, show: bool) -> Self {
        self.show_progress = show;
        self
    }

    /// Run both workloads under both strategies
    pub fn execute(&mut self) -> Result<ExecutionResult, SequenceError> {
        self.config.validate()?;
        let start = Instant::now();

        let pb = self.progress_bar();
        let mut samples = Vec::with_capacity(Workload::ALL.len() * Strategy::ALL.len());
        let mut equivalence = Vec::with_capacity(Workload::ALL.len());

        // Characters → code points
        tracing::info!(
            count = self.config.character_count,
            alphabet = self.config.alphabet.len(),
            "running character workload"
        );
        let characters = generate_random_sequence(
            &self.config.alphabet,
            self.config.character_count,
            &mut self.rng,
        )?;
        let (timed, check) = self.run_workload(Workload::Characters, &characters, char_code, &pb);
        samples.extend(timed);
        equivalence.extend(check);
        drop(characters);

        // Integers → squares
        tracing::info!(count = self.config.integer_count, "running integer workload");
        let integers = integer_sequence(self.config.integer_count)?;
        let (timed, check) = self.run_workload(Workload::Integers, &integers, square, &pb);
        samples.extend(timed);
        equivalence.extend(check);

        pb.finish_and_clear();

        Ok(ExecutionResult {
            alphabet: self.config.alphabet.clone(),
            samples,
            equivalence,
            duration_ns: start.elapsed().as_nanos() as u64,
        })
    }

    /// Time every strategy over the same input, then compare their outputs
    fn run_workload<T, U, F>(
        &self,
        workload: Workload,
        input: &[T],
        f: F,
        pb: &ProgressBar,
    ) -> (Vec<TimingSample>, Option<EquivalenceCheck>)
    where
        T: Copy,
        U: PartialEq,
        F: Fn(T) -> U + Copy,
    {
        let mut samples = Vec::with_capacity(Strategy::ALL.len());
        let mut outputs: Vec<Vec<U>> = Vec::new();

        for strategy in Strategy::ALL {
            pb.set_message(format!("{} / {}", workload, strategy));

            let (output, elapsed) =
                time_operation(|| map_elementwise(input.iter().copied(), f, strategy));

            tracing::debug!(
                %workload,
                %strategy,
                elements = input.len(),
                elapsed_s = elapsed.as_secs_f64(),
                "strategy timed"
            );
            samples.push(TimingSample::new(workload, strategy, input.len(), elapsed));
            if self.config.verify_equivalence {
                outputs.push(output);
            }
            pb.inc(1);
        }

        let check = self.config.verify_equivalence.then(|| {
            let equivalent = outputs_agree(&outputs);
            if equivalent {
                tracing::debug!(%workload, "strategies produced identical output");
            } else {
                tracing::error!(%workload, "strategies produced different output");
            }
            EquivalenceCheck {
                workload,
                elements: input.len(),
                equivalent,
            }
        });

        (samples, check)
    }

    fn progress_bar(&self) -> ProgressBar {
        if !self.show_progress {
            return ProgressBar::hidden();
        }
        let pb = ProgressBar::new((Workload::ALL.len() * Strategy::ALL.len()) as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("#>-"),
        );
        pb
    }
}

/// True when every collected output equals the others, element for element
fn outputs_agree<U: PartialEq>(outputs: &[Vec<U>]) -> bool {
    outputs.windows(2).all(|pair| pair[0] == pair[1])
}
