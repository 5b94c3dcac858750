#![warn(missing_docs)]
//! mapbench Report - Result Model and Machine-Readable Output
//!
//! Generates the non-terminal output formats:
//! - JSON (full report, machine-readable)
//! - CSV (one row per timing sample)
//!
//! Human-readable output lives with the CLI, since it doubles as the
//! benchmark's primary console output.

mod csv;
mod json;
mod report;

pub use csv::generate_csv_report;
pub use json::{generate_json_report, parse_json_report};
pub use report::{
    EquivalenceCheck, Report, ReportConfig, ReportMeta, ReportSummary, SCHEMA_VERSION,
    StrategyComparison, SystemInfo,
};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Plain timing lines for the terminal
    #[default]
    Human,
    /// JSON with full schema
    Json,
    /// CSV for spreadsheets
    Csv,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(OutputFormat::Human),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!("human".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("TEXT".parse::<OutputFormat>(), Ok(OutputFormat::Human));
        assert_eq!("json".parse::<OutputFormat>(), Ok(OutputFormat::Json));
        assert_eq!("Csv".parse::<OutputFormat>(), Ok(OutputFormat::Csv));
        assert!("html".parse::<OutputFormat>().is_err());
    }
}
