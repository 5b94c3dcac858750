//! System Metadata Collection
//!
//! Collects system information for report metadata. Linux-specific data
//! (CPU model) degrades to "Unknown" on other platforms.

use super::execution::ExecutionConfig;
use chrono::Utc;
use mapbench_report::{ReportConfig, ReportMeta, SCHEMA_VERSION, SystemInfo};

/// Build report metadata including system info and the effective configuration
pub fn build_report_meta(config: &ExecutionConfig) -> ReportMeta {
    let system = SystemInfo {
        os: std::env::consts::OS.to_string(),
        arch: std::env::consts::ARCH.to_string(),
        cpu: get_cpu_model().unwrap_or_else(|| "Unknown".to_string()),
        cpu_cores: num_cpus(),
    };

    ReportMeta {
        schema_version: SCHEMA_VERSION,
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        system,
        config: ReportConfig {
            alphabet: config.alphabet.iter().collect(),
            character_count: config.character_count,
            integer_count: config.integer_count,
            seed: config.seed,
            verify_equivalence: config.verify_equivalence,
        },
    }
}

/// Get CPU model name from /proc/cpuinfo (Linux only)
fn get_cpu_model() -> Option<String> {
    #[cfg(target_os = "linux")]
    {
        std::fs::read_to_string("/proc/cpuinfo")
            .ok()
            .and_then(|content| {
                content
                    .lines()
                    .find(|l| l.starts_with("model name"))
                    .and_then(|l| l.split(':').nth(1))
                    .map(|s| s.trim().to_string())
            })
    }
    #[cfg(not(target_os = "linux"))]
    {
        None
    }
}

/// Get number of available CPU cores
fn num_cpus() -> u32 {
    std::thread::available_parallelism()
        .map(|n| n.get() as u32)
        .unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meta_captures_config() {
        let config = ExecutionConfig {
            seed: Some(9),
            ..ExecutionConfig::default()
        };
        let meta = build_report_meta(&config);
        assert_eq!(meta.schema_version, SCHEMA_VERSION);
        assert_eq!(meta.config.alphabet, "abcdefghijklmn");
        assert_eq!(meta.config.seed, Some(9));
        assert!(meta.system.cpu_cores >= 1);
        assert!(!meta.system.cpu.is_empty());
    }
}
