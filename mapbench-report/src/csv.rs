//! CSV Output

use crate::report::Report;

/// Generate a CSV table with one row per timing sample.
pub fn generate_csv_report(report: &Report) -> String {
    let mut output = String::from("workload,strategy,elements,elapsed_s\n");
    for sample in &report.samples {
        output.push_str(&format!(
            "{},{},{},{:.6}\n",
            sample.workload,
            sample.label(),
            sample.elements,
            sample.elapsed_secs()
        ));
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::fixtures::sample_report;

    #[test]
    fn test_csv_rows() {
        let csv = generate_csv_report(&sample_report());
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "workload,strategy,elements,elapsed_s");
        assert_eq!(lines[1], "characters,for loop,5,0.000120");
        assert_eq!(lines[4], "integers,list comp,4,0.000654");
    }
}
