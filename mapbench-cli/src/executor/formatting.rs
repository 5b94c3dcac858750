//! Output Formatting
//!
//! Human-readable output: the alphabet on the first line, then one line per
//! timing sample in execution order, e.g.
//!
//! ```text
//! ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n']
//! for loop ran in 0.123456 s
//! list comp ran in 0.098765 s
//! ```

use mapbench_core::TimingSample;
use mapbench_report::Report;

/// Format a report for terminal display
pub fn format_human_output(report: &Report) -> String {
    let mut output = format_alphabet(&report.alphabet);
    output.push('\n');
    for sample in &report.samples {
        output.push_str(&format_timing_line(sample));
        output.push('\n');
    }
    output
}

/// Bracketed list of quoted characters, e.g. `['a', "'", '\x7f']`
pub fn format_alphabet(alphabet: &[char]) -> String {
    let quoted: Vec<String> = alphabet.iter().map(|&c| quote_char(c)).collect();
    format!("[{}]", quoted.join(", "))
}

/// Single quotes unless the character is itself a single quote.
/// Control and separator characters are written as hex escapes.
fn quote_char(c: char) -> String {
    let body = match c {
        '\\' => "\\\\".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        '\'' => return "\"'\"".to_string(),
        c if c.is_control() || (c.is_whitespace() && c != ' ') => match c as u32 {
            code @ 0..=0xff => format!("\\x{:02x}", code),
            code @ 0x100..=0xffff => format!("\\u{:04x}", code),
            code => format!("\\U{:08x}", code),
        },
        c => c.to_string(),
    };
    format!("'{}'", body)
}

/// `<label> ran in <seconds, 6 decimals> s`
pub fn format_timing_line(sample: &TimingSample) -> String {
    format!("{} ran in {:.6} s", sample.label(), sample.elapsed_secs())
}
