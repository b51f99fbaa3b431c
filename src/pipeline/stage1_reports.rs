use std::sync::OnceLock;

use regex::Regex;

// CM4, CM5+, CM3.5, CM3.5+, CM5+.5
const CIRCUIT_MERIT_PATTERN: &str = r"^CM([1-5])(?:\+(?:\.[0-9])?|\.[0-9]\+?)?$";
// 59, 59+, 4-9, 5x9, 3/5, 5 by 9
const READABILITY_STRENGTH_PATTERN: &str = r"^([1-5])(?:[-x/]| by )?[1-9]\+?$";

fn circuit_merit_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(CIRCUIT_MERIT_PATTERN)
            .unwrap_or_else(|error| panic!("circuit merit regex failed to compile: {error}"))
    })
}

fn readability_strength_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(READABILITY_STRENGTH_PATTERN)
            .unwrap_or_else(|error| panic!("readability regex failed to compile: {error}"))
    })
}

pub fn classify_report(report: &str) -> Option<u8> {
    circuit_merit(report).or_else(|| readability_strength(report))
}

fn circuit_merit(report: &str) -> Option<u8> {
    leading_digit(circuit_merit_regex(), report)
}

fn readability_strength(report: &str) -> Option<u8> {
    leading_digit(readability_strength_regex(), report)
}

fn leading_digit(re: &Regex, report: &str) -> Option<u8> {
    let caps = re.captures(report)?;
    caps.get(1)?.as_str().parse().ok()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_reports.rs"]
mod tests;
