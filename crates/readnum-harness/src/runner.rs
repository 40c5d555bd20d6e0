//! Fixture execution engine.

use std::fmt::Display;
use std::io::Cursor;

use readnum_core::scalar::Scalar;
use readnum_core::{LineBuf, ReadOutcome, read_line, read_scalar_from};

use crate::diff;
use crate::fixtures::{FixtureCase, FixtureSet};
use crate::verify::VerificationResult;

/// Value shown for a line read that produced nothing.
pub const NO_DATA: &str = "<no data>";

/// Output of replaying one fixture case.
#[derive(Debug, Clone)]
pub struct CaseRun {
    /// Returned value, rendered as text.
    pub value: String,
    /// Diagnostic lines captured from the side channel.
    pub diagnostics: Vec<String>,
}

/// Runs fixture sets and collects verification results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

impl TestRunner {
    /// Create a new test runner.
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all cases in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Vec<VerificationResult> {
        fixture_set
            .cases
            .iter()
            .map(|case| {
                let expected = render(&case.expected_value, &case.expected_diagnostics);
                match execute_case(case) {
                    Ok(run) => {
                        let actual = render(&run.value, &run.diagnostics);
                        let passed = actual == expected;
                        VerificationResult {
                            case_name: case.name.clone(),
                            reference: case.reference.clone(),
                            passed,
                            diff: (!passed).then(|| diff::render_diff(&expected, &actual)),
                            expected,
                            actual,
                        }
                    }
                    Err(err) => {
                        let actual = format!("unsupported:{err}");
                        VerificationResult {
                            case_name: case.name.clone(),
                            reference: case.reference.clone(),
                            passed: false,
                            diff: Some(diff::render_diff(&expected, &actual)),
                            expected,
                            actual,
                        }
                    }
                }
            })
            .collect()
    }
}

/// One-line rendering of a case outcome: the value, then any diagnostics.
fn render(value: &str, diagnostics: &[String]) -> String {
    if diagnostics.is_empty() {
        value.to_string()
    } else {
        format!("{value} [{}]", diagnostics.join(" | "))
    }
}

fn run_scalar<T: Scalar + Display>(input: &str) -> CaseRun {
    let mut stream = Cursor::new(input.as_bytes().to_vec());
    let mut diag = Vec::new();
    let value: T = read_scalar_from(&mut stream, &mut diag);
    CaseRun {
        value: value.to_string(),
        diagnostics: String::from_utf8_lossy(&diag)
            .lines()
            .map(str::to_owned)
            .collect(),
    }
}

fn run_read_line(input: &str) -> CaseRun {
    let mut stream = Cursor::new(input.as_bytes().to_vec());
    let mut buf = LineBuf::new();
    let value = match read_line(&mut stream, &mut buf) {
        ReadOutcome::Line(_) => String::from_utf8_lossy(buf.contents()).into_owned(),
        ReadOutcome::NoData => String::from(NO_DATA),
    };
    CaseRun {
        value,
        diagnostics: Vec::new(),
    }
}

/// Replay one case against the entry point it names.
pub fn execute_case(case: &FixtureCase) -> Result<CaseRun, String> {
    let run = match case.function.as_str() {
        "read_i16" => run_scalar::<i16>(&case.input),
        "read_u16" => run_scalar::<u16>(&case.input),
        "read_i32" => run_scalar::<i32>(&case.input),
        "read_u32" => run_scalar::<u32>(&case.input),
        "read_i64" => run_scalar::<i64>(&case.input),
        "read_u64" => run_scalar::<u64>(&case.input),
        "read_i128" => run_scalar::<i128>(&case.input),
        "read_u128" => run_scalar::<u128>(&case.input),
        "read_f32" => run_scalar::<f32>(&case.input),
        "read_f64" => run_scalar::<f64>(&case.input),
        "read_line" => run_read_line(&case.input),
        other => return Err(format!("unknown function '{other}'")),
    };
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case(function: &str, input: &str, expected: &str, diags: &[&str]) -> FixtureCase {
        FixtureCase {
            name: format!("{function}-case"),
            function: String::from(function),
            reference: String::new(),
            input: String::from(input),
            expected_value: String::from(expected),
            expected_diagnostics: diags.iter().map(|d| String::from(*d)).collect(),
        }
    }

    #[test]
    fn test_runner_passes_valid_scalar_case() {
        let set = FixtureSet {
            version: String::from("1"),
            family: String::from("scalar"),
            cases: vec![case("read_i32", "42\n", "42", &[])],
        };
        let results = TestRunner::new("unit").run(&set);
        assert!(results[0].passed, "{:?}", results[0].diff);
    }

    #[test]
    fn test_runner_captures_diagnostics() {
        let set = FixtureSet {
            version: String::from("1"),
            family: String::from("scalar"),
            cases: vec![case("read_u32", "-5\n8\n", "8", &["Invalid input"])],
        };
        let results = TestRunner::new("unit").run(&set);
        assert!(results[0].passed, "{:?}", results[0].diff);
    }

    #[test]
    fn test_runner_flags_mismatch() {
        let set = FixtureSet {
            version: String::from("1"),
            family: String::from("scalar"),
            cases: vec![case("read_i32", "42\n", "41", &[])],
        };
        let results = TestRunner::new("unit").run(&set);
        assert!(!results[0].passed);
        assert!(results[0].diff.is_some());
    }

    #[test]
    fn test_runner_unknown_function() {
        let set = FixtureSet {
            version: String::from("1"),
            family: String::from("scalar"),
            cases: vec![case("read_bogus", "", "", &[])],
        };
        let results = TestRunner::new("unit").run(&set);
        assert!(!results[0].passed);
        assert!(results[0].actual.starts_with("unsupported:"));
    }

    #[test]
    fn test_read_line_case_no_data() {
        let run = execute_case(&case("read_line", "", NO_DATA, &[])).unwrap();
        assert_eq!(run.value, NO_DATA);
    }
}
