//! Shared test utilities for learnhub.

pub mod fixtures;

/// Table-driven test case structure.
#[derive(Debug, Clone)]
pub struct TestCase<I, E> {
    pub name: &'static str,
    pub input: I,
    pub expected: E,
}

impl<I, E> TestCase<I, E> {
    pub const fn new(name: &'static str, input: I, expected: E) -> Self {
        Self {
            name,
            input,
            expected,
        }
    }
}

/// Run every case, collecting all mismatches instead of stopping at the first.
pub fn run_table_tests<I, E, F>(cases: Vec<TestCase<I, E>>, test_fn: F) -> Result<(), String>
where
    I: std::fmt::Debug,
    E: std::fmt::Debug + PartialEq,
    F: Fn(&I) -> E,
{
    let mut failures = Vec::new();
    for case in &cases {
        let actual = test_fn(&case.input);
        if actual == case.expected {
            println!("[TEST] PASSED: {}", case.name);
        } else {
            println!("[TEST] FAILED: {} input={:?}", case.name, case.input);
            failures.push(format!(
                "{}: expected {:?}, got {:?}",
                case.name, case.expected, actual
            ));
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} cases failed:\n{}",
            failures.len(),
            cases.len(),
            failures.join("\n")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_runner_reports_every_failure() {
        let cases = vec![
            TestCase::new("double one", 1, 2),
            TestCase::new("double two", 2, 5),
            TestCase::new("double three", 3, 7),
        ];
        let err = run_table_tests(cases, |n| n * 2).unwrap_err();
        assert!(err.starts_with("2 of 3 cases failed"));
        assert!(err.contains("double two"));
        assert!(err.contains("double three"));
    }
}
