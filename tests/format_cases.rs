use serde::Deserialize;
use slider_format::{FormatOptions, FormatSpec};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct TestCase {
    value: f64,
    options: FormatOptions,
    expected: String,
    round_trip: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TestCases {
    cases: Vec<TestCase>,
}

fn run_test_case(case: &TestCase) -> Result<(), String> {
    let format = FormatSpec::new(case.options.clone())
        .map_err(|e| format!("Format options error: {e}"))?;

    let result = format
        .to(case.value)
        .map_err(|e| format!("Format error for {}: {e}", case.value))?;
    if result != case.expected {
        return Err(format!(
            "\n✗ Mismatch for value: {}\nOptions:    {:?}\nExpected:   \"{}\"\nActual:     \"{}\"",
            case.value, case.options, case.expected, result
        ));
    }

    if let Some(expected_value) = case.round_trip {
        let parsed = format
            .from(&result)
            .map_err(|e| format!("Parse error for \"{result}\": {e}"))?;
        if (parsed - expected_value).abs() > 1e-9 {
            return Err(format!(
                "\n✗ Round trip of \"{result}\" gave {parsed}, expected {expected_value}"
            ));
        }
    }

    Ok(())
}

#[test]
fn test_format_cases() {
    let toml_path: PathBuf = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("format-cases.toml");

    let toml_content = fs::read_to_string(&toml_path)
        .unwrap_or_else(|e| panic!("Failed to read TOML file {}: {}", toml_path.display(), e));

    let test_suite: TestCases = toml::from_str(&toml_content)
        .unwrap_or_else(|e| panic!("Failed to parse TOML file {}: {}", toml_path.display(), e));

    let failures: Vec<String> = test_suite
        .cases
        .iter()
        .enumerate()
        .filter_map(|(i, case)| {
            run_test_case(case)
                .err()
                .map(|msg| format!("[Case {}] {}", i + 1, msg))
        })
        .collect();

    assert!(
        failures.is_empty(),
        "{} of {} cases failed:{}",
        failures.len(),
        test_suite.cases.len(),
        failures.join("\n")
    );
}
