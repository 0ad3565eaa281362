//! # Digit Subcommand
//!
//! Prints the check digit implied by the body of each 13-digit number. The
//! leading digit of the input is ignored, so this also answers "what should
//! the first digit have been?".

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use houjin_core::check_digit_for_body;

use crate::output::{write_json, OutputFormat};
use crate::{number_body_arg, EXIT_MALFORMED, EXIT_OK};

/// Arguments for the `houjin digit` subcommand.
#[derive(Args, Debug)]
pub struct DigitArgs {
    /// 13-digit corporate numbers (`-` separators allowed).
    #[arg(value_name = "NUMBER", required = true)]
    pub numbers: Vec<String>,
}

/// Computed digit, or the reason none could be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DigitResult {
    /// The argument as given.
    pub input: String,
    /// Computed check digit.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub check_digit: Option<u8>,
    /// Format error, if the input was unusable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Compute the check digit for one argument.
pub fn compute(input: &str) -> DigitResult {
    // Read the body from the text so a leading zero still counts as a digit.
    let outcome = number_body_arg(input).and_then(check_digit_for_body);
    let (check_digit, error) = match outcome {
        Ok(digit) => {
            tracing::debug!(input, digit, "computed check digit");
            (Some(digit), None)
        }
        Err(e) => {
            tracing::warn!(input, error = %e, "cannot compute check digit");
            (None, Some(e.to_string()))
        }
    };
    DigitResult {
        input: input.to_string(),
        check_digit,
        error,
    }
}

/// Execute the digit subcommand.
///
/// Returns exit code: 0 on success, 2 if any argument was malformed.
pub fn run_digit<W: Write>(args: &DigitArgs, format: OutputFormat, out: &mut W) -> Result<u8> {
    let results: Vec<DigitResult> = args.numbers.iter().map(|n| compute(n)).collect();

    match format {
        OutputFormat::Json => write_json(out, &results)?,
        OutputFormat::Text => {
            for result in &results {
                match (&result.check_digit, &result.error) {
                    (Some(digit), _) => writeln!(out, "{} {digit}", result.input)?,
                    (None, Some(error)) => writeln!(out, "ERROR {}: {error}", result.input)?,
                    (None, None) => {}
                }
            }
        }
    }

    if results.iter().any(|r| r.error.is_some()) {
        Ok(EXIT_MALFORMED)
    } else {
        Ok(EXIT_OK)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn computes_digit() {
        let result = compute("9000020102024");
        assert_eq!(result.check_digit, Some(9));
        assert!(result.error.is_none());
    }

    #[test]
    fn ignores_leading_digit() {
        assert_eq!(compute("4070001032626").check_digit, Some(5));
    }

    #[test]
    fn leading_zero_counts_as_a_digit() {
        let result = compute("0070001032626");
        assert_eq!(result.check_digit, Some(5));
        assert!(result.error.is_none());
    }

    #[test]
    fn overlong_input_reports_digit_count() {
        let result = compute("123456789012345678901234");
        assert_eq!(result.check_digit, None);
        assert_eq!(
            result.error.as_deref(),
            Some("corporate number must be 13 digits; got 24 digits")
        );
    }

    #[test]
    fn reports_digit_count() {
        let result = compute("1234");
        assert_eq!(result.check_digit, None);
        assert_eq!(
            result.error.as_deref(),
            Some("corporate number must be 13 digits; got 4 digits")
        );
    }

    #[test]
    fn run_text_output() {
        let args = DigitArgs {
            numbers: vec!["5070001032626".to_string(), "1010401089234".to_string()],
        };
        let mut out = Vec::new();
        let code = run_digit(&args, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(code, EXIT_OK);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "5070001032626 5\n1010401089234 1\n"
        );
    }

    #[test]
    fn run_json_with_error() {
        let args = DigitArgs {
            numbers: vec!["7000020100005".to_string(), "abc".to_string()],
        };
        let mut out = Vec::new();
        let code = run_digit(&args, OutputFormat::Json, &mut out).unwrap();
        assert_eq!(code, EXIT_MALFORMED);
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["check_digit"], 7);
        assert!(parsed[0].get("error").is_none());
        assert!(parsed[1]["error"].as_str().unwrap().contains("only digits"));
    }
}
