//! # Check Subcommand
//!
//! Verifies the check digit of each 13-digit corporate number given on the
//! command line.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use serde::Serialize;

use houjin_core::{CorporateNumber, ValidationError};

use crate::output::{write_json, OutputFormat};
use crate::{EXIT_INVALID, EXIT_MALFORMED, EXIT_OK};

/// Arguments for the `houjin check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Corporate numbers to verify (13 digits, `-` separators allowed).
    #[arg(value_name = "NUMBER", required = true)]
    pub numbers: Vec<String>,
}

/// Verdict for one input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CheckStatus {
    /// The leading digit is the correct check digit.
    Valid,
    /// Well-formed, but the leading digit is wrong.
    Invalid {
        /// Check digit computed from the body.
        expected: u8,
        /// Leading digit present in the input.
        actual: u8,
    },
    /// Not a 13-digit number at all.
    Malformed {
        /// Why the input was rejected.
        error: String,
    },
}

/// One line of the check report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    /// The argument as given.
    pub input: String,
    /// Verdict.
    #[serde(flatten)]
    pub status: CheckStatus,
}

/// Aggregate result of `houjin check`.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    /// Per-input verdicts, in argument order.
    pub results: Vec<CheckResult>,
    /// Count of valid inputs.
    pub passed: usize,
    /// Count of well-formed inputs with a wrong check digit.
    pub failed: usize,
    /// Count of inputs that were not 13-digit numbers.
    pub malformed: usize,
}

impl CheckReport {
    /// Verify every input.
    pub fn build(inputs: &[String]) -> Self {
        let results: Vec<CheckResult> = inputs
            .iter()
            .map(|input| CheckResult {
                input: input.clone(),
                status: evaluate(input),
            })
            .collect();

        let (mut passed, mut failed, mut malformed) = (0, 0, 0);
        for result in &results {
            match result.status {
                CheckStatus::Valid => passed += 1,
                CheckStatus::Invalid { .. } => failed += 1,
                CheckStatus::Malformed { .. } => malformed += 1,
            }
        }

        Self {
            results,
            passed,
            failed,
            malformed,
        }
    }

    /// Process exit code: malformed input outranks a failed check.
    pub fn exit_code(&self) -> u8 {
        if self.malformed > 0 {
            EXIT_MALFORMED
        } else if self.failed > 0 {
            EXIT_INVALID
        } else {
            EXIT_OK
        }
    }
}

/// Verify a single textual corporate number.
pub fn evaluate(input: &str) -> CheckStatus {
    match input.parse::<CorporateNumber>() {
        Ok(number) => {
            tracing::debug!(%number, "check digit verified");
            CheckStatus::Valid
        }
        Err(ValidationError::CheckDigitMismatch {
            expected, actual, ..
        }) => {
            tracing::warn!(input, expected, actual, "check digit mismatch");
            CheckStatus::Invalid { expected, actual }
        }
        Err(e) => {
            tracing::warn!(input, error = %e, "malformed corporate number");
            CheckStatus::Malformed {
                error: e.to_string(),
            }
        }
    }
}

/// Execute the check subcommand.
///
/// Returns exit code: 0 if all numbers are valid, 1 if any failed
/// verification, 2 if any argument was malformed.
pub fn run_check<W: Write>(args: &CheckArgs, format: OutputFormat, out: &mut W) -> Result<u8> {
    let report = CheckReport::build(&args.numbers);

    match format {
        OutputFormat::Json => write_json(out, &report)?,
        OutputFormat::Text => {
            for result in &report.results {
                match &result.status {
                    CheckStatus::Valid => writeln!(out, "OK    {}", result.input)?,
                    CheckStatus::Invalid { expected, actual } => writeln!(
                        out,
                        "FAIL  {} (expected check digit {expected}, found {actual})",
                        result.input
                    )?,
                    CheckStatus::Malformed { error } => {
                        writeln!(out, "ERROR {}: {error}", result.input)?
                    }
                }
            }
            writeln!(
                out,
                "Checked {}: {} passed, {} failed, {} malformed",
                report.results.len(),
                report.passed,
                report.failed,
                report.malformed
            )?;
        }
    }

    Ok(report.exit_code())
}
