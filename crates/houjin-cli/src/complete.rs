//! # Complete Subcommand
//!
//! Turns 12-digit bodies into full corporate numbers by prefixing the
//! computed check digit. Bodies must be written out in full, leading zeros
//! included (`000020100005`, not `20100005`).

use std::io::Write;

use anyhow::{bail, Result};
use clap::Args;
use serde::Serialize;

use houjin_core::{CorporateNumber, BODY_DIGITS};

use crate::output::{write_json, OutputFormat};
use crate::{digits_arg, EXIT_MALFORMED, EXIT_OK};

/// Arguments for the `houjin complete` subcommand.
#[derive(Args, Debug)]
pub struct CompleteArgs {
    /// 12-digit bodies (`-` separators allowed).
    #[arg(value_name = "BODY", required = true)]
    pub bodies: Vec<String>,
}

/// Completed number, or the reason the body was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompleteResult {
    /// The argument as given.
    pub input: String,
    /// Full 13-digit corporate number.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<CorporateNumber>,
    /// Rejection reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Complete a single textual body.
///
/// # Errors
///
/// Fails if the body is not exactly 12 digits once separators are removed.
pub fn complete_body(input: &str) -> Result<CorporateNumber> {
    let digits = digits_arg(input)?;
    if digits.len() != BODY_DIGITS {
        bail!(
            "corporate number body must be {BODY_DIGITS} digits; got {} digits",
            digits.len()
        );
    }
    let body: u64 = digits.parse()?;
    Ok(CorporateNumber::from_body(body)?)
}

/// Execute the complete subcommand.
///
/// Returns exit code: 0 on success, 2 if any body was malformed.
pub fn run_complete<W: Write>(
    args: &CompleteArgs,
    format: OutputFormat,
    out: &mut W,
) -> Result<u8> {
    let results: Vec<CompleteResult> = args
        .bodies
        .iter()
        .map(|input| match complete_body(input) {
            Ok(number) => {
                tracing::debug!(input = %input, %number, "completed body");
                CompleteResult {
                    input: input.clone(),
                    number: Some(number),
                    error: None,
                }
            }
            Err(e) => {
                tracing::warn!(input = %input, error = %e, "cannot complete body");
                CompleteResult {
                    input: input.clone(),
                    number: None,
                    error: Some(format!("{e:#}")),
                }
            }
        })
        .collect();

    match format {
        OutputFormat::Json => write_json(out, &results)?,
        OutputFormat::Text => {
            for result in &results {
                match (&result.number, &result.error) {
                    (Some(number), _) => writeln!(out, "{number}")?,
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
    fn completes_body_with_leading_zeros() {
        let number = complete_body("000020100005").unwrap();
        assert_eq!(number.as_u64(), 7000020100005);
    }

    #[test]
    fn completes_separated_body() {
        let number = complete_body("0700-0103-2626").unwrap();
        assert_eq!(number.as_u64(), 5070001032626);
    }

    #[test]
    fn rejects_short_body() {
        let err = complete_body("20100005").unwrap_err();
        assert_eq!(
            err.to_string(),
            "corporate number body must be 12 digits; got 8 digits"
        );
    }

    #[test]
    fn rejects_overlong_body_by_length() {
        let err = complete_body("123456789012345678901234").unwrap_err();
        assert_eq!(
            err.to_string(),
            "corporate number body must be 12 digits; got 24 digits"
        );
    }

    #[test]
    fn rejects_non_numeric_body() {
        let err = complete_body("0000201000O5").unwrap_err();
        assert!(err.to_string().contains("only digits"));
    }

    #[test]
    fn run_text_output() {
        let args = CompleteArgs {
            bodies: vec!["010401089234".to_string(), "000020102024".to_string()],
        };
        let mut out = Vec::new();
        let code = run_complete(&args, OutputFormat::Text, &mut out).unwrap();
        assert_eq!(code, EXIT_OK);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1010401089234\n9000020102024\n"
        );
    }

    #[test]
    fn run_json_serializes_number_as_string() {
        let args = CompleteArgs {
            bodies: vec!["070001032626".to_string(), "1".to_string()],
        };
        let mut out = Vec::new();
        let code = run_complete(&args, OutputFormat::Json, &mut out).unwrap();
        assert_eq!(code, EXIT_MALFORMED);
        let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed[0]["number"], "5070001032626");
        assert!(parsed[1].get("number").is_none());
        assert!(parsed[1]["error"].as_str().unwrap().contains("got 1 digits"));
    }
}
