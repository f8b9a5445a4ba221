//! Option token validation and canonical ordering
//!
//! A single left-to-right scan validates each option as it is reached. Every
//! accepted option is stored in a map keyed by [`OperationKind`], so a repeated
//! option simply overwrites the earlier entry. `-g` only raises a flag that is
//! folded into the format operation once the scan is complete. It is valid
//! whenever a `-f` token appears anywhere in the list, even one consumed as
//! another option's parameter.

use super::flag::Flag;
use super::operation::{CanonicalPipeline, FormatStyle, Operation, OperationKind};
use crate::error::UsageError;
use std::collections::BTreeMap;
use tracing::{debug, trace};

pub const PAD_WIDTH_MIN: i32 = 1;
pub const PAD_WIDTH_MAX: i32 = 100;
pub const TRIM_LENGTH_MIN: i32 = 0;
pub const TRIM_LENGTH_MAX: i32 = 100;

/// Either the canonical pipeline or the first reason the tokens were rejected.
pub type ValidationOutcome = Result<CanonicalPipeline, UsageError>;

/// Validate option tokens and order the resulting operations canonically.
///
/// `tokens` are the command line arguments without the trailing `FILE`.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> ValidationOutcome {
    let outcome = scan(tokens);
    match &outcome {
        Ok(pipeline) => debug!(operations = ?pipeline.kinds(), "options normalized"),
        Err(reason) => debug!(%reason, "options rejected"),
    }
    outcome
}

fn scan<S: AsRef<str>>(tokens: &[S]) -> ValidationOutcome {
    let mut by_kind: BTreeMap<OperationKind, Operation> = BTreeMap::new();
    let mut global = false;
    let mut seen_pad = false;
    let mut seen_trim = false;

    let format_token_present = tokens
        .iter()
        .any(|token| token.as_ref() == Flag::Format.token());

    let mut tokens = tokens.iter().map(|token| token.as_ref());
    while let Some(token) = tokens.next() {
        let flag =
            Flag::from_token(token).ok_or_else(|| UsageError::UnknownOption(token.to_string()))?;

        match flag {
            Flag::Pad if seen_trim => return Err(UsageError::PadTrimConflict),
            Flag::Trim if seen_pad => return Err(UsageError::PadTrimConflict),
            Flag::Pad => seen_pad = true,
            Flag::Trim => seen_trim = true,
            _ => {}
        }

        let params: Vec<&str> = tokens.by_ref().take(flag.arity()).collect();
        if params.len() < flag.arity() {
            return Err(UsageError::MissingParameter {
                flag: flag.token(),
                expected: flag.arity(),
            });
        }
        trace!(%flag, ?params, "option");

        let operation = match (flag, params.as_slice()) {
            (Flag::Keep, [substring]) => Operation::KeepLines {
                substring: substring.to_string(),
            },
            (Flag::Pad, [symbol, width]) => Operation::PadBeginning {
                symbol: single_char(flag, symbol)?,
                width: bounded_int(flag, width, PAD_WIDTH_MIN, PAD_WIDTH_MAX)?,
            },
            (Flag::Trim, [max_length]) => Operation::TrimLines {
                max_length: bounded_int(flag, max_length, TRIM_LENGTH_MIN, TRIM_LENGTH_MAX)?,
            },
            (Flag::Format, [style, substring]) => {
                let style: FormatStyle = style.parse().map_err(|_| malformed(flag, style))?;
                if substring.is_empty() {
                    return Err(UsageError::EmptyParameter(flag.token()));
                }
                Operation::FormatText {
                    style,
                    substring: substring.to_string(),
                    global: false,
                }
            }
            (Flag::Reverse, []) => Operation::ReverseLines,
            (Flag::Global, []) => {
                global = true;
                continue;
            }
            _ => unreachable!("parameter count is checked against arity"),
        };

        if let Some(previous) = by_kind.insert(operation.kind(), operation) {
            trace!(?previous, "superseded by later occurrence");
        }
    }

    if global {
        if !format_token_present {
            return Err(UsageError::GlobalWithoutFormat);
        }
        if let Some(Operation::FormatText { global, .. }) =
            by_kind.get_mut(&OperationKind::FormatText)
        {
            *global = true;
        }
    }

    Ok(CanonicalPipeline::from(by_kind))
}

fn malformed(flag: Flag, value: &str) -> UsageError {
    UsageError::MalformedParameter {
        flag: flag.token(),
        value: value.to_string(),
    }
}

fn single_char(flag: Flag, value: &str) -> Result<char, UsageError> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(malformed(flag, value)),
    }
}

/// Parse a signed 32-bit decimal integer and check it against `min..=max`.
fn bounded_int(flag: Flag, value: &str, min: i32, max: i32) -> Result<usize, UsageError> {
    let parsed: i32 = value.parse().map_err(|_| malformed(flag, value))?;
    if !(min..=max).contains(&parsed) {
        return Err(UsageError::OutOfRange {
            flag: flag.token(),
            value: parsed,
            min,
            max,
        });
    }
    usize::try_from(parsed).map_err(|_| malformed(flag, value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn kinds(tokens: &[&str]) -> Vec<OperationKind> {
        normalize(tokens).expect("tokens to be valid").kinds()
    }

    #[test]
    fn test_empty_tokens_give_empty_pipeline() {
        let pipeline = normalize::<&str>(&[]).unwrap();
        assert!(pipeline.is_empty());
    }

    #[test]
    fn test_canonical_order_ignores_input_order() {
        let expected = vec![
            OperationKind::KeepLines,
            OperationKind::PadBeginning,
            OperationKind::FormatText,
            OperationKind::ReverseLines,
        ];
        assert_eq!(
            kinds(&["-r", "-f", "bold", "2", "-p", "a", "15", "-k", "Line"]),
            expected
        );
        assert_eq!(
            kinds(&["-k", "Line", "-p", "a", "15", "-f", "bold", "2", "-r"]),
            expected
        );
    }

    #[test]
    fn test_last_occurrence_wins() {
        let pipeline = normalize(&["-t", "2", "-t", "6", "-t", "3"]).unwrap();
        assert_eq!(
            pipeline.operations(),
            &[Operation::TrimLines { max_length: 3 }]
        );

        let pipeline = normalize(&["-k", "contain", "-k", "ha"]).unwrap();
        assert_eq!(
            pipeline.operations(),
            &[Operation::KeepLines {
                substring: "ha".to_string()
            }]
        );
    }

    #[test]
    fn test_global_folds_into_format_in_either_position() {
        let expected = Operation::FormatText {
            style: FormatStyle::Bold,
            substring: "e".to_string(),
            global: true,
        };
        for tokens in [
            &["-g", "-f", "bold", "e"][..],
            &["-f", "bold", "e", "-g"][..],
            &["-g", "-f", "bold", "e", "-g"][..],
        ] {
            let pipeline = normalize(tokens).unwrap();
            assert_eq!(pipeline.operations(), &[expected.clone()]);
        }
    }

    #[test]
    fn test_parameters_are_not_reread_as_flags() {
        let pipeline = normalize(&["-k", "-r"]).unwrap();
        assert_eq!(
            pipeline.operations(),
            &[Operation::KeepLines {
                substring: "-r".to_string()
            }]
        );
    }

    #[test]
    fn test_global_consumed_as_format_parameter_is_not_global() {
        let pipeline = normalize(&["-f", "bold", "-g", "-f", "italic", "e", "-r"]).unwrap();
        assert_eq!(
            pipeline.operations(),
            &[
                Operation::FormatText {
                    style: FormatStyle::Italic,
                    substring: "e".to_string(),
                    global: false,
                },
                Operation::ReverseLines,
            ]
        );
    }

    #[rstest]
    #[case::keep_substring(&["-g", "-k", "-f"], Operation::KeepLines { substring: "-f".to_string() })]
    #[case::global_after_keep(&["-k", "-f", "-g"], Operation::KeepLines { substring: "-f".to_string() })]
    fn test_global_satisfied_by_consumed_format_token(
        #[case] tokens: &[&str],
        #[case] expected: Operation,
    ) {
        let pipeline = normalize(tokens).unwrap();
        assert_eq!(pipeline.operations(), &[expected]);
    }

    #[test]
    fn test_empty_keep_substring_is_valid() {
        let pipeline = normalize(&["-k", ""]).unwrap();
        assert_eq!(
            pipeline.operations(),
            &[Operation::KeepLines {
                substring: String::new()
            }]
        );
    }

    #[rstest]
    #[case(&["-p", "*", "1"], 1)]
    #[case(&["-p", "*", "100"], 100)]
    #[case(&["-p", "*", "+7"], 7)]
    #[case(&["-p", "*", "007"], 7)]
    fn test_pad_width_accepted(#[case] tokens: &[&str], #[case] width: usize) {
        let pipeline = normalize(tokens).unwrap();
        assert_eq!(
            pipeline.operations(),
            &[Operation::PadBeginning { symbol: '*', width }]
        );
    }

    #[rstest]
    #[case(&["-t", "0"], 0)]
    #[case(&["-t", "100"], 100)]
    fn test_trim_length_accepted(#[case] tokens: &[&str], #[case] max_length: usize) {
        let pipeline = normalize(tokens).unwrap();
        assert_eq!(
            pipeline.operations(),
            &[Operation::TrimLines { max_length }]
        );
    }

    #[rstest]
    #[case::unknown_option(&["-v", "2"], UsageError::UnknownOption("-v".to_string()))]
    #[case::stray_parameter(&["-r", "badParam"], UsageError::UnknownOption("badParam".to_string()))]
    #[case::keep_missing(&["-k"], UsageError::MissingParameter { flag: "-k", expected: 1 })]
    #[case::pad_missing(&["-p", "#"], UsageError::MissingParameter { flag: "-p", expected: 2 })]
    #[case::format_missing(&["-f", "bold"], UsageError::MissingParameter { flag: "-f", expected: 2 })]
    #[case::pad_fraction(&["-p", "*", "4.5"], UsageError::MalformedParameter { flag: "-p", value: "4.5".to_string() })]
    #[case::pad_long_symbol(&["-p", "cc", "5"], UsageError::MalformedParameter { flag: "-p", value: "cc".to_string() })]
    #[case::pad_empty_symbol(&["-p", "", "5"], UsageError::MalformedParameter { flag: "-p", value: String::new() })]
    #[case::pad_zero(&["-p", "a", "0"], UsageError::OutOfRange { flag: "-p", value: 0, min: 1, max: 100 })]
    #[case::pad_too_wide(&["-p", "*", "101"], UsageError::OutOfRange { flag: "-p", value: 101, min: 1, max: 100 })]
    #[case::trim_negative(&["-t", "-1"], UsageError::OutOfRange { flag: "-t", value: -1, min: 0, max: 100 })]
    #[case::trim_too_long(&["-t", "101"], UsageError::OutOfRange { flag: "-t", value: 101, min: 0, max: 100 })]
    #[case::trim_letter(&["-t", "c"], UsageError::MalformedParameter { flag: "-t", value: "c".to_string() })]
    #[case::trim_overflow(&["-t", "99999999999"], UsageError::MalformedParameter { flag: "-t", value: "99999999999".to_string() })]
    #[case::pad_then_trim(&["-p", "a", "2", "-t", "2"], UsageError::PadTrimConflict)]
    #[case::trim_then_pad(&["-t", "3", "-p", "a", "2"], UsageError::PadTrimConflict)]
    #[case::conflict_before_params(&["-t", "500", "-p"], UsageError::OutOfRange { flag: "-t", value: 500, min: 0, max: 100 })]
    #[case::conflict_ignores_bad_params(&["-t", "3", "-p"], UsageError::PadTrimConflict)]
    #[case::global_alone(&["-g"], UsageError::GlobalWithoutFormat)]
    #[case::global_with_others(&["-g", "-k", "x", "-r"], UsageError::GlobalWithoutFormat)]
    #[case::unknown_style(&["-f", "underline", "19"], UsageError::MalformedParameter { flag: "-f", value: "underline".to_string() })]
    #[case::empty_style(&["-f", "", "20"], UsageError::MalformedParameter { flag: "-f", value: String::new() })]
    #[case::empty_format_substring(&["-f", "bold", ""], UsageError::EmptyParameter("-f"))]
    #[case::global_as_format_param(&["-f", "bold", "-g", "wrongParam"], UsageError::UnknownOption("wrongParam".to_string()))]
    fn test_rejected(#[case] tokens: &[&str], #[case] expected: UsageError) {
        assert_eq!(normalize(tokens), Err(expected));
    }

    #[test]
    fn test_invalid_earlier_occurrence_still_rejects() {
        assert!(normalize(&["-t", "101", "-t", "5"]).is_err());
        assert!(normalize(&["-f", "underline", "x", "-f", "bold", "x"]).is_err());
    }
}
