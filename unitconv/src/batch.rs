//! Batch conversion - many values against one (from, to) pair

use crate::convert::convert;
use crate::{ConvResult, ConversionError, Unit};
use std::ops::Range;

/// One element of a comma-delimited value list
#[derive(Debug, Clone, PartialEq)]
pub struct ValueToken<'a> {
    /// Zero-based position in the list
    pub position: usize,
    /// Byte range of the trimmed element within the input
    pub span: Range<usize>,
    pub text: &'a str,
}

/// Split a comma-delimited list into trimmed elements, keeping their byte offsets
pub fn tokenize(input: &str) -> Vec<ValueToken<'_>> {
    let mut tokens = Vec::new();
    let mut offset = 0;

    for (position, raw) in input.split(',').enumerate() {
        let leading = raw.len() - raw.trim_start().len();
        let text = raw.trim();
        let start = offset + leading;
        tokens.push(ValueToken {
            position,
            span: start..start + text.len(),
            text,
        });
        offset += raw.len() + 1;
    }

    tokens
}

/// Parse every element of a comma-delimited list before any conversion happens.
///
/// The first element that is not a finite number fails the whole list.
pub fn parse_values(input: &str) -> ConvResult<Vec<f64>> {
    if input.trim().is_empty() {
        return Err(ConversionError::EmptyBatch);
    }

    tokenize(input)
        .into_iter()
        .map(|token| {
            parse_number(token.text).ok_or_else(|| ConversionError::InvalidNumber {
                position: token.position,
                token: token.text.to_string(),
            })
        })
        .collect()
}

/// Parse a single finite number. `nan` and `inf` spellings are rejected.
pub fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Convert each value independently, preserving input order
pub fn convert_batch(values: &[f64], from: Unit, to: Unit) -> ConvResult<Vec<f64>> {
    if values.is_empty() {
        return Err(ConversionError::EmptyBatch);
    }

    values.iter().map(|value| convert(*value, from, to)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_tracks_trimmed_spans() {
        let input = "32, 50 ,100";
        let tokens = tokenize(input);

        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].text, "50");
        assert_eq!(&input[tokens[1].span.clone()], "50");
        assert_eq!(tokens[2].position, 2);
        assert_eq!(&input[tokens[2].span.clone()], "100");
    }

    #[test]
    fn test_parse_values_reports_first_bad_position() {
        let err = parse_values("1,2,abc,def").unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidNumber {
                position: 2,
                token: "abc".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_element_is_invalid() {
        let err = parse_values("1,,3").unwrap_err();
        assert_eq!(
            err,
            ConversionError::InvalidNumber {
                position: 1,
                token: String::new(),
            }
        );
    }

    #[test]
    fn test_non_finite_is_invalid() {
        assert!(parse_number("nan").is_none());
        assert!(parse_number("inf").is_none());
        assert_eq!(parse_number("-1.5e3"), Some(-1500.0));
    }

    #[test]
    fn test_blank_input_is_empty_batch() {
        assert_eq!(parse_values("   "), Err(ConversionError::EmptyBatch));
        assert_eq!(
            convert_batch(&[], Unit::Celsius, Unit::Kelvin),
            Err(ConversionError::EmptyBatch)
        );
    }
}
