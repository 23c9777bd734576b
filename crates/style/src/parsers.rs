//! Low-level nom parser functions for loose size and spacing values.
//!
//! This module provides composable parser functions for the value forms a
//! chart description may carry: unit-suffixed lengths ("120px"), percentages
//! ("35%"), bare numbers, and margin/padding shorthand strings.

use crate::dimension::{Dimension, Edges};
use nom::IResult;
use nom::Parser;
use nom::branch::alt;
use nom::bytes::complete::{tag_no_case, take_while_m_n};
use nom::character::complete::{char, space1};
use nom::combinator::{map, map_res, opt, recognize};
use nom::multi::separated_list1;
use thiserror::Error;

/// Errors that can occur while parsing loose input values.
///
/// These never escape the layout engine: the normalizer logs and degrades
/// them to absent values. They are public so standalone callers of the
/// parsing helpers can inspect failures.
#[derive(Error, Debug, Clone)]
pub enum ValueParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid shorthand: expected 1, 2, or 4 values, got {0}")]
    ShorthandCount(usize),
}

// --- Helper Parsers ---

fn parse_f32(input: &str) -> IResult<&str, f32> {
    map_res(
        recognize((
            opt(alt((char('+'), char('-')))),
            alt((
                recognize((
                    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                    opt((
                        char('.'),
                        take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                    )),
                )),
                recognize((
                    char('.'),
                    take_while_m_n(1, 10, |c: char| c.is_ascii_digit()),
                )),
            )),
        )),
        |s: &str| s.parse::<f32>(),
    )
    .parse(input)
}

// --- Unit & Dimension Parsers ---

/// Parses a pixel length with optional unit (e.g., "12px", "80").
pub fn parse_length(input: &str) -> IResult<&str, f32> {
    let (input, value) = parse_f32(input)?;
    let (input, _) = opt(tag_no_case("px")).parse(input)?;
    Ok((input, value))
}

/// Parses a dimension value (pixel length, percentage, or "auto").
pub fn parse_dimension(input: &str) -> IResult<&str, Dimension> {
    alt((
        map(tag_no_case("auto"), |_| Dimension::Auto),
        map((parse_f32, char('%')), |(val, _)| Dimension::Percent(val)),
        map(parse_length, Dimension::Px),
    ))
    .parse(input)
}

/// Parses shorthand margins/padding (1, 2, or 4 whitespace-separated lengths).
pub fn parse_edges_shorthand(input: &str) -> Result<Edges, ValueParseError> {
    let parts_res = separated_list1(space1, parse_length).parse(input.trim());

    match parts_res {
        Ok(("", parts)) => match parts.len() {
            1 => Ok(Edges::all(parts[0])),
            2 => Ok(Edges {
                top: parts[0],
                right: parts[1],
                bottom: parts[0],
                left: parts[1],
            }),
            4 => Ok(Edges {
                top: parts[0],
                right: parts[1],
                bottom: parts[2],
                left: parts[3],
            }),
            n => Err(ValueParseError::ShorthandCount(n)),
        },
        Ok((rem, _)) => Err(ValueParseError::Parse(format!(
            "Trailing input in shorthand: '{}'",
            rem
        ))),
        Err(e) => Err(ValueParseError::Parse(e.to_string())),
    }
}

/// Helper to run a nom parser to completion over trimmed input.
pub fn run_parser<'a, T, F>(parser: F, input: &'a str) -> Result<T, ValueParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    let mut parser = parser;
    match parser.parse(input.trim()) {
        Ok(("", result)) => Ok(result),
        Ok((rem, _)) => Err(ValueParseError::Parse(format!(
            "Parser did not consume all input. Remainder: '{}'",
            rem
        ))),
        Err(e) => Err(ValueParseError::Parse(e.to_string())),
    }
}
