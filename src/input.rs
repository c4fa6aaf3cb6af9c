#![cfg(feature = "std")]

//! Parsing of `row col` coordinate lines.

use crate::common::InputParseError;

/// Parse a line holding two whitespace-separated integers as `(row, col)`.
///
/// Tokens after the second are ignored. Negative values parse fine; bounds
/// are checked by the board.
pub fn parse_coordinates(line: &str) -> Result<(isize, isize), InputParseError> {
    let mut tokens = line.split_whitespace();
    let (row, col) = match (tokens.next(), tokens.next()) {
        (Some(row), Some(col)) => (row, col),
        (first, _) => {
            return Err(InputParseError::MissingCoordinate {
                found: first.map_or(0, |_| 1),
            })
        }
    };
    Ok((parse_number(row)?, parse_number(col)?))
}

fn parse_number(token: &str) -> Result<isize, InputParseError> {
    token
        .parse()
        .map_err(|_| InputParseError::InvalidNumber(token.to_string()))
}
