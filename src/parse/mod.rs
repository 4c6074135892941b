mod error;
mod grammar;

pub use error::ParseError;

use crate::Condition;

/// Parse a condition string such as `">3 & <10 | =15"`.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not a condition. Callers treat this
/// as "the predicate is not written in condition form", not as a failed match.
pub fn parse_condition(input: &str) -> Result<Condition, ParseError> {
    use winnow::Parser;
    grammar::condition
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}

/// Parse a percentage string such as `"50%"` into its numeric part.
///
/// # Errors
///
/// Returns [`ParseError`] if the input is not `-?digits(.digits)?%` surrounded
/// by optional whitespace.
pub fn parse_percentage(input: &str) -> Result<f32, ParseError> {
    use winnow::Parser;
    grammar::percentage
        .parse(input)
        .map_err(|e| ParseError::new(e.to_string()))
}
