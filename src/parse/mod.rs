pub mod ast;
mod error;
mod parser;
pub mod visit;

pub use error::{Field, ParseError};

use std::str::FromStr;

/// Parses a roll notation such as `2d6 + d4` or `d8d6 + 1`.
///
/// Blank input yields a notation with no addends; callers that require at
/// least one term have to reject it themselves.
///
/// # Examples
/// ```
/// # use swade_dice::parse::parse;
///
/// let notation = parse("2d6d4 + 3").unwrap();
/// assert_eq!(notation.addends().len(), 2);
/// assert_eq!(notation.to_string(), "2d6d4 + 3");
/// ```
pub fn parse(s: &str) -> Result<ast::RollNotation, ParseError> {
    parser::Parser::new(s).parse()
}

impl FromStr for ast::RollNotation {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let notation: ast::RollNotation = "d8d6 + 1".parse().unwrap();
        assert_eq!(notation, parse("d8d6 + 1").unwrap());
        assert!("2x6".parse::<ast::RollNotation>().is_err());
    }
}
