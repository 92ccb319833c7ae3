//! The `/roll` command: turns a notation into the reply shown to the user.

use crate::parse::{ast::RollNotation, ParseError};
use crate::roll::{Eval, RollContext, Roller, DEFAULT_MAX_ACES};

pub const MISSING_NOTATION: &str = "/roll command must have a 'notation' option value";

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct RollCommand {
    max_aces: Option<usize>,
}

impl RollCommand {
    pub fn new(max_aces: Option<usize>) -> Self {
        Self { max_aces }
    }

    /// Parses and rolls `notation`, returning the reply text.
    ///
    /// Every call gets its own [RollContext], so the ace limit applies per
    /// request. Only an absent or empty notation counts as missing; a
    /// whitespace-only one is rejected by the parser like any other bad input.
    pub fn respond<R: Roller>(&self, notation: Option<&str>, roller: R) -> String {
        let notation_text = match notation {
            Some(s) if !s.is_empty() => s,
            _ => {
                log::warn!("roll requested without a notation");
                return MISSING_NOTATION.to_owned();
            }
        };

        let mut ctx = RollContext::new(self.max_aces, roller);
        let result = parse_required(notation_text)
            .map_err(crate::Error::from)
            .and_then(|notation| notation.roll(&mut ctx).map_err(crate::Error::from));
        match result {
            Ok(result) => format!(
                "The roll for {}:\n  {} = {}",
                notation_text,
                result,
                result.value()
            ),
            Err(why) => {
                log::warn!("roll for {:?} failed: {}", notation_text, why);
                format!("/roll command had an error: {}", why)
            }
        }
    }
}

impl Default for RollCommand {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_ACES))
    }
}

fn parse_required(text: &str) -> Result<RollNotation, ParseError> {
    let notation = crate::parse::parse(text)?;
    if notation.is_empty() {
        return Err(ParseError::invalid_addend(text.trim()));
    }
    Ok(notation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::{seeded_roller, SequenceRoller};

    fn respond(notation: Option<&str>, draws: &[u32]) -> String {
        RollCommand::default().respond(notation, SequenceRoller::new(draws))
    }

    #[test]
    fn test_respond_success() {
        assert_eq!(
            respond(Some("d6 + d10"), &[2, 10, 7]),
            "The roll for d6 + d10:\n  2 + [10 + 7] = 19"
        );
        assert_eq!(
            respond(Some("2d6"), &[6, 2, 3]),
            "The roll for 2d6:\n  [6 + 2, 3] 8 = 8"
        );
        assert_eq!(respond(Some("6"), &[]), "The roll for 6:\n  6 = 6");
    }

    #[test]
    fn test_respond_keeps_original_text() {
        assert_eq!(
            respond(Some("d10+d4"), &[8, 2]),
            "The roll for d10+d4:\n  8 + 2 = 10"
        );
    }

    #[test]
    fn test_respond_missing_notation() {
        assert_eq!(respond(None, &[]), MISSING_NOTATION);
        assert_eq!(respond(Some(""), &[]), MISSING_NOTATION);
    }

    #[test]
    fn test_respond_blank_notation_is_parse_error() {
        assert_eq!(
            respond(Some("  "), &[]),
            r#"/roll command had an error: expected an integer constant or [count]d{sides}[d{sides}...] notation, got: """#
        );
    }

    #[test]
    fn test_respond_parse_error() {
        assert_eq!(
            respond(Some("abc"), &[]),
            r#"/roll command had an error: expected an integer constant or [count]d{sides}[d{sides}...] notation, got: "abc""#
        );
        assert!(respond(Some("2x6"), &[]).starts_with("/roll command had an error: "));
        assert!(respond(Some("d"), &[]).starts_with("/roll command had an error: "));
    }

    #[test]
    fn test_respond_large_group_without_aces() {
        assert_eq!(
            respond(Some("600d6d4"), &[2; 1200]),
            "The roll for 600d6d4:\n  [".to_owned() + &["2"; 1200].join(", ") + "] 2 = 2"
        );
        assert!(RollCommand::default()
            .respond(Some("600d6d4"), seeded_roller(1))
            .starts_with("The roll for 600d6d4:\n  ["));
    }

    #[test]
    fn test_respond_too_many_aces() {
        let reply = RollCommand::new(Some(10)).respond(Some("d1"), seeded_roller(3));
        assert_eq!(
            reply,
            "/roll command had an error: too many aces rolled (limit is 10)"
        );
    }
}
