use super::ast::{Addend, DiceGroup, RollNotation};
use super::error::{Field, ParseError};
use crate::common::*;

type PResult<T> = Result<T, ParseError>;

pub struct Parser<'a> {
    input: &'a str,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self { input }
    }

    pub fn parse(self) -> PResult<RollNotation> {
        if self.input.trim().is_empty() {
            return Ok(RollNotation::default());
        }

        let addends = self
            .input
            .split('+')
            .map(str::trim)
            .map(parse_addend)
            .collect::<PResult<Vec<_>>>()?;

        let notation = RollNotation::new(addends);
        log::debug!("parsed {:?} as `{}`", self.input, notation);
        Ok(notation)
    }
}

fn parse_addend(piece: &str) -> PResult<Addend> {
    let parts: Vec<&str> = piece.split('d').collect();
    match parts.as_slice() {
        [] => Err(ParseError::invalid_addend(piece)),
        [constant] => constant
            .parse()
            .map(Addend::Constant)
            .map_err(|_| ParseError::invalid_addend(piece)),
        [count, sides @ ..] => parse_dice_group(piece, count, sides).map(Addend::Dice),
    }
}

fn parse_dice_group(piece: &str, count: &str, sides: &[&str]) -> PResult<DiceGroup> {
    let num = if count.is_empty() {
        Num::MIN
    } else {
        let value = parse_positive(piece, Field::Count, count)?;
        usize::try_from(value)
            .ok()
            .and_then(Num::new)
            .ok_or_else(|| too_large(piece, Field::Count, value))?
    };

    let sides = sides
        .iter()
        .map(|token| {
            let value = parse_positive(piece, Field::Sides, token)?;
            UInt::try_from(value)
                .ok()
                .and_then(NonZeroUInt::new)
                .ok_or_else(|| too_large(piece, Field::Sides, value))
        })
        .collect::<PResult<Vec<_>>>()?;
    let sides = NonEmpty::try_from_vec(sides).map_err(|_| ParseError::invalid_addend(piece))?;

    Ok(DiceGroup::new(num, sides))
}

/// Parses `token` as an integer of at least 1.
fn parse_positive(piece: &str, field: Field, token: &str) -> PResult<i64> {
    let value: i64 = token
        .parse()
        .map_err(|_| ParseError::invalid_number(piece, field, token))?;
    if value < 1 {
        return Err(ParseError::NonPositive {
            piece: piece.to_owned(),
            field,
            value,
        });
    }
    Ok(value)
}

fn too_large(piece: &str, field: Field, value: i64) -> ParseError {
    ParseError::TooLarge {
        piece: piece.to_owned(),
        field,
        value,
    }
}
