use nom::{
    character::complete::{char, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    multi::separated_list1,
    sequence::pair,
    IResult,
};

use lang_component::vm::Data;

// digit groups may be joined by single underscores: `1_000`
fn signed_integer(s: &str) -> IResult<&str, &str> {
    all_consuming(recognize(pair(
        opt(one_of("+-")),
        separated_list1(char('_'), digit1),
    )))(s)
}

/// Reads a line supplied for `&`. Surrounding whitespace is ignored; anything
/// that is not a base-10 integer fitting in a cell reads as 0.
pub fn parse_integer(line: &str) -> Data {
    match signed_integer(line.trim()) {
        Ok((_, digits)) => digits.replace('_', "").parse::<Data>().unwrap_or(0),
        Err(_) => 0,
    }
}

/// Reads a line supplied for `~`: the code of its first character, or 0.
pub fn parse_character(line: &str) -> Data {
    line.chars().next().map(|c| c as Data).unwrap_or(0)
}
