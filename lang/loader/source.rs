use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::satisfy,
    combinator::{opt, recognize},
    sequence::terminated,
    IResult,
};

use lang_component::{Grid, HEIGHT};

fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\x0b' | '\x0c' | '\x1c' | '\x1d' | '\x1e' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

fn line_break(s: &str) -> IResult<&str, &str> {
    alt((tag("\r\n"), recognize(satisfy(is_line_break))))(s)
}

fn line(s: &str) -> IResult<&str, &str> {
    terminated(take_till(is_line_break), opt(line_break))(s)
}

/// Splits `source` into at most `limit` lines. CRLF counts as one break; LF,
/// CR, VT, FF, the file/group/record separators, NEL and the Unicode line and
/// paragraph separators each end a line too. A trailing break does not start
/// an empty extra line.
pub fn split_lines(source: &str, limit: usize) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = source;

    while !rest.is_empty() && lines.len() < limit {
        match line(rest) {
            Ok((s, l)) => {
                lines.push(l);
                rest = s;
            }
            Err(_) => break,
        }
    }

    lines
}

/// Builds the program grid from plain text. Oversized input is truncated,
/// never rejected.
pub fn load(source: &str) -> Grid {
    Grid::from_lines(split_lines(source, HEIGHT))
}
