//! Parsers for the echo of the input deck
//!
//! MCNP repeats the input deck near the top of the report with a line number
//! label in front of every card:
//!
//! ```text
//!    12-       f4:n  101
//!    13-               102 293
//!    14-       sdef pos=0 0 0 erg=14.1
//! ```

// crate modules
use crate::layout::{INLINE_COMMENT, SECTION_DELIMITER};

// nom parser combinators
use nom::bytes::complete::take_till1;
use nom::character::complete::{self, char, one_of, space0};
use nom::combinator::opt;
use nom::sequence::{pair, preceded, separated_pair, terminated};
use nom::IResult;

/// Line number label in front of an echoed card
fn echo_label(i: &str) -> IResult<&str, u32> {
    terminated(preceded(space0, complete::u32), char('-'))(i)
}

/// Card text of an echo line, without the line number label if it has one
pub(crate) fn echo_content(i: &str) -> &str {
    match echo_label(i) {
        Ok((content, _)) => content,
        Err(_) => i,
    }
}

/// Blank echo lines separate the cell, surface, and data card blocks
pub(crate) fn is_section_delimiter(line: &str) -> bool {
    line.ends_with(SECTION_DELIMITER) && echo_content(line).trim().is_empty()
}

/// Comment cards are a `c` followed by a blank or nothing at all
pub(crate) fn is_comment_card(line: &str) -> bool {
    let card = echo_content(line).trim_start();
    let mut chars = card.chars();
    matches!(chars.next(), Some('c' | 'C')) && chars.next().map_or(true, char::is_whitespace)
}

/// Tally card name, e.g. `f4:n`, `*F14:n`, or `f4:n,p`
///
/// Gives the tally number and particle designator(s) following the `:`.
pub(crate) fn tally_declaration(i: &str) -> IResult<&str, (u32, &str)> {
    preceded(
        pair(opt(char('*')), one_of("fF")),
        separated_pair(
            complete::u32,
            char(':'),
            take_till1(|c: char| c.is_whitespace() || c == INLINE_COMMENT),
        ),
    )(i)
}

/// Text following the card name if the card declares tally `id`:`particle`
pub(crate) fn declared_cells<'a>(line: &'a str, id: u32, particle: &str) -> Option<&'a str> {
    match tally_declaration(echo_content(line).trim_start()) {
        Ok((cells, (n, p))) if n == id && p.eq_ignore_ascii_case(particle) => Some(cells),
        _ => None,
    }
}
