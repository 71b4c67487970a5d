//! Parsers for tally results blocks
//!
//! For example, a typical cell flux tally:
//!
//! ```text
//! 1tally        4        nps =      100000
//!            tally type 4    track length estimate of particle flux.
//!            ...
//!                    cell:       101          102
//!                          4.18879E+03  2.93215E+04
//!
//!  cell  101
//!                  1.23456E-03 0.0123
//!
//!  cell  102
//!                  2.34567E-04 0.0456
//! ```

// crate modules
use crate::layout::{CELL_KEYWORD, TALLY_MARKER};

// nom parser combinators
use nom::branch::alt;
use nom::bytes::complete::{tag, take_until};
use nom::character::complete::{self, space0, space1};
use nom::combinator::eof;
use nom::sequence::{delimited, preceded, terminated, tuple};
use nom::IResult;

/// Tally number on a `1tally` line, which must be a whole token
pub(crate) fn tally_number(i: &str) -> IResult<&str, u32> {
    preceded(
        tuple((take_until(TALLY_MARKER), tag(TALLY_MARKER), space1)),
        terminated(complete::u32, alt((space1, eof))),
    )(i)
}

/// Check for the `1tally` line of a specific tally
pub(crate) fn is_tally_header(i: &str, id: u32) -> bool {
    matches!(tally_number(i), Ok((_, n)) if n == id)
}

/// Rest of a row starting with the `cell` keyword
///
/// Every result is headed by one of these rows. Most hold a single cell
/// number, but totals and grouped cells are also headed this way.
pub(crate) fn cell_row(i: &str) -> IResult<&str, &str> {
    delimited(space0, tag(CELL_KEYWORD), space1)(i)
}

/// Cell number of a ` cell  101` row heading a single cell result
pub(crate) fn cell_header(i: &str) -> IResult<&str, u32> {
    preceded(cell_row, terminated(complete::u32, alt((space1, eof))))(i)
}
