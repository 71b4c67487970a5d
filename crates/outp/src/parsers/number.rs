// nom parser combinators
use nom::character::complete::{self, digit1, space0, space1};
use nom::number::complete::double;
use nom::sequence::{preceded, tuple};
use nom::IResult;

/// Unsigned 32-bit integer value, trimming preceding whitespace
pub(crate) fn uint32(i: &str) -> IResult<&str, u32> {
    let (i, value) = digit1(i.trim_start())?;
    let (_, v) = complete::u32(value)?;
    Ok((i, v))
}

/// Tally value followed by its relative error, e.g. `1.23456E-03 0.0123`
pub(crate) fn value_error(i: &str) -> IResult<&str, (f64, f64)> {
    tuple((preceded(space0, double), preceded(space1, double)))(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uint32() {
        assert_eq!(uint32("   101 102"), Ok((" 102", 101)));
        assert_eq!(uint32("0"), Ok(("", 0)));
        assert!(uint32("-1").is_err());
        assert!(uint32("abc").is_err());
    }

    #[test]
    fn test_value_error() {
        assert_eq!(
            value_error("                 1.23456E-03 0.0123"),
            Ok(("", (1.23456e-3, 0.0123)))
        );
        assert_eq!(
            value_error(" 7.50000E+01 0.0500 "),
            Ok((" ", (75.0, 0.05)))
        );

        // both numbers are required
        assert!(value_error("   1.23456E-03").is_err());
        assert!(value_error(" cell  101").is_err());
    }
}
