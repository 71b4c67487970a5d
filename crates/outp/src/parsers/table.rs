// crate modules
use crate::error::{Error, Result};
use crate::layout::TABLE_ROW_FIELDS;
use crate::CellRecord;

// mcpost modules
use mcpost_utils::f;

// standard library
use std::str::FromStr;

/// Parse one whitespace-delimited row of the cell summary table
///
/// ```text
///         1      101        1  8.47552E-02 7.86000E+00 4.18879E+03 3.29239E+04           1  1.0000E+00
/// ```
///
/// The first field is a running index and anything after the importance is
/// ignored.
pub(crate) fn cell_record(line: &str) -> Result<CellRecord> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    if fields.len() < TABLE_ROW_FIELDS {
        return Err(Error::ParseError(f!(
            "expected at least {TABLE_ROW_FIELDS} fields in table row, found {}",
            fields.len()
        )));
    }

    Ok(CellRecord {
        id: field(&fields, 1)?,
        material: field(&fields, 2)?,
        atom_density: field(&fields, 3)?,
        mass_density: field(&fields, 4)?,
        volume: field(&fields, 5)?,
        mass: field(&fields, 6)?,
        pieces: field(&fields, 7)?,
        importance: field(&fields, 8)?,
    })
}

/// Convert the field at `idx`, naming the offending text on failure
fn field<T: FromStr>(fields: &[&str], idx: usize) -> Result<T> {
    let text = fields.get(idx).copied().unwrap_or_default();
    text.parse::<T>()
        .map_err(|_| Error::ParseError(f!("invalid value {text:?} in table column {idx}")))
}
