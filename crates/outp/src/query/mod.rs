//! Queries on a loaded [Outp](crate::Outp)
//!
//! Split into one `impl Outp` block per part of the report:
//!
//! - `cells`: per-cell properties from the cell summary table
//! - `tally`: tally cell lists from the input echo and tally results
//! - `nps`: the number of histories from the run termination line

mod cells;
mod nps;
mod tally;
