//! Module for reading MCNP output files
//!
//! The MCNP output file (`outp`) is a human-readable report of a run. It has
//! no fixed structure as such, but tables and tally results are always laid
//! out the same way and can be found by the text that marks them.
//!
//! - [Outp] - Primary data structure holding the loaded report
//!
//! The data available are:
//!
//! | Data                | Description                                           |
//! | ------------------- | ----------------------------------------------------- |
//! | [CellTable]         | cell properties from the summary table (table 60)     |
//! | [Outp::tally_cells] | cells on a tally card, taken from the input echo      |
//! | [Outp::tally_values]| value and relative error of each cell in a tally      |
//! | [Outp::nps]         | number of histories for a finished run                |
//! | [RunStatus]         | whether the run hit a fatal error or lost particles   |
//!
//! # Quickstart example
//!
//! Suppose there is a tally for the following:
//!
//! ```text
//! fc4     Example simple flux tally
//! f4:n    101 102 293
//! ```
//!
//! ```rust, no_run
//! # use mcpost_outp::Outp;
//! // Read the file, dropping the license block at the top
//! let outp = Outp::from_file("/path/to/outp").unwrap();
//!
//! // Cells on the `F4:N` card and their results
//! let cells = outp.tally_cells(4, "n").unwrap();
//! let results = outp.tally_values(4, Some(cells.as_slice())).unwrap();
//!
//! // Properties of the same cells
//! let volumes = outp.volumes(cells.as_slice()).unwrap();
//! let materials = outp.material(cells.as_slice()).unwrap();
//! ```
//!
//! # Failed runs
//!
//! A report is checked for a fatal error or too many lost particles when it
//! is read. These are warnings rather than errors since the cell summary
//! table is often still perfectly usable, so check [Outp::status] before
//! trusting any tally results.
#![doc = include_str!("../readme.md")]

mod core;
mod error;
mod layout;
mod outp;
mod parsers;
mod query;
mod reader;

// flatten public API and inline the documentation
#[doc(inline)]
pub use error::{Error, Result};

#[doc(inline)]
pub use outp::Outp;

#[doc(inline)]
pub use reader::{read_outp, OutpReader};

#[doc(inline)]
pub use core::*;
