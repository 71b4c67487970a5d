// crate modules
use crate::error::Result;
use crate::reader::OutpReader;
use crate::{CellRecord, CellTable, RunStatus};

// standard library
use std::path::Path;

/// Data structure for a loaded MCNP output file
///
/// This [Outp] holds every line of the report along with anything that could
/// be worked out up front:
///
/// | Data            | Description                                           |
/// | --------------- | ----------------------------------------------------- |
/// | [CellTable]     | properties of every cell from print table 60          |
/// | [RunStatus]     | flags for a fatal error or too many lost particles    |
///
/// Tally cells, tally results, and the number of histories are found on
/// request by searching the stored lines again. Nothing is cached, and
/// nothing is ever modified after loading, so an [Outp] can be shared freely
/// between threads.
#[derive(Debug, Default, Clone)]
pub struct Outp {
    /// Every line of the report, minus the header if stripped
    pub(crate) lines: Vec<String>,
    /// Cell summary table, empty if not found
    pub(crate) cells: CellTable,
    /// Whether the cell summary table was found at all
    pub(crate) has_cell_table: bool,
    /// Advisory run status flags
    pub(crate) status: RunStatus,
}

impl Outp {
    /// Read an MCNP output file
    ///
    /// Parses the file at `path` with the default [OutpReader] options. The
    /// `path` may be a [&str], [String], [Path], etc..
    ///
    /// ```rust, no_run
    /// # use mcpost_outp::Outp;
    /// let outp = Outp::from_file("path/to/outp").unwrap();
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        OutpReader::new().read(path)
    }

    /// Lines of the report as loaded
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Check that the cell summary table was found
    ///
    /// All per-cell queries fail with
    /// [Error::TableNotFound](crate::Error::TableNotFound) if not.
    pub fn has_cell_table(&self) -> bool {
        self.has_cell_table
    }

    /// Get a reference to the cell summary table
    pub fn cell_table(&self) -> &CellTable {
        &self.cells
    }

    /// Find the table record for a specific cell
    pub fn cell(&self, id: u32) -> Option<&CellRecord> {
        self.cells.get(id)
    }

    /// Get a reference to the run status flags
    pub fn status(&self) -> &RunStatus {
        &self.status
    }
}
