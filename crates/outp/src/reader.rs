//! Loading of MCNP output files
//!
//! The whole report is read into memory once. Everything that does not
//! depend on query arguments is done at the same time:
//!
//! - The license and banner block at the top is dropped (optional)
//! - The cell summary table (print table 60) is parsed into a [CellTable]
//! - The report is checked for a fatal error or excessive particle loss
//!
//! Tally queries work on demand from the stored lines afterwards.

// crate modules
use crate::error::Result;
use crate::layout::*;
use crate::parsers::cell_record;
use crate::{CellTable, Outp, RunStatus};

// mcpost modules
use mcpost_utils::StringExt;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

// external crates
use log::{debug, info, trace, warn};

/// Read an MCNP output file with the default options
///
/// Shorthand for [OutpReader::read] with the license and banner block
/// stripped.
///
/// ```rust, no_run
/// # use mcpost_outp::read_outp;
/// let outp = read_outp("path/to/outp").unwrap();
/// ```
pub fn read_outp<P: AsRef<Path>>(path: P) -> Result<Outp> {
    OutpReader::new().read(path)
}

/// Configurable reader for MCNP output files
///
/// The defaults suit a standard MCNP6 `outp`, but the header strip can be
/// turned off for reports that do not start with the usual 37 line license
/// block.
///
/// ```rust, no_run
/// # use mcpost_outp::OutpReader;
/// let mut reader = OutpReader::new();
/// reader.set_strip_header(false);
///
/// let outp = reader.read("path/to/outp").unwrap();
/// ```
#[derive(Debug, Clone)]
pub struct OutpReader {
    /// Drop the license and banner block before anything else
    strip_header: bool,
}

impl Default for OutpReader {
    fn default() -> Self {
        Self { strip_header: true }
    }
}

impl OutpReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Choose whether to drop the license and banner block (default `true`)
    pub fn set_strip_header(&mut self, strip_header: bool) {
        self.strip_header = strip_header;
    }

    /// Read the report at `path`
    ///
    /// The file is closed again as soon as all lines are read. Only failure
    /// to read the file is an error, problems with the content are logged
    /// and left for the individual queries to report.
    pub fn read<P: AsRef<Path>>(&self, path: P) -> Result<Outp> {
        let path = path.as_ref();
        info!("Reading {}", path.display());
        let lines = BufReader::new(File::open(path)?)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()?;
        Ok(self.load(lines))
    }

    /// Read a report that is already in memory
    ///
    /// ```rust
    /// # use mcpost_outp::OutpReader;
    /// let mut reader = OutpReader::new();
    /// reader.set_strip_header(false);
    ///
    /// let outp = reader.read_str(" run terminated when     1000  particle histories were done.");
    /// assert!(!outp.has_cell_table());
    /// assert_eq!(outp.nps().unwrap(), 1000);
    /// ```
    pub fn read_str(&self, text: &str) -> Outp {
        self.load(text.lines().map(String::from).collect())
    }

    fn load(&self, mut lines: Vec<String>) -> Outp {
        if self.strip_header {
            if lines.len() < HEADER_LINES {
                warn!(
                    "Report has only {} lines, fewer than the {HEADER_LINES} line header",
                    lines.len()
                );
            }
            let n = HEADER_LINES.min(lines.len());
            lines.drain(..n);
        }
        debug!("Loaded {} lines", lines.len());

        let table = cell_table(&lines);
        let status = run_status(&lines);

        Outp {
            has_cell_table: table.is_some(),
            cells: table.unwrap_or_default(),
            status,
            lines,
        }
    }
}

/// Find and parse the cell summary table
///
/// Rows that fail to parse are dropped with a warning so that one bad line
/// does not lose the rest of the table.
fn cell_table(lines: &[String]) -> Option<CellTable> {
    let Some(marker) = lines.iter().position(|l| l.contains(TABLE_MARKER)) else {
        warn!("Cell summary table ({TABLE_MARKER}) not found, cell queries are unavailable");
        return None;
    };

    let start = marker + TABLE_OFFSET;
    let Some(end) = lines
        .iter()
        .skip(start)
        .position(|l| l.contains(TABLE_END_MARKER))
        .map(|n| n + start)
    else {
        warn!("End of the cell summary table not found, cell queries are unavailable");
        return None;
    };
    debug!("Cell summary table on lines {}-{}", start + 1, end);

    let mut table = CellTable::new();
    for (n, line) in lines[start..end].iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match cell_record(line) {
            Ok(record) => {
                trace!("{record:?}");
                if table.insert(record).is_some() {
                    warn!("Cell {} appears twice in the table, keeping the last", record.id);
                }
            }
            Err(e) => warn!("Skipped line {} of the cell summary table: {e}", start + n + 1),
        }
    }

    debug!("Cells in table: {}", table.len());
    Some(table)
}

/// Check for the first sign of a failed run
fn run_status(lines: &[String]) -> RunStatus {
    let mut status = RunStatus::default();

    for line in lines {
        if line.contains(FATAL_ERROR_MARKER) {
            warn!("Fatal error occured, most results will be unavailable");
            status.fatal_error = true;
            break;
        }

        if line.contains_all(&LOST_PARTICLE_MARKERS) {
            warn!("Too many particles lost, most results will be unavailable");
            status.particles_lost = true;
            break;
        }
    }

    status
}
