//! Fixed markers and offsets of the MCNP output format
//!
//! Everything that ties the parser to one version of the report layout lives
//! here. If the format drifts, this is the only file that should need to
//! change.

// ! Header
/// Lines of license and banner text at the top of the file
pub(crate) const HEADER_LINES: usize = 37;

// ! Cell summary table
/// Marker on the title line of the cell summary table
pub(crate) const TABLE_MARKER: &str = "print table 60";

/// First table row relative to the title line
pub(crate) const TABLE_OFFSET: usize = 4;

/// Marker on the line following the last table row
pub(crate) const TABLE_END_MARKER: &str = "total";

/// Minimum number of whitespace-separated fields in a table row
pub(crate) const TABLE_ROW_FIELDS: usize = 9;

// ! Run status
/// Marker for a fatal error anywhere in the report
pub(crate) const FATAL_ERROR_MARKER: &str = "fatal error";

/// Markers which together indicate the run stopped on lost particles
pub(crate) const LOST_PARTICLE_MARKERS: [&str; 2] = ["run terminated", "particles got lost"];

// ! Input echo
/// Trailing whitespace on a blank echo line
pub(crate) const SECTION_DELIMITER: &str = "       ";

/// Delimiter occurrence (zero-based) opening the data card block
pub(crate) const DATA_BLOCK_OPEN: usize = 1;

/// Delimiter occurrence (zero-based) closing the data card block
pub(crate) const DATA_BLOCK_CLOSE: usize = 2;

/// Column that must be blank for a line to continue the previous card
pub(crate) const CONTINUATION_COLUMN: usize = 19;

/// Width of the echo label dropped from continuation lines
pub(crate) const LABEL_WIDTH: usize = 19;

/// Inline comment marker on input cards
pub(crate) const INLINE_COMMENT: char = '$';

// ! Tally results
/// Marker opening a tally results block
pub(crate) const TALLY_MARKER: &str = "1tally";

/// First line of the results block relative to the `1tally` line
pub(crate) const TALLY_OFFSET: usize = 6;

/// Marker closing a tally results block
pub(crate) const TALLY_END_MARKER: &str = "statistical checks";

/// Keyword on the header row of each cell in a results block
pub(crate) const CELL_KEYWORD: &str = "cell";

/// Lines per cell in a results block (header, value/error, spacer)
pub(crate) const TALLY_CYCLE: usize = 3;

// ! Run termination
/// Only this many lines at the end of the file are searched for the nps
pub(crate) const NPS_WINDOW: usize = 50;

/// Marker on the line reporting the number of histories
pub(crate) const NPS_MARKER: &str = "run terminated when";

/// Token index of the history count on the termination line
pub(crate) const NPS_TOKEN: usize = 3;

/// Marker on the run banner
pub(crate) const BANNER_MARKER: &str = "probid";
