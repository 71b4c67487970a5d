//! Result and Error types for mcpost-outp

/// Type alias for `Result<T, outp::Error>`
pub type Result<T> = core::result::Result<T, Error>;

/// The error type for the `mcpost-outp` crate
///
/// Variants fall into three groups:
///
/// - I/O failures when loading the file, which abort the load
/// - Parse failures, raised by the query that needed a structure the report
///   does not contain (see [Error::is_parse_error])
/// - Key failures, raised when a caller asks for a cell that is not in the
///   relevant table (see [Error::is_key_error])
///
/// None of these invalidate the loaded [Outp](crate::Outp). Other queries may
/// still succeed.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Underlying file I/O error
    #[error("failed input/output stream")]
    IOError(#[from] std::io::Error),

    /// No cell summary table (print table 60) was found at load time
    #[error("cell summary table (print table 60) not found")]
    TableNotFound,

    /// Fewer than three blank section delimiters in the input echo
    #[error("input echo section delimiters not found (expected 3, found {found})")]
    DelimiterNotFound { found: usize },

    /// The tally card is not in the data card block of the input echo
    #[error("tally f{tally}:{particle} is not declared in the input echo")]
    TallyNotDeclared { tally: u32, particle: String },

    /// No `1tally` results block for the requested tally
    #[error("results for tally {0} not found")]
    TallyNotFound(u32),

    /// The run banner recurs at the end of the file without a termination line
    #[error("run did not complete, no termination line before the final banner")]
    RunIncomplete,

    /// Neither the termination line nor a banner in the final lines
    #[error("number of particle histories not found")]
    NpsNotFound,

    /// Malformed content inside a block that was otherwise located
    #[error("parser failed: {0}")]
    ParseError(String),

    /// Requested cell is not in the cell summary table
    #[error("cell {0} not found")]
    CellNotFound(u32),

    /// Requested cell is not in the results of the tally
    #[error("cell {cell} not found in tally {tally}")]
    CellNotInTally { cell: u32, tally: u32 },
}

impl Error {
    /// True for failures to locate or read a structure in the report
    pub fn is_parse_error(&self) -> bool {
        matches!(
            self,
            Self::TableNotFound
                | Self::DelimiterNotFound { .. }
                | Self::TallyNotDeclared { .. }
                | Self::TallyNotFound(_)
                | Self::RunIncomplete
                | Self::NpsNotFound
                | Self::ParseError(_)
        )
    }

    /// True for requests naming a cell that is absent from the relevant table
    pub fn is_key_error(&self) -> bool {
        matches!(self, Self::CellNotFound(_) | Self::CellNotInTally { .. })
    }
}
