// All line parsers split amoung files for organisation
mod echo;
mod number;
mod table;
mod tally;

// Internal re-exports for convenience
pub(crate) use echo::*;
pub(crate) use number::*;
pub(crate) use table::*;
pub(crate) use tally::*;
