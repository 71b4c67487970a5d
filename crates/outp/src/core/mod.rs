mod cell;
mod cells;
mod status;
mod tally;

pub use cell::{CellRecord, CellTable};
pub use cells::Cells;
pub use status::RunStatus;
pub use tally::{TallyResult, TallyResults};
