use serde::Serialize;

/// Advisory flags for a run that did not end cleanly
///
/// These are set while loading and never stop a query from running. A run
/// that hit a fatal error or lost too many particles usually has meaningless
/// tally results, but the cell summary table may still be fine.
///
/// Only the first anomaly in the file is recorded, so at most one flag is set.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunStatus {
    /// A `fatal error` was reported
    pub fatal_error: bool,
    /// The run was terminated because too many particles got lost
    pub particles_lost: bool,
}

impl RunStatus {
    /// No anomalies were found
    pub fn is_clean(&self) -> bool {
        !(self.fatal_error || self.particles_lost)
    }
}

impl std::fmt::Display for RunStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match (self.fatal_error, self.particles_lost) {
            (true, _) => write!(f, "fatal error"),
            (_, true) => write!(f, "too many particles lost"),
            _ => write!(f, "ok"),
        }
    }
}
