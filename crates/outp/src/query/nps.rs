// crate modules
use crate::error::{Error, Result};
use crate::layout::{BANNER_MARKER, NPS_MARKER, NPS_TOKEN, NPS_WINDOW};
use crate::Outp;

// mcpost modules
use mcpost_utils::{f, StringExt};

// external crates
use log::{debug, warn};

// ! Run termination
impl Outp {
    /// Number of particle histories run
    ///
    /// Taken from the termination line near the end of a finished run:
    ///
    /// ```text
    ///  run terminated when      100000  particle histories were done.
    /// ```
    ///
    /// Only the last few lines of the report are searched. If the final run
    /// banner (the line with `probid`) comes first, the run did not finish and
    /// this fails with [Error::RunIncomplete](crate::Error::RunIncomplete).
    pub fn nps(&self) -> Result<u64> {
        let window = &self.lines[self.lines.len().saturating_sub(NPS_WINDOW)..];

        for line in window {
            if line.contains(NPS_MARKER) {
                let token = line.token(NPS_TOKEN).unwrap_or_default();
                let nps = token.parse::<u64>().map_err(|_| {
                    Error::ParseError(f!("invalid number of histories {token:?} in {line:?}"))
                })?;
                debug!("NPS = {nps}");
                return Ok(nps);
            }

            if line.contains(BANNER_MARKER) {
                warn!("Run banner found before the termination line, did the run finish?");
                return Err(Error::RunIncomplete);
            }
        }

        Err(Error::NpsNotFound)
    }
}
