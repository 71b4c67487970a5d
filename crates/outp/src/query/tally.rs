// crate modules
use crate::error::{Error, Result};
use crate::layout::*;
use crate::parsers::*;
use crate::{Outp, TallyResult, TallyResults};

// mcpost modules
use mcpost_utils::{f, StringExt};

// external crates
use log::{debug, trace, warn};

// ! Tally cell lists from the input echo
impl Outp {
    /// Cells listed on a tally card, in the order they were declared
    ///
    /// The card is found in the data card block of the input echo by its
    /// name, e.g. `f4:n` or `*F4:n`, and the list follows any continuation
    /// lines. The `particle` is the designator after the colon, usually
    /// `"n"` or `"p"`.
    ///
    /// ```text
    ///    12-       f4:n  101
    ///    13-               102 293
    /// ```
    ///
    /// A comment line or `$` comment inside the card ends the list early. A
    /// warning is logged when this happens since later cells may be missing.
    ///
    /// ```rust, no_run
    /// # use mcpost_outp::Outp;
    /// let outp = Outp::from_file("path/to/outp").unwrap();
    /// let cells: Vec<u32> = outp.tally_cells(4, "n").unwrap();
    /// ```
    pub fn tally_cells(&self, id: u32, particle: &str) -> Result<Vec<u32>> {
        let cards = self.data_cards()?;

        let (first, declared) = cards
            .iter()
            .enumerate()
            .find_map(|(n, line)| declared_cells(line, id, particle).map(|cells| (n, cells)))
            .ok_or_else(|| Error::TallyNotDeclared {
                tally: id,
                particle: particle.to_string(),
            })?;
        debug!("Found f{id}:{particle} card: {:?}", cards[first]);

        let mut cells = Vec::new();
        if !push_cells(declared, id, &mut cells)? {
            return Ok(cells);
        }

        for line in &cards[first + 1..] {
            // anything not indented past the label is a new card
            if line.char_at(CONTINUATION_COLUMN) != Some(' ') {
                if is_comment_card(line) {
                    warn!("Comment line ends the f{id} cell list, later cells may be missing");
                }
                break;
            }

            if is_comment_card(line) {
                warn!("Comment line inside the f{id} cell list, later cells may be missing");
                break;
            }

            trace!("Continuation: {line:?}");
            if !push_cells(line.skip_chars(LABEL_WIDTH), id, &mut cells)? {
                break;
            }
        }

        debug!("Tally {id} cells: {cells:?}");
        Ok(cells)
    }

    /// Lines of the data card block, between the second and third delimiter
    fn data_cards(&self) -> Result<&[String]> {
        let delimiters: Vec<usize> = self
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| is_section_delimiter(line))
            .map(|(n, _)| n)
            .take(DATA_BLOCK_CLOSE + 1)
            .collect();

        match (delimiters.get(DATA_BLOCK_OPEN), delimiters.get(DATA_BLOCK_CLOSE)) {
            (Some(&open), Some(&close)) => Ok(&self.lines[open + 1..close]),
            _ => Err(Error::DelimiterNotFound {
                found: delimiters.len(),
            }),
        }
    }
}

/// Append the cell numbers in `text`
///
/// Returns `false` if a `$` comment cut the line short, after which nothing
/// more of the card can be trusted.
fn push_cells(text: &str, id: u32, cells: &mut Vec<u32>) -> Result<bool> {
    let (text, is_commented) = match text.split_once(INLINE_COMMENT) {
        Some((before, _)) => (before, true),
        None => (text, false),
    };

    for token in text.split_whitespace() {
        let (_, cell) = uint32(token)
            .ok()
            .filter(|(rest, _)| rest.is_empty())
            .ok_or_else(|| Error::ParseError(f!("invalid cell {token:?} on the f{id} card")))?;
        cells.push(cell);
    }

    if is_commented {
        warn!("Inline comment ends the f{id} cell list, later cells may be missing");
    }
    Ok(!is_commented)
}

// ! Tally results
impl Outp {
    /// Results of a tally for each cell
    ///
    /// Finds the results block for tally `id` and reads the value and
    /// relative error of every cell. If `cells` are given, only those are
    /// returned and every one must be in the tally, otherwise this fails with
    /// [Error::CellNotInTally](crate::Error::CellNotInTally).
    ///
    /// Totals over all cells are not included.
    ///
    /// ```rust, no_run
    /// # use mcpost_outp::Outp;
    /// let outp = Outp::from_file("path/to/outp").unwrap();
    ///
    /// // everything in the tally
    /// let results = outp.tally_values(4, None).unwrap();
    ///
    /// // only a couple of cells
    /// let results = outp.tally_values(4, Some(&[101, 293][..])).unwrap();
    /// println!("{}", results[&101]);
    /// ```
    pub fn tally_values(&self, id: u32, cells: Option<&[u32]>) -> Result<TallyResults> {
        let block = self.results_block(id)?;
        let results = cell_results(block, id)?;
        debug!("Tally {id} results: {} cells", results.len());

        let Some(cells) = cells else {
            return Ok(results);
        };

        cells
            .iter()
            .map(|&cell| match results.get(&cell) {
                Some(result) => Ok((cell, *result)),
                None => Err(Error::CellNotInTally { cell, tally: id }),
            })
            .collect()
    }

    /// Lines from the start of the tally results up to the end marker or the
    /// first empty line
    fn results_block(&self, id: u32) -> Result<&[String]> {
        let header = self
            .lines
            .iter()
            .position(|line| is_tally_header(line, id))
            .ok_or(Error::TallyNotFound(id))?;

        let start = header + TALLY_OFFSET;
        let block = self.lines.get(start..).unwrap_or_default();
        let end = block
            .iter()
            .position(|line| line.contains(TALLY_END_MARKER) || line.is_empty())
            .unwrap_or(block.len());

        debug!("Tally {id} results on lines {}-{}", start + 1, start + end);
        Ok(&block[..end])
    }
}

/// Read the repeating header/result/spacer rows of a results block
fn cell_results(block: &[String], id: u32) -> Result<TallyResults> {
    let mut results = TallyResults::new();

    for rows in block[cycle_start(block)..].chunks(TALLY_CYCLE) {
        let header = &rows[0];
        let Ok((label, _)) = cell_row(header) else {
            debug!("End of tally {id} results at {header:?}");
            break;
        };

        let row = rows.get(1).ok_or_else(|| {
            Error::ParseError(f!("missing result for {:?} in tally {id}", header.trim()))
        })?;

        match cell_header(header) {
            Ok((_, cell)) => {
                let (_, (value, error)) = value_error(row).map_err(|_| {
                    Error::ParseError(f!("invalid result {row:?} for cell {cell} in tally {id}"))
                })?;
                trace!("Cell {cell}: {value} {error}");
                results.insert(cell, TallyResult { value, error });
            }
            // totals and grouped cells
            Err(_) => debug!("Skipped tally {id} result for {:?}", label.trim()),
        }
    }

    if results.is_empty() {
        return Err(Error::ParseError(f!("no cell results found for tally {id}")));
    }
    Ok(results)
}

/// Index of the first cell row of the repeating cycle
///
/// The block may open with a row listing the cells before the results
/// themselves. The first cell number on that row is found again on the row
/// heading its result, which is where the cycle really starts.
fn cycle_start(block: &[String]) -> usize {
    let Some(first) = block
        .first()
        .and_then(|line| line.token(1))
        .and_then(|token| token.parse::<u32>().ok())
    else {
        return 0;
    };

    block
        .iter()
        .skip(1)
        .position(|line| matches!(cell_header(line), Ok((_, cell)) if cell == first))
        .map_or(0, |n| n + 1)
}
