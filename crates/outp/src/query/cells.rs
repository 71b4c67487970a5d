// crate modules
use crate::error::{Error, Result};
use crate::{CellRecord, Cells, Outp};

// standard library
use std::collections::HashMap;

// ! Cell summary table
impl Outp {
    /// Cell volumes (cc)
    ///
    /// Takes a single cell or any list of cells. Every requested cell must be
    /// in the table, otherwise this fails with
    /// [Error::CellNotFound](crate::Error::CellNotFound) for the first one
    /// missing and nothing is returned.
    ///
    /// ```rust, no_run
    /// # use mcpost_outp::Outp;
    /// let outp = Outp::from_file("path/to/outp").unwrap();
    ///
    /// let volume = outp.volumes(101).unwrap()[&101];
    /// let volumes = outp.volumes([101, 102, 293]).unwrap();
    /// ```
    pub fn volumes<C: Into<Cells>>(&self, cells: C) -> Result<HashMap<u32, f64>> {
        self.select(cells.into(), |r| r.volume)
    }

    /// Cell atom densities (atoms/b-cm)
    pub fn atom_density<C: Into<Cells>>(&self, cells: C) -> Result<HashMap<u32, f64>> {
        self.select(cells.into(), |r| r.atom_density)
    }

    /// Cell mass densities (g/cc)
    pub fn mass_density<C: Into<Cells>>(&self, cells: C) -> Result<HashMap<u32, f64>> {
        self.select(cells.into(), |r| r.mass_density)
    }

    /// Total cell masses (g)
    pub fn mass<C: Into<Cells>>(&self, cells: C) -> Result<HashMap<u32, f64>> {
        self.select(cells.into(), |r| r.mass)
    }

    /// Number of pieces making up each cell
    pub fn pieces<C: Into<Cells>>(&self, cells: C) -> Result<HashMap<u32, f64>> {
        self.select(cells.into(), |r| r.pieces)
    }

    /// Cell importances
    pub fn importance<C: Into<Cells>>(&self, cells: C) -> Result<HashMap<u32, f64>> {
        self.select(cells.into(), |r| r.importance)
    }

    /// Material number of each cell, `0` for void
    pub fn material<C: Into<Cells>>(&self, cells: C) -> Result<HashMap<u32, u32>> {
        self.select(cells.into(), |r| r.material)
    }

    /// Pick one field from the records of every requested cell
    fn select<T, F>(&self, cells: Cells, field: F) -> Result<HashMap<u32, T>>
    where
        F: Fn(&CellRecord) -> T,
    {
        if !self.has_cell_table {
            return Err(Error::TableNotFound);
        }

        cells
            .as_slice()
            .iter()
            .map(|&id| match self.cells.get(id) {
                Some(record) => Ok((id, field(record))),
                None => Err(Error::CellNotFound(id)),
            })
            .collect()
    }
}
