// standard library
use std::collections::btree_map::{self, BTreeMap};

// mcpost modules
use mcpost_utils::ValueExt;

// external crates
use serde::Serialize;

/// One row of the cell summary table
///
/// MCNP prints properties of every physical cell in `print table 60`.
///
/// ```text
///                                atom        gram                                            neutron
///               cell      mat   density     density     volume       mass            pieces importance
///
///         1      101        1  8.47552E-02 7.86000E+00 4.18879E+03 3.29239E+04           1  1.0000E+00
/// ```
///
/// The leading running index is not kept, the remaining columns are stored
/// in order.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct CellRecord {
    /// Cell number
    pub id: u32,
    /// Material number, `0` for void
    pub material: u32,
    /// Atom density (atoms/b-cm)
    pub atom_density: f64,
    /// Mass density (g/cc)
    pub mass_density: f64,
    /// Volume (cc)
    pub volume: f64,
    /// Total mass (g)
    pub mass: f64,
    /// Number of pieces
    pub pieces: f64,
    /// Importance of the first listed particle
    pub importance: f64,
}

impl std::fmt::Display for CellRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>8} {:>8} {} {} {} {} {:>6} {}",
            self.id,
            self.material,
            self.atom_density.sci(5, 2),
            self.mass_density.sci(5, 2),
            self.volume.sci(5, 2),
            self.mass.sci(5, 2),
            self.pieces,
            self.importance.sci(4, 2),
        )
    }
}

/// Cell summary table keyed on cell number
///
/// Built once when the file is loaded and read-only afterwards. Iteration is
/// in ascending cell number.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CellTable {
    records: BTreeMap<u32, CellRecord>,
}

impl CellTable {
    /// Create a new empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record, returning any previous record for the same cell
    pub(crate) fn insert(&mut self, record: CellRecord) -> Option<CellRecord> {
        self.records.insert(record.id, record)
    }

    /// Find the record for a cell
    pub fn get(&self, id: u32) -> Option<&CellRecord> {
        self.records.get(&id)
    }

    /// Check if a cell is in the table
    pub fn contains(&self, id: u32) -> bool {
        self.records.contains_key(&id)
    }

    /// Number of cells in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if no rows were read
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Cell numbers in ascending order
    pub fn ids(&self) -> impl Iterator<Item = u32> + '_ {
        self.records.keys().copied()
    }

    /// Records in ascending cell order
    pub fn iter(&self) -> btree_map::Values<'_, u32, CellRecord> {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a CellTable {
    type Item = &'a CellRecord;
    type IntoIter = btree_map::Values<'a, u32, CellRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
