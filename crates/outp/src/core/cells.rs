/// Selection of cells for the per-cell table queries
///
/// Queries accept anything that converts into [Cells], so a single cell
/// number and any list of them are both fine.
///
/// ```rust
/// # use mcpost_outp::Cells;
/// assert_eq!(Cells::from(101), Cells::Single(101));
/// assert_eq!(Cells::from([101, 102]), Cells::Many(vec![101, 102]));
/// assert_eq!(Cells::from(&[101, 102][..]), Cells::Many(vec![101, 102]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cells {
    /// One cell
    Single(u32),
    /// Any number of cells
    Many(Vec<u32>),
}

impl Cells {
    /// View the selection as a slice of cell numbers
    pub fn as_slice(&self) -> &[u32] {
        match self {
            Self::Single(id) => std::slice::from_ref(id),
            Self::Many(ids) => ids,
        }
    }
}

impl From<u32> for Cells {
    fn from(id: u32) -> Self {
        Self::Single(id)
    }
}

impl From<Vec<u32>> for Cells {
    fn from(ids: Vec<u32>) -> Self {
        Self::Many(ids)
    }
}

impl From<&[u32]> for Cells {
    fn from(ids: &[u32]) -> Self {
        Self::Many(ids.to_vec())
    }
}

impl From<&Vec<u32>> for Cells {
    fn from(ids: &Vec<u32>) -> Self {
        Self::Many(ids.clone())
    }
}

impl<const N: usize> From<[u32; N]> for Cells {
    fn from(ids: [u32; N]) -> Self {
        Self::Many(ids.to_vec())
    }
}
