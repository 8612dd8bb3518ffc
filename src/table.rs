use crate::errors::ContingencyError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::AddAssign;

/// An owned, row-major table of cell values.
///
/// Observed frequency tables are `Table<u64>` (counts are non-negative by
/// construction); expected counts and standardized residuals are `Table<f64>`.
/// The tables handled here are small cross-tabulations, so the data is kept
/// in a single contiguous `Vec` and indexed by stride.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table<T> {
    /// The raw cell values in row-major order.
    pub data: Vec<T>,
    /// Number of rows.
    pub rows: usize,
    /// Number of columns.
    pub cols: usize,
}

impl<T> Table<T> {
    /// Create a new table from row-major data.
    ///
    /// * `data` - Cell values, row by row.
    /// * `rows` - Number of rows.
    /// * `cols` - Number of columns.
    pub fn new(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, ContingencyError> {
        if data.len() != rows * cols {
            return Err(ContingencyError::InvalidShape(
                format!("{} cells for a {}x{} table", rows * cols, rows, cols),
                format!("{} cells", data.len()),
            ));
        }
        Ok(Table { data, rows, cols })
    }

    /// Get a single reference to an item in the table.
    ///
    /// * `i` - The ith row of the data to get.
    /// * `j` - The jth column of the data to get.
    pub fn get(&self, i: usize, j: usize) -> &T {
        &self.data[i * self.cols + j]
    }

    /// The `(rows, cols)` shape of the table.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }
}

impl<T> Table<T>
where
    T: Copy,
{
    /// Build a table from a slice of rows, checking that the rows line up.
    pub fn from_rows(rows: &[Vec<T>]) -> Result<Self, ContingencyError> {
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(n_rows * n_cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n_cols {
                return Err(ContingencyError::InvalidShape(
                    format!("{} columns in every row", n_cols),
                    format!("{} columns in row {}", row.len(), i),
                ));
            }
            data.extend_from_slice(row);
        }
        Table::new(data, n_rows, n_cols)
    }
}

impl<T> Table<T>
where
    T: Copy + Default + AddAssign,
{
    /// Row marginals: the sum of every row.
    pub fn row_sums(&self) -> Vec<T> {
        let mut sums = vec![T::default(); self.rows];
        for (idx, v) in self.data.iter().enumerate() {
            sums[idx / self.cols] += *v;
        }
        sums
    }

    /// Column marginals: the sum of every column.
    pub fn col_sums(&self) -> Vec<T> {
        let mut sums = vec![T::default(); self.cols];
        for (idx, v) in self.data.iter().enumerate() {
            sums[idx % self.cols] += *v;
        }
        sums
    }

    /// The grand total over all cells.
    pub fn total(&self) -> T {
        let mut total = T::default();
        for v in &self.data {
            total += *v;
        }
        total
    }
}

impl<T> fmt::Display for Table<T>
where
    T: fmt::Display,
{
    /// Format a Table, one row per line.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut val = String::new();
        for i in 0..self.rows {
            for j in 0..self.cols {
                val.push_str(self.get(i, j).to_string().as_str());
                if j == (self.cols - 1) {
                    val.push('\n');
                } else {
                    val.push(' ');
                }
            }
        }
        write!(f, "{}", val)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_get() {
        let t = Table::new(vec![1_u64, 2, 3, 5, 6, 7], 2, 3).unwrap();
        assert_eq!(t.get(0, 0), &1);
        assert_eq!(t.get(1, 0), &5);
        assert_eq!(t.get(0, 2), &3);
        assert_eq!(t.get(1, 1), &6);
    }

    #[test]
    fn test_table_bad_shape() {
        let res = Table::new(vec![1_u64, 2, 3], 2, 2);
        assert!(res.is_err());
    }

    #[test]
    fn test_table_from_rows() {
        let t = Table::from_rows(&[vec![10_u64, 20], vec![30, 40]]).unwrap();
        assert_eq!(t.shape(), (2, 2));
        assert_eq!(t.get(1, 1), &40);
    }

    #[test]
    fn test_table_from_jagged_rows() {
        let res = Table::from_rows(&[vec![10_u64, 20], vec![30]]);
        assert!(res.is_err());
    }

    #[test]
    fn test_table_marginals() {
        let t = Table::from_rows(&[vec![10_u64, 20], vec![30, 40]]).unwrap();
        assert_eq!(t.row_sums(), vec![30, 70]);
        assert_eq!(t.col_sums(), vec![40, 60]);
        assert_eq!(t.total(), 100);
    }

    #[test]
    fn test_table_display() {
        let t = Table::from_rows(&[vec![1_u64, 2], vec![3, 4]]).unwrap();
        assert_eq!(format!("{}", t), "1 2\n3 4\n");
    }
}
