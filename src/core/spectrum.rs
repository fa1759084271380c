use serde::{Deserialize, Serialize};

/// Log-power matrix produced by one analysis call.
///
/// Rows are frequency (velocity) bins, columns are successive window
/// positions. Stored row-major.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpectrumSlice {
    rows: usize,
    columns: usize,
    data: Vec<f64>,
}

impl SpectrumSlice {
    pub fn zeros(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            data: vec![0.0; rows * columns],
        }
    }

    /// Build from row-major data. Returns `None` when the length does not
    /// match `rows * columns`.
    pub fn from_row_major(rows: usize, columns: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != rows * columns {
            return None;
        }
        Some(Self { rows, columns, data })
    }

    /// Build from a list of columns, each `rows` long.
    pub fn from_columns(rows: usize, columns: &[Vec<f64>]) -> Option<Self> {
        if columns.iter().any(|c| c.len() != rows) {
            return None;
        }
        let mut slice = Self::zeros(rows, columns.len());
        for (col, values) in columns.iter().enumerate() {
            for (row, &value) in values.iter().enumerate() {
                slice.data[row * slice.columns + col] = value;
            }
        }
        Some(slice)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.columns == 0
    }

    pub fn get(&self, row: usize, column: usize) -> f64 {
        self.data[row * self.columns + column]
    }

    pub fn row(&self, row: usize) -> &[f64] {
        &self.data[row * self.columns..(row + 1) * self.columns]
    }

    /// Copy out one column (one window position across all bins)
    pub fn column(&self, column: usize) -> Vec<f64> {
        (0..self.rows).map(|row| self.get(row, column)).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn map_in_place(&mut self, f: impl Fn(f64) -> f64) {
        for value in self.data.iter_mut() {
            *value = f(*value);
        }
    }

    /// Mean over time of every bin
    pub fn row_means(&self) -> Vec<f64> {
        if self.columns == 0 {
            return vec![0.0; self.rows];
        }
        (0..self.rows)
            .map(|row| self.row(row).iter().sum::<f64>() / self.columns as f64)
            .collect()
    }
}
