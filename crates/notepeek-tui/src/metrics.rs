/// Conversion between device-independent pixels and terminal cells
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellMetrics {
    pub px_per_col: f64,
    pub px_per_row: f64,
}

impl Default for CellMetrics {
    fn default() -> Self {
        Self {
            px_per_col: 8.0,
            px_per_row: 16.0,
        }
    }
}

impl CellMetrics {
    pub fn new(px_per_col: f64, px_per_row: f64) -> Self {
        let fallback = Self::default();
        Self {
            px_per_col: if px_per_col > 0.0 { px_per_col } else { fallback.px_per_col },
            px_per_row: if px_per_row > 0.0 { px_per_row } else { fallback.px_per_row },
        }
    }

    /// Horizontal pixel offset in whole columns
    pub fn cols(&self, px: f64) -> i32 {
        (px / self.px_per_col).round() as i32
    }

    /// Vertical pixel offset in whole rows
    pub fn rows(&self, px: f64) -> i32 {
        (px / self.px_per_row).round() as i32
    }

    pub fn rows_to_px(&self, rows: u16) -> f64 {
        rows as f64 * self.px_per_row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_to_cells() {
        let m = CellMetrics::default();
        assert_eq!(m.cols(-100.0), -13);
        assert_eq!(m.rows(80.0), 5);
        assert_eq!(m.rows(-50.0), -3);
        assert_eq!(m.rows_to_px(3), 48.0);
    }

    #[test]
    fn test_non_positive_sizes_fall_back() {
        let m = CellMetrics::new(0.0, -4.0);
        assert_eq!(m, CellMetrics::default());
    }
}
