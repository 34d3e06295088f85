/// Running bottoms of the columns during a single layout computation.
#[derive(Debug, Clone)]
pub(crate) struct ColumnState {
    bottoms: Vec<f64>,
}

impl ColumnState {
    /// Creates `count` empty columns.
    pub fn new(count: usize) -> ColumnState {
        ColumnState {
            bottoms: vec![0.; count],
        }
    }

    /// Returns the column with the lowest bottom.
    ///
    /// Ties go to the lowest column index.
    pub fn shortest(&self) -> usize {
        let mut shortest = 0;
        for (column, &bottom) in self.bottoms.iter().enumerate().skip(1) {
            if bottom < self.bottoms[shortest] {
                shortest = column;
            }
        }
        shortest
    }

    pub fn bottom(&self, column: usize) -> f64 {
        self.bottoms[column]
    }

    /// Moves the bottom of a column down to `bottom`.
    pub fn place(&mut self, column: usize, bottom: f64) {
        debug_assert!(bottom >= self.bottoms[column], "columns only grow");
        self.bottoms[column] = bottom;
    }

    /// Returns the bottom edge furthest down across all columns.
    pub fn max_bottom(&self) -> f64 {
        self.bottoms.iter().cloned().fold(0., f64::max)
    }
}
