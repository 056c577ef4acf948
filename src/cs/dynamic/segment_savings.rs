//! Maximum run-collapse savings over nested segment splits.
//!
//! For a right boundary `i` and a split point `j < i`, the elements strictly
//! between `j` and `i` form an open interval. Consecutive equal values inside
//! that interval collapse (every repeat after the first one of a run is saved),
//! and a match between the values at `j` and `i` saves `a[i]` once more. The
//! table `dp[i][j]` holds the best total obtainable that way, chained through
//! earlier boundaries.
//!
//! On non-negative sequences the same number is the best score of a 2-colouring
//! where an element scores its value whenever the nearest earlier element of
//! its own colour holds the same value. [`SegmentTable::best_coloring`] walks
//! the table back into such a colouring.

use log::{debug, trace};

use crate::error::{Error, Result};

/// One of the two groups an element can be placed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Red,
    Blue,
}

impl Color {
    /// Returns the other colour.
    pub fn flip(self) -> Self {
        match self {
            Color::Red => Color::Blue,
            Color::Blue => Color::Red,
        }
    }

    fn index(self) -> usize {
        match self {
            Color::Red => 0,
            Color::Blue => 1,
        }
    }
}

/// The filled DP table for one sequence, together with its two best-value arrays.
///
/// Boundaries are 1-indexed: row `i` corresponds to `values[i - 1]`, and split
/// point `0` is the virtual boundary before the first element.
#[derive(Debug, Clone)]
pub struct SegmentTable {
    n: usize,
    dp: Vec<Vec<i64>>,
    mxdp: Vec<i64>,
    exmxdp: Vec<i64>,
}

impl SegmentTable {
    /// Builds the table for `values`.
    ///
    /// Rows are filled left to right. For every split `j` of row `i` the open
    /// interval `(j, i)` is rescanned, so the build is cubic in the length of
    /// the sequence.
    ///
    /// # Panics
    ///
    /// Sums are plain `i64` additions: they panic on overflow in debug builds
    /// and wrap in release builds.
    ///
    /// # Examples
    ///
    /// ```
    /// use segment_savings::SegmentTable;
    ///
    /// let table = SegmentTable::build(&[3, 3, 1, 3]);
    /// assert_eq!(table.answer(), 6);
    /// assert_eq!(table.mxdp(), &[0, 0, 3, 3, 6]);
    /// assert_eq!(table.exmxdp(), &[0, 0, 0, 3, 6]);
    /// ```
    pub fn build(values: &[i64]) -> Self {
        let n = values.len();
        let mut dp = vec![vec![0_i64; n + 2]; n + 2];
        let mut mxdp = vec![0_i64; n + 2];
        let mut exmxdp = vec![0_i64; n + 2];

        for i in 1..=n {
            let right = values[i - 1];
            for j in 0..i {
                // Elements j+1 ..= i-1 in 1-indexed terms.
                let mut savings = run_savings(&values[j..i - 1]);
                if boundary_value(values, j) == Some(right) {
                    savings += right;
                }

                let continuation = if j + 1 == i {
                    mxdp[i - 1]
                } else {
                    exmxdp[j + 1]
                };
                dp[i][j] = dp[i][j].max(savings + continuation);
            }

            for j in 0..i {
                mxdp[i] = mxdp[i].max(dp[i][j]);
                if j + 1 != i {
                    exmxdp[i] = exmxdp[i].max(dp[i][j]);
                }
            }
            trace!("row {}: mxdp = {}, exmxdp = {}", i, mxdp[i], exmxdp[i]);
        }

        debug!("segment table over {} values: answer {}", n, mxdp[n]);
        Self {
            n,
            dp,
            mxdp,
            exmxdp,
        }
    }

    /// Number of values the table was built from.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Whether the table was built from an empty sequence.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// The optimal savings for the whole sequence, `mxdp[n]`.
    pub fn answer(&self) -> i64 {
        self.mxdp[self.n]
    }

    /// Returns `dp[i][j]`, or `None` unless `1 <= i <= n` and `j < i`.
    pub fn dp(&self, i: usize, j: usize) -> Option<i64> {
        if i == 0 || i > self.n || j >= i {
            return None;
        }
        Some(self.dp[i][j])
    }

    /// `mxdp[0..=n]`; index 0 is the empty prefix.
    pub fn mxdp(&self) -> &[i64] {
        &self.mxdp[..=self.n]
    }

    /// `exmxdp[0..=n]`; the degenerate split `j = i - 1` is left out of each entry.
    pub fn exmxdp(&self) -> &[i64] {
        &self.exmxdp[..=self.n]
    }

    /// Walks the table back from row `n` into a colouring that attains [`answer`].
    ///
    /// The last element is always [`Color::Red`]. Ties between split points go
    /// to the smallest one. The score equals the answer whenever the sequence
    /// holds no negative values.
    ///
    /// [`answer`]: SegmentTable::answer
    pub fn best_coloring(&self) -> Vec<Color> {
        if self.n == 0 {
            return Vec::new();
        }

        let mut colors = vec![Color::Red; self.n + 1];
        let mut row = self.n;
        let mut color = Color::Red;
        // Set when the previous step needs `row - 1` in the opposite colour.
        let mut exclusive = false;

        loop {
            let limit = if exclusive { row - 1 } else { row };
            let split = self.best_split(row, limit);

            colors[row] = color;
            for c in &mut colors[split + 1..row] {
                *c = color.flip();
            }

            if split == 0 {
                break;
            }
            if split + 1 == row {
                row -= 1;
                exclusive = false;
            } else {
                colors[split] = color;
                row = split + 1;
                color = color.flip();
                exclusive = true;
            }
        }

        colors.split_off(1)
    }

    fn best_split(&self, row: usize, limit: usize) -> usize {
        let cells = &self.dp[row][..limit];
        let mut best = 0;
        for (j, &value) in cells.iter().enumerate() {
            if value > cells[best] {
                best = j;
            }
        }
        best
    }
}

/// Value at 1-indexed boundary `j`; `None` for the virtual boundary `j = 0`.
fn boundary_value(values: &[i64], j: usize) -> Option<i64> {
    j.checked_sub(1).map(|k| values[k])
}

/// Sum of every element that repeats the one right before it.
fn run_savings(interior: &[i64]) -> i64 {
    let mut last_seen: Option<i64> = None;
    let mut savings = 0;
    for &value in interior {
        if last_seen == Some(value) {
            savings += value;
        } else {
            last_seen = Some(value);
        }
    }
    savings
}

/// Computes the maximum total savings for `values`.
///
/// # Examples
///
/// ```
/// use segment_savings::max_savings;
///
/// assert_eq!(max_savings(&[1, 1, 1]), 2);
/// assert_eq!(max_savings(&[7, 7]), 7);
/// assert_eq!(max_savings(&[3, 9]), 0);
/// ```
pub fn max_savings(values: &[i64]) -> i64 {
    SegmentTable::build(values).answer()
}

/// Builds the table for `values` and returns an optimal colouring.
///
/// # Examples
///
/// ```
/// use segment_savings::{best_coloring, coloring_score, max_savings};
///
/// let values = [2, 1, 2, 1, 1, 2];
/// let colors = best_coloring(&values);
/// assert_eq!(coloring_score(&values, &colors).unwrap(), max_savings(&values));
/// ```
pub fn best_coloring(values: &[i64]) -> Vec<Color> {
    SegmentTable::build(values).best_coloring()
}

/// Scores a colouring directly: each element whose nearest earlier element of
/// the same colour has the same value contributes its value.
///
/// Returns [`Error::LengthMismatch`] if `colors` and `values` differ in length.
pub fn coloring_score(values: &[i64], colors: &[Color]) -> Result<i64> {
    if values.len() != colors.len() {
        return Err(Error::LengthMismatch {
            values: values.len(),
            colors: colors.len(),
        });
    }

    let mut last = [None::<i64>; 2];
    let mut score = 0;
    for (&value, &color) in values.iter().zip(colors) {
        let slot = &mut last[color.index()];
        if *slot == Some(value) {
            score += value;
        }
        *slot = Some(value);
    }
    Ok(score)
}
