use std::ops::Range;

/// A contiguous `(start, len)` window over a row or vector.
///
/// It never owns or copies data: `of` and `of_mut` project the window onto
/// whatever storage is passed in, so the same range can address the pivot
/// row, the target row and the right-hand side at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSlice {
    start: usize,
    len: usize,
}

impl RowSlice {
    pub fn new(start: usize, len: usize) -> Self {
        Self { start, len }
    }

    /// The tail `[start, row_len)` of a row with `row_len` elements.
    /// Empty when `start >= row_len`.
    pub fn tail(start: usize, row_len: usize) -> Self {
        Self {
            start: start.min(row_len),
            len: row_len.saturating_sub(start),
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.start + self.len
    }

    /// Panics if the window exceeds `data`, like slice indexing.
    pub fn of<'a, T>(&self, data: &'a [T]) -> &'a [T] {
        &data[self.range()]
    }

    pub fn of_mut<'a, T>(&self, data: &'a mut [T]) -> &'a mut [T] {
        &mut data[self.range()]
    }
}
