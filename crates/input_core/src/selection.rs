//! Byte-offset selections inside an input value.

/// Half-open byte range `[start, end)` with `start <= end`. When the two
/// are equal the range is just a caret.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: usize,
    pub end: usize,
}

impl SelectionRange {
    /// Order the two endpoints; a backwards drag gives `a > b`.
    #[inline]
    pub fn new(a: usize, b: usize) -> Self {
        let (start, end) = if a <= b { (a, b) } else { (b, a) };
        Self { start, end }
    }

    /// A collapsed range at `pos`.
    #[inline]
    pub fn caret(pos: usize) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    /// Build a range from a start offset and a length, the shape legacy
    /// selection queries report.
    #[inline]
    pub fn from_start_len(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start.saturating_add(len),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bytes covered.
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns the selected substring, or `None` when the range does not fall
    /// on character boundaries inside `value`.
    #[inline]
    pub fn slice<'a>(&self, value: &'a str) -> Option<&'a str> {
        value.get(self.start..self.end)
    }
}
