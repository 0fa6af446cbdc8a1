//! Byte-offset helpers for editing UTF-8 values.
//!
//! Every offset that comes out of here is on a char boundary, so callers can
//! slice with it.

use std::borrow::Cow;

/// Snap `index` back to the start of the character it falls in, or to
/// `s.len()` past the end.
///
/// ```
/// use input_core::clamp_to_char_boundary;
///
/// let s = "a€b"; // '€' spans bytes 1..4
/// assert_eq!(clamp_to_char_boundary(s, 2), 1);
/// assert_eq!(clamp_to_char_boundary(s, 100), 5);
/// ```
#[inline]
pub fn clamp_to_char_boundary(s: &str, index: usize) -> usize {
    let index = index.min(s.len());
    (0..=index)
        .rev()
        .find(|i| s.is_char_boundary(*i))
        .unwrap_or(0)
}

/// Start of the character before `i`; `0` at the start.
///
/// ```
/// use input_core::prev_cursor_boundary;
///
/// assert_eq!(prev_cursor_boundary("a€b", 4), 1);
/// assert_eq!(prev_cursor_boundary("a€b", 0), 0);
/// ```
pub fn prev_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[..i]
        .chars()
        .next_back()
        .map_or(0, |ch| i - ch.len_utf8())
}

/// End of the character at `i`; `s.len()` at the end.
///
/// ```
/// use input_core::next_cursor_boundary;
///
/// assert_eq!(next_cursor_boundary("a€b", 1), 4);
/// assert_eq!(next_cursor_boundary("a€b", 5), 5);
/// ```
pub fn next_cursor_boundary(s: &str, i: usize) -> usize {
    let i = clamp_to_char_boundary(s, i);
    s[i..]
        .chars()
        .next()
        .map_or(s.len(), |ch| i + ch.len_utf8())
}

/// Drop CR and LF: a single-line input never holds a line break.
///
/// ```
/// use input_core::filter_single_line;
///
/// assert_eq!(filter_single_line("a\r\nb"), "ab");
/// ```
pub fn filter_single_line(s: &str) -> Cow<'_, str> {
    let is_break = |c: char| c == '\n' || c == '\r';
    if s.contains(is_break) {
        Cow::Owned(s.chars().filter(|c| !is_break(*c)).collect())
    } else {
        Cow::Borrowed(s)
    }
}

/// Return `value` with the bytes in `start..end` removed.
///
/// Both ends are clamped to character boundaries first, so an out-of-range
/// or mid-character range never panics; it shrinks to what is valid.
///
/// ```
/// use input_core::remove_range;
///
/// assert_eq!(remove_range("hello", 1, 4), "ho");
/// assert_eq!(remove_range("hello", 3, 99), "hel");
/// ```
pub fn remove_range(value: &str, start: usize, end: usize) -> String {
    let start = clamp_to_char_boundary(value, start);
    let end = clamp_to_char_boundary(value, end).max(start);
    let mut out = String::with_capacity(value.len() - (end - start));
    out.push_str(&value[..start]);
    out.push_str(&value[end..]);
    out
}
