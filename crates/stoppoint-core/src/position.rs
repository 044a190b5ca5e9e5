//! Editor cursor positions and their byte offsets.
//!
//! Editors address text by (row, column) where columns count visual units:
//! one per Unicode code point, with tabs advancing to the next tab stop.
//! Parsers address text by byte offset. [`byte_offset_for_position`] bridges
//! the two.

use std::num::NonZeroU32;

/// A cursor coordinate in the editor's coordinate system.
///
/// Whether it is 0-based or 1-based depends on where it comes from: the
/// caller-facing boundary is 1-based, [`byte_offset_for_position`] works on
/// 0-based targets. See [`Point::truncation_target`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub row: u32,
    pub column: u32,
}

impl Point {
    pub const ORIGIN: Point = Point { row: 0, column: 0 };

    pub const fn new(row: u32, column: u32) -> Self {
        Self { row, column }
    }

    /// The position one row and one column unit before this one, saturating
    /// at 0.
    ///
    /// Applied to a 1-based stop point this yields the 0-based position of
    /// the cursor, which is where the input gets truncated: everything
    /// strictly before the cursor is parsed, the token under the cursor is
    /// left to the recovery search.
    pub const fn truncation_target(self) -> Self {
        Self {
            row: self.row.saturating_sub(1),
            column: self.column.saturating_sub(1),
        }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.row, self.column)
    }
}

/// Distance between tab stops, in columns. Never zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct TabWidth(NonZeroU32);

impl TabWidth {
    pub const DEFAULT: TabWidth = TabWidth(NonZeroU32::new(4).unwrap());

    /// Returns `None` for a zero width.
    pub const fn new(width: u32) -> Option<Self> {
        match NonZeroU32::new(width) {
            Some(w) => Some(Self(w)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Column reached by a tab typed at `column`.
    pub const fn next_stop(self, column: u32) -> u32 {
        let width = self.0.get();
        (column / width + 1).saturating_mul(width)
    }
}

impl Default for TabWidth {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Map a 0-based (row, column) position onto a byte offset of `text`.
///
/// Walks the text from the start and stops at the first unit whose position
/// is at or past `target`. Line terminators are `\n` and `\r\n` (a lone `\r`
/// is an ordinary character). Every code point counts as one column; its
/// continuation bytes are never split off.
///
/// A terminator is consumed before the next check, so a column past the end
/// of its line lands at the start of the following line (`"ab\ncd"`, row 0,
/// column 10 gives 3). A row past the last line gives `text.len()`.
/// Malformed UTF-8 never reads out of bounds.
pub fn byte_offset_for_position(text: &[u8], target: Point, tab_width: TabWidth) -> usize {
    let mut offset = 0;
    let mut row = 0u32;
    let mut col = 0u32;

    while offset < text.len() {
        if row > target.row || (row == target.row && col >= target.column) {
            return offset;
        }

        let byte = text[offset];
        match byte {
            b'\n' => {
                row += 1;
                col = 0;
                offset += 1;
            }
            b'\r' if text.get(offset + 1) == Some(&b'\n') => {
                row += 1;
                col = 0;
                offset += 2;
            }
            b'\t' => {
                col = tab_width.next_stop(col);
                offset += 1;
            }
            _ => {
                col = col.saturating_add(1);
                offset += 1;
                if byte >= 0xC0 {
                    offset += continuation_len(&text[offset..]);
                }
            }
        }
    }

    text.len()
}

/// Number of leading UTF-8 continuation bytes (`0b10xx_xxxx`).
fn continuation_len(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|&&b| b & 0xC0 == 0x80).count()
}
