use std::ops::Range;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Walks the source line by line, handling both LF and CRLF line endings.
pub struct Cursor<'a> {
    /// The number of lines already returned.
    line: usize,
    /// The byte index where the next line starts.
    index: usize,
    /// The source str.
    source: &'a str,
}

impl<'a> Cursor<'a> {
    pub const fn new(source: &'a str) -> Self {
        Self {
            line: 0,
            index: 0,
            source,
        }
    }

    pub const fn is_end(&self) -> bool {
        self.index >= self.source.len()
    }

    /// The 1-based number of the line returned last, or 0 before the first call.
    pub const fn line(&self) -> usize {
        self.line
    }

    /// Moves the cursor over the next line, returning its content without the line terminator
    /// together with the byte range of that content.
    pub fn next_line_with_range(&mut self) -> Option<(Range<usize>, &'a str)> {
        if self.is_end() {
            return None;
        }
        let mut start = self.index;
        if self.line == 0 && self.source.starts_with(BYTE_ORDER_MARK) {
            start += BYTE_ORDER_MARK.len_utf8();
        }
        let (content_end, next_index) = match self.source[start..].find('\n') {
            Some(offset) => (start + offset, start + offset + 1),
            None => (self.source.len(), self.source.len()),
        };
        let end = if self.source[start..content_end].ends_with('\r') {
            content_end - 1
        } else {
            content_end
        };
        self.index = next_index;
        self.line += 1;
        Some((start..end, &self.source[start..end]))
    }
}

#[test]
fn test_lines() {
    let mut cursor = Cursor::new("\u{feff}osu file format v14\r\n\n[General]\nMode: 0");

    assert_eq!(cursor.next_line_with_range(), Some((3..22, "osu file format v14")));
    assert_eq!(cursor.line(), 1);
    assert_eq!(cursor.next_line_with_range(), Some((24..24, "")));
    assert_eq!(cursor.next_line_with_range(), Some((25..34, "[General]")));
    assert_eq!(cursor.next_line_with_range(), Some((35..42, "Mode: 0")));
    assert!(cursor.is_end());
    assert_eq!(cursor.next_line_with_range(), None);
    assert_eq!(cursor.line(), 4);
}
