//! Reading puzzle grids from a text stream.
//!
//! A stream holds one or more puzzles, each nine lines of nine digit
//! characters ('0' marks an open spot), with exactly one blank line between
//! consecutive puzzles. The core never sees malformed input; everything is
//! rejected here first.

use std::io::BufRead;

use thiserror::Error;

/// Errors produced while reading a puzzle stream.
///
/// Line numbers are 1-based positions in the input.
#[derive(Debug, Error)]
pub enum ParseError {
    /// A grid line had fewer than nine columns.
    #[error("incorrect number of columns on line {line} (must have 9 columns)")]
    ColumnCount { line: usize },

    /// A grid line held a character that is not a digit.
    #[error("invalid value for a column on line {line} (numbers must be between 0 and 9)")]
    InvalidDigit { line: usize },

    /// The stream ended in the middle of a grid.
    #[error("input ended before finishing a Su Doku table on line {line}")]
    Truncated { line: usize },

    /// The line between two puzzles was not blank.
    #[error("invalid marker for next table on line {line} (must be a blank line)")]
    BadSeparator { line: usize },

    /// The underlying reader failed.
    #[error("reading input")]
    Io(#[from] std::io::Error),
}

/// Pulls 9×9 digit grids off a [`BufRead`] stream, one per call.
pub struct PuzzleReader<R> {
    reader: R,
    line: usize,
    puzzles_read: usize,
}

impl<R: BufRead> PuzzleReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: 0,
            puzzles_read: 0,
        }
    }

    /// Read the next puzzle, or `None` at a clean end of stream.
    ///
    /// After every puzzle, the next one must be introduced by exactly one
    /// blank line. The stream may end cleanly either right after a grid or
    /// after the separator; ending inside a grid is an error.
    pub fn next_puzzle(&mut self) -> Result<Option<[[u8; 9]; 9]>, ParseError> {
        if self.puzzles_read > 0 {
            match self.read_line()? {
                None => return Ok(None),
                Some(text) if text.trim().is_empty() => {}
                Some(_) => return Err(ParseError::BadSeparator { line: self.line }),
            }
        }

        let mut rows = [[0u8; 9]; 9];
        for (index, row) in rows.iter_mut().enumerate() {
            let text = match self.read_line()? {
                Some(text) => text,
                None if index == 0 => return Ok(None),
                None => return Err(ParseError::Truncated { line: self.line }),
            };
            *row = parse_row(&text, self.line)?;
        }

        self.puzzles_read += 1;
        Ok(Some(rows))
    }

    /// Next line with its trailing newline stripped, or `None` at end of
    /// stream. Bumps the line counter.
    fn read_line(&mut self) -> Result<Option<String>, ParseError> {
        let mut buf = String::new();
        if self.reader.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        while buf.ends_with('\n') || buf.ends_with('\r') {
            buf.pop();
        }
        Ok(Some(buf))
    }
}

/// Parse the first nine characters of a grid line. Anything past the ninth
/// column is ignored.
fn parse_row(text: &str, line: usize) -> Result<[u8; 9], ParseError> {
    let mut row = [0u8; 9];
    let mut chars = text.chars();
    for slot in row.iter_mut() {
        let ch = chars.next().ok_or(ParseError::ColumnCount { line })?;
        *slot = ch.to_digit(10).ok_or(ParseError::InvalidDigit { line })? as u8;
    }
    Ok(row)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const GRID: &str = "530070000\n\
                        600195000\n\
                        098000060\n\
                        800060003\n\
                        400803001\n\
                        700020006\n\
                        060000280\n\
                        000419005\n\
                        000080079\n";

    #[test]
    fn reads_a_single_puzzle() {
        let mut puzzles = PuzzleReader::new(Cursor::new(GRID));

        let rows = puzzles.next_puzzle().unwrap().unwrap();
        assert_eq!(rows[0], [5, 3, 0, 0, 7, 0, 0, 0, 0]);
        assert_eq!(rows[8], [0, 0, 0, 0, 8, 0, 0, 7, 9]);

        assert!(puzzles.next_puzzle().unwrap().is_none());
    }

    #[test]
    fn reads_several_puzzles_separated_by_blank_lines() {
        let input = format!("{}\n{}", GRID, GRID);
        let mut puzzles = PuzzleReader::new(Cursor::new(input));

        assert!(puzzles.next_puzzle().unwrap().is_some());
        assert!(puzzles.next_puzzle().unwrap().is_some());
        assert!(puzzles.next_puzzle().unwrap().is_none());
    }

    #[test]
    fn empty_input_is_a_clean_end() {
        let mut puzzles = PuzzleReader::new(Cursor::new(""));
        assert!(puzzles.next_puzzle().unwrap().is_none());
    }

    #[test]
    fn short_lines_are_a_column_count_error() {
        let mut puzzles = PuzzleReader::new(Cursor::new("530070000\n60019\n"));
        match puzzles.next_puzzle() {
            Err(ParseError::ColumnCount { line: 2 }) => {}
            other => panic!("expected a column count error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn non_digit_characters_are_an_invalid_digit_error() {
        let input = GRID.replacen('9', "x", 1);
        let mut puzzles = PuzzleReader::new(Cursor::new(input));
        match puzzles.next_puzzle() {
            Err(ParseError::InvalidDigit { line: 2 }) => {}
            other => panic!("expected an invalid digit error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn ending_mid_grid_is_a_truncation_error() {
        let four_lines = "530070000\n600195000\n098000060\n800060003\n";
        let mut puzzles = PuzzleReader::new(Cursor::new(four_lines));
        match puzzles.next_puzzle() {
            Err(ParseError::Truncated { line: 4 }) => {}
            other => panic!("expected a truncation error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn a_non_blank_separator_is_rejected() {
        let input = format!("{}### not a separator\n{}", GRID, GRID);
        let mut puzzles = PuzzleReader::new(Cursor::new(input));

        assert!(puzzles.next_puzzle().unwrap().is_some());
        match puzzles.next_puzzle() {
            Err(ParseError::BadSeparator { line: 10 }) => {}
            other => panic!("expected a separator error, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn a_trailing_blank_line_still_ends_cleanly() {
        let input = format!("{}\n", GRID);
        let mut puzzles = PuzzleReader::new(Cursor::new(input));

        assert!(puzzles.next_puzzle().unwrap().is_some());
        assert!(puzzles.next_puzzle().unwrap().is_none());
    }

    #[test]
    fn extra_columns_are_ignored() {
        let input = GRID.replacen('\n', "123\n", 1);
        let mut puzzles = PuzzleReader::new(Cursor::new(input));
        let rows = puzzles.next_puzzle().unwrap().unwrap();
        assert_eq!(rows[0], [5, 3, 0, 0, 7, 0, 0, 0, 0]);
    }
}
