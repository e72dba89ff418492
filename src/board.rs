//! # Board Model & Parser
//!
//! A `Board` is nothing more than a clue grid: its width, height, and a
//! `0..=3` digit (or blank) per cell. Parsing is the only place user input
//! can go wrong, so it is the only place this crate returns a `Result`.

use std::fs;
use std::path::Path;

use crate::error::BoardError;
use crate::frontier::Column;

/// A parsed (or synthesized) Slitherlink puzzle.
#[derive(Debug, Clone)]
pub struct Board {
    pub width: usize,
    pub height: usize,
    clues: Vec<Vec<Option<u8>>>,
}

impl Board {
    /// An all-blank board of the given dimensions — the "unconstrained"
    /// counting mode.
    pub fn blank(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            clues: vec![vec![None; width]; height],
        }
    }

    /// Parse the clue-grid text format: `height` lines of exactly `width`
    /// characters each, drawn from `0`-`3` or `.`. Trailing whitespace on
    /// each line is stripped before validation.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let rows: Vec<&str> = text.lines().map(str::trim_end).collect();
        if rows.is_empty() || rows.iter().all(|r| r.is_empty()) {
            return Err(BoardError::Empty);
        }

        let width = rows[0].chars().count();
        let mut clues = Vec::with_capacity(rows.len());
        for (row_idx, row) in rows.iter().enumerate() {
            let found = row.chars().count();
            if found != width {
                return Err(BoardError::RaggedRow {
                    row: row_idx,
                    expected: width,
                    found,
                });
            }

            let mut row_clues = Vec::with_capacity(width);
            for (col, ch) in row.chars().enumerate() {
                let clue = match ch {
                    '.' => None,
                    '0'..='3' => Some(ch.to_digit(10).expect("matched ascii digit") as u8),
                    other => {
                        return Err(BoardError::InvalidChar {
                            row: row_idx,
                            col,
                            ch: other,
                        })
                    }
                };
                row_clues.push(clue);
            }
            clues.push(row_clues);
        }

        Ok(Board {
            width,
            height: clues.len(),
            clues,
        })
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, BoardError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Clues for one row, `None` per blank cell. Panics if `row >= self.height`.
    pub fn row_clues(&self, row: usize) -> &[Option<u8>] {
        &self.clues[row]
    }

    pub fn width_column(&self) -> Column {
        self.width as Column
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_board() {
        let board = Board::parse("12\n.3\n").unwrap();
        assert_eq!(board.width, 2);
        assert_eq!(board.height, 2);
        assert_eq!(board.row_clues(0), &[Some(1), Some(2)]);
        assert_eq!(board.row_clues(1), &[None, Some(3)]);
    }

    #[test]
    fn strips_trailing_whitespace() {
        let board = Board::parse("12 \n.3\t\n").unwrap();
        assert_eq!(board.width, 2);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = Board::parse("12\n.\n").unwrap_err();
        assert!(matches!(err, BoardError::RaggedRow { row: 1, expected: 2, found: 1 }));
    }

    #[test]
    fn rejects_unknown_characters() {
        let err = Board::parse("1x\n..\n").unwrap_err();
        assert!(matches!(err, BoardError::InvalidChar { row: 0, col: 1, ch: 'x' }));
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(Board::parse(""), Err(BoardError::Empty)));
        assert!(matches!(Board::parse("\n\n"), Err(BoardError::Empty)));
    }

    #[test]
    fn blank_board_has_no_clues() {
        let board = Board::blank(3, 2);
        assert_eq!(board.row_clues(0), &[None, None, None]);
        assert_eq!(board.row_clues(1), &[None, None, None]);
    }
}
