//! Puzzle retrieval from a remote board service.
//!
//! The service answers `GET <url>?difficulty=<d>` with a JSON body of the
//! shape `{ "board": [[int; 9]; 9] }`, where `0` marks an unknown cell.

use bitdoku_core::{Digit, DigitGrid, Position};
use clap::ValueEnum;
use derive_more::{Display, Error, From};
use serde::Deserialize;

/// Default board endpoint.
pub const DEFAULT_URL: &str = "https://sugoku.onrender.com/board";

/// Difficulty levels understood by the board service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, ValueEnum)]
pub enum Difficulty {
    #[display("easy")]
    Easy,
    #[display("medium")]
    Medium,
    #[display("hard")]
    Hard,
    #[display("random")]
    Random,
}

impl Difficulty {
    fn as_query(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
            Self::Random => "random",
        }
    }
}

/// Errors from fetching or decoding a remote board.
#[derive(Debug, Display, Error, From)]
pub enum FetchError {
    /// The request failed or returned a non-success status.
    #[display("{_0}")]
    Http(reqwest::Error),
    /// The response board does not contain 9 rows.
    #[display("expected 9 rows, got {rows}")]
    #[from(skip)]
    BadRowCount { rows: usize },
    /// A response row is not 9 cells long.
    #[display("expected 9 cells in row {row}, got {cells}")]
    #[from(skip)]
    BadRowLength { row: usize, cells: usize },
    /// A cell value is outside `0..=9`.
    #[display("cell value {value} at row {row} is out of range")]
    #[from(skip)]
    BadValue { row: usize, value: u8 },
}

#[derive(Debug, Deserialize)]
struct BoardResponse {
    board: Vec<Vec<u8>>,
}

/// Fetches a puzzle of the requested difficulty from `url`.
pub fn fetch_board(url: &str, difficulty: Difficulty) -> Result<DigitGrid, FetchError> {
    log::debug!("requesting {url}?difficulty={}", difficulty.as_query());
    let response: BoardResponse = reqwest::blocking::Client::new()
        .get(url)
        .query(&[("difficulty", difficulty.as_query())])
        .send()?
        .error_for_status()?
        .json()?;
    decode_board(&response)
}

fn decode_board(response: &BoardResponse) -> Result<DigitGrid, FetchError> {
    let rows = response.board.len();
    if rows != 9 {
        return Err(FetchError::BadRowCount { rows });
    }
    for (row, cells) in response.board.iter().enumerate() {
        if cells.len() != 9 {
            return Err(FetchError::BadRowLength {
                row,
                cells: cells.len(),
            });
        }
    }

    let mut grid = DigitGrid::EMPTY;
    for (y, row) in (0u8..).zip(&response.board) {
        for (x, &value) in (0u8..).zip(row) {
            match value {
                0 => {}
                1..=9 => grid.set(Position::new(x, y), Some(Digit::from_value(value))),
                _ => {
                    return Err(FetchError::BadValue {
                        row: usize::from(y),
                        value,
                    });
                }
            }
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_well_formed_board() {
        let json = r#"{"board":[
            [5,3,0,0,7,0,0,0,0],
            [6,0,0,1,9,5,0,0,0],
            [0,9,8,0,0,0,0,6,0],
            [8,0,0,0,6,0,0,0,3],
            [4,0,0,8,0,3,0,0,1],
            [7,0,0,0,2,0,0,0,6],
            [0,6,0,0,0,0,2,8,0],
            [0,0,0,4,1,9,0,0,5],
            [0,0,0,0,8,0,0,7,9]]}"#;
        let response: BoardResponse = serde_json::from_str(json).unwrap();
        let grid = decode_board(&response).unwrap();

        assert_eq!(grid.given_count(), 30);
        assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
        assert_eq!(grid.get(Position::new(2, 0)), None);
        assert_eq!(grid.get(Position::new(8, 8)), Some(Digit::D9));
    }

    #[test]
    fn test_decode_rejects_missing_row() {
        let board = vec![vec![0u8; 9]; 8];
        let err = decode_board(&BoardResponse { board }).unwrap_err();
        assert!(matches!(err, FetchError::BadRowCount { rows: 8 }));
    }

    #[test]
    fn test_decode_rejects_short_row() {
        let board: Vec<Vec<u8>> = (0..9)
            .map(|y| if y == 4 { vec![0; 8] } else { vec![0; 9] })
            .collect();
        let err = decode_board(&BoardResponse { board }).unwrap_err();
        assert!(matches!(err, FetchError::BadRowLength { row: 4, cells: 8 }));
    }

    #[test]
    fn test_decode_rejects_long_row() {
        let board: Vec<Vec<u8>> = (0..9)
            .map(|y| if y == 2 { vec![0; 10] } else { vec![0; 9] })
            .collect();
        let err = decode_board(&BoardResponse { board }).unwrap_err();
        assert!(matches!(err, FetchError::BadRowLength { row: 2, cells: 10 }));
    }

    #[test]
    fn test_decode_rejects_out_of_range_cell() {
        let mut board = vec![vec![0u8; 9]; 9];
        board[6][2] = 12;
        let err = decode_board(&BoardResponse { board }).unwrap_err();
        assert!(matches!(err, FetchError::BadValue { row: 6, value: 12 }));
    }
}
