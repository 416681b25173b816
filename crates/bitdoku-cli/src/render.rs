//! Text rendering of grids with 3×3 block separators.

use bitdoku_core::{DigitGrid, Position, SolvedGrid};

/// Renders a partially filled grid, printing `.` for unknown cells.
pub fn digit_grid(grid: &DigitGrid) -> String {
    render(|pos| grid.get(pos).map_or('.', |digit| digit_char(digit.value())))
}

/// Renders a solved grid.
pub fn solved_grid(grid: &SolvedGrid) -> String {
    render(|pos| digit_char(grid.get(pos).value()))
}

fn digit_char(value: u8) -> char {
    char::from(b'0' + value)
}

fn render(cell: impl Fn(Position) -> char) -> String {
    let mut out = String::new();
    for y in 0..9 {
        if y > 0 && y % 3 == 0 {
            out.push_str("------+-------+------\n");
        }
        for x in 0..9 {
            if x > 0 {
                out.push(' ');
                if x % 3 == 0 {
                    out.push_str("| ");
                }
            }
            out.push(cell(Position::new(x, y)));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use bitdoku_core::Digit;

    use super::*;

    #[test]
    fn test_render_solved_grid() {
        let text = "\
            534678912672195348198342567\
            859761423426853791713924856\
            961537284287419635345286179";
        let cells: Vec<Digit> = text
            .bytes()
            .map(|b| Digit::from_value(b - b'0'))
            .collect();
        let grid = SolvedGrid::new(cells.try_into().unwrap());

        let expected = "\
5 3 4 | 6 7 8 | 9 1 2
6 7 2 | 1 9 5 | 3 4 8
1 9 8 | 3 4 2 | 5 6 7
------+-------+------
8 5 9 | 7 6 1 | 4 2 3
4 2 6 | 8 5 3 | 7 9 1
7 1 3 | 9 2 4 | 8 5 6
------+-------+------
9 6 1 | 5 3 7 | 2 8 4
2 8 7 | 4 1 9 | 6 3 5
3 4 5 | 2 8 6 | 1 7 9
";
        assert_eq!(solved_grid(&grid), expected);
    }

    #[test]
    fn test_render_digit_grid_marks_unknowns() {
        let grid: DigitGrid =
            "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
                .parse()
                .unwrap();

        let rendered = digit_grid(&grid);
        let first_line = rendered.lines().next().unwrap();
        assert_eq!(first_line, "5 3 . | . 7 . | . . .");
        assert_eq!(rendered.lines().count(), 11);
    }
}
