use core::fmt::{self, Write};

use crate::*;

/// Glyph for a single cell: blank when covered, `F` when flagged, `*` for an uncovered mine, `.` for an uncovered cell
/// without mined neighbours and the neighbour count otherwise.
pub fn glyph(grid: &Grid, row: Coord, col: Coord) -> char {
    let Some(cell) = grid.cell_at(row, col) else {
        return ' ';
    };

    match cell.state() {
        CellState::Covered => ' ',
        CellState::Flagged => 'F',
        CellState::Uncovered if cell.is_mined() => '*',
        CellState::Uncovered => match grid.mined_neighbour_count(row, col) {
            0 => '.',
            count => char::from(b'0' + count),
        },
    }
}

/// Writes the grid as fixed-width text: a column header, a rule, then one line per row prefixed with its index.
pub fn write_grid<W: Write>(out: &mut W, grid: &Grid) -> fmt::Result {
    let (rows, cols) = grid.size();
    let row_width = digits(rows.saturating_sub(1));
    let col_width = digits(cols.saturating_sub(1));

    write!(out, "{:row_width$} ", "")?;
    for col in 0..cols {
        if col > 0 {
            out.write_char(' ')?;
        }
        write!(out, "{col:>col_width$}")?;
    }
    out.write_char('\n')?;

    let rule = "-".repeat((cols * (col_width + 1)).saturating_sub(1));
    writeln!(out, "{:row_width$}+{rule}", "")?;

    for row in 0..rows {
        write!(out, "{row:>row_width$}|")?;
        for col in 0..cols {
            if col > 0 {
                out.write_char(' ')?;
            }
            let glyph = glyph(grid, row as Coord, col as Coord);
            write!(out, "{glyph:>col_width$}")?;
        }
        out.write_char('\n')?;
    }

    Ok(())
}

pub fn render_grid(grid: &Grid) -> String {
    grid.to_string()
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, self)
    }
}

fn digits(mut value: usize) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(rows: CellCount, cols: CellCount, mines: &[Coord2]) -> Grid {
        Grid::from_mine_coords(rows, cols, mines).unwrap()
    }

    #[test]
    fn renders_every_glyph_kind() {
        let mut grid = grid(3, 3, &[(0, 0)]);
        grid.set_cell_state(0, 1, CellState::Flagged);
        grid.uncover_from(2, 2);

        assert_eq!(
            render_grid(&grid),
            concat!(
                "  0 1 2\n",
                " +-----\n",
                "0|  F .\n",
                "1|1 1 .\n",
                "2|. . .\n",
            )
        );
    }

    #[test]
    fn renders_uncovered_mine() {
        let mut grid = grid(1, 2, &[(0, 0)]);
        grid.uncover_from(0, 0);

        assert_eq!(render_grid(&grid), "  0 1\n +---\n0|*  \n");
    }

    #[test]
    fn wide_grids_pad_every_column() {
        let grid = grid(1, 11, &[]);
        let text = render_grid(&grid);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "   0  1  2  3  4  5  6  7  8  9 10");
        assert_eq!(lines[1], format!(" +{}", "-".repeat(32)));
        assert!(lines.iter().all(|line| line.len() == lines[0].len()));
    }

    #[test]
    fn tall_grids_pad_row_labels() {
        let mut grid = grid(12, 1, &[(0, 0)]);
        grid.set_cell_state(11, 0, CellState::Uncovered);
        let text = render_grid(&grid);
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "   0");
        assert_eq!(lines[1], "  +-");
        assert_eq!(lines[2], " 0| ");
        assert_eq!(lines[13], "11|.");
    }

    #[test]
    fn rendering_does_not_change_the_grid() {
        let mut grid = grid(4, 4, &[(1, 2), (3, 3)]);
        grid.uncover_from(0, 0);
        let before = grid.clone();

        assert_eq!(render_grid(&grid), render_grid(&grid));
        assert_eq!(grid, before);
    }

    #[test]
    fn digit_widths() {
        assert_eq!(digits(0), 1);
        assert_eq!(digits(9), 1);
        assert_eq!(digits(10), 2);
        assert_eq!(digits(15), 2);
        assert_eq!(digits(100), 3);
    }
}
