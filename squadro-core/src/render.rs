//! ASCII board rendering
//!
//! The layout is a fixed grid of 17 rows by 5 columns of cell strings. Every
//! third row from row 2 is a lane track for the first player; the rows in
//! between carry the second player's column pieces and markers. Cells are
//! filled with track art, overwritten by the first player's pieces, then by
//! the second player's.

use crate::board::NUM_LANES;
use crate::game::GameState;
use std::fmt;

const COLUMNS: usize = 5;
const ROWS: usize = 17;

/// Cell index of the first column of a lane's track row (lane 0-based)
fn track_row(lane: usize) -> usize {
    10 + 15 * lane
}

/// First `n` characters of a cell
fn head(cell: &str, n: usize) -> String {
    cell.chars().take(n).collect()
}

/// Everything after the first `n` characters of a cell
fn tail(cell: &str, n: usize) -> String {
    cell.chars().skip(n).collect()
}

struct Grid {
    cells: Vec<String>,
}

impl Grid {
    fn new() -> Self {
        let mut cells = vec!["|".to_string(); ROWS * COLUMNS];
        for lane in 0..NUM_LANES {
            let base = track_row(lane);
            cells[base] = "─────┼──".to_string();
            for column in 1..COLUMNS - 1 {
                cells[base + column] = "──|──".to_string();
            }
            cells[base + 4] = "──┼─────".to_string();
        }
        Self { cells }
    }

    fn set(&mut self, index: usize, glyph: &str) {
        self.cells[index] = glyph.to_string();
    }

    /// Draw a first-player piece on its row
    fn place_row_piece(&mut self, lane: usize, position: u8) {
        let base = track_row(lane);
        let (offset, glyph) = match position {
            0 => (0, "□□ ○─┼──"),
            1 => (0, "────□□ ○"),
            2 => (1, "─□□ ○"),
            3 => (2, "─□□ ○"),
            4 => (3, "─□□ ○"),
            5 => (4, "─□□ ○───"),
            6 => (4, "──┼─○ □□"),
            7 => (4, "○ □□────"),
            8 => (3, "○ □□─"),
            9 => (2, "○ □□─"),
            10 => (1, "○ □□─"),
            11 => (0, "───○ □□─"),
            _ => (0, "○ □□─┼──"),
        };
        self.set(base + offset, glyph);
    }

    /// Draw a second-player piece on its column
    fn place_column_piece(&mut self, column: usize, position: u8) {
        match position {
            0 => {
                self.set(column, "█");
                self.set(5 + column, "●");
            }
            1..=5 => {
                let index = track_row(position as usize - 1) + column;
                self.cross(index, column);
                self.set(index + 5, "●");
            }
            6 => {
                self.set(75 + column, "●");
                self.set(80 + column, "█");
            }
            7..=11 => {
                let index = track_row(12 - position as usize - 1) + column;
                self.set(index - 5, "●");
                self.cross(index, column);
            }
            _ => {
                self.set(column, "●");
                self.set(5 + column, "█");
            }
        }
    }

    /// Put a column piece on a track cell, keeping the edge art intact
    fn cross(&mut self, index: usize, column: usize) {
        let cell = &self.cells[index];
        let crossed = match column {
            0 => format!("{}─█──", head(cell, 4)),
            4 => format!("──█─{}", tail(cell, 4)),
            _ => "──█──".to_string(),
        };
        self.cells[index] = crossed;
    }

    fn row(&self, row: usize) -> &[String] {
        &self.cells[row * COLUMNS..(row + 1) * COLUMNS]
    }

    /// Row between tracks: `prefix`, cells spaced by five, `suffix`
    fn write_spacer(&self, out: &mut String, row: usize, prefix: &str, suffix: &str) {
        out.push_str(prefix);
        out.push_str(&self.row(row).join("     "));
        out.push_str(suffix);
        out.push('\n');
    }

    fn write_track(&self, out: &mut String, lane: usize) {
        let row = self.row(2 + 3 * lane);
        out.push_str(&format!("            {} ──{}──\n", lane + 1, row.join("─")));
    }
}

/// Render the full board with its legend
pub fn render(state: &GameState) -> String {
    let [first, second] = state.players();
    let mut grid = Grid::new();

    for (lane, &position) in first.pieces.iter().enumerate() {
        grid.place_row_piece(lane, position);
    }
    for (column, &position) in second.pieces.iter().enumerate() {
        grid.place_column_piece(column, position);
    }

    let c = &grid.cells;

    let mut out = String::new();
    out.push_str("            Légende:\n");
    out.push_str(&format!("              □ = {}\n", first.name));
    out.push_str(&format!("              ■ = {}\n\n", second.name));

    out.push_str("                   . | . : | : : | : : | : . | .     \n");
    out.push_str(&format!(
        "                     {}   . {} .   {}   . {} .   {}       \n",
        c[0],
        c[1],
        c[2],
        c[3],
        c[4]
    ));

    // Margin dots show how fast each lane is, per leg
    let margins: [(&str, &str); NUM_LANES] = [
        ("              ...    ", "      ."),
        ("              .      ", "    ..."),
        ("              ..     ", "     .."),
        ("              .      ", "    ..."),
        ("              ...    ", "      ."),
    ];

    for (lane, (prefix, suffix)) in margins.iter().enumerate() {
        let track = 2 + 3 * lane;
        grid.write_spacer(&mut out, track - 1, prefix, suffix);
        grid.write_track(&mut out, lane);
        grid.write_spacer(&mut out, track + 1, prefix, suffix);
    }

    out.push_str(&format!(
        "                   . {} .   {}     {}     {}   . {} .     \n",
        c[80],
        c[81],
        c[82],
        c[83],
        c[84]
    ));
    out.push_str("                   : | : . | . : | : . | . : | :");

    out
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
