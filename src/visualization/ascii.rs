//! ASCII frame for one instant of the simulation
//!
//! Screen layout (width 75, height 40):
//!
//! ```text
//! +--------------------------------------------------------------------------+
//! |                                                                          |
//! |      o                                                                   |
//! ...                                                                 (40 rows)
//! +--------------------------------------------------------------------------+
//! t = 3.000000, objs[0].x = 6.000000, objs[0].y = -12.310000, ...
//! ```
//!
//! Row `i` covers `i <= y < i + 1` for `i` in `-height/2 .. height/2`, top to
//! bottom; column `j` covers `j <= x < j + 1` the same way. Halves use integer
//! division, so an odd width loses its last column.

use std::fmt::Write;

use crate::simulation::params::Parameters;
use crate::simulation::states::System;

const BODY_GLYPH: char = 'o';

/// Number of text lines [`render_frame`] produces for these parameters.
pub fn frame_lines(params: &Parameters) -> usize {
    let (_, rows) = cell_span(params.height);
    rows + 3
}

/// Rasterize every visible body (not the anchor, not fused away) and append
/// the diagnostic line.
pub fn render_frame(sys: &System, params: &Parameters) -> String {
    let (col_min, cols) = cell_span(params.width);
    let (row_min, rows) = cell_span(params.height);

    let mut grid = vec![vec![' '; cols]; rows];
    for body in sys.bodies.iter().filter(|b| b.is_visible()) {
        // NaN/inf positions are simply not drawn
        if !body.x.x.is_finite() || !body.x.y.is_finite() {
            continue;
        }
        let col = body.x.x.floor() as i64 - col_min;
        let row = body.x.y.floor() as i64 - row_min;
        if (0..cols as i64).contains(&col) && (0..rows as i64).contains(&row) {
            grid[row as usize][col as usize] = BODY_GLYPH;
        }
    }

    let border = format!("+{}+", "-".repeat(cols));
    let mut frame = String::with_capacity((cols + 3) * (rows + 3));
    frame.push_str(&border);
    frame.push('\n');
    for row in &grid {
        frame.push('|');
        frame.extend(row.iter());
        frame.push_str("|\n");
    }
    frame.push_str(&border);
    frame.push('\n');
    frame.push_str(&status_line(sys));
    frame.push('\n');
    frame
}

/// `t = ..` followed by the coordinates of the first two bodies, when present.
pub fn status_line(sys: &System) -> String {
    let mut line = format!("t = {:.6}", sys.t);
    for (i, b) in sys.bodies.iter().take(2).enumerate() {
        // writing into a String cannot fail
        let _ = write!(line, ", objs[{i}].x = {:.6}, objs[{i}].y = {:.6}", b.x.x, b.x.y);
    }
    line
}

/// First cell index and the number of cells covering `extent`.
fn cell_span(extent: u32) -> (i64, usize) {
    let half = extent as i64 / 2;
    (-half, 2 * half as usize)
}
