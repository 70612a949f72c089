//! Glyph rendering of the dot grid.
//!
//! External renderers read the canvas one terminal cell at a time. Each cell
//! collapses its 2x4 dot block into a single character:
//!
//! - **Dot mode**: braille characters (`U+2800` + dot mask), one visible dot
//!   per fine-grid unit.
//! - **Block mode**: 2x2 quadrant block characters; vertical dot pairs are
//!   merged, which is why block-mode primitives draw thickened strokes.
//!
//! The glyph carries the style of the most recently plotted dot in the cell,
//! so overlapping shapes recolor whole cells just as they would in a
//! character-cell terminal.

use super::{Canvas, DOTS_PER_CELL_X, DOTS_PER_CELL_Y};
use crate::figure::CharMode;
use crate::style::Style;

/// Base codepoint of the braille pattern block.
pub const BRAILLE_BASE: u32 = 0x2800;

/// Braille dot bit for each (x, y) position inside a 2x4 cell, row-major.
///
/// Braille bit order is column-first for dots 1-6 with dots 7-8 on the bottom
/// row, hence the non-linear table.
const BRAILLE_BITS: [[u32; 2]; 4] = [
    [0x01, 0x08],
    [0x02, 0x10],
    [0x04, 0x20],
    [0x40, 0x80],
];

/// Unicode block characters for 2x2 quadrant rendering, indexed by the
/// quadrant mask `BR BL TR TL`.
pub const QUADRANT_CHARS: [char; 16] = [
    ' ', '▘', '▝', '▀', '▖', '▌', '▞', '▛', '▗', '▚', '▐', '▜', '▄', '▙', '▟', '█',
];

/// One renderable terminal cell: a character plus its style.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Glyph {
    /// Character to draw; `' '` when the cell has no lit dots.
    pub ch: char,
    /// Style of the most recently plotted dot in the cell.
    pub style: Style,
}

impl Canvas {
    /// Collapse one terminal cell into a renderable glyph.
    ///
    /// # Panics
    ///
    /// Panics if `(cx, cy)` is outside the cell grid.
    #[must_use]
    pub fn glyph_cell(&self, cx: u32, cy: u32, mode: CharMode) -> Glyph {
        assert!(
            cx < self.width_cells() && cy < self.height_cells(),
            "cell ({cx}, {cy}) outside {}x{} canvas",
            self.width_cells(),
            self.height_cells()
        );
        let x0 = (cx * DOTS_PER_CELL_X) as i32;
        let y0 = (cy * DOTS_PER_CELL_Y) as i32;

        let ch = match mode {
            CharMode::Dot => {
                let mut mask = 0u32;
                for dy in 0..DOTS_PER_CELL_Y as i32 {
                    for dx in 0..DOTS_PER_CELL_X as i32 {
                        if self.dot(x0 + dx, y0 + dy).is_some_and(|d| d.on) {
                            mask |= BRAILLE_BITS[dy as usize][dx as usize];
                        }
                    }
                }
                if mask == 0 {
                    ' '
                } else {
                    char::from_u32(BRAILLE_BASE + mask).unwrap_or(' ')
                }
            }
            CharMode::Block => {
                // Merge vertical dot pairs: 2x4 dots become 2x2 quadrants.
                let mut mask = 0usize;
                for (bit, (dx, dy)) in [(0, 0), (1, 0), (0, 2), (1, 2)].iter().enumerate() {
                    let lit = self.dot(x0 + dx, y0 + dy).is_some_and(|d| d.on)
                        || self.dot(x0 + dx, y0 + dy + 1).is_some_and(|d| d.on);
                    if lit {
                        mask |= 1 << bit;
                    }
                }
                QUADRANT_CHARS[mask]
            }
        };

        Glyph {
            ch,
            style: self.cell_style(cx, cy),
        }
    }

    /// Render the whole canvas as plain text, one line per cell row.
    ///
    /// Styles are dropped; this is meant for demos, logs, and tests. Styled
    /// renderers should iterate [`Canvas::glyph_cell`] instead.
    #[must_use]
    pub fn render_text(&self, mode: CharMode) -> String {
        let mut out = String::with_capacity(
            (self.width_cells() as usize + 1) * self.height_cells() as usize,
        );
        for cy in 0..self.height_cells() {
            for cx in 0..self.width_cells() {
                out.push(self.glyph_cell(cx, cy, mode).ch);
            }
            out.push('\n');
        }
        out
    }
}
