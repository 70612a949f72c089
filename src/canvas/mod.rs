//! Dot-addressable drawing canvas.
//!
//! This module provides [`Canvas`], the drawing surface of the paint engine.
//! A canvas covers `width_cells x height_cells` terminal cells, but all shape
//! geometry is expressed in a finer dot grid: every cell is subdivided into
//! 2x4 dots (the braille sub-glyph layout), so a `40x20` canvas addresses
//! `80x80` dots. The dot grid is the single source of truth regardless of
//! which visual mode ([`CharMode`](crate::figure::CharMode)) a shape was
//! drawn in.
//!
//! # Coordinate System
//!
//! Dot coordinates are `i32` with (0, 0) at the top-left; x grows right, y
//! grows down. Coordinates outside the grid are clipped silently — drawing
//! never fails.
//!
//! # Preview Support
//!
//! [`Canvas::snapshot`] and [`Canvas::restore`] copy the full dot state out
//! and back in. The interaction layer uses them to implement non-destructive
//! stroke previews: restore, then redraw the one candidate shape.

mod glyph;
mod raster;

pub use glyph::{Glyph, BRAILLE_BASE, QUADRANT_CHARS};

use crate::color::Rgb;
use crate::error::{Error, Result};
use crate::style::{Style, TextAttributes};

/// Horizontal dots per terminal cell.
pub const DOTS_PER_CELL_X: u32 = 2;
/// Vertical dots per terminal cell.
pub const DOTS_PER_CELL_Y: u32 = 4;

/// State of a single dot on the fine grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dot {
    /// Whether the dot is lit.
    pub on: bool,
    /// Color of the dot (meaningful only when lit).
    pub color: Rgb,
    /// Text attributes of the dot (meaningful only when lit).
    pub attributes: TextAttributes,
}

/// Opaque full copy of a canvas's dot state.
///
/// Produced by [`Canvas::snapshot`] and consumed by [`Canvas::restore`].
/// A snapshot is only valid for the canvas it was taken from (same
/// dimensions).
#[derive(Clone, Debug)]
pub struct Snapshot {
    dots: Vec<Dot>,
    cell_styles: Vec<Style>,
}

/// A fixed-size, dot-addressable drawing surface.
#[derive(Clone, Debug)]
pub struct Canvas {
    width_cells: u32,
    height_cells: u32,
    /// Fine grid, row-major, `width_cells * 2` by `height_cells * 4`.
    dots: Vec<Dot>,
    /// Per-cell style of the most recently plotted dot, used when collapsing
    /// a cell's dots into one styled glyph.
    cell_styles: Vec<Style>,
}

impl Canvas {
    /// Create an empty canvas covering `width_cells x height_cells` terminal
    /// cells.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width_cells: u32, height_cells: u32) -> Result<Self> {
        if width_cells == 0 || height_cells == 0 {
            return Err(Error::InvalidDimensions {
                width: width_cells,
                height: height_cells,
            });
        }
        let fine = (width_cells * DOTS_PER_CELL_X) as usize
            * (height_cells * DOTS_PER_CELL_Y) as usize;
        let coarse = (width_cells as usize) * (height_cells as usize);
        Ok(Self {
            width_cells,
            height_cells,
            dots: vec![Dot::default(); fine],
            cell_styles: vec![Style::NONE; coarse],
        })
    }

    /// Width in terminal cells.
    #[must_use]
    pub const fn width_cells(&self) -> u32 {
        self.width_cells
    }

    /// Height in terminal cells.
    #[must_use]
    pub const fn height_cells(&self) -> u32 {
        self.height_cells
    }

    /// Width of the fine dot grid.
    #[must_use]
    pub const fn dot_width(&self) -> u32 {
        self.width_cells * DOTS_PER_CELL_X
    }

    /// Height of the fine dot grid.
    #[must_use]
    pub const fn dot_height(&self) -> u32 {
        self.height_cells * DOTS_PER_CELL_Y
    }

    /// Check whether a coarse cell coordinate lies on the canvas.
    #[must_use]
    pub fn contains_cell(&self, cx: i32, cy: i32) -> bool {
        cx >= 0 && cy >= 0 && (cx as u32) < self.width_cells && (cy as u32) < self.height_cells
    }

    /// Compute fine-grid index, or `None` when out of bounds.
    #[inline]
    fn dot_index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || y < 0 {
            return None;
        }
        let (x, y) = (x as u32, y as u32);
        if x >= self.dot_width() || y >= self.dot_height() {
            return None;
        }
        Some((y as usize) * (self.dot_width() as usize) + x as usize)
    }

    /// Get the dot at a fine-grid coordinate, or `None` when out of bounds.
    #[must_use]
    pub fn dot(&self, x: i32, y: i32) -> Option<Dot> {
        self.dot_index(x, y).map(|idx| self.dots[idx])
    }

    /// Light the dot at a fine-grid coordinate with the given style.
    ///
    /// Out-of-bounds coordinates are ignored.
    pub fn plot(&mut self, x: i32, y: i32, style: Style) {
        let Some(idx) = self.dot_index(x, y) else {
            return;
        };
        self.dots[idx] = Dot {
            on: true,
            color: style.color,
            attributes: style.attributes,
        };
        let cell = (y as u32 / DOTS_PER_CELL_Y) as usize * self.width_cells as usize
            + (x as u32 / DOTS_PER_CELL_X) as usize;
        self.cell_styles[cell] = style;
    }

    /// Reset every dot to unlit with default color and attributes.
    pub fn clear(&mut self) {
        self.dots.fill(Dot::default());
        self.cell_styles.fill(Style::NONE);
    }

    /// Count of lit dots. Mostly useful in tests.
    #[must_use]
    pub fn lit_count(&self) -> usize {
        self.dots.iter().filter(|d| d.on).count()
    }

    /// Copy the full dot state out.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            dots: self.dots.clone(),
            cell_styles: self.cell_styles.clone(),
        }
    }

    /// Copy a snapshot back in, discarding everything drawn since it was
    /// taken.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        debug_assert_eq!(snapshot.dots.len(), self.dots.len());
        self.dots.clone_from(&snapshot.dots);
        self.cell_styles.clone_from(&snapshot.cell_styles);
    }

    /// Compare dot contents with another canvas.
    ///
    /// Only dot state is compared, so two canvases that render identically
    /// compare equal even if they were drawn through different strokes.
    #[must_use]
    pub fn dots_eq(&self, other: &Self) -> bool {
        self.width_cells == other.width_cells
            && self.height_cells == other.height_cells
            && self.dots == other.dots
    }

    pub(crate) fn cell_style(&self, cx: u32, cy: u32) -> Style {
        self.cell_styles[(cy as usize) * (self.width_cells as usize) + cx as usize]
    }
}
