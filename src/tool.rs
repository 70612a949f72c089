//! Tool-to-operation dispatch.
//!
//! [`resolve`] maps a `(tool, mode, fill)` selection to the concrete
//! [`DrawOp`] that rasterizes it. The mapping is one exhaustive match over
//! the closed enum triple, so the compiler guarantees every combination is
//! handled; only Clixel resolves to `None` because it bypasses the two-point
//! model entirely (see [`stamp_clixel`]).

use crate::canvas::Canvas;
use crate::figure::{CharMode, FillMode, ToolKind};
use crate::style::Style;

/// A two-point-parameterized drawing operation.
///
/// Plain data rather than a closure: the interaction layer stores the
/// resolved op in its drag state and replays it every preview frame, and
/// persistence replays it for every loaded figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawOp {
    PointLine,
    BlockLine,
    PointCircle,
    PointCircleFilled,
    BlockCircle,
    BlockCircleFilled,
    PointEllipse,
    PointEllipseFilled,
    BlockEllipse,
    BlockEllipseFilled,
    PointRectangle,
    BlockRectangle,
}

/// The active tool/mode/fill triple, as supplied by the UI layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolSelection {
    pub tool: ToolKind,
    pub mode: CharMode,
    pub fill: FillMode,
}

impl ToolSelection {
    #[must_use]
    pub const fn new(tool: ToolKind, mode: CharMode, fill: FillMode) -> Self {
        Self { tool, mode, fill }
    }
}

/// Resolve a selection to its drawing operation.
///
/// Returns `None` only for [`ToolKind::Clixel`]; every other combination
/// resolves to exactly one op.
#[must_use]
pub const fn resolve(tool: ToolKind, mode: CharMode, fill: FillMode) -> Option<DrawOp> {
    Some(match (tool, mode, fill) {
        (ToolKind::Clixel, _, _) => return None,
        (ToolKind::Line, CharMode::Dot, _) => DrawOp::PointLine,
        (ToolKind::Line, CharMode::Block, _) => DrawOp::BlockLine,
        (ToolKind::Circle, CharMode::Dot, FillMode::Filled) => DrawOp::PointCircleFilled,
        (ToolKind::Circle, CharMode::Dot, FillMode::Empty) => DrawOp::PointCircle,
        (ToolKind::Circle, CharMode::Block, FillMode::Filled) => DrawOp::BlockCircleFilled,
        (ToolKind::Circle, CharMode::Block, FillMode::Empty) => DrawOp::BlockCircle,
        (ToolKind::Ellipse, CharMode::Dot, FillMode::Filled) => DrawOp::PointEllipseFilled,
        (ToolKind::Ellipse, CharMode::Dot, FillMode::Empty) => DrawOp::PointEllipse,
        (ToolKind::Ellipse, CharMode::Block, FillMode::Filled) => DrawOp::BlockEllipseFilled,
        (ToolKind::Ellipse, CharMode::Block, FillMode::Empty) => DrawOp::BlockEllipse,
        (ToolKind::Rectangle, CharMode::Dot, _) => DrawOp::PointRectangle,
        (ToolKind::Rectangle, CharMode::Block, _) => DrawOp::BlockRectangle,
    })
}

/// Circle radius from anchor and drag point: `round(sqrt(dx² + dy²))`.
#[must_use]
pub fn circle_radius(x0: i32, y0: i32, x1: i32, y1: i32) -> i32 {
    let dx = f64::from(x1 - x0);
    let dy = f64::from(y1 - y0);
    dx.hypot(dy).round() as i32
}

impl DrawOp {
    /// Rasterize this operation between two dots.
    ///
    /// For circle ops `(x0, y0)` is the center and `(x1, y1)` the radius
    /// handle; for everything else the two dots are the shape's defining
    /// corners/endpoints.
    pub fn apply(self, canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, style: Style) {
        match self {
            Self::PointLine => canvas.draw_point_line(x0, y0, x1, y1, style),
            Self::BlockLine => canvas.draw_block_line(x0, y0, x1, y1, style),
            Self::PointCircle => {
                canvas.draw_point_circle(x0, y0, circle_radius(x0, y0, x1, y1), style);
            }
            Self::PointCircleFilled => {
                canvas.draw_point_circle_filled(x0, y0, circle_radius(x0, y0, x1, y1), style);
            }
            Self::BlockCircle => {
                canvas.draw_block_circle(x0, y0, circle_radius(x0, y0, x1, y1), style);
            }
            Self::BlockCircleFilled => {
                canvas.draw_block_circle_filled(x0, y0, circle_radius(x0, y0, x1, y1), style);
            }
            Self::PointEllipse => canvas.draw_point_ellipse(x0, y0, x1, y1, style),
            Self::PointEllipseFilled => canvas.draw_point_ellipse_filled(x0, y0, x1, y1, style),
            Self::BlockEllipse => canvas.draw_block_ellipse(x0, y0, x1, y1, style),
            Self::BlockEllipseFilled => canvas.draw_block_ellipse_filled(x0, y0, x1, y1, style),
            Self::PointRectangle => {
                canvas.draw_point_line(x0, y0, x1, y0, style);
                canvas.draw_point_line(x1, y0, x1, y1, style);
                canvas.draw_point_line(x1, y1, x0, y1, style);
                canvas.draw_point_line(x0, y1, x0, y0, style);
            }
            Self::BlockRectangle => {
                canvas.draw_block_line(x0, y0, x1, y0, style);
                canvas.draw_block_line(x1, y0, x1, y1, style);
                canvas.draw_block_line(x1, y1, x0, y1, style);
                canvas.draw_block_line(x0, y1, x0, y0, style);
            }
        }
    }
}

/// Offset from the stamp's top dot to its bottom dot (one full cell column).
const CLIXEL_SPAN: i32 = 3;

/// Stamp a fixed two-dot-wide, cell-tall mark at the pointer position.
///
/// Clixel is paint, not a recorded shape: the stamp goes straight onto the
/// live canvas and is never logged, so clixel marks do not survive a reload.
pub fn stamp_clixel(canvas: &mut Canvas, x: i32, y: i32, mode: CharMode, style: Style) {
    match mode {
        CharMode::Dot => {
            canvas.draw_point_line(x, y, x, y + CLIXEL_SPAN, style);
            canvas.draw_point_line(x + 1, y, x + 1, y + CLIXEL_SPAN, style);
        }
        CharMode::Block => {
            canvas.draw_block_line(x, y, x, y + CLIXEL_SPAN, style);
            canvas.draw_block_line(x + 1, y, x + 1, y + CLIXEL_SPAN, style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOOLS: [ToolKind; 5] = [
        ToolKind::Clixel,
        ToolKind::Line,
        ToolKind::Circle,
        ToolKind::Ellipse,
        ToolKind::Rectangle,
    ];
    const MODES: [CharMode; 2] = [CharMode::Dot, CharMode::Block];
    const FILLS: [FillMode; 2] = [FillMode::Filled, FillMode::Empty];

    #[test]
    fn test_resolve_total_except_clixel() {
        for tool in TOOLS {
            for mode in MODES {
                for fill in FILLS {
                    let op = resolve(tool, mode, fill);
                    assert_eq!(op.is_none(), tool == ToolKind::Clixel, "{tool:?}/{mode:?}/{fill:?}");
                }
            }
        }
    }

    #[test]
    fn test_resolve_picks_mode_and_fill() {
        assert_eq!(
            resolve(ToolKind::Circle, CharMode::Dot, FillMode::Filled),
            Some(DrawOp::PointCircleFilled)
        );
        assert_eq!(
            resolve(ToolKind::Circle, CharMode::Block, FillMode::Empty),
            Some(DrawOp::BlockCircle)
        );
        assert_eq!(
            resolve(ToolKind::Line, CharMode::Block, FillMode::Filled),
            Some(DrawOp::BlockLine)
        );
    }

    #[test]
    fn test_circle_radius_rounds() {
        assert_eq!(circle_radius(0, 0, 3, 4), 5);
        assert_eq!(circle_radius(0, 0, 1, 1), 1); // sqrt(2) ~ 1.414
        assert_eq!(circle_radius(0, 0, 2, 2), 3); // sqrt(8) ~ 2.828
        assert_eq!(circle_radius(5, 5, 5, 5), 0);
    }

    #[test]
    fn test_rectangle_outline_only() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        DrawOp::PointRectangle.apply(&mut canvas, 2, 2, 10, 10, Style::NONE);
        // Boundary lit, interior untouched.
        assert!(canvas.dot(2, 2).unwrap().on);
        assert!(canvas.dot(10, 10).unwrap().on);
        assert!(canvas.dot(6, 2).unwrap().on);
        assert!(canvas.dot(2, 6).unwrap().on);
        assert!(!canvas.dot(5, 5).unwrap().on);
        for x in 3..10 {
            for y in 3..10 {
                assert!(!canvas.dot(x, y).unwrap().on, "interior dot ({x}, {y}) lit");
            }
        }
    }

    #[test]
    fn test_clixel_stamp_shape() {
        let mut canvas = Canvas::new(10, 10).unwrap();
        stamp_clixel(&mut canvas, 4, 8, CharMode::Dot, Style::NONE);
        for dy in 0..4 {
            assert!(canvas.dot(4, 8 + dy).unwrap().on);
            assert!(canvas.dot(5, 8 + dy).unwrap().on);
        }
        assert_eq!(canvas.lit_count(), 8);
    }

    #[test]
    fn test_circle_op_uses_anchor_as_center() {
        let mut canvas = Canvas::new(20, 10).unwrap();
        DrawOp::PointCircle.apply(&mut canvas, 20, 20, 25, 20, Style::NONE);
        // Radius 5 circle centered at the anchor.
        assert!(canvas.dot(25, 20).unwrap().on);
        assert!(canvas.dot(15, 20).unwrap().on);
        assert!(canvas.dot(20, 25).unwrap().on);
        assert!(!canvas.dot(20, 20).unwrap().on);
    }
}
