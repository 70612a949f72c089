//! Interactive paint session.
//!
//! [`Session`] owns the [`Document`] and the live [`Canvas`] and drives both
//! from a synchronous stream of pointer events. Event processing is strictly
//! one-at-a-time: each event completes its state transition and canvas
//! mutation before the next is accepted, and there is no background work.
//!
//! # Stroke state machine
//!
//! The session is either `Idle` or `Dragging`. A left press on the canvas
//! snapshots the dot state, resolves the selected tool into a [`DrawOp`],
//! and previews the shape anchored at the press point. Every subsequent move
//! restores the snapshot and redraws the one candidate shape from the anchor
//! to the new position — previews never accumulate. Release commits a
//! [`Figure`] to the log; [`Session::cancel_stroke`] restores the snapshot
//! and commits nothing.
//!
//! The live canvas therefore always equals the replayed figure log plus at
//! most one in-progress preview (clixel stamps excepted — clixel is paint,
//! not a recorded shape).

use std::path::PathBuf;

use crate::canvas::{Canvas, Snapshot, DOTS_PER_CELL_X, DOTS_PER_CELL_Y};
use crate::document::Document;
use crate::error::Result;
use crate::figure::{Figure, ToolKind};
use crate::pointer::{Motion, PointerButton, PointerEvent};
use crate::style::Style;
use crate::tool::{resolve, stamp_clixel, DrawOp, ToolSelection};

/// Tagged stroke state. `Dragging` holds everything needed to re-render the
/// preview and to commit: plain data, no captured closures.
#[derive(Debug)]
enum Drag {
    Idle,
    Dragging {
        anchor_x: i32,
        anchor_y: i32,
        last_x: i32,
        last_y: i32,
        op: DrawOp,
        selection: ToolSelection,
        /// Style of the most recent preview render; committing uses this so
        /// the logged figure matches what is on screen.
        style: Style,
        snapshot: Snapshot,
    },
}

/// An interactive paint session over one document.
#[derive(Debug)]
pub struct Session {
    document: Document,
    canvas: Canvas,
    drag: Drag,
}

impl Session {
    /// Start a session on a fresh document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`](crate::Error::InvalidDimensions)
    /// if either dimension is zero.
    pub fn new(width_cells: u32, height_cells: u32) -> Result<Self> {
        Self::from_document(Document::new(width_cells, height_cells)?)
    }

    /// Start a session on an existing document, reconstructing the canvas by
    /// replay.
    ///
    /// # Errors
    ///
    /// Propagates replay errors; on error no session is created.
    pub fn from_document(document: Document) -> Result<Self> {
        let canvas = document.replay()?;
        Ok(Self {
            document,
            canvas,
            drag: Drag::Idle,
        })
    }

    /// Load a named document from the working directory and start a session
    /// on it. The document's recorded dimensions win over any caller-side
    /// configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`Document::load`] errors; on error no session is created.
    pub fn load(name: &str) -> Result<Self> {
        Self::from_document(Document::load(name)?)
    }

    /// The live canvas, for the external renderer. Read-only: all mutation
    /// goes through events.
    #[must_use]
    pub const fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// The current document.
    #[must_use]
    pub const fn document(&self) -> &Document {
        &self.document
    }

    /// Whether a stroke is in progress.
    #[must_use]
    pub const fn is_dragging(&self) -> bool {
        matches!(self.drag, Drag::Dragging { .. })
    }

    /// Process one pointer event.
    ///
    /// `selection` and `style` are the UI's current tool and style, resolved
    /// once for this event. Events outside the canvas while idle are
    /// ignored; mid-drag coordinates may leave the canvas and are clipped by
    /// the grid.
    pub fn pointer_event(&mut self, ev: PointerEvent, selection: ToolSelection, style: Style) {
        match ev.motion {
            Motion::Pressed => self.on_press(ev, selection, style),
            Motion::Moved => self.on_move(ev, style),
            Motion::Released => self.on_release(),
        }
    }

    /// Abort the in-progress stroke, restoring the canvas to its pre-press
    /// state. No figure is committed. A no-op while idle.
    pub fn cancel_stroke(&mut self) {
        if let Drag::Dragging { snapshot, .. } = std::mem::replace(&mut self.drag, Drag::Idle) {
            self.canvas.restore(&snapshot);
            log::debug!("stroke cancelled");
        }
    }

    /// Clear the drawing: empties the figure log and every canvas dot. Any
    /// in-progress stroke is dropped.
    pub fn clear(&mut self) {
        self.drag = Drag::Idle;
        self.document.clear_figures();
        self.canvas.clear();
    }

    /// Save the document under `name` (fixed extension appended) in the
    /// working directory. The session is unaffected by a failed save.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`](crate::Error::Io) when writing fails.
    pub fn save(&self, name: &str) -> Result<PathBuf> {
        self.document.save(name)
    }

    fn on_press(&mut self, ev: PointerEvent, selection: ToolSelection, style: Style) {
        if ev.button != PointerButton::Left
            || self.is_dragging()
            || !self.canvas.contains_cell(ev.x, ev.y)
        {
            return;
        }
        let (fx, fy) = to_dot_coords(ev.x, ev.y);

        if selection.tool == ToolKind::Clixel {
            stamp_clixel(&mut self.canvas, fx, fy, selection.mode, style);
            return;
        }
        // Total for every non-clixel selection.
        let Some(op) = resolve(selection.tool, selection.mode, selection.fill) else {
            return;
        };

        let snapshot = self.canvas.snapshot();
        op.apply(&mut self.canvas, fx, fy, fx, fy, style);
        self.drag = Drag::Dragging {
            anchor_x: fx,
            anchor_y: fy,
            last_x: fx,
            last_y: fy,
            op,
            selection,
            style,
            snapshot,
        };
    }

    fn on_move(&mut self, ev: PointerEvent, style: Style) {
        let Drag::Dragging {
            anchor_x,
            anchor_y,
            last_x,
            last_y,
            op,
            snapshot,
            style: drag_style,
            ..
        } = &mut self.drag
        else {
            return;
        };
        let (fx, fy) = to_dot_coords(ev.x, ev.y);
        if fx == *last_x && fy == *last_y {
            return;
        }
        // Restore-then-redraw keeps the preview non-destructive: exactly one
        // candidate shape is visible at a time.
        self.canvas.restore(snapshot);
        op.apply(&mut self.canvas, *anchor_x, *anchor_y, fx, fy, style);
        *last_x = fx;
        *last_y = fy;
        *drag_style = style;
    }

    fn on_release(&mut self) {
        let Drag::Dragging {
            anchor_x,
            anchor_y,
            last_x,
            last_y,
            selection,
            style,
            ..
        } = std::mem::replace(&mut self.drag, Drag::Idle)
        else {
            return;
        };
        // The preview from the last move already shows the final shape;
        // committing is just recording it.
        let figure = Figure {
            tool: selection.tool,
            mode: selection.mode,
            fill: selection.fill,
            x0: anchor_x,
            y0: anchor_y,
            x1: last_x,
            y1: last_y,
            color: style.color,
        };
        self.document.append(figure);
        log::debug!(
            "committed {:?} ({}, {}) -> ({}, {})",
            selection.tool,
            anchor_x,
            anchor_y,
            last_x,
            last_y
        );
    }
}

/// Map a coarse cell coordinate to the top-left dot of that cell.
const fn to_dot_coords(cx: i32, cy: i32) -> (i32, i32) {
    (cx * DOTS_PER_CELL_X as i32, cy * DOTS_PER_CELL_Y as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::figure::{CharMode, FillMode};

    fn line_selection() -> ToolSelection {
        ToolSelection::new(ToolKind::Line, CharMode::Dot, FillMode::Empty)
    }

    #[test]
    fn test_press_drag_release_commits_figure() {
        let mut session = Session::new(10, 10).unwrap();
        let style = Style::new(Rgb::RED);

        session.pointer_event(PointerEvent::press(1, 1), line_selection(), style);
        assert!(session.is_dragging());
        session.pointer_event(PointerEvent::moved(5, 5), line_selection(), style);
        session.pointer_event(PointerEvent::released(5, 5), line_selection(), style);

        assert!(!session.is_dragging());
        let log = session.document().figures();
        assert_eq!(log.len(), 1);
        let fig = log.last().unwrap();
        assert_eq!((fig.x0, fig.y0), (2, 4));
        assert_eq!((fig.x1, fig.y1), (10, 20));
        assert_eq!(fig.color, Rgb::RED);
    }

    #[test]
    fn test_press_outside_canvas_ignored() {
        let mut session = Session::new(10, 10).unwrap();
        session.pointer_event(PointerEvent::press(10, 0), line_selection(), Style::NONE);
        session.pointer_event(PointerEvent::press(-1, 3), line_selection(), Style::NONE);
        assert!(!session.is_dragging());
        assert_eq!(session.canvas().lit_count(), 0);
    }

    #[test]
    fn test_release_while_idle_is_noop() {
        let mut session = Session::new(10, 10).unwrap();
        session.pointer_event(PointerEvent::released(3, 3), line_selection(), Style::NONE);
        assert!(session.document().figures().is_empty());
    }

    #[test]
    fn test_non_left_press_ignored() {
        let mut session = Session::new(10, 10).unwrap();
        let ev = PointerEvent::new(2, 2, PointerButton::Right, Motion::Pressed);
        session.pointer_event(ev, line_selection(), Style::NONE);
        assert!(!session.is_dragging());
    }

    #[test]
    fn test_press_previews_immediately() {
        let mut session = Session::new(10, 10).unwrap();
        session.pointer_event(PointerEvent::press(2, 2), line_selection(), Style::NONE);
        // Degenerate anchor->anchor line lights the anchor dot.
        assert!(session.canvas().dot(4, 8).unwrap().on);
        assert!(session.document().figures().is_empty());
    }

    #[test]
    fn test_clixel_stamps_without_logging() {
        let mut session = Session::new(10, 10).unwrap();
        let sel = ToolSelection::new(ToolKind::Clixel, CharMode::Dot, FillMode::Empty);
        session.pointer_event(PointerEvent::press(3, 3), sel, Style::new(Rgb::GREEN));

        assert!(!session.is_dragging());
        assert_eq!(session.canvas().lit_count(), 8);
        assert!(session.document().figures().is_empty());
    }

    #[test]
    fn test_clear_resets_log_and_canvas() {
        let mut session = Session::new(10, 10).unwrap();
        let style = Style::NONE;
        session.pointer_event(PointerEvent::press(1, 1), line_selection(), style);
        session.pointer_event(PointerEvent::moved(4, 4), line_selection(), style);
        session.pointer_event(PointerEvent::released(4, 4), line_selection(), style);
        assert_eq!(session.document().figures().len(), 1);

        session.clear();
        assert!(session.document().figures().is_empty());
        assert_eq!(session.canvas().lit_count(), 0);
    }

    #[test]
    fn test_commit_uses_last_move_style() {
        let mut session = Session::new(10, 10).unwrap();
        session.pointer_event(PointerEvent::press(1, 1), line_selection(), Style::new(Rgb::RED));
        session.pointer_event(PointerEvent::moved(5, 5), line_selection(), Style::new(Rgb::BLUE));
        // Style at release does not repaint; the last rendered style wins.
        session.pointer_event(
            PointerEvent::released(5, 5),
            line_selection(),
            Style::new(Rgb::GREEN),
        );
        assert_eq!(session.document().figures().last().unwrap().color, Rgb::BLUE);
    }
}
