//! Document model and persistence.
//!
//! A [`Document`] is the durable value of a drawing: canvas dimensions plus
//! the [`FigureLog`]. The live canvas is a *derived* view — replaying the log
//! onto a fresh canvas reconstructs it dot for dot, so only the document is
//! ever saved.
//!
//! Documents persist as JSON under `<name>.paint` in the working directory.
//! Saving never touches the in-memory document; a failed save leaves the
//! session fully usable. Loading validates dimensions and fails atomically,
//! never yielding a half-initialized document.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::figure::{Figure, FigureLog};
use crate::style::Style;
use crate::tool::{resolve, stamp_clixel};

/// A complete drawing: dimensions and the ordered figure log.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    width: u32,
    height: u32,
    figures: FigureLog,
}

impl Document {
    /// Extension appended to document names on disk.
    pub const FILE_EXTENSION: &'static str = "paint";

    /// Create an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            width,
            height,
            figures: FigureLog::new(),
        })
    }

    /// Canvas width in cells.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Canvas height in cells.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The committed figures, in commit order.
    #[must_use]
    pub const fn figures(&self) -> &FigureLog {
        &self.figures
    }

    /// Append a committed figure.
    ///
    /// The interactive path goes through the session; this is also the
    /// non-interactive entry point for building documents directly.
    pub fn append(&mut self, figure: Figure) {
        self.figures.append(figure);
    }

    pub(crate) fn clear_figures(&mut self) {
        self.figures.clear();
    }

    /// Reconstruct the canvas by replaying every figure in commit order.
    ///
    /// Each figure's stored color becomes the active style for its one
    /// replay call, so later figures overwrite earlier ones exactly as they
    /// did at commit time.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the document carries zero
    /// dimensions (possible only for hand-edited files).
    pub fn replay(&self) -> Result<Canvas> {
        let mut canvas = Canvas::new(self.width, self.height)?;
        for fig in &self.figures {
            let style = Style::new(fig.color);
            match resolve(fig.tool, fig.mode, fig.fill) {
                Some(op) => op.apply(&mut canvas, fig.x0, fig.y0, fig.x1, fig.y1, style),
                // Clixel figures are never committed by the session, but a
                // hand-edited file may contain one; replay it as the stamp.
                None => stamp_clixel(&mut canvas, fig.x0, fig.y0, fig.mode, style),
            }
        }
        Ok(canvas)
    }

    /// Derive the on-disk file name for a document name.
    ///
    /// Appends the fixed extension exactly once.
    #[must_use]
    pub fn file_name(name: &str) -> String {
        let suffix = format!(".{}", Self::FILE_EXTENSION);
        if name.ends_with(&suffix) {
            name.to_string()
        } else {
            format!("{name}{suffix}")
        }
    }

    /// Serialize to JSON and write to `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be written. The in-memory
    /// document is unaffected by a failed save.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        log::info!(
            "saved document to {} ({} figures)",
            path.display(),
            self.figures.len()
        );
        Ok(())
    }

    /// Save under `file_name(name)` in the working directory.
    ///
    /// Returns the path written to.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be written.
    pub fn save(&self, name: &str) -> Result<PathBuf> {
        let path = PathBuf::from(Self::file_name(name));
        self.save_to_path(&path)?;
        Ok(path)
    }

    /// Read and deserialize a document from `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] when the file cannot be read (including
    /// file-not-found), [`Error::MalformedDocument`] when it does not parse,
    /// and [`Error::InvalidDimensions`] when it parses but carries zero
    /// dimensions.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        let doc: Self = serde_json::from_str(&json)?;
        if doc.width == 0 || doc.height == 0 {
            return Err(Error::InvalidDimensions {
                width: doc.width,
                height: doc.height,
            });
        }
        log::info!(
            "loaded document from {} ({}x{}, {} figures)",
            path.display(),
            doc.width,
            doc.height,
            doc.figures.len()
        );
        Ok(doc)
    }

    /// Load from `file_name(name)` in the working directory.
    ///
    /// # Errors
    ///
    /// Same as [`Document::load_from_path`].
    pub fn load(name: &str) -> Result<Self> {
        Self::load_from_path(Path::new(&Self::file_name(name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgb;
    use crate::figure::{CharMode, FillMode, ToolKind};

    #[test]
    fn test_new_validates_dimensions() {
        assert!(Document::new(10, 10).is_ok());
        assert!(matches!(
            Document::new(0, 10),
            Err(Error::InvalidDimensions { .. })
        ));
    }

    #[test]
    fn test_file_name_extension_once() {
        assert_eq!(Document::file_name("sketch"), "sketch.paint");
        assert_eq!(Document::file_name("sketch.paint"), "sketch.paint");
    }

    #[test]
    fn test_replay_matches_direct_draw() {
        let mut doc = Document::new(10, 10).unwrap();
        doc.append(Figure {
            tool: ToolKind::Line,
            mode: CharMode::Dot,
            fill: FillMode::Empty,
            x0: 0,
            y0: 0,
            x1: 15,
            y1: 30,
            color: Rgb::RED,
        });

        let replayed = doc.replay().unwrap();
        let mut direct = Canvas::new(10, 10).unwrap();
        direct.draw_point_line(0, 0, 15, 30, Style::new(Rgb::RED));
        assert!(replayed.dots_eq(&direct));
    }

    #[test]
    fn test_replay_preserves_paint_order() {
        let mut doc = Document::new(10, 10).unwrap();
        let base = Figure {
            tool: ToolKind::Line,
            mode: CharMode::Dot,
            fill: FillMode::Empty,
            x0: 0,
            y0: 5,
            x1: 19,
            y1: 5,
            color: Rgb::RED,
        };
        doc.append(base);
        doc.append(Figure {
            color: Rgb::BLUE,
            ..base
        });

        let canvas = doc.replay().unwrap();
        // The later figure wins.
        assert_eq!(canvas.dot(10, 5).unwrap().color, Rgb::BLUE);
    }

    #[test]
    fn test_document_json_shape() {
        let mut doc = Document::new(4, 3).unwrap();
        doc.append(Figure {
            tool: ToolKind::Circle,
            mode: CharMode::Block,
            fill: FillMode::Filled,
            x0: 1,
            y0: 2,
            x1: 3,
            y1: 4,
            color: Rgb::new(9, 8, 7),
        });
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["width"], 4);
        assert_eq!(json["height"], 3);
        assert_eq!(json["figures"][0]["tool"], 2);
        assert_eq!(json["figures"][0]["mode"], 1);
        assert_eq!(json["figures"][0]["b"], 7);
    }
}
