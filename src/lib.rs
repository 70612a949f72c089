//! `retro_paint` - Terminal paint engine
//!
//! The drawing core of a mouse-driven terminal paint program: a braille-
//! resolution dot canvas with rasterization primitives, tool dispatch, an
//! interactive stroke state machine with non-destructive previews, and JSON
//! persistence of the committed-shape log.
//!
//! The crate deliberately contains no UI chrome. A frontend supplies pointer
//! events, the current tool selection, and the current style; it reads the
//! canvas back out cell by cell (see [`Canvas::glyph_cell`]) to render it.
//!
//! ```
//! use retro_paint::{
//!     CharMode, FillMode, PointerEvent, Rgb, Session, Style, ToolKind, ToolSelection,
//! };
//!
//! let mut session = Session::new(20, 10).unwrap();
//! let sel = ToolSelection::new(ToolKind::Rectangle, CharMode::Dot, FillMode::Empty);
//! let style = Style::new(Rgb::GREEN);
//!
//! session.pointer_event(PointerEvent::press(2, 2), sel, style);
//! session.pointer_event(PointerEvent::moved(10, 6), sel, style);
//! session.pointer_event(PointerEvent::released(10, 6), sel, style);
//!
//! assert_eq!(session.document().figures().len(), 1);
//! println!("{}", session.canvas().render_text(CharMode::Dot));
//! ```

// Crate-level lint configuration
#![warn(unsafe_code)]
#![allow(clippy::cast_possible_truncation)] // Intentional coordinate casts
#![allow(clippy::cast_sign_loss)] // Intentional coordinate conversions
#![allow(clippy::cast_possible_wrap)] // Intentional coordinate conversions
#![allow(clippy::cast_precision_loss)] // Intentional for radius math
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical

pub mod canvas;
pub mod color;
pub mod document;
pub mod error;
pub mod figure;
pub mod pointer;
pub mod session;
pub mod style;
pub mod tool;

// Re-export core types at crate root
pub use canvas::{Canvas, Dot, Glyph, Snapshot};
pub use color::Rgb;
pub use document::Document;
pub use error::{Error, Result};
pub use figure::{CharMode, FillMode, Figure, FigureLog, ToolKind};
pub use pointer::{Motion, PointerButton, PointerEvent};
pub use session::Session;
pub use style::{Style, TextAttributes};
pub use tool::{resolve, stamp_clixel, DrawOp, ToolSelection};
