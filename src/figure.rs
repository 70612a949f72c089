//! Committed-shape data model.
//!
//! A [`Figure`] is the immutable record of one committed stroke: which tool
//! drew it, in which visual mode and fill mode, its two defining dots, and
//! its color. The [`FigureLog`] is the ordered, append-only list of figures
//! making up a document; replaying the log onto an empty canvas reconstructs
//! the drawing exactly, later figures painting over earlier ones.
//!
//! On the wire the three enums serialize as small integers and the color as
//! flat `r`/`g`/`b` byte fields, so a persisted figure is a flat record of
//! ten integers.

use crate::color::Rgb;
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Implements integer (de)serialization for a unit-variant enum, rejecting
/// unknown indices at load time.
macro_rules! index_enum {
    ($name:ident { $($variant:ident = $idx:literal),+ $(,)? }) => {
        impl $name {
            /// Stable wire index of this variant.
            #[must_use]
            pub const fn index(self) -> u8 {
                self as u8
            }

            /// Look up a variant by wire index.
            #[must_use]
            pub const fn from_index(idx: u8) -> Option<Self> {
                match idx {
                    $($idx => Some(Self::$variant),)+
                    _ => None,
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u8(self.index())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let idx = u8::deserialize(deserializer)?;
                Self::from_index(idx).ok_or_else(|| {
                    D::Error::custom(format!(
                        concat!("unknown ", stringify!($name), " index {}"),
                        idx
                    ))
                })
            }
        }
    };
}

/// Drawing tool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToolKind {
    /// Immediate single-stamp paint tool; bypasses the two-point model and
    /// is never recorded in the log.
    Clixel = 0,
    /// Straight segment between press and release.
    Line = 1,
    /// Circle centered at the press point, radius set by the drag distance.
    Circle = 2,
    /// Ellipse inscribed in the press/release bounding box.
    Ellipse = 3,
    /// Axis-aligned rectangle outline with press/release corners.
    Rectangle = 4,
}

index_enum!(ToolKind {
    Clixel = 0,
    Line = 1,
    Circle = 2,
    Ellipse = 3,
    Rectangle = 4,
});

/// Visual rendering mode a shape is drawn for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharMode {
    /// Braille rendering; one visible dot per fine-grid unit.
    Dot = 0,
    /// Quadrant-block rendering; strokes are thickened to stay visible.
    Block = 1,
}

index_enum!(CharMode {
    Dot = 0,
    Block = 1,
});

/// Whether a closed shape is filled.
///
/// Irrelevant for lines and rectangle outlines but stored anyway so a figure
/// is a uniform record.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FillMode {
    Filled = 0,
    Empty = 1,
}

index_enum!(FillMode {
    Filled = 0,
    Empty = 1,
});

/// One committed shape.
///
/// `(x0, y0)` is the anchor (press point) and `(x1, y1)` the terminating
/// point, both in fine-grid dot coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Figure {
    pub tool: ToolKind,
    pub mode: CharMode,
    pub fill: FillMode,
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
    #[serde(flatten)]
    pub color: Rgb,
}

/// Ordered, append-only log of committed figures.
///
/// Insertion order is drawing order. The log is only ever appended to or
/// cleared, never edited in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FigureLog {
    figures: Vec<Figure>,
}

impl FigureLog {
    /// Create an empty log.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            figures: Vec::new(),
        }
    }

    /// Append a committed figure.
    pub fn append(&mut self, figure: Figure) {
        self.figures.push(figure);
    }

    /// Drop every figure.
    pub fn clear(&mut self) {
        self.figures.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.figures.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.figures.is_empty()
    }

    /// Iterate figures in commit order.
    pub fn iter(&self) -> std::slice::Iter<'_, Figure> {
        self.figures.iter()
    }

    /// The figures as a slice, in commit order.
    #[must_use]
    pub fn as_slice(&self) -> &[Figure] {
        &self.figures
    }

    /// The most recently committed figure.
    #[must_use]
    pub fn last(&self) -> Option<&Figure> {
        self.figures.last()
    }
}

impl<'a> IntoIterator for &'a FigureLog {
    type Item = &'a Figure;
    type IntoIter = std::slice::Iter<'a, Figure>;

    fn into_iter(self) -> Self::IntoIter {
        self.figures.iter()
    }
}
