//! Pointer event types.
//!
//! The UI layer translates terminal mouse input into these plain-data events
//! and feeds them to the [`Session`](crate::session::Session). Positions are
//! in coarse cell coordinates (the terminal's own grid); the session maps
//! them into dot coordinates. Signed ints are used deliberately: positions
//! derived from raw terminal input can transiently go negative after the UI
//! subtracts its chrome offsets.

/// Pointer button.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    /// Left button (the drawing button).
    Left,
    /// Middle button.
    Middle,
    /// Right button.
    Right,
    /// No button (plain motion).
    None,
}

/// Kind of pointer motion.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Motion {
    /// Button pressed.
    Pressed,
    /// Pointer moved.
    Moved,
    /// Button released.
    Released,
}

/// A pointer event in coarse cell coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PointerEvent {
    /// Column, in cells.
    pub x: i32,
    /// Row, in cells.
    pub y: i32,
    /// Button involved.
    pub button: PointerButton,
    /// Kind of motion.
    pub motion: Motion,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(x: i32, y: i32, button: PointerButton, motion: Motion) -> Self {
        Self {
            x,
            y,
            button,
            motion,
        }
    }

    /// A left-button press.
    #[must_use]
    pub const fn press(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerButton::Left, Motion::Pressed)
    }

    /// A drag move with the left button held.
    #[must_use]
    pub const fn moved(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerButton::Left, Motion::Moved)
    }

    /// A left-button release.
    #[must_use]
    pub const fn released(x: i32, y: i32) -> Self {
        Self::new(x, y, PointerButton::Left, Motion::Released)
    }

    /// Check if this is a press event.
    #[must_use]
    pub fn is_press(&self) -> bool {
        self.motion == Motion::Pressed
    }
}
