//! Dot styling with color and text attributes.
//!
//! A [`Style`] is the complete description of how a plotted dot renders: one
//! RGB color plus a [`TextAttributes`] bitflag set. Styles are immutable Copy
//! values; the interaction layer resolves the active style once per pointer
//! event and passes it into drawing operations by value, so a style can never
//! change mid-primitive.

use crate::color::Rgb;
use bitflags::bitflags;

bitflags! {
    /// Text rendering attributes applied to a dot's glyph.
    ///
    /// Not all terminals support all attributes; unsupported flags are simply
    /// ignored by the renderer.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct TextAttributes: u8 {
        /// Bold/increased intensity.
        const BOLD       = 0x01;
        /// Blinking text (rarely supported).
        const BLINK      = 0x02;
        /// Dim/decreased intensity.
        const DIM        = 0x04;
        /// Underlined text.
        const UNDERLINED = 0x08;
        /// Swapped foreground/background.
        const INVERTED   = 0x10;
    }
}

/// Complete dot style: color plus attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color of the dot.
    pub color: Rgb,
    /// Rendering attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Plain white, no attributes.
    pub const NONE: Self = Self {
        color: Rgb::WHITE,
        attributes: TextAttributes::empty(),
    };

    /// Create a style with the given color and no attributes.
    #[must_use]
    pub const fn new(color: Rgb) -> Self {
        Self {
            color,
            attributes: TextAttributes::empty(),
        }
    }

    /// Replace the attribute set.
    #[must_use]
    pub const fn with_attributes(mut self, attributes: TextAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Add bold.
    #[must_use]
    pub const fn with_bold(mut self) -> Self {
        self.attributes = self.attributes.union(TextAttributes::BOLD);
        self
    }

    /// Add underline.
    #[must_use]
    pub const fn with_underlined(mut self) -> Self {
        self.attributes = self.attributes.union(TextAttributes::UNDERLINED);
        self
    }

    /// Add inverted.
    #[must_use]
    pub const fn with_inverted(mut self) -> Self {
        self.attributes = self.attributes.union(TextAttributes::INVERTED);
        self
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::NONE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_style_builder() {
        let s = Style::new(Rgb::RED).with_bold().with_underlined();
        assert_eq!(s.color, Rgb::RED);
        assert!(s.attributes.contains(TextAttributes::BOLD));
        assert!(s.attributes.contains(TextAttributes::UNDERLINED));
        assert!(!s.attributes.contains(TextAttributes::BLINK));
    }

    #[test]
    fn test_style_is_copy() {
        let s = Style::new(Rgb::GREEN);
        let s2 = s;
        assert_eq!(s, s2);
    }

    #[test]
    fn test_attribute_bits() {
        let all = TextAttributes::all();
        assert_eq!(all.bits(), 0x1F);
    }
}
