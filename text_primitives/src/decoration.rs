// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use peniko::kurbo::Vec2;
use peniko::Color;

bitflags::bitflags! {
    /// Style of an underline or strikethrough line.
    ///
    /// The low byte selects the thickness (`SINGLE`, `THICK`, `DOUBLE`), the second byte the
    /// dash pattern, and `BY_WORD` skips whitespace.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct LineStyle: u32 {
        /// A single thin line.
        const SINGLE = 0x01;
        /// A single thick line.
        const THICK = 0x02;
        /// Two thin lines.
        const DOUBLE = 0x09;
        /// Dotted.
        const PATTERN_DOT = 0x0100;
        /// Dashed.
        const PATTERN_DASH = 0x0200;
        /// Alternating dashes and dots.
        const PATTERN_DASH_DOT = 0x0300;
        /// Alternating dashes and pairs of dots.
        const PATTERN_DASH_DOT_DOT = 0x0400;
        /// Draw only under words, not whitespace.
        const BY_WORD = 0x8000;
    }
}

impl LineStyle {
    /// No line. Setting this style removes the decoration.
    pub const NONE: Self = Self::empty();

    /// Returns `true` if this style draws nothing.
    pub fn is_none(self) -> bool {
        self.is_empty()
    }
}

/// A drop shadow under glyphs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    /// Offset of the shadow from the glyphs, in points. Positive `y` is down.
    pub offset: Vec2,
    /// Blur radius, in points.
    pub blur_radius: f64,
    /// Shadow color.
    pub color: Color,
}

impl Shadow {
    /// The platform default: black at one third opacity, three points up, no blur.
    pub const DEFAULT: Self = Self {
        offset: Vec2::new(0.0, -3.0),
        blur_radius: 0.0,
        color: Color::from_rgba8(0, 0, 0, 85),
    };

    /// Returns a copy with a different offset.
    #[must_use]
    pub fn with_offset(self, offset: Vec2) -> Self {
        Self { offset, ..self }
    }

    /// Returns a copy with a different blur radius.
    #[must_use]
    pub fn with_blur_radius(self, blur_radius: f64) -> Self {
        Self {
            blur_radius,
            ..self
        }
    }

    /// Returns a copy with a different color.
    #[must_use]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

impl Default for Shadow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Which ligatures may be formed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Ligature {
    /// Only ligatures required for correct rendering.
    None,
    /// The font's standard ligatures.
    #[default]
    Default,
    /// All available ligatures.
    All,
}

/// Special rendering effects.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum TextEffect {
    /// Glyphs appear pressed into the surface.
    Letterpress,
}

bitflags::bitflags! {
    /// Marks text flagged by a spelling or grammar checker.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct SpellingState: u8 {
        /// Misspelled.
        const SPELLING = 1 << 0;
        /// Grammatically questionable.
        const GRAMMAR = 1 << 1;
    }
}

/// Pointer shape to show while hovering text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum Cursor {
    /// The standard arrow.
    #[default]
    Arrow,
    /// The text insertion beam.
    IBeam,
    /// A pointing hand, as over links.
    PointingHand,
    /// Crosshair.
    Crosshair,
    /// Forbidden operation.
    NotAllowed,
}
