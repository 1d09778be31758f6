// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Horizontal alignment of the lines in a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum TextAlignment {
    /// Align to the leading edge for the paragraph's writing direction.
    #[default]
    Natural,
    /// Align to the left edge.
    Left,
    /// Align to the right edge.
    Right,
    /// Center each line.
    Center,
    /// Stretch lines to fill the line width, except the last.
    Justified,
}

/// What happens to text that does not fit on a line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    #[default]
    WordWrapping,
    /// Wrap at character boundaries.
    CharWrapping,
    /// Do not wrap; clip at the line end.
    Clipping,
    /// Elide the start of the line.
    TruncatingHead,
    /// Elide the end of the line.
    TruncatingTail,
    /// Elide the middle of the line.
    TruncatingMiddle,
}

bitflags::bitflags! {
    /// Refinements to where lines may break.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct LineBreakStrategy: u8 {
        /// Avoid leaving a single word on the last line by pushing earlier words down.
        const PUSH_OUT = 1 << 0;
        /// Prefer breaking Hangul at word boundaries rather than between syllables.
        const HANGUL_WORD_PRIORITY = 1 << 1;
        /// The platform's standard behavior.
        const STANDARD = 0xFF;
    }
}

impl Default for LineBreakStrategy {
    fn default() -> Self {
        Self::empty()
    }
}

/// The base writing direction of a paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum WritingDirection {
    /// Determined by the first strong character (UAX #9 rules P2 and P3).
    #[default]
    Natural,
    /// Left-to-right.
    LeftToRight,
    /// Right-to-left.
    RightToLeft,
}

/// How text aligns to a tab stop.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TabAlignment {
    /// Text starts at the stop.
    #[default]
    Left,
    /// Text is centered on the stop.
    Center,
    /// Text ends at the stop.
    Right,
    /// The decimal separator sits on the stop.
    Decimal,
}

/// A tab stop in a paragraph.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextTab {
    /// Alignment of text relative to the stop.
    pub alignment: TabAlignment,
    /// Distance of the stop from the leading margin, in points.
    pub location: f64,
}

impl TextTab {
    /// Creates a tab stop.
    pub const fn new(alignment: TabAlignment, location: f64) -> Self {
        Self {
            alignment,
            location,
        }
    }
}
