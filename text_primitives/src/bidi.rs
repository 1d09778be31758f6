// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// Strong direction used by a [`DirectionRun`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BidiDirection {
    /// Left-to-right.
    Ltr,
    /// Right-to-left.
    Rtl,
}

/// How a [`DirectionRun`] applies its direction.
///
/// These map conceptually to the Unicode embedding and override controls (LRE/RLE and
/// LRO/RLO), expressed as an attribute rather than literal control characters.
///
/// For background on bidi behavior see UAX #9:
/// <https://www.unicode.org/reports/tr9/>
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BidiFormat {
    /// Open an embedding level; characters keep their own direction.
    #[default]
    Embedding,
    /// Force every character to the given direction.
    Override,
}

/// One nesting level of the writing-direction attribute.
///
/// The attribute itself is an array of these, outermost first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DirectionRun {
    /// Direction of this level.
    pub direction: BidiDirection,
    /// Whether this level embeds or overrides.
    pub format: BidiFormat,
}

impl DirectionRun {
    /// A left-to-right embedding.
    pub const LTR_EMBEDDING: Self = Self::new(BidiDirection::Ltr, BidiFormat::Embedding);
    /// A right-to-left embedding.
    pub const RTL_EMBEDDING: Self = Self::new(BidiDirection::Rtl, BidiFormat::Embedding);
    /// A left-to-right override.
    pub const LTR_OVERRIDE: Self = Self::new(BidiDirection::Ltr, BidiFormat::Override);
    /// A right-to-left override.
    pub const RTL_OVERRIDE: Self = Self::new(BidiDirection::Rtl, BidiFormat::Override);

    /// Creates a run.
    pub const fn new(direction: BidiDirection, format: BidiFormat) -> Self {
        Self { direction, format }
    }

    /// Returns the numeric encoding: the direction in bit 0, the format in bit 1.
    ///
    /// ```
    /// use text_primitives::DirectionRun;
    ///
    /// assert_eq!(DirectionRun::LTR_EMBEDDING.to_number(), 0);
    /// assert_eq!(DirectionRun::RTL_OVERRIDE.to_number(), 3);
    /// ```
    pub const fn to_number(self) -> u8 {
        let direction = match self.direction {
            BidiDirection::Ltr => 0,
            BidiDirection::Rtl => 1,
        };
        let format = match self.format {
            BidiFormat::Embedding => 0,
            BidiFormat::Override => 2,
        };
        direction | format
    }

    /// Decodes a value produced by [`DirectionRun::to_number`].
    ///
    /// Returns `None` for values outside `0..=3`.
    pub const fn from_number(value: u8) -> Option<Self> {
        if value > 3 {
            return None;
        }
        let direction = if value & 1 == 0 {
            BidiDirection::Ltr
        } else {
            BidiDirection::Rtl
        };
        let format = if value & 2 == 0 {
            BidiFormat::Embedding
        } else {
            BidiFormat::Override
        };
        Some(Self::new(direction, format))
    }
}
