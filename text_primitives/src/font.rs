// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::borrow::Cow;
use core::fmt;

bitflags::bitflags! {
    /// Symbolic traits requested of a font.
    ///
    /// Traits accumulate: requesting a trait on a font that already carries others yields the
    /// union, see [`Font::with_traits`].
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct FontTraits: u32 {
        /// Slanted glyphs.
        const ITALIC = 1 << 0;
        /// Heavier strokes.
        const BOLD = 1 << 1;
        /// Wider than normal.
        const EXPANDED = 1 << 5;
        /// Narrower than normal.
        const CONDENSED = 1 << 6;
        /// All glyphs share one advance width.
        const MONOSPACE = 1 << 10;
        /// Reduced line spacing.
        const TIGHT_LEADING = 1 << 15;
        /// Increased line spacing.
        const LOOSE_LEADING = 1 << 16;
    }
}

/// Visual weight class of a font, on a scale from 1.0 to 1000.0.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct FontWeight(f32);

impl FontWeight {
    /// Weight value of 100.
    pub const THIN: Self = Self(100.0);

    /// Weight value of 200.
    pub const ULTRA_LIGHT: Self = Self(200.0);

    /// Weight value of 300.
    pub const LIGHT: Self = Self(300.0);

    /// Weight value of 400. This is the default value.
    pub const REGULAR: Self = Self(400.0);

    /// Weight value of 500.
    pub const MEDIUM: Self = Self(500.0);

    /// Weight value of 600.
    pub const SEMIBOLD: Self = Self(600.0);

    /// Weight value of 700.
    pub const BOLD: Self = Self(700.0);

    /// Weight value of 800.
    pub const HEAVY: Self = Self(800.0);

    /// Weight value of 900.
    pub const BLACK: Self = Self(900.0);

    /// Creates a new weight value.
    pub const fn new(weight: f32) -> Self {
        Self(weight)
    }

    /// Returns the underlying weight value.
    pub const fn value(self) -> f32 {
        self.0
    }

    /// Parses a weight keyword or number.
    ///
    /// ```
    /// use text_primitives::FontWeight;
    ///
    /// assert_eq!(FontWeight::parse("semibold"), Some(FontWeight::SEMIBOLD));
    /// assert_eq!(FontWeight::parse(" 450 "), Some(FontWeight::new(450.0)));
    /// assert_eq!(FontWeight::parse("chunky"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Some(match s {
            "thin" => Self::THIN,
            "ultralight" => Self::ULTRA_LIGHT,
            "light" => Self::LIGHT,
            "regular" | "normal" => Self::REGULAR,
            "medium" => Self::MEDIUM,
            "semibold" => Self::SEMIBOLD,
            "bold" => Self::BOLD,
            "heavy" => Self::HEAVY,
            "black" => Self::BLACK,
            _ => Self(s.parse::<f32>().ok()?),
        })
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::REGULAR
    }
}

impl fmt::Display for FontWeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Platform-provided font families.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum GenericFamily {
    /// The default user interface font.
    #[default]
    SystemUi,
    /// The user interface serif design.
    Serif,
    /// A sans-serif design other than the user interface font.
    SansSerif,
    /// The user interface design with rounded terminals.
    Rounded,
    /// The user interface monospaced design.
    Monospace,
}

/// The family of a [`Font`]: either a named typeface or a platform family.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FontFamily {
    /// A named typeface such as `"Helvetica Neue"`.
    Named(Cow<'static, str>),
    /// A platform family.
    Generic(GenericFamily),
}

impl FontFamily {
    /// The default user interface family.
    pub const SYSTEM_UI: Self = Self::Generic(GenericFamily::SystemUi);

    /// Creates a named family from a static string.
    pub const fn named(name: &'static str) -> Self {
        Self::Named(Cow::Borrowed(name))
    }
}

impl Default for FontFamily {
    fn default() -> Self {
        Self::SYSTEM_UI
    }
}

impl From<GenericFamily> for FontFamily {
    fn from(family: GenericFamily) -> Self {
        Self::Generic(family)
    }
}

/// Semantic text styles with platform-chosen sizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum TextStyle {
    /// Large title.
    LargeTitle,
    /// First level title.
    Title,
    /// Second level title.
    Title2,
    /// Third level title.
    Title3,
    /// Headings.
    Headline,
    /// Secondary headings.
    Subheadline,
    /// Body text. This is the default.
    #[default]
    Body,
    /// Callouts.
    Callout,
    /// Footnotes.
    Footnote,
    /// Standard captions.
    Caption,
    /// Alternate captions.
    Caption2,
}

impl TextStyle {
    /// Returns the default point size for this style.
    pub const fn point_size(self) -> f64 {
        match self {
            Self::LargeTitle => 34.0,
            Self::Title => 28.0,
            Self::Title2 => 22.0,
            Self::Title3 => 20.0,
            Self::Headline | Self::Body => 17.0,
            Self::Callout => 16.0,
            Self::Subheadline => 15.0,
            Self::Footnote => 13.0,
            Self::Caption => 12.0,
            Self::Caption2 => 11.0,
        }
    }

    /// Returns the default weight for this style.
    pub const fn weight(self) -> FontWeight {
        match self {
            Self::Headline => FontWeight::SEMIBOLD,
            _ => FontWeight::REGULAR,
        }
    }
}

/// An immutable font descriptor.
///
/// This is the value the attribute algebra stores for the font attribute. Turning it into an
/// actual face is the renderer's business.
#[derive(Clone, Debug, PartialEq)]
pub struct Font {
    family: FontFamily,
    size: f64,
    weight: FontWeight,
    traits: FontTraits,
}

impl Font {
    /// The body font: the system family at 17 points, regular weight, no traits.
    pub const BODY: Self = Self::system(TextStyle::Body.point_size(), FontWeight::REGULAR);

    /// Creates a font in the system family.
    pub const fn system(size: f64, weight: FontWeight) -> Self {
        Self {
            family: FontFamily::SYSTEM_UI,
            size,
            weight,
            traits: FontTraits::empty(),
        }
    }

    /// Creates a font for a semantic text style.
    pub const fn for_text_style(style: TextStyle) -> Self {
        Self::system(style.point_size(), style.weight())
    }

    /// Creates a font from a family and size.
    pub fn new(family: impl Into<FontFamily>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
            weight: FontWeight::REGULAR,
            traits: FontTraits::empty(),
        }
    }

    /// Returns the font family.
    pub fn family(&self) -> &FontFamily {
        &self.family
    }

    /// Returns the point size.
    pub fn size(&self) -> f64 {
        self.size
    }

    /// Returns the weight.
    pub fn weight(&self) -> FontWeight {
        self.weight
    }

    /// Returns the symbolic traits.
    pub fn traits(&self) -> FontTraits {
        self.traits
    }

    /// Returns `true` if this font is bold, by trait or by weight.
    pub fn is_bold(&self) -> bool {
        self.traits.contains(FontTraits::BOLD) || self.weight >= FontWeight::BOLD
    }

    /// Returns `true` if this font carries the italic trait.
    pub fn is_italic(&self) -> bool {
        self.traits.contains(FontTraits::ITALIC)
    }

    /// Returns a copy of this font carrying `traits` in addition to its current ones.
    #[must_use]
    pub fn with_traits(&self, traits: FontTraits) -> Self {
        Self {
            traits: self.traits | traits,
            ..self.clone()
        }
    }

    /// Returns a copy of this font at a different point size.
    #[must_use]
    pub fn with_size(&self, size: f64) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }

    /// Returns a copy of this font at a different weight.
    #[must_use]
    pub fn with_weight(&self, weight: FontWeight) -> Self {
        Self {
            weight,
            ..self.clone()
        }
    }

    /// Returns a copy of this font in a different family.
    #[must_use]
    pub fn with_family(&self, family: impl Into<FontFamily>) -> Self {
        Self {
            family: family.into(),
            ..self.clone()
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::BODY
    }
}
