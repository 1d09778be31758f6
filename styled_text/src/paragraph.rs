// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use text_primitives::{
    LineBreakMode, LineBreakStrategy, TabAlignment, TextAlignment, TextTab, WritingDirection,
};

/// Paragraph-level layout settings, stored as a single attribute.
///
/// This is a plain value: every `with_*` setter consumes the style and returns it with one
/// field replaced, so a style read out of one attribute set and changed can never affect the
/// set it came from. [`ParagraphStyle::default`] holds the platform defaults.
#[derive(Clone, Debug, PartialEq)]
pub struct ParagraphStyle {
    alignment: TextAlignment,
    first_line_head_indent: f64,
    head_indent: f64,
    tail_indent: f64,
    line_height_multiple: f64,
    minimum_line_height: f64,
    maximum_line_height: f64,
    line_spacing: f64,
    paragraph_spacing: f64,
    paragraph_spacing_before: f64,
    line_break_mode: LineBreakMode,
    line_break_strategy: LineBreakStrategy,
    hyphenation_factor: f32,
    uses_default_hyphenation: bool,
    allows_default_tightening_for_truncation: bool,
    base_writing_direction: WritingDirection,
    tab_stops: Vec<TextTab>,
    default_tab_interval: f64,
    header_level: u32,
    tightening_factor_for_truncation: f32,
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        Self {
            alignment: TextAlignment::Natural,
            first_line_head_indent: 0.0,
            head_indent: 0.0,
            tail_indent: 0.0,
            line_height_multiple: 0.0,
            minimum_line_height: 0.0,
            maximum_line_height: 0.0,
            line_spacing: 0.0,
            paragraph_spacing: 0.0,
            paragraph_spacing_before: 0.0,
            line_break_mode: LineBreakMode::WordWrapping,
            line_break_strategy: LineBreakStrategy::empty(),
            hyphenation_factor: 0.0,
            uses_default_hyphenation: false,
            allows_default_tightening_for_truncation: false,
            base_writing_direction: WritingDirection::Natural,
            tab_stops: Self::default_tab_stops(),
            default_tab_interval: 0.0,
            header_level: 0,
            tightening_factor_for_truncation: 0.05,
        }
    }
}

macro_rules! fields {
    ($($(#[$doc:meta])* $field:ident / $setter:ident: $ty:ty,)*) => {
        impl ParagraphStyle {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $field(&self) -> $ty {
                    self.$field
                }

                #[doc = concat!("Returns this style with `", stringify!($field), "` replaced.")]
                #[inline]
                #[must_use]
                pub fn $setter(mut self, value: $ty) -> Self {
                    self.$field = value;
                    self
                }
            )*
        }
    };
}

fields! {
    /// Horizontal alignment of lines.
    alignment / with_alignment: TextAlignment,
    /// Indent of the first line from the leading margin, in points.
    first_line_head_indent / with_first_line_head_indent: f64,
    /// Indent of lines other than the first from the leading margin, in points.
    head_indent / with_head_indent: f64,
    /// Trailing margin: positive from the leading margin, else negative from the trailing one.
    tail_indent / with_tail_indent: f64,
    /// Multiplier applied to the natural line height; `0.0` means unset.
    line_height_multiple / with_line_height_multiple: f64,
    /// Minimum line height in points; `0.0` means unset.
    minimum_line_height / with_minimum_line_height: f64,
    /// Maximum line height in points; `0.0` means no limit.
    maximum_line_height / with_maximum_line_height: f64,
    /// Space between lines, in points.
    line_spacing / with_line_spacing: f64,
    /// Space after the paragraph, in points.
    paragraph_spacing / with_paragraph_spacing: f64,
    /// Space before the paragraph, in points.
    paragraph_spacing_before / with_paragraph_spacing_before: f64,
    /// What happens to lines that are too long.
    line_break_mode / with_line_break_mode: LineBreakMode,
    /// Refinements to line breaking.
    line_break_strategy / with_line_break_strategy: LineBreakStrategy,
    /// Hyphenation threshold in `0.0..=1.0`.
    hyphenation_factor / with_hyphenation_factor: f32,
    /// Whether the platform's hyphenation settings apply.
    uses_default_hyphenation / with_uses_default_hyphenation: bool,
    /// Whether lines may be tightened before truncating.
    allows_default_tightening_for_truncation / with_allows_default_tightening_for_truncation: bool,
    /// Base writing direction.
    base_writing_direction / with_base_writing_direction: WritingDirection,
    /// Interval of implicit tab stops past the last explicit one; `0.0` means none.
    default_tab_interval / with_default_tab_interval: f64,
    /// Heading level, `0` for body text.
    header_level / with_header_level: u32,
    /// How much lines may tighten before truncating.
    tightening_factor_for_truncation / with_tightening_factor_for_truncation: f32,
}

impl ParagraphStyle {
    /// Creates a style holding the platform defaults.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// The default tab stops: twelve left stops every 28 points.
    pub fn default_tab_stops() -> Vec<TextTab> {
        (1..=12)
            .map(|i| TextTab::new(TabAlignment::Left, 28.0 * f64::from(i)))
            .collect()
    }

    /// Explicit tab stops, in increasing location order.
    #[inline]
    pub fn tab_stops(&self) -> &[TextTab] {
        &self.tab_stops
    }

    /// Returns this style with `tab_stops` replaced; stops are sorted by location.
    #[must_use]
    pub fn with_tab_stops(mut self, tab_stops: impl IntoIterator<Item = TextTab>) -> Self {
        self.tab_stops = tab_stops.into_iter().collect();
        self.tab_stops.sort_by(|a, b| a.location.total_cmp(&b.location));
        self
    }

    /// Returns this style with one more tab stop.
    #[must_use]
    pub fn adding_tab_stop(mut self, tab: TextTab) -> Self {
        let at = self
            .tab_stops
            .partition_point(|existing| existing.location <= tab.location);
        self.tab_stops.insert(at, tab);
        self
    }
}
