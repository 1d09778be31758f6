// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

use text_primitives::kurbo::Vec2;
use text_primitives::{
    Attachment, Color, Cursor, DirectionRun, Font, FontTraits, FontWeight, Image, Language,
    Ligature, LineBreakMode, LineBreakStrategy, LineStyle, Shadow, SpellingState, TextAlignment,
    TextEffect, TextStyle, TextTab, WritingDirection,
};

use crate::{
    AttributeKey, AttributeType, AttributeValue, Attributes, DefaultResolver, Document, Link,
    ParagraphStyle, PlatformResolver, Span,
};

macro_rules! paragraph_setters {
    ($($(#[$doc:meta])* $name:ident($ty:ty) => $with:ident;)*) => {
        $(
            $(#[$doc])*
            fn $name(self, value: $ty) -> Document {
                self.updating_paragraph_style(|style| style.$with(value))
            }
        )*
    };
}

macro_rules! attribute_setters {
    ($($(#[$doc:meta])* $name:ident($ty:ty) => $key:ident;)*) => {
        $(
            $(#[$doc])*
            fn $name(self, value: $ty) -> Document {
                self.adding_attribute(AttributeKey::$key, value)
            }
        )*
    };
}

/// Content that can be styled: plain text, documents, attachments and images.
///
/// Every method consumes the receiver and returns a new [`Document`]; nothing is changed in
/// place. Attributes apply to the whole receiver, and [`Styled::attributes`] reports the
/// attributes of the last character.
///
/// ```
/// use styled_text::Styled;
/// use styled_text::text_primitives::{Color, TextAlignment};
///
/// let red = Color::from_rgb8(255, 0, 0);
/// let document = "Hello"
///     .bold()
///     .appending(" ")
///     .appending("World!".bold().italic().foreground_color(red))
///     .alignment(TextAlignment::Center);
///
/// assert_eq!(document.text(), "Hello World!");
/// assert!(document.current_font().is_italic());
/// ```
pub trait Styled: Sized {
    /// Converts this content into a document.
    fn into_document(self) -> Document;

    /// Returns the attributes of the last character, or an empty set if there is no content.
    fn attributes(&self) -> Attributes;

    /// Returns the attribute for `key` as a `T`, or `None` if it is missing or of another type.
    fn attribute<T: AttributeType>(&self, key: AttributeKey) -> Option<T> {
        self.attributes().get_as(key)
    }

    /// Merges `attributes` into the whole content; new values win.
    ///
    /// Empty content stays empty and gains no attributes.
    fn adding_attributes(self, attributes: impl Into<Attributes>) -> Document {
        let mut document = self.into_document();
        document.apply_attributes(&attributes.into());
        document
    }

    /// Sets one attribute on the whole content.
    fn adding_attribute(self, key: AttributeKey, value: impl Into<AttributeValue>) -> Document {
        self.adding_attributes(Attributes::new().with(key, value))
    }

    /// Appends `other`; each side keeps its own attributes.
    fn appending(self, other: impl Styled) -> Document {
        let mut document = self.into_document();
        document.append(other.into_document());
        document
    }

    /// Returns the paragraph style in effect, or the default style if none is set.
    fn paragraph_style(&self) -> ParagraphStyle {
        self.attribute(AttributeKey::ParagraphStyle)
            .unwrap_or_default()
    }

    /// Replaces the paragraph style with `update` applied to the one in effect.
    ///
    /// Other fields of the style are kept, so setters chain without undoing each other.
    fn updating_paragraph_style(
        self,
        update: impl FnOnce(ParagraphStyle) -> ParagraphStyle,
    ) -> Document {
        let style = update(self.paragraph_style());
        self.adding_attribute(AttributeKey::ParagraphStyle, style)
    }

    paragraph_setters! {
        /// Sets the paragraph alignment.
        alignment(TextAlignment) => with_alignment;
        /// Sets the indent of the first line.
        first_line_head_indent(f64) => with_first_line_head_indent;
        /// Sets the indent of lines after the first.
        head_indent(f64) => with_head_indent;
        /// Sets the trailing indent.
        tail_indent(f64) => with_tail_indent;
        /// Sets the line height multiplier.
        line_height_multiple(f64) => with_line_height_multiple;
        /// Sets the minimum line height.
        minimum_line_height(f64) => with_minimum_line_height;
        /// Sets the maximum line height.
        maximum_line_height(f64) => with_maximum_line_height;
        /// Sets the space between lines.
        line_spacing(f64) => with_line_spacing;
        /// Sets the space after paragraphs.
        paragraph_spacing(f64) => with_paragraph_spacing;
        /// Sets the space before paragraphs.
        paragraph_spacing_before(f64) => with_paragraph_spacing_before;
        /// Sets what happens to lines that do not fit.
        line_break_mode(LineBreakMode) => with_line_break_mode;
        /// Sets the line break refinements.
        line_break_strategy(LineBreakStrategy) => with_line_break_strategy;
        /// Sets the hyphenation threshold.
        hyphenation_factor(f32) => with_hyphenation_factor;
        /// Sets whether the platform's hyphenation settings apply.
        uses_default_hyphenation(bool) => with_uses_default_hyphenation;
        /// Sets whether lines may tighten before truncating.
        allows_default_tightening_for_truncation(bool) => with_allows_default_tightening_for_truncation;
        /// Sets the base writing direction.
        base_writing_direction(WritingDirection) => with_base_writing_direction;
        /// Sets the interval of implicit tab stops.
        default_tab_interval(f64) => with_default_tab_interval;
        /// Sets the heading level.
        header_level(u32) => with_header_level;
        /// Sets how much lines may tighten before truncating.
        tightening_factor_for_truncation(f32) => with_tightening_factor_for_truncation;
    }

    /// Replaces the explicit tab stops.
    fn tab_stops(self, tab_stops: impl IntoIterator<Item = TextTab>) -> Document {
        self.updating_paragraph_style(|style| style.with_tab_stops(tab_stops))
    }

    attribute_setters! {
        /// Sets the font.
        font(Font) => Font;
        /// Sets the foreground color.
        foreground_color(Color) => ForegroundColor;
        /// Sets the background color.
        background_color(Color) => BackgroundColor;
        /// Sets the kerning adjustment, in points.
        kerning(f64) => Kern;
        /// Sets the tracking, in points.
        tracking(f64) => Tracking;
        /// Sets the baseline offset, in points.
        baseline_offset(f64) => BaselineOffset;
        /// Sets the ligature policy.
        ligature(Ligature) => Ligature;
        /// Sets a special text effect.
        text_effect(TextEffect) => TextEffect;
        /// Sets the language.
        language(Language) => Language;
        /// Sets the glyph skew.
        obliqueness(f64) => Obliqueness;
        /// Sets the log of the horizontal expansion factor.
        expansion(f64) => Expansion;
        /// Sets the pointer shape.
        cursor(Cursor) => Cursor;
        /// Marks spelling or grammar problems.
        spelling_state(SpellingState) => SpellingState;
        /// Sets whether punctuation is spoken.
        accessibility_speech_punctuation(bool) => AccessibilitySpeechPunctuation;
        /// Sets the language used for speech.
        accessibility_speech_language(Language) => AccessibilitySpeechLanguage;
        /// Sets the speech pitch, `1.0` being normal.
        accessibility_speech_pitch(f64) => AccessibilitySpeechPitch;
        /// Sets whether announcements wait for current speech.
        accessibility_speech_queue_announcement(bool) => AccessibilitySpeechQueueAnnouncement;
        /// Sets whether text is spelled out.
        accessibility_speech_spell_out(bool) => AccessibilitySpeechSpellOut;
    }

    /// Returns the font in effect, or [`Font::BODY`].
    fn current_font(&self) -> Font {
        self.attribute(AttributeKey::Font).unwrap_or_default()
    }

    /// Sets the font for a semantic text style.
    fn system_font(self, style: TextStyle) -> Document {
        self.font(Font::for_text_style(style))
    }

    /// Changes the size of the font in effect.
    fn font_size(self, size: f64) -> Document {
        let font = self.current_font().with_size(size);
        self.font(font)
    }

    /// Changes the weight of the font in effect.
    fn font_weight(self, weight: FontWeight) -> Document {
        let font = self.current_font().with_weight(weight);
        self.font(font)
    }

    /// Sets the underline style, and its color when `color` is given.
    ///
    /// Without a color, any underline color already set is kept.
    fn underline(self, style: LineStyle, color: Option<Color>) -> Document {
        let mut attributes = Attributes::new().with(AttributeKey::UnderlineStyle, style);
        if let Some(color) = color {
            attributes = attributes.with(AttributeKey::UnderlineColor, color);
        }
        self.adding_attributes(attributes)
    }

    /// Sets the strikethrough style, and its color when `color` is given.
    ///
    /// Without a color, any strikethrough color already set is kept.
    fn strikethrough(self, style: LineStyle, color: Option<Color>) -> Document {
        let mut attributes = Attributes::new().with(AttributeKey::StrikethroughStyle, style);
        if let Some(color) = color {
            attributes = attributes.with(AttributeKey::StrikethroughColor, color);
        }
        self.adding_attributes(attributes)
    }

    /// Sets the shadow offset and blur, and its color when `color` is given.
    ///
    /// Starts from the shadow in effect, or [`Shadow::DEFAULT`].
    fn shadow(self, offset: Vec2, blur_radius: f64, color: Option<Color>) -> Document {
        let mut shadow = self
            .attribute::<Shadow>(AttributeKey::Shadow)
            .unwrap_or_default()
            .with_offset(offset)
            .with_blur_radius(blur_radius);
        if let Some(color) = color {
            shadow = shadow.with_color(color);
        }
        self.adding_attribute(AttributeKey::Shadow, shadow)
    }

    /// Sets the stroke width, and its color when `color` is given.
    fn stroke(self, width: f64, color: Option<Color>) -> Document {
        let mut attributes = Attributes::new().with(AttributeKey::StrokeWidth, width);
        if let Some(color) = color {
            attributes = attributes.with(AttributeKey::StrokeColor, color);
        }
        self.adding_attributes(attributes)
    }

    /// Makes the content a link to `target`.
    fn link(self, target: impl Into<Link>) -> Document {
        self.adding_attribute(AttributeKey::Link, target.into())
    }

    /// Sets nested writing directions, outermost first.
    fn writing_direction(self, runs: impl IntoIterator<Item = DirectionRun>) -> Document {
        let runs: Arc<[DirectionRun]> = runs.into_iter().collect();
        self.adding_attribute(AttributeKey::WritingDirection, runs)
    }

    /// Sets the superscript level; negative values are subscripts.
    fn superscript(self, level: i32) -> Document {
        self.adding_attribute(AttributeKey::Superscript, f64::from(level))
    }

    /// Sets the tool tip.
    fn tool_tip(self, text: impl Into<Arc<str>>) -> Document {
        self.adding_attribute(AttributeKey::ToolTip, text.into())
    }

    /// Sets the pronunciation, in IPA.
    fn accessibility_speech_ipa_notation(self, notation: impl Into<Arc<str>>) -> Document {
        self.adding_attribute(AttributeKey::AccessibilitySpeechIpaNotation, notation.into())
    }

    /// Sets the heading level for assistive navigation.
    fn accessibility_heading_level(self, level: u32) -> Document {
        self.adding_attribute(AttributeKey::AccessibilityTextHeadingLevel, f64::from(level))
    }

    /// Returns the font in effect, or the resolver's body font, with `traits` added.
    fn font_with_traits<R: PlatformResolver + ?Sized>(
        &self,
        traits: FontTraits,
        resolver: &R,
    ) -> Font {
        let base = self
            .attribute::<Font>(AttributeKey::Font)
            .unwrap_or_else(|| resolver.resolve_font(TextStyle::Body));
        resolver.font_with_traits(&base, base.traits() | traits)
    }

    /// Adds `traits` to the font in effect.
    fn font_traits<R: PlatformResolver + ?Sized>(
        self,
        traits: FontTraits,
        resolver: &R,
    ) -> Document {
        let font = self.font_with_traits(traits, resolver);
        self.font(font)
    }

    /// Makes the font bold.
    fn bold(self) -> Document {
        self.font_traits(FontTraits::BOLD, &DefaultResolver::DEFAULT)
    }

    /// Makes the font italic.
    fn italic(self) -> Document {
        self.font_traits(FontTraits::ITALIC, &DefaultResolver::DEFAULT)
    }

    /// Makes the font monospaced.
    fn monospaced(self) -> Document {
        self.font_traits(FontTraits::MONOSPACE, &DefaultResolver::DEFAULT)
    }

    /// Makes the font condensed.
    fn condensed(self) -> Document {
        self.font_traits(FontTraits::CONDENSED, &DefaultResolver::DEFAULT)
    }

    /// Makes the font expanded.
    fn expanded(self) -> Document {
        self.font_traits(FontTraits::EXPANDED, &DefaultResolver::DEFAULT)
    }

    /// Sets the foreground color to the one `resolver` knows as `name`.
    fn foreground_named_color<R: PlatformResolver + ?Sized>(
        self,
        name: &str,
        resolver: &R,
    ) -> Document {
        let color = resolver.resolve_named_color(name);
        self.foreground_color(color)
    }

    /// Appends the system image `name`.
    ///
    /// If `resolver` has no such image the content is returned unchanged.
    fn appending_system_image<R: PlatformResolver + ?Sized>(
        self,
        name: &str,
        resolver: &R,
    ) -> Document {
        match resolver.resolve_system_image(name) {
            Some(image) => self.appending(image),
            None => {
                log::debug!("no system image named {name:?}, leaving the text unchanged");
                self.into_document()
            }
        }
    }
}

impl Styled for Document {
    fn into_document(self) -> Self {
        self
    }

    fn attributes(&self) -> Attributes {
        self.last_attributes()
    }
}

impl Styled for &Document {
    fn into_document(self) -> Document {
        self.clone()
    }

    fn attributes(&self) -> Attributes {
        self.last_attributes()
    }
}

impl Styled for Span {
    fn into_document(self) -> Document {
        Document::from_spans([self])
    }

    fn attributes(&self) -> Attributes {
        if self.is_empty() {
            Attributes::new()
        } else {
            Span::attributes(self).clone()
        }
    }
}

impl Styled for &str {
    fn into_document(self) -> Document {
        Span::text(self, Attributes::new()).into_document()
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
    }
}

impl Styled for String {
    fn into_document(self) -> Document {
        Span::text(self, Attributes::new()).into_document()
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
    }
}

impl Styled for Attachment {
    fn into_document(self) -> Document {
        Span::attachment(self, Attributes::new()).into_document()
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
    }
}

impl Styled for Image {
    fn into_document(self) -> Document {
        Attachment::image(self).into_document()
    }

    fn attributes(&self) -> Attributes {
        Attributes::new()
    }
}

impl<T: Styled> Styled for Option<T> {
    fn into_document(self) -> Document {
        self.map(Styled::into_document).unwrap_or_default()
    }

    fn attributes(&self) -> Attributes {
        self.as_ref().map(Styled::attributes).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::Styled;
    use crate::{AttributeKey, Catalog, Document, ParagraphStyle};
    use peniko::color::palette::css::{BLUE, RED};
    use text_primitives::kurbo::{Size, Vec2};
    use text_primitives::{
        Attachment, Color, Font, FontTraits, Image, LineStyle, Shadow, TextAlignment, TextStyle,
    };

    #[test]
    fn plain_text_has_no_attributes() {
        assert!("plain".attributes().is_empty());
        assert!(Attachment::default().attributes().is_empty());
        assert_eq!("plain".attribute::<Font>(AttributeKey::Font), None);
    }

    #[test]
    fn paragraph_setters_keep_other_fields() {
        let document = "text".alignment(TextAlignment::Center).line_spacing(10.0);
        let style = document.paragraph_style();
        assert_eq!(style.alignment(), TextAlignment::Center);
        assert_eq!(style.line_spacing(), 10.0);
        assert_eq!(
            style,
            ParagraphStyle::new()
                .with_alignment(TextAlignment::Center)
                .with_line_spacing(10.0)
        );
    }

    #[test]
    fn absent_paragraph_style_reads_as_default() {
        assert_eq!("text".paragraph_style(), ParagraphStyle::default());
    }

    #[test]
    fn traits_accumulate() {
        let font = "text".italic().bold().current_font();
        assert_eq!(font.traits(), FontTraits::ITALIC | FontTraits::BOLD);
        assert_eq!(font.size(), Font::BODY.size());
    }

    #[test]
    fn font_size_keeps_traits() {
        let font = "text".bold().font_size(30.0).current_font();
        assert!(font.is_bold());
        assert_eq!(font.size(), 30.0);

        let caption = "text".system_font(TextStyle::Caption).current_font();
        assert_eq!(caption.size(), 12.0);
    }

    #[test]
    fn underline_without_color_keeps_color() {
        let colored = "text".underline(LineStyle::SINGLE, Some(RED));
        let restyled = colored.clone().underline(LineStyle::DOUBLE, None);
        assert_eq!(
            restyled.attribute::<LineStyle>(AttributeKey::UnderlineStyle),
            Some(LineStyle::DOUBLE)
        );
        assert_eq!(
            restyled.attribute::<Color>(AttributeKey::UnderlineColor),
            Some(RED)
        );

        let recolored = colored.underline(LineStyle::DOUBLE, Some(BLUE));
        assert_eq!(
            recolored.attribute::<Color>(AttributeKey::UnderlineColor),
            Some(BLUE)
        );
    }

    #[test]
    fn strikethrough_and_stroke_keep_colors() {
        let document = "text"
            .strikethrough(LineStyle::SINGLE, Some(RED))
            .stroke(2.0, Some(BLUE))
            .strikethrough(LineStyle::THICK, None)
            .stroke(-3.0, None);
        assert_eq!(
            document.attribute::<Color>(AttributeKey::StrikethroughColor),
            Some(RED)
        );
        assert_eq!(
            document.attribute::<Color>(AttributeKey::StrokeColor),
            Some(BLUE)
        );
        assert_eq!(document.attribute::<f64>(AttributeKey::StrokeWidth), Some(-3.0));
    }

    #[test]
    fn shadow_starts_from_current() {
        let document = "text"
            .shadow(Vec2::new(1.0, 1.0), 2.0, Some(RED))
            .shadow(Vec2::new(0.0, 4.0), 1.0, None);
        let shadow = document.attribute::<Shadow>(AttributeKey::Shadow).unwrap();
        assert_eq!(shadow.offset, Vec2::new(0.0, 4.0));
        assert_eq!(shadow.blur_radius, 1.0);
        assert_eq!(shadow.color, RED);

        let fresh = "text".shadow(Vec2::ZERO, 0.0, None);
        assert_eq!(
            fresh.attribute::<Shadow>(AttributeKey::Shadow).unwrap().color,
            Shadow::DEFAULT.color
        );
    }

    #[test]
    fn empty_content_takes_no_attributes() {
        let document = "".bold().foreground_color(RED);
        assert!(document.is_empty());
        assert!(document.attributes().is_empty());
        assert!(Document::new().kerning(1.0).attributes().is_empty());
    }

    #[test]
    fn missing_image_leaves_text_unchanged() {
        let catalog = Catalog::new();
        let text = "Rating: ".bold();
        assert_eq!(
            text.clone().appending_system_image("star.fill", &catalog),
            text
        );
    }

    #[test]
    fn system_image_is_appended() {
        let mut catalog = Catalog::new();
        catalog.register_image(Image::symbol("star.fill", Size::new(17.0, 16.0)));
        let document = "Rating: ".appending_system_image("star.fill", &catalog);
        assert_eq!(document.char_count(), 9);
        assert!(document.spans()[1].as_attachment().is_some());
        assert!(document.attributes().is_empty());
    }

    #[test]
    fn named_colors_use_the_resolver() {
        let mut catalog = Catalog::new();
        catalog.register_color("AccentColor", BLUE);
        let document = "text".foreground_named_color("AccentColor", &catalog);
        assert_eq!(
            document.attribute::<Color>(AttributeKey::ForegroundColor),
            Some(BLUE)
        );
    }

    #[test]
    fn none_contributes_nothing() {
        let missing: Option<&str> = None;
        assert!(missing.into_document().is_empty());
        assert_eq!("a".appending(missing), "a".into_document());
        assert_eq!(Some("b").into_document(), "b".into_document());
    }
}
