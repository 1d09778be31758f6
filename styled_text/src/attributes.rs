// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use text_primitives::{
    Attachment, Color, Cursor, DirectionRun, Font, Language, Ligature, LineStyle, Shadow,
    SpellingState, TextEffect,
};

use crate::ParagraphStyle;

/// Identifies one styling property in an [`Attributes`] set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
pub enum AttributeKey {
    /// [`Font`] of the text.
    Font,
    /// [`Color`] of the glyphs.
    ForegroundColor,
    /// [`Color`] behind the glyphs.
    BackgroundColor,
    /// Extra space after each glyph pair, in points. Number.
    Kern,
    /// Uniform extra space between all glyphs, in points. Number.
    Tracking,
    /// [`LineStyle`] of the underline.
    UnderlineStyle,
    /// [`Color`] of the underline; defaults to the foreground color.
    UnderlineColor,
    /// [`LineStyle`] of the strikethrough.
    StrikethroughStyle,
    /// [`Color`] of the strikethrough; defaults to the foreground color.
    StrikethroughColor,
    /// [`Shadow`] under the glyphs.
    Shadow,
    /// Outline width as a percentage of font size. Number; negative also fills.
    StrokeWidth,
    /// [`Color`] of the outline.
    StrokeColor,
    /// [`Link`] target.
    Link,
    /// Vertical offset from the baseline, in points. Number.
    BaselineOffset,
    /// [`Ligature`] policy.
    Ligature,
    /// [`TextEffect`] to apply.
    TextEffect,
    /// Skew applied to glyphs. Number.
    Obliqueness,
    /// Log of the horizontal expansion factor. Number.
    Expansion,
    /// Nested [`DirectionRun`]s, outermost first.
    WritingDirection,
    /// [`Language`] of the text.
    Language,
    /// Nested [`ParagraphStyle`] record.
    ParagraphStyle,
    /// Inline [`Attachment`].
    Attachment,
    /// Superscript level; negative for subscript. Number.
    Superscript,
    /// Tool tip text.
    ToolTip,
    /// [`Cursor`] to show on hover.
    Cursor,
    /// [`SpellingState`] marks.
    SpellingState,
    /// Whether punctuation is spoken. Bool.
    AccessibilitySpeechPunctuation,
    /// [`Language`] used for speech.
    AccessibilitySpeechLanguage,
    /// Speech pitch, `0.0..=2.0` with `1.0` as normal. Number.
    AccessibilitySpeechPitch,
    /// IPA pronunciation text.
    AccessibilitySpeechIpaNotation,
    /// Whether announcements queue behind current speech. Bool.
    AccessibilitySpeechQueueAnnouncement,
    /// Whether text is spelled out letter by letter. Bool.
    AccessibilitySpeechSpellOut,
    /// Heading level for assistive navigation. Number.
    AccessibilityTextHeadingLevel,
}

/// A link target.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Link(Arc<str>);

impl Link {
    /// Creates a link to `target`, typically a URL.
    pub fn new(target: impl Into<Arc<str>>) -> Self {
        Self(target.into())
    }

    /// Returns the target.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Link {
    fn from(target: &str) -> Self {
        Self::new(target)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The value of one attribute.
#[derive(Clone, Debug, PartialEq)]
pub enum AttributeValue {
    /// A font descriptor.
    Font(Font),
    /// A color.
    Color(Color),
    /// A plain number.
    Number(f64),
    /// A flag.
    Bool(bool),
    /// Text.
    Text(Arc<str>),
    /// A link target.
    Link(Link),
    /// A language.
    Language(Language),
    /// A paragraph style record.
    ParagraphStyle(ParagraphStyle),
    /// An inline attachment.
    Attachment(Attachment),
    /// A shadow record.
    Shadow(Shadow),
    /// An underline or strikethrough style.
    LineStyle(LineStyle),
    /// Nested writing directions, outermost first.
    WritingDirection(Arc<[DirectionRun]>),
    /// A ligature policy.
    Ligature(Ligature),
    /// A text effect.
    TextEffect(TextEffect),
    /// Spelling and grammar marks.
    SpellingState(SpellingState),
    /// A pointer shape.
    Cursor(Cursor),
}

/// Types that can be read back out of an [`AttributeValue`].
///
/// Used by [`Attributes::get_as`]; a value of another variant reads as `None`.
pub trait AttributeType: Sized {
    /// Extracts `Self` from `value`, if it holds this type.
    fn from_value(value: &AttributeValue) -> Option<Self>;
}

macro_rules! attribute_type {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for AttributeValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl AttributeType for $ty {
                fn from_value(value: &AttributeValue) -> Option<Self> {
                    match value {
                        AttributeValue::$variant(inner) => Some(inner.clone()),
                        _ => None,
                    }
                }
            }
        )*
    };
}

attribute_type! {
    Font => Font,
    Color => Color,
    f64 => Number,
    bool => Bool,
    Arc<str> => Text,
    Link => Link,
    Language => Language,
    ParagraphStyle => ParagraphStyle,
    Attachment => Attachment,
    Shadow => Shadow,
    LineStyle => LineStyle,
    Arc<[DirectionRun]> => WritingDirection,
    Ligature => Ligature,
    TextEffect => TextEffect,
    SpellingState => SpellingState,
    Cursor => Cursor,
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl AttributeType for AttributeValue {
    fn from_value(value: &AttributeValue) -> Option<Self> {
        Some(value.clone())
    }
}

/// An immutable set of attributes: at most one value per [`AttributeKey`].
///
/// Every operation that changes the set returns a new one. Clones share storage until one of
/// them is changed, at which point the changed copy gets its own map, so no change is ever
/// visible through another handle.
///
/// Equality ignores insertion order.
#[derive(Clone, Default, PartialEq)]
pub struct Attributes {
    map: Arc<HashMap<AttributeKey, AttributeValue>>,
}

impl Attributes {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of attributes in the set.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the set has no attributes.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns `true` if `key` has a value.
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.map.contains_key(&key)
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: AttributeKey) -> Option<&AttributeValue> {
        self.map.get(&key)
    }

    /// Returns the value for `key` as a `T`.
    ///
    /// Returns `None` if `key` is missing or holds another type.
    ///
    /// ```
    /// use styled_text::{AttributeKey, Attributes};
    ///
    /// let attributes = Attributes::new().with(AttributeKey::Kern, 2.0);
    /// assert_eq!(attributes.get_as::<f64>(AttributeKey::Kern), Some(2.0));
    /// assert_eq!(attributes.get_as::<bool>(AttributeKey::Kern), None);
    /// assert_eq!(attributes.get_as::<f64>(AttributeKey::Tracking), None);
    /// ```
    pub fn get_as<T: AttributeType>(&self, key: AttributeKey) -> Option<T> {
        self.get(key).and_then(T::from_value)
    }

    /// Iterates over the attributes in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &AttributeValue)> {
        self.map.iter().map(|(key, value)| (*key, value))
    }

    /// Returns the keys present, sorted.
    pub fn keys(&self) -> Vec<AttributeKey> {
        let mut keys: Vec<_> = self.map.keys().copied().collect();
        keys.sort_unstable();
        keys
    }

    /// Returns a set with `key` set to `value`, replacing any previous value.
    #[must_use]
    pub fn with(&self, key: AttributeKey, value: impl Into<AttributeValue>) -> Self {
        let mut out = self.clone();
        Arc::make_mut(&mut out.map).insert(key, value.into());
        out
    }

    /// Returns a set without `key`.
    #[must_use]
    pub fn without(&self, key: AttributeKey) -> Self {
        if !self.contains(key) {
            return self.clone();
        }
        let mut out = self.clone();
        Arc::make_mut(&mut out.map).remove(&key);
        out
    }

    /// Returns the union of `self` and `other`; where both have a key, `other`'s value wins.
    ///
    /// ```
    /// use styled_text::{AttributeKey, Attributes};
    ///
    /// let a = Attributes::new()
    ///     .with(AttributeKey::Kern, 1.0)
    ///     .with(AttributeKey::Tracking, 1.0);
    /// let b = Attributes::new().with(AttributeKey::Kern, 2.0);
    /// let merged = a.merge(&b);
    /// assert_eq!(merged.get_as::<f64>(AttributeKey::Kern), Some(2.0));
    /// assert_eq!(merged.get_as::<f64>(AttributeKey::Tracking), Some(1.0));
    /// ```
    #[must_use]
    pub fn merge(&self, other: &Self) -> Self {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        let mut out = self.clone();
        let map = Arc::make_mut(&mut out.map);
        for (key, value) in other.map.iter() {
            map.insert(*key, value.clone());
        }
        out
    }
}

impl fmt::Debug for Attributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut entries: Vec<_> = self.map.iter().collect();
        entries.sort_unstable_by_key(|(key, _)| **key);
        f.debug_map().entries(entries).finish()
    }
}

impl<V: Into<AttributeValue>> FromIterator<(AttributeKey, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (AttributeKey, V)>>(iter: I) -> Self {
        let map = iter
            .into_iter()
            .map(|(key, value)| (key, value.into()))
            .collect();
        Self { map: Arc::new(map) }
    }
}

impl<V: Into<AttributeValue>> Extend<(AttributeKey, V)> for Attributes {
    fn extend<I: IntoIterator<Item = (AttributeKey, V)>>(&mut self, iter: I) {
        let mut iter = iter.into_iter().peekable();
        if iter.peek().is_none() {
            return;
        }
        let map = Arc::make_mut(&mut self.map);
        for (key, value) in iter {
            map.insert(key, value.into());
        }
    }
}

impl<V: Into<AttributeValue>, const N: usize> From<[(AttributeKey, V); N]> for Attributes {
    fn from(entries: [(AttributeKey, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
