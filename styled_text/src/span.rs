// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::sync::Arc;

use text_primitives::Attachment;

use crate::{AttributeKey, Attributes};

/// What a [`Span`] shows.
#[derive(Clone, Debug, PartialEq)]
pub enum SpanContent {
    /// A run of text.
    Text(Arc<str>),
    /// One inline attachment, occupying a single [`Attachment::PLACEHOLDER`] character.
    Attachment(Attachment),
}

impl SpanContent {
    /// Length in UTF-8 bytes.
    pub fn len(&self) -> usize {
        match self {
            Self::Text(text) => text.len(),
            Self::Attachment(_) => Attachment::PLACEHOLDER.len_utf8(),
        }
    }

    /// Returns `true` for empty text.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One run of content sharing one attribute set.
#[derive(Clone, Debug, PartialEq)]
pub struct Span {
    content: SpanContent,
    attributes: Attributes,
}

impl Span {
    /// Creates a text span.
    pub fn text(text: impl Into<Arc<str>>, attributes: Attributes) -> Self {
        Self {
            content: SpanContent::Text(text.into()),
            attributes,
        }
    }

    /// Creates an attachment span.
    pub fn attachment(attachment: Attachment, attributes: Attributes) -> Self {
        Self {
            content: SpanContent::Attachment(attachment),
            attributes,
        }
    }

    /// Returns the content.
    #[inline]
    pub fn content(&self) -> &SpanContent {
        &self.content
    }

    /// Returns the text, or `None` for attachments.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            SpanContent::Text(text) => Some(text),
            SpanContent::Attachment(_) => None,
        }
    }

    /// Returns the attachment, or `None` for text.
    pub fn as_attachment(&self) -> Option<&Attachment> {
        match &self.content {
            SpanContent::Text(_) => None,
            SpanContent::Attachment(attachment) => Some(attachment),
        }
    }

    /// Returns the attributes applied to the content.
    #[inline]
    pub fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the attributes a renderer sees for this run.
    ///
    /// For attachment spans this adds [`AttributeKey::Attachment`], so renderers that only look
    /// at attributes still find the attachment.
    pub fn rendered_attributes(&self) -> Attributes {
        match &self.content {
            SpanContent::Text(_) => self.attributes.clone(),
            SpanContent::Attachment(attachment) => self
                .attributes
                .with(AttributeKey::Attachment, attachment.clone()),
        }
    }

    /// Length in UTF-8 bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.len()
    }

    /// Returns `true` for empty text.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Number of characters.
    pub fn char_count(&self) -> usize {
        match &self.content {
            SpanContent::Text(text) => text.chars().count(),
            SpanContent::Attachment(_) => 1,
        }
    }

    pub(crate) fn attributes_mut(&mut self) -> &mut Attributes {
        &mut self.attributes
    }

    /// Joins `next` onto this span if both are text with equal attributes.
    ///
    /// Returns `next` back when they cannot be joined.
    pub(crate) fn try_coalesce(&mut self, next: Self) -> Result<(), Self> {
        match (&mut self.content, next.content) {
            (SpanContent::Text(text), SpanContent::Text(more))
                if self.attributes == next.attributes =>
            {
                let mut joined = String::with_capacity(text.len() + more.len());
                joined.push_str(text);
                joined.push_str(&more);
                *text = joined.into();
                Ok(())
            }
            (_, content) => Err(Self {
                content,
                attributes: next.attributes,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Span, SpanContent};
    use crate::{AttributeKey, Attributes};
    use text_primitives::kurbo::Size;
    use text_primitives::{Attachment, Image};

    #[test]
    fn attachment_is_one_placeholder() {
        let span = Span::attachment(
            Attachment::image(Image::symbol("star", Size::new(12.0, 12.0))),
            Attributes::new(),
        );
        assert_eq!(span.len(), 3);
        assert_eq!(span.char_count(), 1);
        assert!(span.attributes().is_empty());
        assert!(span.rendered_attributes().contains(AttributeKey::Attachment));
    }

    #[test]
    fn coalesce_needs_equal_attributes() {
        let kerned = Attributes::new().with(AttributeKey::Kern, 1.0);
        let mut span = Span::text("ab", kerned.clone());
        assert!(span.try_coalesce(Span::text("cd", kerned)).is_ok());
        assert_eq!(span.as_text(), Some("abcd"));

        let rejected = span
            .try_coalesce(Span::text("ef", Attributes::new()))
            .unwrap_err();
        assert_eq!(rejected.content(), &SpanContent::Text("ef".into()));
        assert_eq!(span.as_text(), Some("abcd"));
    }
}
