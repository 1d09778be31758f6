// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use alloc::vec::Vec;
use core::iter::FusedIterator;
use core::ops::Range;

use text_primitives::Attachment;

use crate::{Attributes, Span, SpanContent};

/// An ordered sequence of styled spans.
///
/// Documents are kept in normal form: empty text spans are dropped and neighboring text spans
/// with equal attributes are joined, so two documents with the same content and styling compare
/// equal however they were put together.
///
/// The public way to build and change documents is the [`Styled`](crate::Styled) trait, which
/// always returns a new document.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Document {
    spans: Vec<Span>,
}

impl Document {
    /// Creates an empty document.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a document from spans, normalizing them.
    pub fn from_spans(spans: impl IntoIterator<Item = Span>) -> Self {
        let mut document = Self::new();
        for span in spans {
            document.push_span(span);
        }
        document
    }

    /// Returns the spans in order.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns an iterator over the spans with their byte ranges in [`Document::text`].
    pub fn runs(&self) -> Runs<'_> {
        Runs {
            spans: self.spans.iter(),
            offset: 0,
        }
    }

    /// Returns the plain text, with [`Attachment::PLACEHOLDER`] standing in for attachments.
    pub fn text(&self) -> String {
        let mut text = String::with_capacity(self.len());
        for span in &self.spans {
            match span.content() {
                SpanContent::Text(run) => text.push_str(run),
                SpanContent::Attachment(_) => text.push(Attachment::PLACEHOLDER),
            }
        }
        text
    }

    /// Length of [`Document::text`] in bytes.
    pub fn len(&self) -> usize {
        self.spans.iter().map(Span::len).sum()
    }

    /// Number of characters, counting each attachment as one.
    pub fn char_count(&self) -> usize {
        self.spans.iter().map(Span::char_count).sum()
    }

    /// Returns `true` if the document has no content.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Returns the attributes in effect at byte `index`, or `None` past the end.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        self.runs()
            .find(|run| run.range.contains(&index))
            .map(|run| run.span.attributes())
    }

    /// Returns the attributes of the last character, empty for an empty document.
    pub(crate) fn last_attributes(&self) -> Attributes {
        self.spans
            .last()
            .map(|span| span.attributes().clone())
            .unwrap_or_default()
    }

    pub(crate) fn push_span(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        let span = match self.spans.last_mut() {
            Some(last) => match last.try_coalesce(span) {
                Ok(()) => return,
                Err(span) => span,
            },
            None => span,
        };
        self.spans.push(span);
    }

    /// Appends `other`, keeping the attributes of both sides as they are.
    pub(crate) fn append(&mut self, other: Self) {
        if self.spans.is_empty() {
            *self = other;
            return;
        }
        self.spans.reserve(other.spans.len());
        for span in other.spans {
            self.push_span(span);
        }
    }

    /// Merges `attributes` into every span, with `attributes` winning on conflicts.
    pub(crate) fn apply_attributes(&mut self, attributes: &Attributes) {
        if self.is_empty() {
            log::trace!("ignoring {} attributes on an empty document", attributes.len());
            return;
        }
        if attributes.is_empty() {
            return;
        }
        for span in &mut self.spans {
            let merged = span.attributes().merge(attributes);
            *span.attributes_mut() = merged;
        }
        // Merging can make neighbors equal.
        let spans = core::mem::take(&mut self.spans);
        for span in spans {
            self.push_span(span);
        }
    }
}

/// A span and its byte range in the document text.
#[derive(Clone, Debug, PartialEq)]
pub struct Run<'a> {
    /// The byte range in [`Document::text`].
    pub range: Range<usize>,
    /// The span.
    pub span: &'a Span,
}

/// Iterator returned by [`Document::runs`].
#[derive(Clone, Debug)]
pub struct Runs<'a> {
    spans: core::slice::Iter<'a, Span>,
    offset: usize,
}

impl<'a> Iterator for Runs<'a> {
    type Item = Run<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let span = self.spans.next()?;
        let start = self.offset;
        self.offset += span.len();
        Some(Run {
            range: start..self.offset,
            span,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.spans.size_hint()
    }
}

impl ExactSizeIterator for Runs<'_> {}

impl FusedIterator for Runs<'_> {}
