// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{Document, Styled};

/// Folds a sequence of styled fragments into one [`Document`], left to right.
///
/// Each fragment keeps its own attributes. Conditionals and loops are plain Rust: push an
/// `Option` for something that may be absent and [`extend`](Self::extend) with an iterator for
/// repeated content.
///
/// ```
/// use styled_text::{DocumentBuilder, Styled};
///
/// let unread = 3;
/// let mut builder = DocumentBuilder::new();
/// builder.push("Inbox".bold());
/// builder.push_optional((unread > 0).then(|| format!(" ({unread})")));
/// builder.extend(["", " !"].map(|mark| mark.italic()));
///
/// let document = builder.build();
/// assert_eq!(document.text(), "Inbox (3) !");
/// assert!(document.current_font().is_italic());
/// ```
#[derive(Clone, Debug, Default)]
pub struct DocumentBuilder {
    document: Document,
}

impl DocumentBuilder {
    /// Creates a builder with no content.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one fragment.
    pub fn push(&mut self, fragment: impl Styled) {
        self.document.append(fragment.into_document());
    }

    /// Appends `fragment` if it is `Some`.
    pub fn push_optional<S: Styled>(&mut self, fragment: Option<S>) {
        if let Some(fragment) = fragment {
            self.push(fragment);
        }
    }

    /// Appends every fragment in order.
    pub fn extend<S: Styled>(&mut self, fragments: impl IntoIterator<Item = S>) {
        for fragment in fragments {
            self.push(fragment);
        }
    }

    /// Returns the content appended so far.
    #[inline]
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns the finished document.
    #[inline]
    pub fn build(self) -> Document {
        self.document
    }
}

impl<S: Styled> FromIterator<S> for Document {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut builder = DocumentBuilder::new();
        builder.extend(iter);
        builder.build()
    }
}

impl<S: Styled> Extend<S> for Document {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for fragment in iter {
            self.append(fragment.into_document());
        }
    }
}

/// Builds a [`Document`](crate::Document) from styled fragments, left to right.
///
/// Any expression implementing [`Styled`](crate::Styled) can appear, including `Option`s and
/// documents collected from iterators.
///
/// ```
/// use styled_text::{document, Document, Styled};
///
/// let signed_in = false;
/// let document = document![
///     "Hello".bold(),
///     " ",
///     signed_in.then_some("again"),
///     (1..=3).map(|n| n.to_string()).collect::<Document>(),
/// ];
/// assert_eq!(document.text(), "Hello 123");
/// assert!(document.attributes().is_empty());
/// ```
#[macro_export]
macro_rules! document {
    () => {
        $crate::Document::new()
    };
    ($($fragment:expr),+ $(,)?) => {{
        let mut builder = $crate::DocumentBuilder::new();
        $(builder.push($fragment);)+
        builder.build()
    }};
}
