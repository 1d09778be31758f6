// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::sync::Arc;

use peniko::kurbo::{Rect, Size};

/// A handle to an image known to the platform, by name.
///
/// Pixels are not carried here; the renderer looks the image up by [`Image::name`].
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    name: Arc<str>,
    size: Size,
    symbol: bool,
}

impl Image {
    /// Creates a handle to an image asset of the given natural size.
    pub fn new(name: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
            symbol: false,
        }
    }

    /// Creates a handle to a system symbol, which tints with the surrounding text.
    pub fn symbol(name: impl Into<Arc<str>>, size: Size) -> Self {
        Self {
            name: name.into(),
            size,
            symbol: true,
        }
    }

    /// The asset or symbol name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The natural size, in points.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns `true` for system symbols.
    pub fn is_symbol(&self) -> bool {
        self.symbol
    }
}

/// Inline media placed in text as a single placeholder character.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Attachment {
    image: Option<Image>,
    bounds: Option<Rect>,
    accessibility_label: Option<Arc<str>>,
}

impl Attachment {
    /// The character that stands in for an attachment in plain text.
    pub const PLACEHOLDER: char = '\u{FFFC}';

    /// Creates an attachment showing `image`.
    pub fn image(image: Image) -> Self {
        Self {
            image: Some(image),
            ..Self::default()
        }
    }

    /// Returns a copy laid out in `bounds` rather than at the image's natural size.
    ///
    /// The origin is relative to the baseline, so a negative `y0` drops the attachment below it.
    #[must_use]
    pub fn with_bounds(self, bounds: Rect) -> Self {
        Self {
            bounds: Some(bounds),
            ..self
        }
    }

    /// Returns a copy laid out at `size`, sitting on the baseline.
    #[must_use]
    pub fn with_size(self, size: Size) -> Self {
        self.with_bounds(Rect::from_origin_size((0.0, 0.0), size))
    }

    /// Returns a copy with a label for assistive technologies.
    #[must_use]
    pub fn with_accessibility_label(self, label: impl Into<Arc<str>>) -> Self {
        Self {
            accessibility_label: Some(label.into()),
            ..self
        }
    }

    /// The image, if any.
    pub fn image_ref(&self) -> Option<&Image> {
        self.image.as_ref()
    }

    /// The explicit bounds, if set.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    /// The layout bounds: explicit bounds, else the image's natural size on the baseline.
    pub fn layout_bounds(&self) -> Rect {
        self.bounds.unwrap_or_else(|| {
            let size = self.image.as_ref().map_or(Size::ZERO, Image::size);
            Rect::from_origin_size((0.0, 0.0), size)
        })
    }

    /// The accessibility label, if set.
    pub fn accessibility_label(&self) -> Option<&str> {
        self.accessibility_label.as_deref()
    }
}

impl From<Image> for Attachment {
    fn from(image: Image) -> Self {
        Self::image(image)
    }
}
