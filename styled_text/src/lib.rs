// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Declarative building of attributed text.
//!
//! - [`Attributes`] is an immutable attribute set with a right-biased [`merge`](Attributes::merge).
//! - [`ParagraphStyle`] is the nested paragraph record, changed one field at a time by copy.
//! - [`Document`] is an ordered sequence of [`Span`]s, each carrying its own attributes.
//! - [`Styled`] is implemented by text, documents, attachments and images, and provides every
//!   styling method.
//! - [`DocumentBuilder`] and [`document!`] fold fragments into one document.
//! - [`PlatformResolver`] supplies fonts, named colors and system images.
//!
//! ## Attribute semantics
//!
//! Styling methods apply to the whole receiver and never change it: they return a new
//! [`Document`]. Appending keeps the attributes each side already has, and the attributes of a
//! document are those of its last character. Empty content cannot carry attributes.
//!
//! Setters that take an optional color, such as [`Styled::underline`], only replace a color
//! already in effect when one is given. Font trait setters such as [`Styled::bold`] add to the
//! traits of the font in effect.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` in `text_primitives`.
//! - `libm`: Use `libm` for floating point when `std` is unavailable.
//!
//! ## Example
//!
//! ```
//! use styled_text::{document, AttributeKey, Styled};
//! use styled_text::text_primitives::{Color, Font, FontTraits};
//!
//! let red = Color::from_rgb8(255, 0, 0);
//! let greeting = document![
//!     "Hello".bold(),
//!     " ",
//!     "World!".bold().italic().foreground_color(red),
//! ];
//!
//! let spans = greeting.spans();
//! assert_eq!(spans.len(), 3);
//! assert!(spans[1].attributes().is_empty());
//! assert_eq!(
//!     greeting.attribute::<Font>(AttributeKey::Font).map(|font| font.traits()),
//!     Some(FontTraits::BOLD | FontTraits::ITALIC)
//! );
//! assert_eq!(greeting.attribute::<Color>(AttributeKey::ForegroundColor), Some(red));
//! ```
// LINEBENDER LINT SET - lib.rs - v3
// See https://linebender.org/wiki/canonical-lints/
// These lints shouldn't apply to examples or tests.
#![cfg_attr(not(test), warn(unused_crate_dependencies))]
// These lints shouldn't apply to examples.
#![warn(clippy::print_stdout, clippy::print_stderr)]
// Targeting e.g. 32-bit means structs containing usize can give false positives for 64-bit.
#![cfg_attr(target_pointer_width = "64", warn(clippy::trivially_copy_pass_by_ref))]
// END LINEBENDER LINT SET
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("styled_text requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

pub use text_primitives;

mod attributes;
mod builder;
mod document;
mod paragraph;
mod resolver;
mod span;
mod styled;

#[cfg(test)]
mod tests;

pub use attributes::{AttributeKey, AttributeType, AttributeValue, Attributes, Link};
pub use builder::DocumentBuilder;
pub use document::{Document, Run, Runs};
pub use paragraph::ParagraphStyle;
pub use resolver::{Catalog, DefaultResolver, PlatformResolver, ResolverConfig};
pub use span::{Span, SpanContent};
pub use styled::Styled;
