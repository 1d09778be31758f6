// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Leaf value types for styled text.
//!
//! This crate is the vocabulary layer under `styled_text`: small, typed, immutable values that
//! attributes carry (languages, font descriptors, paragraph enums, decoration styles, shadows,
//! inline attachments). It has no notion of attribute sets or documents.
//!
//! Colors are [`peniko::Color`] and geometry uses [`peniko::kurbo`], both re-exported here.
//!
//! ## Features
//!
//! - `std` (enabled by default): Enables `std` in `peniko`.
//! - `libm`: Use `libm` for floating point in `peniko` when `std` is unavailable.
//!
//! ## Example
//!
//! ```
//! use text_primitives::{Font, FontTraits, Language};
//!
//! let font = Font::BODY.with_traits(FontTraits::BOLD);
//! assert!(font.is_bold());
//! assert_eq!(font.size(), 17.0);
//!
//! assert_eq!(Language::parse("pt-BR"), Language::Portuguese);
//! assert_eq!(Language::parse("tlh"), Language::Unknown);
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
compile_error!("text_primitives requires either the `std` or `libm` feature to be enabled");

extern crate alloc;

mod attachment;
mod bidi;
mod decoration;
mod font;
mod language;
mod text;

pub use peniko::{kurbo, Color};

pub use attachment::{Attachment, Image};
pub use bidi::{BidiDirection, BidiFormat, DirectionRun};
pub use decoration::{Cursor, Ligature, LineStyle, Shadow, SpellingState, TextEffect};
pub use font::{Font, FontFamily, FontTraits, FontWeight, GenericFamily, TextStyle};
pub use language::{Language, ParseLanguageError};
pub use text::{
    LineBreakMode, LineBreakStrategy, TabAlignment, TextAlignment, TextTab, WritingDirection,
};
