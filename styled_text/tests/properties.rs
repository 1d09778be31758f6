// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Algebraic laws of attribute merging and document concatenation.

use proptest::prelude::*;
use styled_text::text_primitives::{Color, FontTraits, LineStyle};
use styled_text::{AttributeKey, AttributeValue, Attributes, Document, ParagraphStyle, Styled};

const NUMBER_KEYS: [AttributeKey; 5] = [
    AttributeKey::Kern,
    AttributeKey::Tracking,
    AttributeKey::BaselineOffset,
    AttributeKey::Obliqueness,
    AttributeKey::Expansion,
];

const COLOR_KEYS: [AttributeKey; 3] = [
    AttributeKey::ForegroundColor,
    AttributeKey::BackgroundColor,
    AttributeKey::UnderlineColor,
];

type Setter = fn(Document, f64) -> Document;
type Getter = fn(&ParagraphStyle) -> f64;

const PARAGRAPH_FIELDS: [(Setter, Getter); 8] = [
    (<Document as Styled>::head_indent, ParagraphStyle::head_indent),
    (<Document as Styled>::first_line_head_indent, ParagraphStyle::first_line_head_indent),
    (<Document as Styled>::tail_indent, ParagraphStyle::tail_indent),
    (<Document as Styled>::line_spacing, ParagraphStyle::line_spacing),
    (<Document as Styled>::paragraph_spacing, ParagraphStyle::paragraph_spacing),
    (<Document as Styled>::paragraph_spacing_before, ParagraphStyle::paragraph_spacing_before),
    (<Document as Styled>::minimum_line_height, ParagraphStyle::minimum_line_height),
    (<Document as Styled>::default_tab_interval, ParagraphStyle::default_tab_interval),
];

const TRAITS: [FontTraits; 5] = [
    FontTraits::BOLD,
    FontTraits::ITALIC,
    FontTraits::MONOSPACE,
    FontTraits::CONDENSED,
    FontTraits::EXPANDED,
];

fn color() -> impl Strategy<Value = Color> {
    any::<[u8; 3]>().prop_map(|[r, g, b]| Color::from_rgb8(r, g, b))
}

fn attribute() -> impl Strategy<Value = (AttributeKey, AttributeValue)> {
    prop_oneof![
        (prop::sample::select(NUMBER_KEYS.to_vec()), -100.0..100.0_f64)
            .prop_map(|(key, value)| (key, AttributeValue::Number(value))),
        (prop::sample::select(COLOR_KEYS.to_vec()), color())
            .prop_map(|(key, value)| (key, AttributeValue::Color(value))),
    ]
}

fn attributes() -> impl Strategy<Value = Attributes> {
    prop::collection::vec(attribute(), 0..6).prop_map(|entries| entries.into_iter().collect())
}

fn fragment() -> impl Strategy<Value = Document> {
    ("[a-z ]{0,6}", attributes()).prop_map(|(text, attributes)| text.adding_attributes(attributes))
}

fn document() -> impl Strategy<Value = Document> {
    prop::collection::vec(fragment(), 0..5).prop_map(|fragments| fragments.into_iter().collect())
}

proptest! {
    #[test]
    fn merge_is_right_biased(left in attributes(), right in attributes()) {
        let merged = left.merge(&right);
        for (key, value) in merged.iter() {
            let expected = right.get(key).or_else(|| left.get(key));
            prop_assert_eq!(Some(value), expected);
        }
        for key in left.keys().into_iter().chain(right.keys()) {
            prop_assert!(merged.contains(key));
        }
    }

    #[test]
    fn paragraph_fields_are_isolated(
        writes in prop::collection::vec((0..PARAGRAPH_FIELDS.len(), 0.0..500.0_f64), 1..12),
    ) {
        let mut document = "paragraph".into_document();
        let mut expected = [0.0_f64; PARAGRAPH_FIELDS.len()];
        for &(field, value) in &writes {
            document = (PARAGRAPH_FIELDS[field].0)(document, value);
            expected[field] = value;
        }
        let style = document.paragraph_style();
        for (field, (_, getter)) in PARAGRAPH_FIELDS.iter().enumerate() {
            prop_assert_eq!(getter(&style), expected[field]);
        }
        prop_assert_eq!(style.tab_stops(), ParagraphStyle::default_tab_stops());
    }

    #[test]
    fn concatenation_is_associative(a in document(), b in document(), c in document()) {
        let left = a.clone().appending(b.clone()).appending(c.clone());
        let right = a.appending(b.appending(c));
        prop_assert_eq!(left.attributes(), right.attributes());
        prop_assert_eq!(left, right);
    }

    #[test]
    fn empty_is_identity(a in document()) {
        prop_assert_eq!(a.clone().appending(Document::new()), a.clone());
        prop_assert_eq!(Document::new().appending(a.clone()), a);
    }

    #[test]
    fn attributes_come_from_the_last_character(a in document(), b in document()) {
        let combined = a.clone().appending(b.clone());
        prop_assert_eq!(combined.text(), a.text() + &b.text());
        if b.is_empty() {
            prop_assert_eq!(combined.attributes(), a.attributes());
        } else {
            prop_assert_eq!(combined.attributes(), b.attributes());
        }
    }

    #[test]
    fn empty_documents_take_no_attributes(extra in attributes()) {
        prop_assert!(Document::new().attributes().is_empty());
        prop_assert!(Document::new().adding_attributes(extra.clone()).attributes().is_empty());
        prop_assert!("".adding_attributes(extra).attributes().is_empty());
    }

    #[test]
    fn appending_never_restyles_earlier_spans(a in document(), b in document()) {
        let combined = a.clone().appending(b);
        for run in a.runs() {
            prop_assert_eq!(combined.attributes_at(run.range.start), Some(run.span.attributes()));
        }
    }

    #[test]
    fn font_traits_accumulate(picks in prop::collection::vec(0..TRAITS.len(), 1..6)) {
        let mut document = "text".into_document();
        let mut expected = FontTraits::empty();
        for &pick in &picks {
            document = document.font_traits(TRAITS[pick], &styled_text::DefaultResolver::DEFAULT);
            expected |= TRAITS[pick];
        }
        prop_assert_eq!(document.current_font().traits(), expected);
    }

    #[test]
    fn underline_without_color_keeps_the_color(
        initial in color(),
        replacement in proptest::option::of(color()),
    ) {
        let document = "text"
            .underline(LineStyle::SINGLE, Some(initial))
            .underline(LineStyle::DOUBLE, replacement);
        prop_assert_eq!(
            document.attribute::<Color>(AttributeKey::UnderlineColor),
            Some(replacement.unwrap_or(initial))
        );
        prop_assert_eq!(
            document.attribute::<LineStyle>(AttributeKey::UnderlineStyle),
            Some(LineStyle::DOUBLE)
        );
    }
}
