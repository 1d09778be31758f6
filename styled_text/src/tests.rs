// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use peniko::color::palette::css;
use text_primitives::kurbo::Size;
use text_primitives::{
    Attachment, BidiDirection, BidiFormat, Color, DirectionRun, Font, FontTraits, Image, Language,
    LineBreakMode, TabAlignment, TextAlignment, TextTab,
};

use crate::{
    document, AttributeKey, Attributes, Catalog, Document, DocumentBuilder, Link, ParagraphStyle,
    SpanContent, Styled,
};

fn font_traits(attributes: &Attributes) -> Option<FontTraits> {
    attributes
        .get_as::<Font>(AttributeKey::Font)
        .map(|font| font.traits())
}

#[test]
fn hello_world_keeps_per_span_styles() {
    let greeting = "Hello"
        .bold()
        .appending(" ")
        .appending("World!".bold().italic().foreground_color(css::RED));

    assert_eq!(greeting.text(), "Hello World!");
    let spans = greeting.spans();
    assert_eq!(spans.len(), 3);

    assert_eq!(spans[0].as_text(), Some("Hello"));
    assert_eq!(spans[0].attributes().keys(), [AttributeKey::Font]);
    assert_eq!(font_traits(spans[0].attributes()), Some(FontTraits::BOLD));

    assert_eq!(spans[1].as_text(), Some(" "));
    assert!(spans[1].attributes().is_empty());

    assert_eq!(spans[2].as_text(), Some("World!"));
    assert_eq!(
        font_traits(spans[2].attributes()),
        Some(FontTraits::BOLD | FontTraits::ITALIC)
    );
    assert_eq!(
        spans[2].attributes().get_as::<Color>(AttributeKey::ForegroundColor),
        Some(css::RED)
    );

    assert_eq!(&greeting.attributes(), spans[2].attributes());
}

#[test]
fn paragraph_setters_share_one_record() {
    let document = "Centered".alignment(TextAlignment::Center).line_spacing(10.0);
    let attributes = document.attributes();
    assert_eq!(attributes.len(), 1);

    let style = attributes
        .get_as::<ParagraphStyle>(AttributeKey::ParagraphStyle)
        .unwrap();
    assert_eq!(style.alignment(), TextAlignment::Center);
    assert_eq!(style.line_spacing(), 10.0);
    assert_eq!(style.line_break_mode(), LineBreakMode::WordWrapping);
}

#[test]
fn paragraph_record_is_copied_not_shared() {
    let base = "Text".head_indent(12.0);
    let indented = base.clone().tail_indent(-12.0);
    assert_eq!(base.paragraph_style().tail_indent(), 0.0);
    assert_eq!(indented.paragraph_style().head_indent(), 12.0);
    assert_eq!(indented.paragraph_style().tail_indent(), -12.0);
}

#[test]
fn tab_stops_replace_defaults() {
    let document = "a\tb".tab_stops([TextTab::new(TabAlignment::Right, 120.0)]);
    let style = document.paragraph_style();
    assert_eq!(style.tab_stops(), [TextTab::new(TabAlignment::Right, 120.0)]);
}

#[test]
fn plain_text_stays_plain_after_appending_styled_text() {
    let document = "plain ".appending("bold".bold());
    assert!(document.spans()[0].attributes().is_empty());
    assert_eq!(document.attributes_at(0), Some(&Attributes::new()));
    assert_eq!(font_traits(&document.attributes()), Some(FontTraits::BOLD));
}

#[test]
fn attributes_apply_to_every_span() {
    let document = "a".bold().appending("b").kerning(2.0);
    for span in document.spans() {
        assert_eq!(span.attributes().get_as::<f64>(AttributeKey::Kern), Some(2.0));
    }
    assert_eq!(
        font_traits(document.spans()[0].attributes()),
        Some(FontTraits::BOLD)
    );
}

#[test]
fn trait_setters_read_the_last_character() {
    let document = "a".italic().appending("b").bold();
    // "b" has no font, so the bold body font replaces the italic one on "a".
    for span in document.spans() {
        assert_eq!(font_traits(span.attributes()), Some(FontTraits::BOLD));
    }
    assert_eq!(document.spans().len(), 1);
}

#[test]
fn attachments_carry_metadata_and_styles() {
    let star = Attachment::image(Image::symbol("star.fill", Size::new(17.0, 16.0)))
        .with_accessibility_label("Favorite");
    assert_eq!(star.attribute::<Font>(AttributeKey::Font), None);

    let document = star.clone().foreground_color(css::GOLD);
    let span = &document.spans()[0];
    assert_eq!(span.content(), &SpanContent::Attachment(star));
    assert_eq!(
        span.attributes().get_as::<Color>(AttributeKey::ForegroundColor),
        Some(css::GOLD)
    );
    assert_eq!(
        span.rendered_attributes()
            .get_as::<Attachment>(AttributeKey::Attachment)
            .and_then(|attachment| attachment.accessibility_label().map(String::from)),
        Some(String::from("Favorite"))
    );
    assert_eq!(document.text(), "\u{FFFC}");
}

#[test]
fn character_setters() {
    let document = "link"
        .link("https://example.invalid")
        .language(Language::parse("fr-CA"))
        .writing_direction([DirectionRun::new(BidiDirection::Rtl, BidiFormat::Embedding)])
        .superscript(-1)
        .tool_tip("Opens a page")
        .accessibility_heading_level(2);

    assert_eq!(
        document.attribute::<Link>(AttributeKey::Link),
        Some(Link::new("https://example.invalid"))
    );
    assert_eq!(
        document.attribute::<Language>(AttributeKey::Language),
        Some(Language::French)
    );
    assert_eq!(document.attribute::<f64>(AttributeKey::Superscript), Some(-1.0));
    assert_eq!(
        document.attribute::<f64>(AttributeKey::AccessibilityTextHeadingLevel),
        Some(2.0)
    );
    let runs = document
        .attribute::<alloc::sync::Arc<[DirectionRun]>>(AttributeKey::WritingDirection)
        .unwrap();
    assert_eq!(&runs[..], [DirectionRun::RTL_EMBEDDING]);
}

#[test]
fn builder_handles_conditionals_and_loops() {
    let items = ["one", "two", "three"];
    let show_footer = false;

    let mut builder = DocumentBuilder::new();
    builder.push("List:".bold());
    for (index, item) in items.into_iter().enumerate() {
        builder.push(format!("\n{}. ", index + 1));
        builder.push(item.italic());
    }
    builder.push_optional(show_footer.then_some("\n--"));
    let document = builder.build();

    assert!(document.text().ends_with("3. three"));
    assert!(font_traits(&document.attributes()).is_some_and(|t| t.contains(FontTraits::ITALIC)));

    let italic_count = document
        .spans()
        .iter()
        .filter(|span| font_traits(span.attributes()) == Some(FontTraits::ITALIC))
        .count();
    assert_eq!(italic_count, 3);
}

#[test]
fn macro_builds_the_same_document() {
    let count = 2;
    let from_macro = document![
        "Items: ".bold(),
        (count > 0).then(|| format!("{count}")),
        (0..count).map(|_| " •").collect::<Document>(),
    ];
    assert_eq!(from_macro.text(), "Items: 2 • •");
    assert!(from_macro.attributes().is_empty());
    assert_eq!(from_macro.spans().len(), 2);
}

#[test]
fn resolver_failures_are_no_ops() {
    let mut catalog = Catalog::new();
    catalog.register_color("AccentColor", css::STEEL_BLUE);

    let document = "Score "
        .foreground_named_color("AccentColor", &catalog)
        .appending_system_image("trophy", &catalog);
    assert_eq!(document.char_count(), 6);
    assert_eq!(
        document.attribute::<Color>(AttributeKey::ForegroundColor),
        Some(css::STEEL_BLUE)
    );
}

#[test]
fn runs_expose_everything_a_renderer_needs() {
    let document = "a".kerning(1.0).appending(Image::new("dot", Size::new(4.0, 4.0)));
    let runs: Vec<_> = document
        .runs()
        .map(|run| (run.range, run.span.rendered_attributes().keys()))
        .collect();
    assert_eq!(
        runs,
        [
            (0..1, alloc::vec![AttributeKey::Kern]),
            (1..4, alloc::vec![AttributeKey::Attachment]),
        ]
    );
}
