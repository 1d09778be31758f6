// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolution of symbolic fonts, colors and images to concrete values.

use alloc::sync::Arc;

use hashbrown::HashMap;
use peniko::color::{parse_color, palette, Srgb};
use text_primitives::{Color, Font, FontFamily, FontTraits, Image, TextStyle};

/// Supplies the platform values that styling methods cannot compute on their own.
///
/// Implementations never fail loudly: unknown colors fall back to some color, and unknown
/// images are reported as `None`, which callers treat as "leave the document alone".
pub trait PlatformResolver {
    /// Returns the font for a semantic text style.
    fn resolve_font(&self, style: TextStyle) -> Font;

    /// Returns the color registered under `name`.
    fn resolve_named_color(&self, name: &str) -> Color;

    /// Returns the system image registered under `name`, if there is one.
    fn resolve_system_image(&self, name: &str) -> Option<Image>;

    /// Returns `base` carrying exactly `traits`.
    ///
    /// Callers pass the union of the traits `base` already has and the ones they want, so the
    /// default implementation only needs to add them.
    fn font_with_traits(&self, base: &Font, traits: FontTraits) -> Font {
        base.with_traits(traits)
    }
}

impl<T: PlatformResolver + ?Sized> PlatformResolver for &T {
    fn resolve_font(&self, style: TextStyle) -> Font {
        (**self).resolve_font(style)
    }

    fn resolve_named_color(&self, name: &str) -> Color {
        (**self).resolve_named_color(name)
    }

    fn resolve_system_image(&self, name: &str) -> Option<Image> {
        (**self).resolve_system_image(name)
    }

    fn font_with_traits(&self, base: &Font, traits: FontTraits) -> Font {
        (**self).font_with_traits(base, traits)
    }
}

/// Settings for [`DefaultResolver`].
#[derive(Clone, Debug, PartialEq)]
pub struct ResolverConfig {
    /// Family of every resolved font.
    pub family: FontFamily,
    /// Factor applied to the point size of each text style.
    pub size_scale: f64,
    /// Color returned for names that do not resolve.
    pub fallback_color: Color,
}

impl ResolverConfig {
    /// The system family at standard sizes, with black as the fallback color.
    pub const DEFAULT: Self = Self {
        family: FontFamily::SYSTEM_UI,
        size_scale: 1.0,
        fallback_color: palette::css::BLACK,
    };
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A resolver that needs no platform: standard text style sizes, CSS color syntax and no
/// system images.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DefaultResolver {
    config: ResolverConfig,
}

impl DefaultResolver {
    /// A resolver with [`ResolverConfig::DEFAULT`].
    pub const DEFAULT: Self = Self::new(ResolverConfig::DEFAULT);

    /// Creates a resolver from `config`.
    pub const fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }
}

impl PlatformResolver for DefaultResolver {
    fn resolve_font(&self, style: TextStyle) -> Font {
        Font::for_text_style(style)
            .with_size(style.point_size() * self.config.size_scale)
            .with_family(self.config.family.clone())
    }

    fn resolve_named_color(&self, name: &str) -> Color {
        match parse_color(name) {
            Ok(color) => color.to_alpha_color::<Srgb>(),
            Err(_) => {
                log::debug!("unknown color {name:?}, using the fallback color");
                self.config.fallback_color
            }
        }
    }

    fn resolve_system_image(&self, _name: &str) -> Option<Image> {
        None
    }
}

/// A resolver backed by registered colors and images.
///
/// Names that were not registered are passed on to a [`DefaultResolver`].
///
/// ```
/// use styled_text::{Catalog, PlatformResolver};
/// use styled_text::text_primitives::{kurbo::Size, Color, Image};
///
/// let accent = Color::from_rgb8(0, 122, 255);
/// let mut catalog = Catalog::new();
/// catalog.register_color("AccentColor", accent);
/// catalog.register_image(Image::symbol("star.fill", Size::new(17.0, 16.0)));
///
/// assert_eq!(catalog.resolve_named_color("AccentColor"), accent);
/// assert!(catalog.resolve_system_image("star.fill").is_some());
/// assert!(catalog.resolve_system_image("moon").is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    colors: HashMap<Arc<str>, Color>,
    images: HashMap<Arc<str>, Image>,
    fallback: DefaultResolver,
}

impl Catalog {
    /// Creates an empty catalog falling back to [`DefaultResolver::DEFAULT`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty catalog falling back to a resolver with `config`.
    pub fn with_config(config: ResolverConfig) -> Self {
        Self {
            fallback: DefaultResolver::new(config),
            ..Self::default()
        }
    }

    /// Registers `color` under `name`, returning the color it replaces.
    pub fn register_color(&mut self, name: impl Into<Arc<str>>, color: Color) -> Option<Color> {
        self.colors.insert(name.into(), color)
    }

    /// Registers `image` under its name, returning the image it replaces.
    pub fn register_image(&mut self, image: Image) -> Option<Image> {
        self.images.insert(image.name().into(), image)
    }

    /// Returns the color registered under `name`.
    pub fn color(&self, name: &str) -> Option<Color> {
        self.colors.get(name).copied()
    }

    /// Returns the image registered under `name`.
    pub fn image(&self, name: &str) -> Option<&Image> {
        self.images.get(name)
    }
}

impl PlatformResolver for Catalog {
    fn resolve_font(&self, style: TextStyle) -> Font {
        self.fallback.resolve_font(style)
    }

    fn resolve_named_color(&self, name: &str) -> Color {
        self.color(name)
            .unwrap_or_else(|| self.fallback.resolve_named_color(name))
    }

    fn resolve_system_image(&self, name: &str) -> Option<Image> {
        match self.image(name) {
            Some(image) => Some(image.clone()),
            None => self.fallback.resolve_system_image(name),
        }
    }
}
