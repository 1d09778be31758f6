// Copyright 2025 the Parley Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::convert::Infallible;
use core::fmt;
use core::str::FromStr;

macro_rules! languages {
    ($($(#[$meta:meta])* $variant:ident => $code:literal,)*) => {
        /// A language, identified by its ISO 639 code.
        ///
        /// This is a closed set. Tags whose primary language subtag is not listed here parse to
        /// [`Language::Unknown`] rather than failing; see [`Language::parse`]. The ISO 639
        /// special-purpose codes are represented by the sentinels [`Language::Multiple`]
        /// (`mul`), [`Language::Unavailable`] (`zxx`), [`Language::Uncoded`] (`mis`) and
        /// [`Language::Unidentified`] (`und`).
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[non_exhaustive]
        pub enum Language {
            $($(#[$meta])* $variant,)*
            /// Content in several languages (`mul`).
            Multiple,
            /// No linguistic content (`zxx`).
            Unavailable,
            /// A language with no assigned code (`mis`).
            Uncoded,
            /// The language could not be determined (`und`).
            Unidentified,
            /// The tag did not name a language from this table.
            Unknown,
        }

        const TABLE: &[(&str, Language)] = &[
            $(($code, Language::$variant),)*
            ("mul", Language::Multiple),
            ("zxx", Language::Unavailable),
            ("mis", Language::Uncoded),
            ("und", Language::Unidentified),
        ];

        impl Language {
            /// Returns the canonical code for this language.
            ///
            /// [`Language::Unknown`] has no code and renders as `"unknown"`.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)*
                    Self::Multiple => "mul",
                    Self::Unavailable => "zxx",
                    Self::Uncoded => "mis",
                    Self::Unidentified => "und",
                    Self::Unknown => "unknown",
                }
            }
        }
    };
}

languages! {
    /// Afrikaans.
    Afrikaans => "af",
    /// Amharic.
    Amharic => "am",
    /// Arabic.
    Arabic => "ar",
    /// Assamese.
    Assamese => "as",
    /// Azerbaijani.
    Azerbaijani => "az",
    /// Belarusian.
    Belarusian => "be",
    /// Bulgarian.
    Bulgarian => "bg",
    /// Bangla.
    Bangla => "bn",
    /// Tibetan.
    Tibetan => "bo",
    /// Breton.
    Breton => "br",
    /// Bosnian.
    Bosnian => "bs",
    /// Catalan.
    Catalan => "ca",
    /// Cherokee.
    Cherokee => "chr",
    /// Central Kurdish.
    CentralKurdish => "ckb",
    /// Czech.
    Czech => "cs",
    /// Welsh.
    Welsh => "cy",
    /// Danish.
    Danish => "da",
    /// German.
    German => "de",
    /// Dzongkha.
    Dzongkha => "dz",
    /// Greek.
    Greek => "el",
    /// English.
    English => "en",
    /// Esperanto.
    Esperanto => "eo",
    /// Spanish.
    Spanish => "es",
    /// Estonian.
    Estonian => "et",
    /// Basque.
    Basque => "eu",
    /// Persian.
    Persian => "fa",
    /// Finnish.
    Finnish => "fi",
    /// Filipino.
    Filipino => "fil",
    /// Faroese.
    Faroese => "fo",
    /// French.
    French => "fr",
    /// Irish.
    Irish => "ga",
    /// Scottish Gaelic.
    ScottishGaelic => "gd",
    /// Galician.
    Galician => "gl",
    /// Gujarati.
    Gujarati => "gu",
    /// Hausa.
    Hausa => "ha",
    /// Hawaiian.
    Hawaiian => "haw",
    /// Hebrew.
    Hebrew => "he",
    /// Hindi.
    Hindi => "hi",
    /// Croatian.
    Croatian => "hr",
    /// Hungarian.
    Hungarian => "hu",
    /// Armenian.
    Armenian => "hy",
    /// Indonesian.
    Indonesian => "id",
    /// Igbo.
    Igbo => "ig",
    /// Icelandic.
    Icelandic => "is",
    /// Italian.
    Italian => "it",
    /// Japanese.
    Japanese => "ja",
    /// Javanese.
    Javanese => "jv",
    /// Georgian.
    Georgian => "ka",
    /// Kazakh.
    Kazakh => "kk",
    /// Khmer.
    Khmer => "km",
    /// Kannada.
    Kannada => "kn",
    /// Korean.
    Korean => "ko",
    /// Konkani.
    Konkani => "kok",
    /// Kurdish.
    Kurdish => "ku",
    /// Kyrgyz.
    Kyrgyz => "ky",
    /// Latin.
    Latin => "la",
    /// Luxembourgish.
    Luxembourgish => "lb",
    /// Lao.
    Lao => "lo",
    /// Lithuanian.
    Lithuanian => "lt",
    /// Latvian.
    Latvian => "lv",
    /// Malagasy.
    Malagasy => "mg",
    /// Māori.
    Maori => "mi",
    /// Macedonian.
    Macedonian => "mk",
    /// Malayalam.
    Malayalam => "ml",
    /// Mongolian.
    Mongolian => "mn",
    /// Manipuri.
    Manipuri => "mni",
    /// Marathi.
    Marathi => "mr",
    /// Malay.
    Malay => "ms",
    /// Maltese.
    Maltese => "mt",
    /// Burmese.
    Burmese => "my",
    /// Norwegian Bokmål.
    NorwegianBokmal => "nb",
    /// Nepali.
    Nepali => "ne",
    /// Dutch.
    Dutch => "nl",
    /// Norwegian Nynorsk.
    NorwegianNynorsk => "nn",
    /// Norwegian.
    Norwegian => "no",
    /// Nyanja.
    Nyanja => "ny",
    /// Occitan.
    Occitan => "oc",
    /// Oromo.
    Oromo => "om",
    /// Odia.
    Odia => "or",
    /// Punjabi.
    Punjabi => "pa",
    /// Polish.
    Polish => "pl",
    /// Pashto.
    Pashto => "ps",
    /// Portuguese.
    Portuguese => "pt",
    /// Quechua.
    Quechua => "qu",
    /// Romansh.
    Romansh => "rm",
    /// Romanian.
    Romanian => "ro",
    /// Russian.
    Russian => "ru",
    /// Kinyarwanda.
    Kinyarwanda => "rw",
    /// Sanskrit.
    Sanskrit => "sa",
    /// Santali.
    Santali => "sat",
    /// Sindhi.
    Sindhi => "sd",
    /// Northern Sami.
    NorthernSami => "se",
    /// Sinhala.
    Sinhala => "si",
    /// Slovak.
    Slovak => "sk",
    /// Slovenian.
    Slovenian => "sl",
    /// Samoan.
    Samoan => "sm",
    /// Shona.
    Shona => "sn",
    /// Somali.
    Somali => "so",
    /// Albanian.
    Albanian => "sq",
    /// Serbian.
    Serbian => "sr",
    /// Southern Sotho.
    SouthernSotho => "st",
    /// Sundanese.
    Sundanese => "su",
    /// Swedish.
    Swedish => "sv",
    /// Swahili.
    Swahili => "sw",
    /// Tamil.
    Tamil => "ta",
    /// Telugu.
    Telugu => "te",
    /// Tajik.
    Tajik => "tg",
    /// Thai.
    Thai => "th",
    /// Tigrinya.
    Tigrinya => "ti",
    /// Turkmen.
    Turkmen => "tk",
    /// Tagalog.
    Tagalog => "tl",
    /// Tongan.
    Tongan => "to",
    /// Turkish.
    Turkish => "tr",
    /// Tatar.
    Tatar => "tt",
    /// Uyghur.
    Uyghur => "ug",
    /// Ukrainian.
    Ukrainian => "uk",
    /// Urdu.
    Urdu => "ur",
    /// Uzbek.
    Uzbek => "uz",
    /// Vietnamese.
    Vietnamese => "vi",
    /// Wolof.
    Wolof => "wo",
    /// Xhosa.
    Xhosa => "xh",
    /// Yiddish.
    Yiddish => "yi",
    /// Yoruba.
    Yoruba => "yo",
    /// Cantonese.
    Cantonese => "yue",
    /// Chinese.
    Chinese => "zh",
    /// Zulu.
    Zulu => "zu",
}

/// Retired two-letter codes that still show up in platform locale strings.
const LEGACY: &[(&str, Language)] = &[
    ("in", Language::Indonesian),
    ("iw", Language::Hebrew),
    ("ji", Language::Yiddish),
];

impl Language {
    /// Parses the primary language subtag of a BCP 47 style tag.
    ///
    /// This never fails: anything that does not name a language from the table (including
    /// malformed input) yields [`Language::Unknown`]. Script, region and variant subtags are
    /// ignored, and `-` and `_` are both accepted as separators.
    ///
    /// ```
    /// use text_primitives::Language;
    ///
    /// assert_eq!(Language::parse("zh-Hans-CN"), Language::Chinese);
    /// assert_eq!(Language::parse("EN_us"), Language::English);
    /// assert_eq!(Language::parse("und"), Language::Unidentified);
    /// assert_eq!(Language::parse("qaa"), Language::Unknown);
    /// ```
    pub fn parse(tag: &str) -> Self {
        Self::from_code(tag).unwrap_or(Self::Unknown)
    }

    /// Parses the primary language subtag of a tag, reporting why it was rejected.
    ///
    /// ```
    /// use text_primitives::{Language, ParseLanguageError};
    ///
    /// assert_eq!(Language::from_code("pt-BR"), Ok(Language::Portuguese));
    /// assert_eq!(
    ///     Language::from_code("e1"),
    ///     Err(ParseLanguageError::InvalidLanguage)
    /// );
    /// assert_eq!(
    ///     Language::from_code("qaa"),
    ///     Err(ParseLanguageError::UnrecognizedLanguage)
    /// );
    /// ```
    pub fn from_code(tag: &str) -> Result<Self, ParseLanguageError> {
        let mut pos = 0;
        let (start, end) =
            next_part_bounds(tag, &mut pos).ok_or(ParseLanguageError::InvalidLanguage)?;
        let subtag = &tag.as_bytes()[start..end];
        if !(2..=3).contains(&subtag.len()) || !subtag.iter().all(u8::is_ascii_alphabetic) {
            return Err(ParseLanguageError::InvalidLanguage);
        }

        let mut lower = [0_u8; 3];
        for (dst, src) in lower.iter_mut().zip(subtag) {
            *dst = src.to_ascii_lowercase();
        }
        let code = &lower[..subtag.len()];

        TABLE
            .iter()
            .chain(LEGACY)
            .find(|(candidate, _)| candidate.as_bytes() == code)
            .map(|&(_, language)| language)
            .ok_or(ParseLanguageError::UnrecognizedLanguage)
    }

    /// Returns `true` for the ISO 639 special-purpose sentinels and [`Language::Unknown`].
    #[must_use]
    pub const fn is_sentinel(self) -> bool {
        matches!(
            self,
            Self::Multiple | Self::Unavailable | Self::Uncoded | Self::Unidentified | Self::Unknown
        )
    }

    /// Iterates over every language with a code, in table order.
    ///
    /// [`Language::Unknown`] is not included.
    pub fn all() -> impl ExactSizeIterator<Item = Self> + Clone {
        TABLE.iter().map(|&(_, language)| language)
    }
}

fn next_part_bounds(s: &str, pos: &mut usize) -> Option<(usize, usize)> {
    let bytes = s.as_bytes();
    while *pos < bytes.len() && matches!(bytes[*pos], b'-' | b'_') {
        *pos += 1;
    }
    if *pos >= bytes.len() {
        return None;
    }
    let start = *pos;
    while *pos < bytes.len() && !matches!(bytes[*pos], b'-' | b'_') {
        *pos += 1;
    }
    Some((start, *pos))
}

impl Default for Language {
    fn default() -> Self {
        Self::Unidentified
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

/// An error returned by [`Language::from_code`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParseLanguageError {
    /// The input did not start with a 2–3 letter primary language subtag.
    InvalidLanguage,
    /// The primary subtag was well formed but is not a known language code.
    UnrecognizedLanguage,
}

impl fmt::Display for ParseLanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLanguage => f.write_str("invalid primary language subtag"),
            Self::UnrecognizedLanguage => f.write_str("unrecognized language code"),
        }
    }
}

impl core::error::Error for ParseLanguageError {}

#[cfg(test)]
mod tests {
    use super::{Language, ParseLanguageError, TABLE};

    #[test]
    fn parse_language_only() {
        assert_eq!(Language::parse("EN"), Language::English);
        assert_eq!(Language::parse("fr"), Language::French);
        assert_eq!(Language::parse("haw"), Language::Hawaiian);
    }

    #[test]
    fn parse_ignores_script_and_region() {
        assert_eq!(Language::parse("zh-Hant-TW"), Language::Chinese);
        assert_eq!(Language::parse("es_419"), Language::Spanish);
        assert_eq!(Language::parse("en-Latn-US-posix"), Language::English);
        assert_eq!(Language::parse("-de-CH"), Language::German);
    }

    #[test]
    fn legacy_codes_map_to_current_languages() {
        assert_eq!(Language::parse("iw"), Language::Hebrew);
        assert_eq!(Language::parse("in-ID"), Language::Indonesian);
        assert_eq!(Language::Hebrew.as_str(), "he");
    }

    #[test]
    fn sentinels_round_trip() {
        for (code, language) in [
            ("mul", Language::Multiple),
            ("zxx", Language::Unavailable),
            ("mis", Language::Uncoded),
            ("und", Language::Unidentified),
        ] {
            assert_eq!(Language::parse(code), language);
            assert_eq!(language.as_str(), code);
            assert!(language.is_sentinel());
        }
        assert!(!Language::Japanese.is_sentinel());
    }

    #[test]
    fn unrecognized_input_is_unknown() {
        assert_eq!(Language::parse(""), Language::Unknown);
        assert_eq!(Language::parse("e"), Language::Unknown);
        assert_eq!(Language::parse("english"), Language::Unknown);
        assert_eq!(Language::parse("x1"), Language::Unknown);
        assert_eq!(Language::parse("qaa-Latn"), Language::Unknown);
        assert_eq!(Language::Unknown.as_str(), "unknown");
        assert_eq!(Language::parse("unknown"), Language::Unknown);
    }

    #[test]
    fn from_code_reports_reason() {
        assert_eq!(
            Language::from_code("").unwrap_err(),
            ParseLanguageError::InvalidLanguage
        );
        assert_eq!(
            Language::from_code("en1").unwrap_err(),
            ParseLanguageError::InvalidLanguage
        );
        assert_eq!(
            Language::from_code("zz").unwrap_err(),
            ParseLanguageError::UnrecognizedLanguage
        );
        assert_eq!(Language::from_code("ko_KR"), Ok(Language::Korean));
    }

    #[test]
    fn every_code_parses_back_to_itself() {
        assert!(Language::all().len() >= 120);
        for language in Language::all() {
            assert_eq!(Language::parse(language.as_str()), language);
        }
    }

    #[test]
    fn codes_are_unique() {
        for (i, (a, _)) in TABLE.iter().enumerate() {
            for (b, _) in &TABLE[i + 1..] {
                assert_ne!(a, b, "duplicate code {a}");
            }
        }
    }
}
