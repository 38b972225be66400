//! Supported display languages and their locale metadata.

use std::fmt;

/// Name of the language the portal content is authored in.
pub const BASE_LANGUAGE_NAME: &str = "English";

/// Writing direction applied to the document root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    /// Left-to-right scripts.
    Ltr,
    /// Right-to-left scripts.
    Rtl,
}

impl TextDirection {
    /// Attribute value as used by the `dir` attribute (`ltr` / `rtl`).
    #[must_use]
    pub const fn as_attr(self) -> &'static str {
        match self {
            Self::Ltr => "ltr",
            Self::Rtl => "rtl",
        }
    }
}

/// A display language the portal can be switched to.
///
/// The set is closed: anything outside it is rejected at the language
/// context and short-circuited to base behaviour at the translation boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    /// Base language; never translated.
    #[default]
    English,
    /// Hindi (hi).
    Hindi,
    /// Bengali (bn).
    Bengali,
    /// Telugu (te).
    Telugu,
    /// Marathi (mr).
    Marathi,
    /// Tamil (ta).
    Tamil,
    /// Urdu (ur), right-to-left.
    Urdu,
    /// Gujarati (gu).
    Gujarati,
    /// Kannada (kn).
    Kannada,
    /// Odia (or).
    Odia,
    /// Malayalam (ml).
    Malayalam,
    /// Punjabi (pa).
    Punjabi,
}

impl Language {
    /// Every supported language, base language first.
    pub const ALL: [Self; 12] = [
        Self::English,
        Self::Hindi,
        Self::Bengali,
        Self::Telugu,
        Self::Marathi,
        Self::Tamil,
        Self::Urdu,
        Self::Gujarati,
        Self::Kannada,
        Self::Odia,
        Self::Malayalam,
        Self::Punjabi,
    ];

    /// What: Display name, which is also the identifier sent to the model and persisted.
    ///
    /// Output:
    /// - Static name such as `"Hindi"`.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => BASE_LANGUAGE_NAME,
            Self::Hindi => "Hindi",
            Self::Bengali => "Bengali",
            Self::Telugu => "Telugu",
            Self::Marathi => "Marathi",
            Self::Tamil => "Tamil",
            Self::Urdu => "Urdu",
            Self::Gujarati => "Gujarati",
            Self::Kannada => "Kannada",
            Self::Odia => "Odia",
            Self::Malayalam => "Malayalam",
            Self::Punjabi => "Punjabi",
        }
    }

    /// What: BCP 47 primary language tag applied to the document root.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Bengali => "bn",
            Self::Telugu => "te",
            Self::Marathi => "mr",
            Self::Tamil => "ta",
            Self::Urdu => "ur",
            Self::Gujarati => "gu",
            Self::Kannada => "kn",
            Self::Odia => "or",
            Self::Malayalam => "ml",
            Self::Punjabi => "pa",
        }
    }

    /// Writing direction of the language's script.
    #[must_use]
    pub const fn direction(self) -> TextDirection {
        match self {
            Self::Urdu => TextDirection::Rtl,
            _ => TextDirection::Ltr,
        }
    }

    /// `true` for the authored content language.
    #[must_use]
    pub const fn is_base(self) -> bool {
        matches!(self, Self::English)
    }

    /// What: Resolve a user-supplied identifier to a supported language.
    ///
    /// Inputs:
    /// - `id`: Display name (`"hindi"`, `"Hindi"`) or tag (`"hi"`)
    ///
    /// Output:
    /// - `Some(Language)` when the identifier matches; `None` otherwise.
    ///
    /// Details:
    /// - Matching is ASCII case-insensitive and ignores surrounding whitespace.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        let id = id.trim();
        if id.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|l| l.name().eq_ignore_ascii_case(id) || l.tag().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a language selection cannot be honoured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LanguageError {
    /// The identifier is not in the supported set.
    Unsupported(String),
}

impl fmt::Display for LanguageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unsupported(id) => write!(f, "unsupported language: '{id}'"),
        }
    }
}

impl std::error::Error for LanguageError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Names and tags resolve case-insensitively; unknown ids do not.
    fn from_id_accepts_names_and_tags() {
        assert_eq!(Language::from_id("hindi"), Some(Language::Hindi));
        assert_eq!(Language::from_id(" TAMIL "), Some(Language::Tamil));
        assert_eq!(Language::from_id("ur"), Some(Language::Urdu));
        assert_eq!(Language::from_id("English"), Some(Language::English));
        assert_eq!(Language::from_id("Klingon"), None);
        assert_eq!(Language::from_id("   "), None);
    }

    #[test]
    fn only_english_is_base_and_only_urdu_is_rtl() {
        for lang in Language::ALL {
            assert_eq!(lang.is_base(), lang == Language::English);
            let rtl = lang.direction() == TextDirection::Rtl;
            assert_eq!(rtl, lang == Language::Urdu, "{lang}");
        }
    }

    #[test]
    fn names_and_tags_are_unique() {
        let mut names = std::collections::HashSet::new();
        let mut tags = std::collections::HashSet::new();
        for lang in Language::ALL {
            assert!(names.insert(lang.name()));
            assert!(tags.insert(lang.tag()));
        }
    }
}
