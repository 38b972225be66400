//! Per-language translation cache.

use std::collections::HashMap;

use crate::i18n::Language;

/// Where a cached value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    /// Returned by the backend.
    Model,
    /// Original text stored after a failed batch.
    Fallback,
}

/// A cached value with its provenance.
#[derive(Debug, Clone)]
struct Cached {
    /// Text served to the UI.
    text: String,
    /// Provenance, so a real translation can replace a fallback.
    origin: Origin,
}

/// Hit/miss counters and size, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CacheStats {
    /// Lookups that found a value.
    pub hits: u64,
    /// Lookups that found nothing.
    pub misses: u64,
    /// Entries across all languages.
    pub entries: usize,
}

/// Mapping `language -> original text -> translated text`.
///
/// Append-only for the process lifetime: entries are never evicted, and each
/// language keeps an independent sub-map.
#[derive(Debug, Default)]
pub struct TranslationCache {
    /// Sub-map per language.
    entries: HashMap<Language, HashMap<String, Cached>>,
    /// Lookup hits.
    hits: u64,
    /// Lookup misses.
    misses: u64,
}

impl TranslationCache {
    /// Empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// What: Look up a translation and count the hit or miss.
    ///
    /// Inputs:
    /// - `language`: Target language
    /// - `text`: Exact original text (case- and whitespace-sensitive)
    ///
    /// Output:
    /// - Cached text, if any.
    pub fn get(&mut self, language: Language, text: &str) -> Option<&str> {
        let found = self
            .entries
            .get(&language)
            .and_then(|m| m.get(text))
            .map(|c| c.text.as_str());
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    /// Presence check that leaves the counters alone.
    #[must_use]
    pub fn contains(&self, language: Language, text: &str) -> bool {
        self.entries
            .get(&language)
            .is_some_and(|m| m.contains_key(text))
    }

    /// Store a backend translation; replaces an earlier fallback for the same text.
    pub fn insert_translation(&mut self, language: Language, original: String, translated: String) {
        self.entries.entry(language).or_default().insert(
            original,
            Cached {
                text: translated,
                origin: Origin::Model,
            },
        );
    }

    /// Store `original` as its own translation unless a value already exists.
    pub fn insert_fallback(&mut self, language: Language, original: &str) {
        self.entries
            .entry(language)
            .or_default()
            .entry(original.to_string())
            .or_insert_with(|| Cached {
                text: original.to_string(),
                origin: Origin::Fallback,
            });
    }

    /// Number of entries cached for `language`.
    #[must_use]
    pub fn len(&self, language: Language) -> usize {
        self.entries.get(&language).map_or(0, HashMap::len)
    }

    /// `true` when nothing is cached for `language`.
    #[must_use]
    pub fn is_empty(&self, language: Language) -> bool {
        self.len(language) == 0
    }

    /// Number of fallback entries for `language`.
    #[must_use]
    pub fn fallback_count(&self, language: Language) -> usize {
        self.entries.get(&language).map_or(0, |m| {
            m.values().filter(|c| c.origin == Origin::Fallback).count()
        })
    }

    /// Counters and total size.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.values().map(HashMap::len).sum(),
        }
    }
}
