// Copyright 2019 Zhizhesihai (Beijing) Technology Limited.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::error::{ErrorKind, Result};

use std::collections::HashMap;

pub const DEFAULT_LANGUAGE: &str = "en";

// Latin letters, digits and the Latin-1 accented block, minus × and ÷.
const LATIN_ALPHA_RANGE: &str = "a-zA-Z0-9À-ÖØ-öø-ÿ";

const LATIN_CHAR_VARIANTS: &[(char, &str)] = &[
    ('a', "àáâãäå"),
    ('c', "ç"),
    ('e', "èéêë"),
    ('i', "ìíîï"),
    ('n', "ñ"),
    ('o', "òóôõöø"),
    ('u', "ùúûü"),
    ('y', "ýÿ"),
];

const ENGLISH_STOPWORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

const FRENCH_STOPWORDS: &[&str] = &[
    "à", "au", "aux", "avec", "ce", "ces", "d", "dans", "de", "des", "du", "elle", "en", "et",
    "il", "l", "la", "le", "les", "leur", "lui", "ma", "mais", "me", "mes", "mon", "ne", "ni",
    "nos", "notre", "ou", "où", "par", "pas", "pour", "qu", "que", "qui", "sa", "se", "ses",
    "son", "sur", "ta", "te", "tes", "ton", "un", "une", "vos", "votre",
];

/// Linguistic resources consumed by the highlighters for one language.
#[derive(Debug)]
pub struct LanguageData {
    pub code: &'static str,
    /// Body of a regex character class matching the letters of a word.
    /// Anything outside this class is a word boundary.
    pub alpha_range: &'static str,
    /// Connective words; never matched alone, but may bridge two matches.
    pub stopwords: &'static [&'static str],
    /// Inflection suffixes, longest first.
    pub lexemes: &'static [&'static str],
    /// Base letter to its accented forms.
    pub char_variants: &'static [(char, &'static str)],
}

impl LanguageData {
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.iter().any(|w| *w == word)
    }

    pub fn variants(&self, c: char) -> Option<&'static str> {
        self.char_variants
            .iter()
            .find(|(base, _)| *base == c)
            .map(|(_, variants)| *variants)
    }

    /// Maps an accented letter back to its base letter, if it has one.
    pub fn base_char(&self, c: char) -> char {
        self.char_variants
            .iter()
            .find(|(_, variants)| variants.contains(c))
            .map(|(base, _)| *base)
            .unwrap_or(c)
    }
}

lazy_static! {
    static ref LANGUAGES: HashMap<&'static str, LanguageData> = {
        let mut languages = HashMap::new();
        languages.insert(
            "en",
            LanguageData {
                code: "en",
                alpha_range: LATIN_ALPHA_RANGE,
                stopwords: ENGLISH_STOPWORDS,
                lexemes: &["es", "s"],
                char_variants: LATIN_CHAR_VARIANTS,
            },
        );
        languages.insert(
            "fr",
            LanguageData {
                code: "fr",
                alpha_range: "a-zA-Z0-9À-ÖØ-öø-ÿœŒæÆ",
                stopwords: FRENCH_STOPWORDS,
                lexemes: &["es", "s", "x"],
                char_variants: LATIN_CHAR_VARIANTS,
            },
        );
        languages
    };
}

/// Lowercases the code and drops everything outside `[a-z]`.
pub fn sanitize_language(code: &str) -> String {
    code.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase())
        .collect()
}

/// Looks up the resources of a language.
///
/// An unknown code is an error rather than a silent fallback to the default
/// language: the wrong alphabet or stop-word list would skew every match.
pub fn resolve_language(code: &str) -> Result<&'static LanguageData> {
    let sanitized = sanitize_language(code);
    match LANGUAGES.get(sanitized.as_str()) {
        Some(data) => Ok(data),
        None => bail!(ErrorKind::UnknownLanguage(code.to_string())),
    }
}
