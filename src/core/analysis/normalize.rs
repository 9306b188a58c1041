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

use crate::core::analysis::{LanguageData, QueryToken};

// a stem shorter than this keeps its suffix: "is" must not become "i"
const MIN_STEM_LEN: usize = 3;

/// Turns a query word into a regex fragment.
///
/// The fragment is insensitive to diacritics (`welcome` matches `wélcöme`)
/// and to the inflection suffixes of the language (`reals` matches `real`).
/// Case is left to the caller's regex flags.
pub fn normalize_token(token: &str, language: &LanguageData) -> String {
    let folded: String = token
        .to_lowercase()
        .chars()
        .map(|c| language.base_char(c))
        .collect();
    let stem = strip_lexeme(&folded, language);

    let mut fragment = String::with_capacity(stem.len() * 4);
    let mut buf = [0u8; 4];
    for c in stem.chars() {
        match language.variants(c) {
            Some(variants) => {
                fragment.push('[');
                fragment.push(c);
                fragment.push_str(variants);
                fragment.push(']');
            }
            None => fragment.push_str(&regex::escape(c.encode_utf8(&mut buf))),
        }
    }

    if !language.lexemes.is_empty() {
        let suffixes: Vec<String> = language.lexemes.iter().map(|l| regex::escape(l)).collect();
        fragment.push_str("(?:");
        fragment.push_str(&suffixes.join("|"));
        fragment.push_str(")?");
    }

    fragment
}

/// Normalizes every non stop-word token in place.
pub fn normalize_tokens(tokens: &mut [QueryToken], language: &LanguageData) {
    for token in tokens.iter_mut().filter(|t| !t.stopword) {
        token.token = normalize_token(&token.original, language);
    }
}

fn strip_lexeme<'a>(word: &'a str, language: &LanguageData) -> &'a str {
    for suffix in language.lexemes {
        if word.ends_with(suffix) {
            let stem = &word[..word.len() - suffix.len()];
            if stem.chars().count() >= MIN_STEM_LEN {
                return stem;
            }
        }
    }
    word
}
