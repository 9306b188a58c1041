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

use crate::core::analysis::LanguageData;

/// One word of a search query.
///
/// `token` holds the regex fragment used for matching once the token has been
/// normalized; stop-words are never normalized and keep `token == original`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryToken {
    pub original: String,
    pub token: String,
    pub stopword: bool,
}

impl QueryToken {
    pub fn new(word: String, stopword: bool) -> QueryToken {
        QueryToken {
            original: word.clone(),
            token: word,
            stopword,
        }
    }
}

/// Splits a query into lowercased words at every non alphanumeric char.
pub fn tokenize_query(query: &str, language: &LanguageData) -> Vec<QueryToken> {
    query
        .split(|c: char| !c.is_alphanumeric())
        .filter(|word| !word.is_empty())
        .map(|word| {
            let word = word.to_lowercase();
            let stopword = language.is_stopword(&word);
            QueryToken::new(word, stopword)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::analysis::resolve_language;

    #[test]
    fn tokenize_flags_stopwords() {
        let en = resolve_language("en").unwrap();
        let tokens = tokenize_query("Welcome to the  real-world!", en);
        let words: Vec<_> = tokens.iter().map(|t| t.original.as_str()).collect();
        assert_eq!(words, vec!["welcome", "to", "the", "real", "world"]);

        let stopwords: Vec<_> = tokens.iter().map(|t| t.stopword).collect();
        assert_eq!(stopwords, vec![false, true, true, false, false]);
        assert!(tokens.iter().all(|t| t.token == t.original));
    }

    #[test]
    fn tokenize_empty_query() {
        let en = resolve_language("en").unwrap();
        assert!(tokenize_query("", en).is_empty());
        assert!(tokenize_query("  ,;- ", en).is_empty());
    }

    #[test]
    fn tokenize_keeps_accents() {
        let fr = resolve_language("fr").unwrap();
        let tokens = tokenize_query("Où est l'Été", fr);
        let words: Vec<_> = tokens.iter().map(|t| t.original.as_str()).collect();
        assert_eq!(words, vec!["où", "est", "l", "été"]);
        assert!(tokens[0].stopword);
        assert!(!tokens[1].stopword);
        assert!(tokens[2].stopword);
    }
}
