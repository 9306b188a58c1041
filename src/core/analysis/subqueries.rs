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

use crate::core::analysis::QueryToken;

const TOKEN_SEPARATOR: &str = r"\s+";

/// Expands query tokens into regex subqueries, most specific first.
///
/// Every contiguous run of tokens becomes one subquery. Longer runs come
/// before shorter ones so a phrase wins over the words it is made of; runs of
/// the same length keep query order. A run may contain stop-words but never
/// starts or ends with one.
pub fn generate_subqueries(tokens: &[QueryToken]) -> Vec<String> {
    let fragments: Vec<String> = tokens
        .iter()
        .map(|t| {
            if t.stopword {
                regex::escape(&t.token)
            } else {
                t.token.clone()
            }
        })
        .collect();

    let mut subqueries: Vec<String> = Vec::new();
    for len in (1..=tokens.len()).rev() {
        for start in 0..=tokens.len() - len {
            let end = start + len;
            if tokens[start].stopword || tokens[end - 1].stopword {
                continue;
            }

            let subquery = fragments[start..end].join(TOKEN_SEPARATOR);
            if !subqueries.contains(&subquery) {
                subqueries.push(subquery);
            }
        }
    }

    subqueries
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token(word: &str, stopword: bool) -> QueryToken {
        QueryToken::new(word.to_string(), stopword)
    }

    #[test]
    fn longest_runs_first() {
        let tokens = vec![token("a", false), token("b", false), token("c", false)];
        let subqueries = generate_subqueries(&tokens);
        assert_eq!(
            subqueries,
            vec![
                r"a\s+b\s+c",
                r"a\s+b",
                r"b\s+c",
                "a",
                "b",
                "c",
            ]
        );
    }

    #[test]
    fn stopwords_only_inside_runs() {
        let tokens = vec![
            token("welcome", false),
            token("to", true),
            token("world", false),
        ];
        let subqueries = generate_subqueries(&tokens);
        assert_eq!(subqueries, vec![r"welcome\s+to\s+world", "welcome", "world"]);
    }

    #[test]
    fn duplicates_are_dropped() {
        let tokens = vec![token("go", false), token("go", false)];
        assert_eq!(generate_subqueries(&tokens), vec![r"go\s+go", "go"]);
    }

    #[test]
    fn no_tokens_no_subqueries() {
        assert!(generate_subqueries(&[]).is_empty());
        assert!(generate_subqueries(&[token("the", true)]).is_empty());
    }
}
