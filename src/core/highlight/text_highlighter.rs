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

use crate::core::analysis::analyze_query;
use crate::core::highlight::{HighlightOptions, MergePolicy};
use crate::error::Result;

use regex::{Regex, RegexBuilder};

/// A highlighted region of the input text.
///
/// Offsets are byte offsets into the text that was highlighted, before any
/// marker was inserted: `&text[start_index..end_index] == content`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSpan {
    pub start_index: usize,
    pub end_index: usize,
    pub content: String,
}

/// Highlighted text, and the spans sorted by `start_index`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextHighlight {
    pub text: String,
    pub indexes: Vec<MatchSpan>,
}

// A matched region, in input coordinates.
#[derive(Debug, Copy, Clone)]
struct Placeholder {
    start: usize,
    end: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Piece {
    Text { start: usize, end: usize },
    Placeholder(usize),
}

/// The input text cut into untouched pieces and placeholders.
///
/// Subqueries only ever search the `Text` pieces, so a region claimed by a
/// more specific subquery can't be matched again. Nothing is written until
/// `resolve`, hence no placeholder syntax can collide with the input.
struct PlaceholderPass<'a> {
    text: &'a str,
    pieces: Vec<Piece>,
    placeholders: Vec<Placeholder>,
}

impl<'a> PlaceholderPass<'a> {
    fn new(text: &'a str) -> PlaceholderPass<'a> {
        let mut pieces = Vec::new();
        if !text.is_empty() {
            pieces.push(Piece::Text {
                start: 0,
                end: text.len(),
            });
        }

        PlaceholderPass {
            text,
            pieces,
            placeholders: vec![],
        }
    }

    fn push_placeholder(&mut self, start: usize, end: usize) -> usize {
        self.placeholders.push(Placeholder { start, end });
        self.placeholders.len() - 1
    }

    /// Replaces the first match of `pattern`'s second group with a placeholder.
    /// The boundary chars around it stay in the neighbouring text pieces.
    fn replace_first(&mut self, pattern: &Regex) -> bool {
        for i in 0..self.pieces.len() {
            let (start, end) = match self.pieces[i] {
                Piece::Text { start, end } => (start, end),
                Piece::Placeholder(_) => continue,
            };

            let found = pattern
                .captures(&self.text[start..end])
                .and_then(|caps| caps.get(2))
                .filter(|m| !m.as_str().is_empty())
                .map(|m| (start + m.start(), start + m.end()));

            if let Some((match_start, match_end)) = found {
                let id = self.push_placeholder(match_start, match_end);
                trace!(
                    "placeholder {} for [{}, {}) '{}'",
                    id,
                    match_start,
                    match_end,
                    &self.text[match_start..match_end]
                );

                let mut replacement = Vec::with_capacity(3);
                if start < match_start {
                    replacement.push(Piece::Text {
                        start,
                        end: match_start,
                    });
                }
                replacement.push(Piece::Placeholder(id));
                if match_end < end {
                    replacement.push(Piece::Text {
                        start: match_end,
                        end,
                    });
                }
                self.pieces.splice(i..=i, replacement);
                return true;
            }
        }

        false
    }

    /// Merges the first two placeholders separated only by whitespace and
    /// stop-words into one placeholder covering both and the gap.
    fn merge_first(&mut self, bridge: &Regex) -> bool {
        for i in 0..self.pieces.len() {
            let first = match self.pieces[i] {
                Piece::Placeholder(id) => id,
                Piece::Text { .. } => continue,
            };

            let last_index = match self.pieces.get(i + 1) {
                Some(&Piece::Placeholder(_)) => i + 1,
                Some(&Piece::Text { start, end }) if bridge.is_match(&self.text[start..end]) => {
                    i + 2
                }
                _ => continue,
            };
            let last = match self.pieces.get(last_index) {
                Some(&Piece::Placeholder(id)) => id,
                _ => continue,
            };

            let start = self.placeholders[first].start;
            let end = self.placeholders[last].end;
            let id = self.push_placeholder(start, end);
            debug!("merged placeholders {} and {} into {}", first, last, id);

            self.pieces.splice(i..=last_index, Some(Piece::Placeholder(id)));
            return true;
        }

        false
    }

    fn resolve(self, before: &str, after: &str) -> TextHighlight {
        let mut text = String::with_capacity(self.text.len());
        let mut indexes = vec![];

        for piece in &self.pieces {
            match *piece {
                Piece::Text { start, end } => text.push_str(&self.text[start..end]),
                Piece::Placeholder(id) => {
                    let placeholder = self.placeholders[id];
                    let content = &self.text[placeholder.start..placeholder.end];
                    text.push_str(before);
                    text.push_str(content);
                    text.push_str(after);
                    indexes.push(MatchSpan {
                        start_index: placeholder.start,
                        end_index: placeholder.end,
                        content: content.to_string(),
                    });
                }
            }
        }

        TextHighlight { text, indexes }
    }
}

/// Highlights the words of a query inside plain text.
///
/// Each subquery highlights at most its first occurrence in the text. The
/// whole text is still searched, so a less specific subquery can match an
/// occurrence further away.
#[derive(Debug, Clone)]
pub struct TextHighlighter {
    options: HighlightOptions,
}

impl TextHighlighter {
    pub fn new(options: &HighlightOptions) -> TextHighlighter {
        TextHighlighter {
            options: options.clone().merge_defaults(),
        }
    }

    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    pub fn highlight(&self, text: &str, query: &str) -> Result<TextHighlight> {
        let analyzed = analyze_query(query, &self.options.language)?;
        debug!(
            "highlighting {} subqueries over {} bytes",
            analyzed.subqueries.len(),
            text.len()
        );

        let mut pass = PlaceholderPass::new(text);
        for subquery in &analyzed.subqueries {
            let pattern = subquery_pattern(analyzed.language.alpha_range, subquery)?;
            pass.replace_first(&pattern);
        }

        let bridge = bridge_pattern(analyzed.language.stopwords)?;
        match self.options.merge_policy {
            MergePolicy::First => {
                pass.merge_first(&bridge);
            }
            MergePolicy::All => while pass.merge_first(&bridge) {},
        }

        Ok(pass.resolve(&self.options.before, &self.options.after))
    }
}

// (boundary or start)(subquery)(boundary or end)
fn subquery_pattern(alpha_range: &str, subquery: &str) -> Result<Regex> {
    let pattern = format!("([^{0}]|^)({1})([^{0}]|$)", alpha_range, subquery);
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

// Matches a whole gap between two placeholders made of stop-words and
// single whitespace chars.
fn bridge_pattern(stopwords: &[&str]) -> Result<Regex> {
    let pattern = if stopwords.is_empty() {
        r"^\s?$".to_string()
    } else {
        let words: Vec<String> = stopwords.iter().map(|w| regex::escape(w)).collect();
        format!(r"^\s?(?:(?:{})\s?)*$", words.join("|"))
    };
    Ok(RegexBuilder::new(&pattern).case_insensitive(true).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NEO: &str = "Hello and welcome to the real world, Neo";

    fn stars() -> HighlightOptions {
        HighlightOptions::new().with_markers("*", "*")
    }

    fn highlight(text: &str, query: &str) -> TextHighlight {
        TextHighlighter::new(&stars()).highlight(text, query).unwrap()
    }

    fn assert_spans_valid(text: &str, result: &TextHighlight) {
        let mut last_end = 0;
        for span in &result.indexes {
            assert!(span.start_index <= span.end_index);
            assert!(span.end_index <= text.len());
            assert!(last_end <= span.start_index, "spans overlap or unsorted");
            assert_eq!(&text[span.start_index..span.end_index], span.content);
            last_end = span.end_index;
        }
    }

    #[test]
    fn non_matching_text_unchanged() {
        let result = highlight(NEO, "non matching query");
        assert_eq!(result.text, NEO);
        assert!(result.indexes.is_empty());
    }

    #[test]
    fn highlight_phrase() {
        let result = highlight(NEO, "welcome to the real world");
        assert_eq!(result.text, "Hello and *welcome to the real world*, Neo");
        assert_eq!(
            result.indexes,
            vec![MatchSpan {
                start_index: 10,
                end_index: 35,
                content: "welcome to the real world".to_string(),
            }]
        );
    }

    #[test]
    fn case_insensitive_to_text() {
        let result = highlight(
            "Hello and WELCOME to the real world, Neo",
            "welcome to the real world",
        );
        assert_eq!(result.text, "Hello and *WELCOME to the real world*, Neo");
    }

    #[test]
    fn case_insensitive_to_query() {
        let result = highlight(NEO, "WELCOME to the real world");
        assert_eq!(result.text, "Hello and *welcome to the real world*, Neo");
    }

    #[test]
    fn unicode_mapping() {
        let text = "Hello and wélcöme to the real world, Neo";
        let result = highlight(text, "WELCOME to the real world");
        assert_eq!(result.text, "Hello and *wélcöme to the real world*, Neo");
        assert_spans_valid(text, &result);
    }

    #[test]
    fn standard_lexemes() {
        let result = highlight(NEO, "welcome to the reals worlds");
        assert_eq!(result.text, "Hello and *welcome to the real world*, Neo");
    }

    #[test]
    fn non_contiguous_query_is_split() {
        let result = highlight(NEO, "hello world");
        assert_eq!(result.text, "*Hello* and welcome to the real *world*, Neo");
        assert_eq!(result.indexes.len(), 2);
        assert_eq!(result.indexes[0].content, "Hello");
        assert_eq!(result.indexes[1].content, "world");
        assert_spans_valid(NEO, &result);
    }

    #[test]
    fn stopwords_bridge_matches() {
        let result = highlight(NEO, "welcome real world");
        assert_eq!(result.text, "Hello and *welcome to the real world*, Neo");
        assert_eq!(result.indexes.len(), 1);
        assert_eq!(result.indexes[0].content, "welcome to the real world");
    }

    #[test]
    fn empty_inputs() {
        let result = highlight(NEO, "");
        assert_eq!(result.text, NEO);
        assert!(result.indexes.is_empty());

        let result = highlight("", "hello");
        assert_eq!(result.text, "");
        assert!(result.indexes.is_empty());

        let result = highlight(NEO, "the to and");
        assert_eq!(result.text, NEO);
    }

    #[test]
    fn first_occurrence_only() {
        let text = "dog eats dog food, dog sleeps";
        let result = highlight(text, "dog");
        assert_eq!(result.text, "*dog* eats dog food, dog sleeps");
        assert_eq!(result.indexes.len(), 1);
    }

    #[test]
    fn specific_subquery_wins() {
        let text = "real world and another world";
        let result = highlight(text, "real world");
        assert_eq!(result.text, "*real world* and another *world*");
        assert_spans_valid(text, &result);
    }

    #[test]
    fn word_boundaries_respected() {
        let result = highlight("worldwide and underworld", "world");
        assert_eq!(result.text, "worldwide and underworld");
        assert!(result.indexes.is_empty());
    }

    #[test]
    fn placeholder_like_input_is_left_alone() {
        let text = "@0@ hello @1@";
        let result = highlight(text, "hello");
        assert_eq!(result.text, "@0@ *hello* @1@");
        assert_spans_valid(text, &result);
    }

    #[test]
    fn merge_policies() {
        let text = "red and blue cars, green and white boats";

        let result = highlight(text, "red blue green white");
        assert_eq!(
            result.text,
            "*red and blue* cars, *green* and *white* boats"
        );
        assert_spans_valid(text, &result);

        let options = stars().with_merge_policy(MergePolicy::All);
        let result = TextHighlighter::new(&options)
            .highlight(text, "red blue green white")
            .unwrap();
        assert_eq!(result.text, "*red and blue* cars, *green and white* boats");
        assert_eq!(result.indexes.len(), 2);
        assert_spans_valid(text, &result);
    }

    #[test]
    fn multibyte_offsets() {
        let text = "Où est le café ? Le café est là";
        let options = stars().with_language("fr");
        let result = TextHighlighter::new(&options)
            .highlight(text, "cafe")
            .unwrap();
        assert_eq!(result.text, "Où est le *café* ? Le café est là");
        assert_eq!(result.indexes[0].start_index, "Où est le ".len());
        assert_spans_valid(text, &result);
    }

    #[test]
    fn default_markers() {
        let result = TextHighlighter::new(&HighlightOptions::default())
            .highlight(NEO, "neo")
            .unwrap();
        assert_eq!(
            result.text,
            "Hello and welcome to the real world, <strong>Neo</strong>"
        );
    }

    #[test]
    fn unknown_language_fails() {
        let options = stars().with_language("zz");
        assert!(TextHighlighter::new(&options).highlight(NEO, "neo").is_err());
    }
}
