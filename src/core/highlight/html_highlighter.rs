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

use crate::core::highlight::{strip_markup, HighlightOptions, HtmlRange, TextHighlighter};
use crate::error::{ErrorKind, Result};

/// Highlighted HTML, and the highlighted text projection it was built from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlHighlight {
    pub html: String,
    pub text: String,
}

/// Highlights a query inside HTML without breaking its structure.
///
/// The HTML is stripped to text, the text is highlighted, and each match is
/// mapped back to one or more HTML ranges. The first range of a match is
/// opened with `before`, the following ones with `before_second`.
#[derive(Debug, Clone)]
pub struct HtmlHighlighter {
    text_highlighter: TextHighlighter,
}

impl HtmlHighlighter {
    pub fn new(options: &HighlightOptions) -> HtmlHighlighter {
        HtmlHighlighter {
            text_highlighter: TextHighlighter::new(options),
        }
    }

    pub fn highlight(&self, html: &str, query: &str) -> Result<HtmlHighlight> {
        let stripped = strip_markup(html)?;
        let highlighted = self.text_highlighter.highlight(&stripped.text, query)?;

        let ranges: Vec<Vec<HtmlRange>> = highlighted
            .indexes
            .iter()
            .map(|span| stripped.mappings.translate(span))
            .collect();
        let html = inject_markers(html, &ranges, self.text_highlighter.options())?;

        Ok(HtmlHighlight {
            html,
            text: highlighted.text,
        })
    }
}

/// Wraps every range of `html` in markers.
///
/// `ranges` holds the ranges of each match, in match order. They must be
/// sorted and disjoint, all offsets refer to the unmodified `html`.
pub fn inject_markers(
    html: &str,
    ranges: &[Vec<HtmlRange>],
    options: &HighlightOptions,
) -> Result<String> {
    let mut output = String::with_capacity(html.len());
    // bytes of `html` already copied to `output`
    let mut consumed = 0;

    for span_ranges in ranges {
        for (i, range) in span_ranges.iter().enumerate() {
            if range.start < consumed || range.end < range.start || range.end > html.len() {
                bail!(ErrorKind::IllegalArgument(format!(
                    "range [{}, {}) overlaps a previous range or leaves the markup",
                    range.start, range.end
                )));
            }

            let before = if i == 0 {
                options.before.as_str()
            } else {
                options.before_second()
            };

            output.push_str(&html[consumed..range.start]);
            output.push_str(before);
            output.push_str(&html[range.start..range.end]);
            output.push_str(&options.after);
            consumed = range.end;
        }
    }
    output.push_str(&html[consumed..]);

    debug!(
        "injected {} marker bytes into {} html bytes",
        output.len() - html.len(),
        html.len()
    );

    Ok(output)
}
