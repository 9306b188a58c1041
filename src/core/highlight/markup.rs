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

use crate::core::highlight::MatchSpan;
use crate::error::{ErrorKind, Result};

/// Elements whose closing tag does not separate the text around it.
pub const INLINE_ELEMENTS: &[&str] = &[
    "b", "big", "i", "small", "tt", "abbr", "acronym", "cite", "code", "dfn", "em", "kbd",
    "strong", "samp", "var", "a", "bdo", "br", "img", "map", "object", "q", "script", "span",
    "sub", "sup", "button", "input", "label", "select", "textarea",
];

/// Appended to the text after the closing tag of a block element, so that
/// `Foo</div><div>Bar` reads `Foo Bar` rather than `FooBar`.
pub const BLOCK_SEPARATOR: char = ' ';

pub fn is_inline_element(name: &str) -> bool {
    INLINE_ELEMENTS.contains(&name)
}

/// Where one tag of the HTML went in the text projection.
///
/// The tag occupies `html_start..html_end` in the HTML and turns into
/// `text_offset - separator..text_offset` in the text: nothing, or a single
/// `BLOCK_SEPARATOR`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagMapping {
    pub text_offset: usize,
    pub html_start: usize,
    pub html_end: usize,
    pub closing: bool,
    pub separator: bool,
    pub name: String,
}

impl TagMapping {
    pub fn html_len(&self) -> usize {
        self.html_end - self.html_start
    }

    /// How much further HTML offsets are ahead of text offsets past this tag.
    pub fn delta(&self) -> usize {
        self.html_len() - self.separator as usize
    }

    fn closes(&self, opening: &TagMapping) -> bool {
        self.closing && self.name == opening.name
    }
}

/// A contiguous piece of HTML to wrap in one pair of markers.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct HtmlRange {
    pub start: usize,
    pub end: usize,
}

impl HtmlRange {
    pub fn new(start: usize, end: usize) -> HtmlRange {
        HtmlRange { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }
}

/// Tag mappings in document order, hence sorted by `text_offset`.
#[derive(Debug, Clone, Default)]
pub struct TagMappings {
    mappings: Vec<TagMapping>,
}

impl TagMappings {
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TagMapping> {
        self.mappings.get(index)
    }

    /// Maps a span of the text projection to the HTML ranges to highlight.
    ///
    /// Tags sitting right at the start of the span belong to it, tags right
    /// at its end don't. An element opened and closed inside the span is
    /// wrapped whole. Every other tag inside the span splits it, so markers
    /// never straddle an element boundary.
    pub fn translate(&self, span: &MatchSpan) -> Vec<HtmlRange> {
        let mut ranges = Vec::new();
        let mut delta = 0;
        let mut i = 0;

        while let Some(mapping) = self.mappings.get(i) {
            if mapping.text_offset >= span.start_index {
                break;
            }
            delta += mapping.delta();
            i += 1;
        }
        let mut range_start = span.start_index + delta;

        while let Some(mapping) = self.mappings.get(i) {
            if mapping.text_offset >= span.end_index {
                break;
            }

            if !mapping.closing {
                if let Some(next) = self.mappings.get(i + 1) {
                    if next.closes(mapping) && next.text_offset <= span.end_index {
                        trace!(
                            "<{}> nested in span [{}, {})",
                            mapping.name,
                            span.start_index,
                            span.end_index
                        );
                        delta += mapping.delta() + next.delta();
                        i += 2;
                        continue;
                    }
                }
            }

            let range = HtmlRange::new(range_start, mapping.html_start);
            if !range.is_empty() {
                ranges.push(range);
            }
            range_start = mapping.html_end;
            delta += mapping.delta();
            i += 1;
        }

        let range = HtmlRange::new(range_start, span.end_index + delta);
        if !range.is_empty() {
            ranges.push(range);
        }

        ranges
    }
}

impl From<Vec<TagMapping>> for TagMappings {
    fn from(mappings: Vec<TagMapping>) -> TagMappings {
        TagMappings { mappings }
    }
}

/// HTML reduced to its text, with the way back.
#[derive(Debug, Clone)]
pub struct StrippedMarkup {
    pub text: String,
    pub mappings: TagMappings,
}

/// Removes every `<...>` tag from `html`.
///
/// This is a bracket scanner, not a parser: a tag ends at the first `>`
/// after its `<`, attributes and comments included. A `<` without a
/// following `>` is an error.
pub fn strip_markup(html: &str) -> Result<StrippedMarkup> {
    let mut text = String::with_capacity(html.len());
    let mut mappings = Vec::new();
    let mut cursor = 0;

    while let Some(offset) = html[cursor..].find('<') {
        let tag_start = cursor + offset;
        let tag_end = match html[tag_start..].find('>') {
            Some(offset) => tag_start + offset + 1,
            None => bail!(ErrorKind::Markup(tag_start)),
        };

        text.push_str(&html[cursor..tag_start]);

        let tag = &html[tag_start + 1..tag_end - 1];
        let closing = tag.starts_with('/');
        let name = tag_name(tag);

        let separator = closing && !is_inline_element(name);
        if separator {
            text.push(BLOCK_SEPARATOR);
        }

        mappings.push(TagMapping {
            text_offset: text.len(),
            html_start: tag_start,
            html_end: tag_end,
            closing,
            separator,
            name: name.to_string(),
        });
        cursor = tag_end;
    }
    text.push_str(&html[cursor..]);

    debug!(
        "stripped {} tags, {} html bytes to {} text bytes",
        mappings.len(),
        html.len(),
        text.len()
    );

    Ok(StrippedMarkup {
        text,
        mappings: mappings.into(),
    })
}

// `/div`, `div class="x"`, `br/` -> `div`, `div`, `br`
fn tag_name(tag: &str) -> &str {
    let tag = tag.strip_prefix('/').unwrap_or(tag);
    let end = tag
        .find(|c: char| c.is_whitespace() || c == '/')
        .unwrap_or(tag.len());
    &tag[..end]
}
