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

//! Highlights the words of a search query in plain text or in HTML.
//!
//! Queries are matched word by word, tolerating reordering, accents and
//! plural forms, and matches separated only by stop-words are merged. In HTML
//! the markers never straddle an element boundary: a match crossing one is
//! split, and the continuation pieces open with `before_second`.
//!
//! ```
//! use query_highlight::{highlight_html, highlight_text, HighlightOptions};
//!
//! let options = HighlightOptions::new().with_markers("*", "*");
//! let result = highlight_text("Hello and welcome to the real world", "welcome real world", &options).unwrap();
//! assert_eq!(result.text, "Hello and *welcome to the real world*");
//!
//! let result = highlight_html("Eat <b>drink</b> and be merry", "eat merry", &options).unwrap();
//! assert_eq!(result.html, "*Eat* <b>drink</b> and be *merry*");
//! ```

#[macro_use]
extern crate error_chain;
#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate log;
extern crate regex;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate serde_json;

pub mod core;
pub mod error;

pub use crate::core::analysis::{analyze_query, resolve_language, AnalyzedQuery, LanguageData};
pub use crate::core::highlight::{
    HighlightOptions, HtmlHighlight, HtmlHighlighter, HtmlRange, MatchSpan, MergePolicy,
    TextHighlight, TextHighlighter,
};

use crate::error::Result;

/// Highlights `query` in plain `text`.
pub fn highlight_text(text: &str, query: &str, options: &HighlightOptions) -> Result<TextHighlight> {
    TextHighlighter::new(options).highlight(text, query)
}

/// Highlights `query` in `html`, keeping the markup valid.
pub fn highlight_html(html: &str, query: &str, options: &HighlightOptions) -> Result<HtmlHighlight> {
    HtmlHighlighter::new(options).highlight(html, query)
}
