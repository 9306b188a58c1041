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

use crate::core::analysis::{sanitize_language, DEFAULT_LANGUAGE};
use crate::error::Result;

pub const DEFAULT_BEFORE: &str = "<strong>";
pub const DEFAULT_AFTER: &str = "</strong>";

/// How many stop-word bridged pairs of matches are merged into one highlight.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// Only the first bridgeable pair in the text.
    First,
    /// Keep merging until no bridgeable pair is left.
    All,
}

impl Default for MergePolicy {
    fn default() -> MergePolicy {
        MergePolicy::First
    }
}

/// Options shared by the text and the HTML highlighter.
///
/// Missing fields of a JSON config fall back to the defaults, so
/// `{"before": "<em>", "after": "</em>"}` is a complete config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HighlightOptions {
    pub before: String,
    pub after: String,
    /// Opening marker of the continuation pieces of a highlight split by
    /// markup. Falls back to `before`.
    pub before_second: Option<String>,
    pub language: String,
    pub merge_policy: MergePolicy,
}

impl Default for HighlightOptions {
    fn default() -> HighlightOptions {
        HighlightOptions {
            before: DEFAULT_BEFORE.to_string(),
            after: DEFAULT_AFTER.to_string(),
            before_second: None,
            language: DEFAULT_LANGUAGE.to_string(),
            merge_policy: MergePolicy::default(),
        }
    }
}

impl HighlightOptions {
    pub fn new() -> HighlightOptions {
        HighlightOptions::default()
    }

    pub fn from_json(config: &str) -> Result<HighlightOptions> {
        let options: HighlightOptions = serde_json::from_str(config)?;
        Ok(options.merge_defaults())
    }

    pub fn with_markers(mut self, before: &str, after: &str) -> HighlightOptions {
        self.before = before.to_string();
        self.after = after.to_string();
        self
    }

    pub fn with_before_second(mut self, before_second: &str) -> HighlightOptions {
        self.before_second = Some(before_second.to_string());
        self
    }

    pub fn with_language(mut self, language: &str) -> HighlightOptions {
        self.language = language.to_string();
        self
    }

    pub fn with_merge_policy(mut self, merge_policy: MergePolicy) -> HighlightOptions {
        self.merge_policy = merge_policy;
        self
    }

    /// Fills empty markers with the defaults, resolves `before_second` and
    /// sanitizes the language code.
    pub fn merge_defaults(mut self) -> HighlightOptions {
        if self.before.is_empty() {
            self.before = DEFAULT_BEFORE.to_string();
        }
        if self.after.is_empty() {
            self.after = DEFAULT_AFTER.to_string();
        }
        match self.before_second {
            Some(ref s) if !s.is_empty() => {}
            _ => self.before_second = Some(self.before.clone()),
        }
        self.language = if self.language.is_empty() {
            DEFAULT_LANGUAGE.to_string()
        } else {
            sanitize_language(&self.language)
        };
        self
    }

    pub fn before_second(&self) -> &str {
        match self.before_second {
            Some(ref s) if !s.is_empty() => s,
            _ => &self.before,
        }
    }
}
