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

mod language;

pub use self::language::*;

mod query_tokenizer;

pub use self::query_tokenizer::*;

mod normalize;

pub use self::normalize::*;

mod subqueries;

pub use self::subqueries::*;

use crate::error::Result;

/// A query broken down into the pieces the highlighters match with.
#[derive(Debug)]
pub struct AnalyzedQuery {
    pub language: &'static LanguageData,
    pub tokens: Vec<QueryToken>,
    /// Regex fragments, most specific first.
    pub subqueries: Vec<String>,
}

/// Resolves the language, then tokenizes, normalizes and expands the query.
pub fn analyze_query(query: &str, language_code: &str) -> Result<AnalyzedQuery> {
    let language = resolve_language(language_code)?;

    let mut tokens = tokenize_query(query, language);
    normalize_tokens(&mut tokens, language);
    let subqueries = generate_subqueries(&tokens);

    Ok(AnalyzedQuery {
        language,
        tokens,
        subqueries,
    })
}
