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

error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }
    errors {
        Markup(position: usize) {
            description("invalid HTML markup")
            display("Invalid HTML markup: tag opened at byte {} is never closed", position)
        }

        UnknownLanguage(code: String) {
            description("unknown language")
            display("Unknown language: '{}'", code)
        }

        IllegalArgument(desc: String) {
            description(desc)
            display("Illegal argument: {}", desc)
        }
    }

    foreign_links {
        RegexError(::regex::Error);
        SerdeJsonError(::serde_json::Error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_error_display() {
        let err: Error = ErrorKind::Markup(4).into();
        assert_eq!(
            format!("{}", err),
            "Invalid HTML markup: tag opened at byte 4 is never closed"
        );
    }

    #[test]
    fn unknown_language_display() {
        let err: Error = ErrorKind::UnknownLanguage("xx".into()).into();
        match err.kind() {
            ErrorKind::UnknownLanguage(code) => assert_eq!(code, "xx"),
            _ => panic!("unexpected error kind"),
        }
    }

    #[test]
    fn foreign_errors_convert() {
        let err: Error = ::regex::Regex::new("(").unwrap_err().into();
        match err.kind() {
            ErrorKind::RegexError(_) => {}
            _ => panic!("unexpected error kind"),
        }

        let err: Error = ::serde_json::from_str::<u32>("x").unwrap_err().into();
        match err.kind() {
            ErrorKind::SerdeJsonError(_) => {}
            _ => panic!("unexpected error kind"),
        }
    }
}
