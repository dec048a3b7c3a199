//Copyright 2024 Felix Engl
//
//Licensed under the Apache License, Version 2.0 (the "License");
//you may not use this file except in compliance with the License.
//You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
//Unless required by applicable law or agreed to in writing, software
//distributed under the License is distributed on an "AS IS" BASIS,
//WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
//See the License for the specific language governing permissions and
//limitations under the License.

use std::str::FromStr;
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};

/// Parses a mode from its textual form.
pub fn parse_mode<T: FromStr>(option: &'static str, value: &str) -> Result<T, RecastError> {
    T::from_str(value).map_err(|_| RecastError::invalid_configuration(option, value))
}

/// Modes of recasts that can only drop or collect matches.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtractMode {
    #[default]
    #[strum(to_string = "remove")]
    Remove,
    #[strum(to_string = "extract")]
    Extract,
    #[strum(to_string = "extract_remove", serialize = "remove_extract")]
    #[serde(alias = "remove_extract")]
    ExtractRemove,
}

impl ExtractMode {
    pub fn output_kind(self) -> OutputKind {
        match self {
            ExtractMode::Remove => OutputKind::Text,
            ExtractMode::Extract => OutputKind::Extracted,
            ExtractMode::ExtractRemove => OutputKind::Paired,
        }
    }

    /// Applies the mode with [pattern], removal squashes the remaining whitespace.
    pub fn apply(self, pattern: &Regex, text: &str) -> Recasted {
        match self {
            ExtractMode::Remove => Recasted::Text(squash_whitespace(&pattern.replace_all(text, " "))),
            ExtractMode::Extract => Recasted::Extracted(find_all(pattern, text)),
            ExtractMode::ExtractRemove => {
                let (text, found) = split_matches(pattern, text);
                Recasted::Paired(squash_whitespace(&text), found)
            }
        }
    }
}

/// Modes of recasts that can also substitute matches.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplaceMode {
    #[default]
    #[strum(to_string = "remove")]
    Remove,
    #[strum(to_string = "replace")]
    Replace,
    #[strum(to_string = "extract")]
    Extract,
    #[strum(to_string = "extract_remove", serialize = "remove_extract")]
    #[serde(alias = "remove_extract")]
    ExtractRemove,
    #[strum(to_string = "extract_replace", serialize = "replace_extract")]
    #[serde(alias = "replace_extract")]
    ExtractReplace,
}

impl ReplaceMode {
    pub fn output_kind(self) -> OutputKind {
        match self {
            ReplaceMode::Remove | ReplaceMode::Replace => OutputKind::Text,
            ReplaceMode::Extract => OutputKind::Extracted,
            ReplaceMode::ExtractRemove | ReplaceMode::ExtractReplace => OutputKind::Paired,
        }
    }

    pub fn extracts(self) -> bool {
        matches!(self, ReplaceMode::Extract | ReplaceMode::ExtractRemove | ReplaceMode::ExtractReplace)
    }
}

/// Collects every match of [pattern].
pub fn find_all(pattern: &Regex, text: &str) -> Vec<String> {
    pattern.find_iter(text).map(|found| found.as_str().to_string()).collect()
}

/// Splits [text] into the text without matches and the matches, in one pass.
/// Every match is replaced by a single space.
pub fn split_matches(pattern: &Regex, text: &str) -> (String, Vec<String>) {
    let mut rest = String::with_capacity(text.len());
    let mut found = Vec::new();
    let mut last = 0;
    for hit in pattern.find_iter(text) {
        rest.push_str(&text[last..hit.start()]);
        rest.push(' ');
        found.push(hit.as_str().to_string());
        last = hit.end();
    }
    rest.push_str(&text[last..]);
    (rest, found)
}

/// Joins the whitespace separated words with single spaces.
pub fn squash_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod test {
    use regex::Regex;
    use crate::core::error::RecastError;
    use crate::features::mode::{parse_mode, split_matches, ExtractMode, ReplaceMode};

    #[test]
    fn modes_parse_with_aliases(){
        assert_eq!(ExtractMode::ExtractRemove, parse_mode::<ExtractMode>("process", "remove_extract").unwrap());
        assert_eq!(ReplaceMode::ExtractReplace, parse_mode::<ReplaceMode>("process", "replace_extract").unwrap());
        assert_eq!("extract_remove", ExtractMode::ExtractRemove.to_string());
        assert!(matches!(
            parse_mode::<ExtractMode>("process", "shred"),
            Err(RecastError::InvalidConfiguration { option: "process", .. })
        ));
    }

    #[test]
    fn split_matches_single_pass(){
        let pattern = Regex::new("[0-9]+").unwrap();
        let (rest, found) = split_matches(&pattern, "a1b22c");
        assert_eq!("a b c", rest);
        assert_eq!(vec!["1", "22"], found);
    }
}
