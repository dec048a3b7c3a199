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

use std::borrow::Cow;
use std::sync::LazyLock;
use itertools::Itertools;
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;
use crate::features::mode::{find_all, ReplaceMode};

static NUMBER: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9]+").unwrap());

const ONES: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen", "nineteen",
];

const TENS: [&str; 10] = [
    "", "", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [&str; 7] = [
    "", "thousand", "million", "billion", "trillion", "quadrillion", "quintillion",
];

/// The thousands separator that is dropped between digits before processing.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Separator {
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = ".")]
    Dot,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Comma => ',',
            Separator::Dot => '.',
        }
    }
}

impl TryFrom<&str> for Separator {
    type Error = RecastError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "," => Ok(Separator::Comma),
            "." => Ok(Separator::Dot),
            other => Err(RecastError::invalid_configuration("separator", other)),
        }
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Drops [separator] wherever it sits between two word characters.
pub fn strip_separator(text: &str, separator: char) -> String {
    let chars = text.chars().collect_vec();
    let mut result = String::with_capacity(text.len());
    for (position, &c) in chars.iter().enumerate() {
        if c == separator && position > 0 {
            let before = chars[position - 1];
            if let Some(&after) = chars.get(position + 1) {
                if is_word_char(before) && is_word_char(after) {
                    continue;
                }
            }
        }
        result.push(c);
    }
    result
}

fn below_hundred(value: u64) -> String {
    if value < 20 {
        ONES[value as usize].to_string()
    } else if value % 10 == 0 {
        TENS[(value / 10) as usize].to_string()
    } else {
        format!("{}-{}", TENS[(value / 10) as usize], ONES[(value % 10) as usize])
    }
}

fn below_thousand(value: u64) -> String {
    let hundreds = value / 100;
    let rest = value % 100;
    match (hundreds, rest) {
        (0, rest) => below_hundred(rest),
        (hundreds, 0) => format!("{} hundred", ONES[hundreds as usize]),
        (hundreds, rest) => format!("{} hundred and {}", ONES[hundreds as usize], below_hundred(rest)),
    }
}

/// Spells [value] in british english, e.g. `1234` is
/// `one thousand, two hundred and thirty-four`.
pub fn number_to_words(value: u64) -> String {
    if value == 0 {
        return ONES[0].to_string();
    }
    let mut groups = Vec::new();
    let mut rest = value;
    while rest > 0 {
        groups.push(rest % 1000);
        rest /= 1000;
    }
    let mut result = String::new();
    for (scale, &group) in groups.iter().enumerate().rev() {
        if group == 0 {
            continue;
        }
        if !result.is_empty() {
            if scale == 0 && group < 100 {
                result.push_str(" and ");
            } else {
                result.push_str(", ");
            }
        }
        result.push_str(&below_thousand(group));
        if scale > 0 {
            result.push(' ');
            result.push_str(SCALES[scale]);
        }
    }
    result
}

/// Spells a run of digits, runs that do not fit into 64 bit are spelled digit by digit.
fn spell(digits: &str) -> String {
    match digits.parse::<u64>() {
        Ok(value) => number_to_words(value),
        Err(_) => digits
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|digit| ONES[digit as usize])
            .join(" "),
    }
}

/// Substitutes every number and collects the originals in the same pass.
fn substitute_collecting(text: &str, substitute: impl Fn(&str) -> String) -> (String, Vec<String>) {
    let mut found = Vec::new();
    let text = NUMBER
        .replace_all(text, |captures: &Captures| {
            found.push(captures[0].to_string());
            substitute(&captures[0])
        })
        .into_owned();
    (text, found)
}

/// Removes, spells or extracts numbers.
#[derive(Debug, Copy, Clone, Default)]
pub struct NumbersRecast {
    mode: ReplaceMode,
    separator: Option<Separator>,
}

impl NumbersRecast {
    pub fn new(mode: ReplaceMode) -> Self {
        Self { mode, separator: None }
    }

    pub fn with_separator(mut self, separator: Option<Separator>) -> Self {
        self.separator = separator;
        self
    }
}

impl TextRecast for NumbersRecast {
    fn name(&self) -> &'static str {
        "NumbersRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Owned(self.mode.to_string())
    }

    fn output_kind(&self) -> OutputKind {
        self.mode.output_kind()
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let text = match self.separator {
            Some(separator) => Cow::Owned(strip_separator(text, separator.as_char())),
            None => Cow::Borrowed(text),
        };
        let recasted = match self.mode {
            ReplaceMode::Remove => Recasted::Text(NUMBER.replace_all(&text, "").into_owned()),
            ReplaceMode::Replace => Recasted::Text(
                NUMBER.replace_all(&text, |captures: &Captures| spell(&captures[0])).into_owned()
            ),
            ReplaceMode::Extract => Recasted::Extracted(find_all(&NUMBER, &text)),
            ReplaceMode::ExtractRemove => {
                let (text, found) = substitute_collecting(&text, |_| String::new());
                Recasted::Paired(text, found)
            }
            ReplaceMode::ExtractReplace => {
                let (text, found) = substitute_collecting(&text, spell);
                Recasted::Paired(text, found)
            }
        };
        Ok(recasted)
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::mode::ReplaceMode;
    use crate::features::numbers::{number_to_words, strip_separator, NumbersRecast, Separator};

    #[test]
    fn spells_numbers(){
        assert_eq!("zero", number_to_words(0));
        assert_eq!("twenty-one", number_to_words(21));
        assert_eq!("forty", number_to_words(40));
        assert_eq!("one hundred and twenty-three", number_to_words(123));
        assert_eq!("one thousand and one", number_to_words(1001));
        assert_eq!("one thousand, two hundred and thirty-four", number_to_words(1234));
        assert_eq!("two million, one hundred", number_to_words(2_000_100));
    }

    #[test]
    fn separator_only_between_word_chars(){
        assert_eq!("1000000, and more", strip_separator("1,000,000, and more", ','));
        assert_eq!("a, b", strip_separator("a, b", ','));
    }

    #[test]
    fn can_exec(){
        let text = "I have 2 cats and 1,000 dogs";
        assert_eq!(
            Recasted::Text("I have  cats and , dogs".to_string()),
            NumbersRecast::default().recast_one(text).unwrap()
        );
        assert_eq!(
            Recasted::Paired(
                "I have two cats and one thousand dogs".to_string(),
                vec!["2".to_string(), "1000".to_string()]
            ),
            NumbersRecast::new(ReplaceMode::ExtractReplace)
                .with_separator(Some(Separator::Comma))
                .recast_one(text)
                .unwrap()
        );
    }

    #[test]
    fn extract_remove_pairs(){
        assert_eq!(
            Recasted::Paired("room , floor ".to_string(), vec!["12".to_string(), "3".to_string()]),
            NumbersRecast::new(ReplaceMode::ExtractRemove).recast_one("room 12, floor 3").unwrap()
        );
    }

    #[test]
    fn separator_parses(){
        assert_eq!(Separator::Dot, Separator::try_from(".").unwrap());
        assert!(Separator::try_from(";").is_err());
    }
}
