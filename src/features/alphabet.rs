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
use regex::Regex;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use unicode_normalization::UnicodeNormalization;
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

static NON_ASCII: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\x00-\x7F]+").unwrap());

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum AlphabetMode {
    /// Accents dropped, then everything but ascii letters becomes a space.
    #[default]
    All,
    KeepAlpha,
    RemNonAscii,
    RemAccChar,
}

/// Decomposes and drops everything that is not ascii afterwards.
fn remove_accents(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

fn keep_alpha(text: &str) -> String {
    text.chars()
        .map(|c| if c.is_ascii_alphabetic() { c } else { ' ' })
        .collect()
}

impl AlphabetMode {
    pub fn apply(self, text: &str) -> String {
        match self {
            AlphabetMode::All => keep_alpha(&NON_ASCII.replace_all(&remove_accents(text), " ")),
            AlphabetMode::KeepAlpha => keep_alpha(text),
            AlphabetMode::RemNonAscii => NON_ASCII.replace_all(text, " ").into_owned(),
            AlphabetMode::RemAccChar => remove_accents(text),
        }
    }
}

/// Restricts the alphabet, the modes are applied in order.
#[derive(Debug, Clone)]
pub struct AlphabetRecast {
    modes: Vec<AlphabetMode>,
}

impl Default for AlphabetRecast {
    fn default() -> Self {
        Self::new(vec![AlphabetMode::All])
    }
}

impl AlphabetRecast {
    pub fn new(modes: Vec<AlphabetMode>) -> Self {
        Self { modes }
    }
}

impl TextRecast for AlphabetRecast {
    fn name(&self) -> &'static str {
        "AlphabetRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Owned(self.modes.iter().join(", "))
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let mut text = text.to_string();
        for mode in &self.modes {
            text = mode.apply(&text);
        }
        Ok(Recasted::Text(text))
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::alphabet::{AlphabetMode, AlphabetRecast};
    use crate::features::mode::parse_mode;

    #[test]
    fn modes(){
        assert_eq!("cafe au lait", AlphabetMode::RemAccChar.apply("café au lait"));
        assert_eq!("a b ", AlphabetMode::KeepAlpha.apply("a1b!"));
        assert_eq!("na ve", AlphabetMode::RemNonAscii.apply("naïve"));
        assert_eq!("Creme brulee   ", AlphabetMode::All.apply("Crème brûlée 42"));
    }

    #[test]
    fn applied_in_order(){
        let recast = AlphabetRecast::new(vec![AlphabetMode::RemAccChar, AlphabetMode::KeepAlpha]);
        assert_eq!(Recasted::Text("uber   ".to_string()), recast.recast_one("über 1.").unwrap());
        assert_eq!("rem_acc_char, keep_alpha", recast.process());
    }

    #[test]
    fn parses(){
        assert_eq!(AlphabetMode::RemNonAscii, parse_mode::<AlphabetMode>("process", "rem_non_ascii").unwrap());
    }
}
