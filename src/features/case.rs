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
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    #[default]
    #[strum(to_string = "lower")]
    Lower,
    #[strum(to_string = "upper")]
    Upper,
    #[strum(to_string = "title", serialize = "fupper", serialize = "proper")]
    #[serde(alias = "fupper", alias = "proper")]
    Title,
}

/// Changes the letter case.
#[derive(Debug, Copy, Clone, Default)]
pub struct CaseRecast {
    mode: CaseMode,
}

impl CaseRecast {
    pub fn new(mode: CaseMode) -> Self {
        Self { mode }
    }
}

/// Upper cases every letter that follows a non letter, lower cases the rest.
pub fn title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut after_letter = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if after_letter {
                result.extend(c.to_lowercase());
            } else {
                result.extend(c.to_uppercase());
            }
            after_letter = true;
        } else {
            result.push(c);
            after_letter = false;
        }
    }
    result
}

impl TextRecast for CaseRecast {
    fn name(&self) -> &'static str {
        "CaseRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Owned(self.mode.to_string())
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let text = match self.mode {
            CaseMode::Lower => text.to_lowercase(),
            CaseMode::Upper => text.to_uppercase(),
            CaseMode::Title => title_case(text),
        };
        Ok(Recasted::Text(text))
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::case::{CaseMode, CaseRecast};
    use crate::features::mode::parse_mode;

    #[test]
    fn can_exec(){
        let text = "hELLO wOrld's 2nd try";
        assert_eq!(Recasted::Text("hello world's 2nd try".to_string()), CaseRecast::default().recast_one(text).unwrap());
        assert_eq!(Recasted::Text("HELLO WORLD'S 2ND TRY".to_string()), CaseRecast::new(CaseMode::Upper).recast_one(text).unwrap());
        assert_eq!(Recasted::Text("Hello World'S 2Nd Try".to_string()), CaseRecast::new(CaseMode::Title).recast_one(text).unwrap());
    }

    #[test]
    fn title_aliases(){
        assert_eq!(CaseMode::Title, parse_mode::<CaseMode>("process", "fupper").unwrap());
        assert_eq!(CaseMode::Title, parse_mode::<CaseMode>("process", "proper").unwrap());
    }
}
