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
use unicode_segmentation::UnicodeSegmentation;
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum TokenMethod {
    #[default]
    Word,
    Sentence,
}

/// Splits every element into tokens. The output is not a string sequence,
/// so this can only be the last stage of a pipeline.
#[derive(Debug, Copy, Clone, Default)]
pub struct TokenisationRecast {
    method: TokenMethod,
}

impl TokenisationRecast {
    pub fn new(method: TokenMethod) -> Self {
        Self { method }
    }
}

impl TextRecast for TokenisationRecast {
    fn name(&self) -> &'static str {
        "TokenisationRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Owned(self.method.to_string())
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Tokens
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let tokens = match self.method {
            TokenMethod::Word => text
                .split_word_bounds()
                .filter(|token| !token.trim().is_empty())
                .map(str::to_string)
                .collect(),
            TokenMethod::Sentence => text
                .unicode_sentences()
                .map(str::trim)
                .filter(|sentence| !sentence.is_empty())
                .map(str::to_string)
                .collect(),
        };
        Ok(Recasted::Tokens(tokens))
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::tokenisation::{TokenMethod, TokenisationRecast};

    #[test]
    fn words(){
        assert_eq!(
            Recasted::Tokens(vec!["Hello".to_string(), ",".to_string(), "world".to_string(), "!".to_string()]),
            TokenisationRecast::new(TokenMethod::Word).recast_one("Hello, world!").unwrap()
        );
    }

    #[test]
    fn sentences(){
        assert_eq!(
            Recasted::Tokens(vec!["Hi there.".to_string(), "How are you?".to_string()]),
            TokenisationRecast::new(TokenMethod::Sentence).recast_one("Hi there. How are you?").unwrap()
        );
    }
}
