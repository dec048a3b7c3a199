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
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Keeps only the words longer than `min_length` characters.
#[derive(Debug, Copy, Clone)]
pub struct ShortWordsRecast {
    min_length: usize,
}

impl Default for ShortWordsRecast {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH)
    }
}

impl ShortWordsRecast {
    pub fn new(min_length: usize) -> Self {
        Self { min_length }
    }
}

impl TextRecast for ShortWordsRecast {
    fn name(&self) -> &'static str {
        "ShortWordsRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Owned(format!("min_length={}", self.min_length))
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let kept = text
            .split_whitespace()
            .filter(|word| word.chars().count() > self.min_length)
            .collect::<Vec<_>>()
            .join(" ");
        Ok(Recasted::Text(kept))
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::short_words::ShortWordsRecast;

    #[test]
    fn can_exec(){
        assert_eq!(
            Recasted::Text("quick brown jumps over".to_string()),
            ShortWordsRecast::default().recast_one("the quick brown fox jumps over a dog").unwrap()
        );
        assert_eq!(
            Recasted::Text("quick brown jumps".to_string()),
            ShortWordsRecast::new(4).recast_one("the quick brown fox jumps over a dog").unwrap()
        );
    }
}
