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
use crate::features::mode::squash_whitespace;

/// Turns ascii punctuation into spaces.
#[derive(Debug, Copy, Clone, Default)]
pub struct PunctuationsRecast;

impl PunctuationsRecast {
    pub fn new() -> Self {
        Self
    }
}

impl TextRecast for PunctuationsRecast {
    fn name(&self) -> &'static str {
        "PunctuationsRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Borrowed("remove")
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let spaced = text
            .chars()
            .map(|c| if c.is_ascii_punctuation() { ' ' } else { c })
            .collect::<String>();
        Ok(Recasted::Text(squash_whitespace(&spaced)))
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::punctuation::PunctuationsRecast;

    #[test]
    fn can_exec(){
        assert_eq!(
            Recasted::Text("Hello world it s me".to_string()),
            PunctuationsRecast::new().recast_one("Hello, world!!! it's me...").unwrap()
        );
    }

    #[test]
    fn long_runs_collapse(){
        assert_eq!(
            Recasted::Text("a b".to_string()),
            PunctuationsRecast::new().recast_one("a ?!?!?!?!?!?!?!?! b").unwrap()
        );
    }
}
