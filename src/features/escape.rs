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

/// Turns `\r`, `\n`, `\t` and `\f` into spaces.
#[derive(Debug, Copy, Clone, Default)]
pub struct EscapeSequencesRecast;

impl EscapeSequencesRecast {
    pub fn new() -> Self {
        Self
    }
}

impl TextRecast for EscapeSequencesRecast {
    fn name(&self) -> &'static str {
        "EscapeSequencesRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Borrowed("remove")
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        Ok(Recasted::Text(text.replace(['\r', '\n', '\t', '\u{c}'], " ")))
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::escape::EscapeSequencesRecast;

    #[test]
    fn can_exec(){
        assert_eq!(
            Recasted::Text("a b c d e".to_string()),
            EscapeSequencesRecast::new().recast_one("a\rb\nc\td\u{c}e").unwrap()
        );
    }
}
