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
use regex::Regex;
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;
use crate::features::mode::ExtractMode;

static HASHTAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[#][A-Za-z0-9_]+").unwrap());

/// Removes or extracts `#hashtags`.
#[derive(Debug, Copy, Clone, Default)]
pub struct HashtagsRecast {
    mode: ExtractMode,
}

impl HashtagsRecast {
    pub fn new(mode: ExtractMode) -> Self {
        Self { mode }
    }
}

impl TextRecast for HashtagsRecast {
    fn name(&self) -> &'static str {
        "HashtagsRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Owned(self.mode.to_string())
    }

    fn output_kind(&self) -> OutputKind {
        self.mode.output_kind()
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        Ok(self.mode.apply(&HASHTAG, text))
    }
}
