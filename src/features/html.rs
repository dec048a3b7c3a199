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
use scraper::Html;
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

/// Strips markup and decodes entities, only the text nodes survive.
#[derive(Debug, Copy, Clone, Default)]
pub struct HtmlRecast;

impl HtmlRecast {
    pub fn new() -> Self {
        Self
    }
}

impl TextRecast for HtmlRecast {
    fn name(&self) -> &'static str {
        "HtmlRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Borrowed("remove")
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let fragment = Html::parse_fragment(text);
        Ok(Recasted::Text(fragment.root_element().text().collect::<String>()))
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::html::HtmlRecast;

    #[test]
    fn keeps_text_nodes(){
        assert_eq!(
            Recasted::Text("Hello World!".to_string()),
            HtmlRecast::new().recast_one("Hello <b>World</b>!").unwrap()
        );
    }

    #[test]
    fn decodes_entities(){
        assert_eq!(
            Recasted::Text("fish & chips".to_string()),
            HtmlRecast::new().recast_one("<p>fish &amp; chips</p>").unwrap()
        );
    }
}
