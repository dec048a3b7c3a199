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
use unicode_segmentation::UnicodeSegmentation;
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;
use crate::features::mode::ReplaceMode;

/// Removes, names or extracts emoji.
#[derive(Debug, Copy, Clone, Default)]
pub struct EmojiRecast {
    mode: ReplaceMode,
    space_out: bool,
}

impl EmojiRecast {
    pub fn new(mode: ReplaceMode) -> Self {
        Self { mode, space_out: false }
    }

    /// Puts a space in front of every emoji before processing.
    pub fn with_space_out(mut self, space_out: bool) -> Self {
        self.space_out = space_out;
        self
    }
}

fn is_emoji(grapheme: &str) -> bool {
    emojis::get(grapheme).is_some()
}

fn space_out(text: &str) -> String {
    let mut spaced = String::with_capacity(text.len());
    for grapheme in text.graphemes(true) {
        if is_emoji(grapheme) {
            spaced.push(' ');
        }
        spaced.push_str(grapheme);
    }
    let mut squashed = String::with_capacity(spaced.len());
    for c in spaced.chars() {
        if c == ' ' && squashed.ends_with(' ') {
            continue;
        }
        squashed.push(c);
    }
    squashed
}

fn extract(text: &str) -> Vec<String> {
    text.graphemes(true)
        .filter(|grapheme| is_emoji(grapheme))
        .map(str::to_string)
        .collect()
}

/// Drops every whitespace separated word that contains an emoji
/// and collects the emoji of the dropped words.
fn remove_collecting(text: &str) -> (String, Vec<String>) {
    let mut found = Vec::new();
    let mut kept = Vec::new();
    for word in text.split_whitespace() {
        let before = found.len();
        found.extend(word.graphemes(true).filter(|grapheme| is_emoji(grapheme)).map(str::to_string));
        if found.len() == before {
            kept.push(word);
        }
    }
    (kept.join(" "), found)
}

/// Writes the name of every emoji and collects the emoji.
/// Spaces in the name become underscores.
fn replace_collecting(text: &str) -> (String, Vec<String>) {
    let mut result = String::with_capacity(text.len());
    let mut found = Vec::new();
    for grapheme in text.graphemes(true) {
        match emojis::get(grapheme) {
            Some(emoji) => {
                result.push_str(&emoji.name().replace(' ', "_"));
                found.push(grapheme.to_string());
            }
            None => result.push_str(grapheme),
        }
    }
    (result, found)
}

impl TextRecast for EmojiRecast {
    fn name(&self) -> &'static str {
        "EmojiRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Owned(self.mode.to_string())
    }

    fn output_kind(&self) -> OutputKind {
        self.mode.output_kind()
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let text = if self.space_out {
            Cow::Owned(space_out(text))
        } else {
            Cow::Borrowed(text)
        };
        let recasted = match self.mode {
            ReplaceMode::Remove => Recasted::Text(remove_collecting(&text).0),
            ReplaceMode::Replace => Recasted::Text(replace_collecting(&text).0),
            ReplaceMode::Extract => Recasted::Extracted(extract(&text)),
            ReplaceMode::ExtractRemove => {
                let (text, found) = remove_collecting(&text);
                Recasted::Paired(text, found)
            }
            ReplaceMode::ExtractReplace => {
                let (text, found) = replace_collecting(&text);
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
    use crate::features::emoji::EmojiRecast;
    use crate::features::mode::ReplaceMode;

    const TEXT: &str = "I love 🍕 pizza😋 so much";

    #[test]
    fn remove_drops_words(){
        assert_eq!(
            Recasted::Text("I love so much".to_string()),
            EmojiRecast::default().recast_one(TEXT).unwrap()
        );
    }

    #[test]
    fn space_out_keeps_the_word(){
        assert_eq!(
            Recasted::Text("I love pizza so much".to_string()),
            EmojiRecast::default().with_space_out(true).recast_one(TEXT).unwrap()
        );
    }

    #[test]
    fn extract_remove_pairs(){
        assert_eq!(
            Recasted::Paired(
                "I love so much".to_string(),
                vec!["🍕".to_string(), "😋".to_string()]
            ),
            EmojiRecast::new(ReplaceMode::ExtractRemove).recast_one(TEXT).unwrap()
        );
    }

    #[test]
    fn replace_names_emoji(){
        assert_eq!(
            Recasted::Paired(
                "I love pizza pizzaface_savoring_food so much".to_string(),
                vec!["🍕".to_string(), "😋".to_string()]
            ),
            EmojiRecast::new(ReplaceMode::ExtractReplace).recast_one(TEXT).unwrap()
        );
    }
}
