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
use std::collections::HashMap;
use std::sync::LazyLock;
use regex::{Captures, Regex};
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

static CONTRACTION: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b[A-Za-z]+['’][A-Za-z]+\b").unwrap());

static EXPANSIONS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("ain't", "are not"),
        ("aren't", "are not"),
        ("can't", "cannot"),
        ("couldn't", "could not"),
        ("could've", "could have"),
        ("didn't", "did not"),
        ("doesn't", "does not"),
        ("don't", "do not"),
        ("hadn't", "had not"),
        ("hasn't", "has not"),
        ("haven't", "have not"),
        ("he'd", "he would"),
        ("he'll", "he will"),
        ("he's", "he is"),
        ("how's", "how is"),
        ("i'd", "I would"),
        ("i'll", "I will"),
        ("i'm", "I am"),
        ("i've", "I have"),
        ("isn't", "is not"),
        ("it'd", "it would"),
        ("it'll", "it will"),
        ("it's", "it is"),
        ("let's", "let us"),
        ("might've", "might have"),
        ("mightn't", "might not"),
        ("must've", "must have"),
        ("mustn't", "must not"),
        ("shan't", "shall not"),
        ("she'd", "she would"),
        ("she'll", "she will"),
        ("she's", "she is"),
        ("should've", "should have"),
        ("shouldn't", "should not"),
        ("that'd", "that would"),
        ("that's", "that is"),
        ("there's", "there is"),
        ("they'd", "they would"),
        ("they'll", "they will"),
        ("they're", "they are"),
        ("they've", "they have"),
        ("wasn't", "was not"),
        ("we'd", "we would"),
        ("we'll", "we will"),
        ("we're", "we are"),
        ("we've", "we have"),
        ("weren't", "were not"),
        ("what's", "what is"),
        ("where's", "where is"),
        ("who's", "who is"),
        ("won't", "will not"),
        ("would've", "would have"),
        ("wouldn't", "would not"),
        ("y'all", "you all"),
        ("you'd", "you would"),
        ("you'll", "you will"),
        ("you're", "you are"),
        ("you've", "you have"),
    ])
});

/// Expands common english contractions, a leading capital is kept.
#[derive(Debug, Copy, Clone, Default)]
pub struct ContractionsRecast;

impl ContractionsRecast {
    pub fn new() -> Self {
        Self
    }
}

fn expand(word: &str) -> Option<String> {
    let key = word.replace('’', "'").to_lowercase();
    let expansion = *EXPANSIONS.get(key.as_str())?;
    let mut chars = expansion.chars();
    match (word.chars().next(), chars.next()) {
        (Some(first), Some(head)) if first.is_uppercase() => {
            Some(head.to_uppercase().chain(chars).collect())
        }
        _ => Some(expansion.to_string()),
    }
}

impl TextRecast for ContractionsRecast {
    fn name(&self) -> &'static str {
        "ContractionsRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Borrowed("expand")
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let expanded = CONTRACTION.replace_all(text, |captures: &Captures| {
            let word = &captures[0];
            expand(word).unwrap_or_else(|| word.to_string())
        });
        Ok(Recasted::Text(expanded.into_owned()))
    }
}
