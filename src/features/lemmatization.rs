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
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::sync::LazyLock;
use itertools::Itertools;
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

/// Maps a single word to its base form.
pub trait Lemmatizer: Debug {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str>;
}

static IRREGULAR: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("children", "child"),
        ("men", "man"),
        ("women", "woman"),
        ("feet", "foot"),
        ("teeth", "tooth"),
        ("geese", "goose"),
        ("mice", "mouse"),
        ("lice", "louse"),
        ("people", "person"),
        ("oxen", "ox"),
        ("wolves", "wolf"),
        ("knives", "knife"),
        ("leaves", "leaf"),
        ("lives", "life"),
        ("wives", "wife"),
        ("halves", "half"),
        ("selves", "self"),
        ("shelves", "shelf"),
        ("loaves", "loaf"),
        ("thieves", "thief"),
        ("criteria", "criterion"),
        ("phenomena", "phenomenon"),
        ("data", "datum"),
        ("analyses", "analysis"),
        ("crises", "crisis"),
        ("theses", "thesis"),
    ])
});

/// Words ending with `s` that are no plurals.
static INVARIANT: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    HashSet::from([
        "is", "was", "has", "does", "this", "his", "its", "us", "yes", "as", "thus",
        "always", "perhaps", "news", "series", "species", "means", "less", "unless",
        "whereas", "across", "bus", "gas", "plus", "chaos", "lens",
    ])
});

/// Rule based english noun lemmatizer: irregular plurals first, then the regular plural suffixes.
#[derive(Debug, Copy, Clone, Default)]
pub struct RuleLemmatizer;

impl RuleLemmatizer {
    fn base_form(lower: &str) -> Option<String> {
        if let Some(found) = IRREGULAR.get(lower) {
            return Some(found.to_string());
        }
        if INVARIANT.contains(lower) || lower.len() <= 3 {
            return None;
        }
        if let Some(stem) = lower.strip_suffix("ies") {
            if stem.len() > 1 {
                return Some(format!("{stem}y"));
            }
        }
        if lower.ends_with("sses") {
            return Some(lower[..lower.len() - 2].to_string());
        }
        for suffix in ["ches", "shes", "xes", "zes"] {
            if lower.ends_with(suffix) {
                return Some(lower[..lower.len() - 2].to_string());
            }
        }
        if lower.ends_with('s') && !lower.ends_with("ss") && !lower.ends_with("us") && !lower.ends_with("is") {
            return Some(lower[..lower.len() - 1].to_string());
        }
        None
    }
}

/// Puts the case of [original] onto [lemma].
fn restore_case(original: &str, lemma: String) -> String {
    if original.chars().all(|c| !c.is_alphabetic() || c.is_uppercase()) && original.chars().count() > 1 {
        return lemma.to_uppercase();
    }
    match original.chars().next() {
        Some(first) if first.is_uppercase() => {
            let mut chars = lemma.chars();
            match chars.next() {
                Some(head) => head.to_uppercase().chain(chars).collect(),
                None => lemma,
            }
        }
        _ => lemma,
    }
}

impl Lemmatizer for RuleLemmatizer {
    fn lemmatize<'a>(&self, word: &'a str) -> Cow<'a, str> {
        if word.is_empty() || !word.chars().all(char::is_alphabetic) {
            return Cow::Borrowed(word);
        }
        let lower = word.to_lowercase();
        match Self::base_form(&lower) {
            Some(lemma) => Cow::Owned(restore_case(word, lemma)),
            None => Cow::Borrowed(word),
        }
    }
}

/// Lemmatizes every whitespace separated word.
#[derive(Debug)]
pub struct LemmatizationRecast {
    lemmatizer: Box<dyn Lemmatizer>,
}

impl Default for LemmatizationRecast {
    fn default() -> Self {
        Self::new(RuleLemmatizer)
    }
}

impl LemmatizationRecast {
    pub fn new(lemmatizer: impl Lemmatizer + 'static) -> Self {
        Self { lemmatizer: Box::new(lemmatizer) }
    }
}

impl TextRecast for LemmatizationRecast {
    fn name(&self) -> &'static str {
        "LemmatizationRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{:?}", self.lemmatizer))
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let lemmatized = text
            .split_whitespace()
            .map(|word| self.lemmatizer.lemmatize(word))
            .join(" ");
        Ok(Recasted::Text(lemmatized))
    }
}

#[cfg(test)]
mod test {
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::lemmatization::{LemmatizationRecast, Lemmatizer, RuleLemmatizer};

    #[test]
    fn rules(){
        let lemmatizer = RuleLemmatizer;
        assert_eq!("child", lemmatizer.lemmatize("children"));
        assert_eq!("Pony", lemmatizer.lemmatize("Ponies"));
        assert_eq!("class", lemmatizer.lemmatize("classes"));
        assert_eq!("box", lemmatizer.lemmatize("boxes"));
        assert_eq!("CAT", lemmatizer.lemmatize("CATS"));
        assert_eq!("this", lemmatizer.lemmatize("this"));
        assert_eq!("bus", lemmatizer.lemmatize("bus"));
        assert_eq!("cats,", lemmatizer.lemmatize("cats,"));
    }

    #[test]
    fn can_exec(){
        assert_eq!(
            Recasted::Text("The child saw two mouse and three wolf".to_string()),
            LemmatizationRecast::default().recast_one("The children saw two mice and three wolves").unwrap()
        );
    }
}
