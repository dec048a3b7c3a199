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

use std::borrow::{Borrow, Cow};
use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::fs::File;
use std::hash::Hash;
use std::io;
use std::io::{BufRead, BufReader};
use std::rc::Rc;
use camino::{Utf8Path, Utf8PathBuf};
use compact_str::{CompactString, ToCompactString};
use isolang::Language;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use unicode_normalization::UnicodeNormalization;
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

/// The english list of nltk, one word per line.
const DEFAULT_ENGLISH: &str = include_str!("../../data/stopwords/en.txt");

/// Provides stop word lists for a specific language
pub trait StopWordListRepository: Debug {
    /// Returns [None] if the repository knows nothing about [language].
    fn load_raw_stop_words(&self, language: Language) -> Result<Option<Vec<String>>, RecastError>;
}

/// The lists bundled with the binary.
#[derive(Debug, Copy, Clone, Default)]
pub struct DefaultStopWordListRepository;

impl StopWordListRepository for DefaultStopWordListRepository {
    fn load_raw_stop_words(&self, language: Language) -> Result<Option<Vec<String>>, RecastError> {
        Ok(get_default_stopwords_for_lang(&language).map(|words| words.map(str::to_string).collect()))
    }
}

/// Retrieves the bundled stopwords for a provided [lang].
pub fn get_default_stopwords_for_lang(lang: &Language) -> Option<impl Iterator<Item = &'static str>> {
    match lang {
        Language::Eng => Some(DEFAULT_ENGLISH.lines().map(str::trim).filter(|value| !value.is_empty())),
        _ => None,
    }
}

/// A stopword list repository in a directory.
/// The dir contains multiple files containing <name>.txt files
/// where <name> is the name of the language containing the stopwords as ISO 639 1
#[derive(Debug)]
pub struct DirStopWordListRepository {
    dir: Utf8PathBuf
}

impl DirStopWordListRepository {
    pub fn new<P: AsRef<Utf8Path>>(path: P) -> Result<Self, io::Error> {
        let dir = path.as_ref().to_path_buf();
        if dir.exists() && !dir.is_dir() {
            return Err(io::Error::new(io::ErrorKind::Unsupported, format!("{dir} is not a directory")))
        }
        Ok(Self { dir })
    }
}

impl StopWordListRepository for DirStopWordListRepository {
    fn load_raw_stop_words(&self, language: Language) -> Result<Option<Vec<String>>, RecastError> {
        let Some(code) = language.to_639_1() else {
            return Ok(None)
        };
        let file = self.dir.join(format!("{code}.txt"));
        if !file.exists() {
            trace!("No stop words for {code} in {}", self.dir);
            return Ok(None)
        }
        let words = BufReader::new(File::open(&file)?)
            .lines()
            .filter_map(|line| match line {
                Ok(line) => {
                    let line = line.trim();
                    (!line.is_empty()).then(|| Ok(line.to_string()))
                }
                Err(err) => Some(Err(err)),
            })
            .collect::<Result<Vec<_>, _>>()?;
        debug!("Loaded {} stop words from {file}", words.len());
        Ok(Some(words))
    }
}


/// A registry for stopwords.
/// The list of a language is the union of all lists provided by the registered repositories
/// and is cached after the first load.
#[derive(Debug, Default)]
pub struct StopWordListRegistry {
    cached_stop_words: HashMap<Language, Rc<StopWordList>>,
    repositories: Vec<Box<dyn StopWordListRepository>>
}

impl StopWordListRegistry {
    /// A registry with the bundled lists and a [DirStopWordListRepository] per dir.
    pub fn initialize<P: AsRef<Utf8Path>>(dirs: &[P]) -> Result<Self, io::Error> {
        let mut new = Self::default();
        new.register(DefaultStopWordListRepository);
        for dir in dirs {
            new.register(DirStopWordListRepository::new(dir)?)
        }
        Ok(new)
    }

    pub fn register<R: StopWordListRepository + 'static>(&mut self, repository: R) {
        self.register_boxed(Box::new(repository))
    }

    pub fn register_boxed(&mut self, repository: Box<dyn StopWordListRepository>) {
        self.repositories.push(repository);
    }

    pub fn get_or_load(&mut self, language: Language) -> Result<Option<Rc<StopWordList>>, RecastError> {
        match self.cached_stop_words.entry(language) {
            Entry::Occupied(value) => {
                Ok(Some(value.get().clone()))
            }
            Entry::Vacant(value) => {
                let mut raw = HashSet::new();
                for repo in &self.repositories {
                    if let Some(found) = repo.load_raw_stop_words(language)? {
                        raw.extend(found.into_iter().map(CompactString::from))
                    }
                }
                if raw.is_empty() {
                    return Ok(None)
                }
                Ok(Some(value.insert(Rc::new(StopWordList::from_raw(raw))).clone()))
            }
        }
    }
}


#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StopWordList {
    raw: HashSet<CompactString>,
    normalized: HashSet<CompactString>
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum ContainsKind {
    Raw,
    Normalized,
    Both
}

impl StopWordList {

    pub fn new(mut raw: HashSet<CompactString>, mut normalized: HashSet<CompactString>) -> Self {
        raw.shrink_to_fit();
        normalized.shrink_to_fit();
        Self { raw, normalized }
    }

    pub fn from_raw(raw: HashSet<CompactString>) -> Self {
        let normalized = raw
            .iter()
            .map(|value| value.nfc().collect::<CompactString>())
            .collect::<HashSet<_>>();
        Self::new(raw, normalized)
    }

    pub fn english() -> Self {
        let mut new = Self::default();
        if let Some(words) = get_default_stopwords_for_lang(&Language::Eng) {
            new.extend(words);
        }
        new
    }

    pub fn len(&self) -> usize {
        self.raw.len()
    }

    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    #[inline]
    pub fn contains<Q: ?Sized>(&self, kind: ContainsKind, value: &Q) -> bool
    where
        CompactString: Borrow<Q>,
        Q: Hash + Eq, {
        match kind {
            ContainsKind::Raw => self.raw.contains(value),
            ContainsKind::Normalized => self.normalized.contains(value),
            ContainsKind::Both => self.raw.contains(value) || self.normalized.contains(value),
        }
    }
}

impl<Q> Extend<Q> for StopWordList where Q: ToCompactString {
    fn extend<T: IntoIterator<Item=Q>>(&mut self, iter: T) {
        for value in iter.into_iter() {
            let word = value.to_compact_string();
            let normalized = word.nfc().to_compact_string();
            self.raw.insert(word);
            self.normalized.insert(normalized);
        }
        self.raw.shrink_to_fit();
        self.normalized.shrink_to_fit();
    }
}

impl<Q> FromIterator<Q> for StopWordList where Q: ToCompactString {
    fn from_iter<T: IntoIterator<Item=Q>>(iter: T) -> Self {
        let mut new = Self::default();
        new.extend(iter);
        new
    }
}

/// Drops every whitespace separated word found in the stop word list.
#[derive(Debug, Clone)]
pub struct StopWordsRecast {
    source: Cow<'static, str>,
    stop_words: Rc<StopWordList>,
    normalize: bool,
}

impl Default for StopWordsRecast {
    fn default() -> Self {
        Self::english()
    }
}

impl StopWordsRecast {
    pub fn new(source: impl Into<Cow<'static, str>>, stop_words: Rc<StopWordList>) -> Self {
        Self {
            source: source.into(),
            stop_words,
            normalize: false,
        }
    }

    /// The bundled english list.
    pub fn english() -> Self {
        Self::new("default", Rc::new(StopWordList::english()))
    }

    pub fn custom<I: IntoIterator<Item = Q>, Q: ToCompactString>(words: I) -> Self {
        Self::new("custom", Rc::new(words.into_iter().collect()))
    }

    /// The list of [language] from [registry], fails if no repository knows the language.
    pub fn from_registry(registry: &mut StopWordListRegistry, language: Language) -> Result<Self, RecastError> {
        match registry.get_or_load(language)? {
            Some(found) => Ok(Self::new(format!("registry:{}", language.to_639_3()), found)),
            None => Err(RecastError::invalid_configuration("language", language.to_639_3())),
        }
    }

    /// Compare the NFC form of the words.
    pub fn with_normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    pub fn stop_words(&self) -> &StopWordList {
        &self.stop_words
    }
}

impl TextRecast for StopWordsRecast {
    fn name(&self) -> &'static str {
        "StopWordsRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.source)
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let kept = if self.normalize {
            text.split_whitespace()
                .filter(|word| {
                    let normalized = word.nfc().collect::<CompactString>();
                    !self.stop_words.contains(ContainsKind::Normalized, normalized.as_str())
                })
                .collect::<Vec<_>>()
        } else {
            text.split_whitespace()
                .filter(|word| !self.stop_words.contains(ContainsKind::Raw, *word))
                .collect::<Vec<_>>()
        };
        Ok(Recasted::Text(kept.join(" ")))
    }
}
