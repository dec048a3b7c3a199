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
use std::fmt;
use std::fmt::{Debug, Formatter};
use isolang::Language;
use itertools::Itertools;
use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};
use crate::core::error::RecastError;
use crate::core::output::{OutputKind, Recasted};
use crate::core::unit::TextRecast;

/// The stemmer to use.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum StemMethod {
    /// The english stemmer.
    #[default]
    Porter,
    /// The snowball stemmer of a language.
    Snowball {
        #[serde(default = "_default_language")]
        language: Language
    },
}

const fn _default_language() -> Language {
    Language::Eng
}

/// The snowball algorithm for [language], if there is one.
pub fn algorithm_for(language: Language) -> Option<Algorithm> {
    let algorithm = match language {
        Language::Ara => Algorithm::Arabic,
        Language::Dan => Algorithm::Danish,
        Language::Nld => Algorithm::Dutch,
        Language::Eng => Algorithm::English,
        Language::Fin => Algorithm::Finnish,
        Language::Fra => Algorithm::French,
        Language::Deu => Algorithm::German,
        Language::Ell => Algorithm::Greek,
        Language::Hun => Algorithm::Hungarian,
        Language::Ita => Algorithm::Italian,
        Language::Nor | Language::Nob => Algorithm::Norwegian,
        Language::Por => Algorithm::Portuguese,
        Language::Ron => Algorithm::Romanian,
        Language::Rus => Algorithm::Russian,
        Language::Spa => Algorithm::Spanish,
        Language::Swe => Algorithm::Swedish,
        Language::Tam => Algorithm::Tamil,
        Language::Tur => Algorithm::Turkish,
        _ => return None,
    };
    Some(algorithm)
}

/// Lower cases and stems every whitespace separated word.
pub struct StemmingRecast {
    method: StemMethod,
    stemmer: Stemmer,
}

impl Debug for StemmingRecast {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("StemmingRecast")
            .field("method", &self.method)
            .finish_non_exhaustive()
    }
}

impl Default for StemmingRecast {
    fn default() -> Self {
        Self {
            method: StemMethod::Porter,
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl StemmingRecast {
    /// Fails if there is no stemmer for the language of [method].
    pub fn new(method: StemMethod) -> Result<Self, RecastError> {
        let algorithm = match method {
            StemMethod::Porter => Algorithm::English,
            StemMethod::Snowball { language } => algorithm_for(language)
                .ok_or_else(|| RecastError::invalid_configuration("language", language.to_639_3()))?,
        };
        Ok(Self { method, stemmer: Stemmer::create(algorithm) })
    }

    pub fn method(&self) -> StemMethod {
        self.method
    }
}

impl TextRecast for StemmingRecast {
    fn name(&self) -> &'static str {
        "StemmingRecast"
    }

    fn process(&self) -> Cow<'_, str> {
        match self.method {
            StemMethod::Porter => Cow::Borrowed("porter"),
            StemMethod::Snowball { language } => Cow::Owned(format!("snowball({})", language.to_639_3())),
        }
    }

    fn output_kind(&self) -> OutputKind {
        OutputKind::Text
    }

    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
        let stemmed = text
            .split_whitespace()
            .map(|word| self.stemmer.stem(&word.to_lowercase()).into_owned())
            .join(" ");
        Ok(Recasted::Text(stemmed))
    }
}

#[cfg(test)]
mod test {
    use isolang::Language;
    use crate::core::error::RecastError;
    use crate::core::output::Recasted;
    use crate::core::unit::TextRecast;
    use crate::features::stemming::{StemMethod, StemmingRecast};

    #[test]
    fn porter(){
        assert_eq!(
            Recasted::Text("run poni caress connect".to_string()),
            StemmingRecast::default().recast_one("Running ponies caresses connected").unwrap()
        );
    }

    #[test]
    fn snowball_language(){
        let recast = StemmingRecast::new(StemMethod::Snowball { language: Language::Deu }).unwrap();
        assert_eq!(Recasted::Text("katz".to_string()), recast.recast_one("Katzen").unwrap());
        assert_eq!("snowball(deu)", recast.process());
        assert!(matches!(
            StemmingRecast::new(StemMethod::Snowball { language: Language::Jpn }),
            Err(RecastError::InvalidConfiguration { option: "language", .. })
        ));
    }

    #[test]
    fn reuses_the_stemmer(){
        let recast = StemmingRecast::default();
        assert_eq!(StemMethod::Porter, recast.method());
        for _ in 0..3 {
            assert_eq!(Recasted::Text("connect".to_string()), recast.recast_one("connecting").unwrap());
        }
        assert!(format!("{recast:?}").starts_with("StemmingRecast { method: Porter"));
    }

    #[test]
    fn deserializes(){
        let method: StemMethod = serde_json::from_str(r#"{"method": "snowball", "language": "fra"}"#).unwrap();
        assert_eq!(StemMethod::Snowball { language: Language::Fra }, method);
        let method: StemMethod = serde_json::from_str(r#"{"method": "porter"}"#).unwrap();
        assert_eq!(StemMethod::Porter, method);
    }
}
