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

use camino::Utf8PathBuf;
use clap::ValueEnum;
use isolang::Language;
use log::trace;
use serde::{Deserialize, Serialize};
use strum::Display;
use crate::core::error::RecastError;
use crate::core::pipeline::{Pipeline, TransformNode};
use crate::core::unit::{RecastHandle, RecastUnit, TextRecast};
use crate::core::verbosity::Verbosity;
use crate::features::alphabet::{AlphabetMode, AlphabetRecast};
use crate::features::case::{CaseMode, CaseRecast};
use crate::features::contractions::ContractionsRecast;
use crate::features::emoji::EmojiRecast;
use crate::features::escape::EscapeSequencesRecast;
use crate::features::hashtags::HashtagsRecast;
use crate::features::html::HtmlRecast;
use crate::features::lemmatization::LemmatizationRecast;
use crate::features::mentions::MentionsRecast;
use crate::features::mode::{ExtractMode, ReplaceMode};
use crate::features::numbers::{NumbersRecast, Separator};
use crate::features::punctuation::PunctuationsRecast;
use crate::features::short_words::{ShortWordsRecast, DEFAULT_MIN_LENGTH};
use crate::features::stemming::{StemMethod, StemmingRecast};
use crate::features::stopwords::{StopWordListRegistry, StopWordsRecast};
use crate::features::tokenisation::{TokenMethod, TokenisationRecast};
use crate::features::url::UrlRecast;

/// How the stages are executed.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, ValueEnum, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum RunnerKind {
    /// All stages in one silent pipeline, one tick per stage.
    #[default]
    Pipeline,
    /// Every stage as its own node, one tick per element and stage.
    Batch,
}

/// A single configured stage.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "recast", rename_all = "snake_case")]
pub enum RecastConfig {
    Url {
        #[serde(default)]
        process: ExtractMode,
    },
    Html,
    EscapeSequences,
    Mentions {
        #[serde(default)]
        process: ExtractMode,
    },
    Contractions,
    Case {
        #[serde(default)]
        process: CaseMode,
    },
    Emoji {
        #[serde(default)]
        process: ReplaceMode,
        #[serde(default)]
        space_out: bool,
    },
    Hashtags {
        #[serde(default)]
        process: ExtractMode,
    },
    ShortWords {
        #[serde(default = "_default_min_length")]
        min_length: usize,
    },
    /// Custom [words] win over a [language] from the registry,
    /// without both the bundled english list is used.
    StopWords {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        words: Option<Vec<String>>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        language: Option<Language>,
        #[serde(default)]
        normalize: bool,
    },
    Numbers {
        #[serde(default)]
        process: ReplaceMode,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        separator: Option<Separator>,
    },
    Alphabet {
        #[serde(default = "_default_alphabet")]
        process: Vec<AlphabetMode>,
    },
    Punctuations,
    Tokenisation {
        #[serde(default)]
        method: TokenMethod,
    },
    Stemming {
        #[serde(default)]
        stemmer: StemMethod,
    },
    Lemmatization,
}

const fn _default_min_length() -> usize { DEFAULT_MIN_LENGTH }
fn _default_alphabet() -> Vec<AlphabetMode> { vec![AlphabetMode::All] }

impl RecastConfig {
    /// Creates the unit of this stage, stop word lists are taken from [registry].
    pub fn build(&self, registry: &mut StopWordListRegistry) -> Result<RecastUnit, RecastError> {
        trace!("Build {self:?}");
        let unit = match self {
            RecastConfig::Url { process } => UrlRecast::new(*process).into_unit(),
            RecastConfig::Html => HtmlRecast::new().into_unit(),
            RecastConfig::EscapeSequences => EscapeSequencesRecast::new().into_unit(),
            RecastConfig::Mentions { process } => MentionsRecast::new(*process).into_unit(),
            RecastConfig::Contractions => ContractionsRecast::new().into_unit(),
            RecastConfig::Case { process } => CaseRecast::new(*process).into_unit(),
            RecastConfig::Emoji { process, space_out } => {
                EmojiRecast::new(*process).with_space_out(*space_out).into_unit()
            }
            RecastConfig::Hashtags { process } => HashtagsRecast::new(*process).into_unit(),
            RecastConfig::ShortWords { min_length } => ShortWordsRecast::new(*min_length).into_unit(),
            RecastConfig::StopWords { words, language, normalize } => {
                let recast = match (words, language) {
                    (Some(words), _) => StopWordsRecast::custom(words),
                    (None, Some(language)) => StopWordsRecast::from_registry(registry, *language)?,
                    (None, None) => StopWordsRecast::english(),
                };
                recast.with_normalize(*normalize).into_unit()
            }
            RecastConfig::Numbers { process, separator } => {
                NumbersRecast::new(*process).with_separator(*separator).into_unit()
            }
            RecastConfig::Alphabet { process } => AlphabetRecast::new(process.clone()).into_unit(),
            RecastConfig::Punctuations => PunctuationsRecast::new().into_unit(),
            RecastConfig::Tokenisation { method } => TokenisationRecast::new(*method).into_unit(),
            RecastConfig::Stemming { stemmer } => StemmingRecast::new(*stemmer)?.into_unit(),
            RecastConfig::Lemmatization => LemmatizationRecast::default().into_unit(),
        };
        Ok(unit)
    }
}

/// The configured pipeline.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// 0 / silent, -1 / transient or 1 / persistent
    #[serde(default = "_default_verbosity")]
    pub verbosity: Verbosity,

    #[serde(default)]
    pub runner: RunnerKind,

    /// Directories with `<iso639-1>.txt` stop word lists.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub stopword_dirs: Vec<Utf8PathBuf>,

    #[serde(default)]
    pub stages: Vec<RecastConfig>,
}

const fn _default_verbosity() -> Verbosity { Verbosity::Persistent }

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            verbosity: _default_verbosity(),
            runner: RunnerKind::default(),
            stopword_dirs: Vec::new(),
            stages: Vec::new(),
        }
    }
}

impl PipelineConfig {
    fn build_units(&self) -> Result<Vec<RecastHandle>, RecastError> {
        let mut registry = StopWordListRegistry::initialize(&self.stopword_dirs)?;
        self.stages
            .iter()
            .map(|stage| stage.build(&mut registry).map(RecastHandle::new))
            .collect()
    }

    /// All stages chained into one pipeline.
    pub fn build_pipeline(&self) -> Result<Pipeline, RecastError> {
        Ok(Pipeline::new(self.build_units()?).with_verbosity(self.verbosity))
    }

    /// Every stage as its own node.
    pub fn build_nodes(&self) -> Result<Vec<TransformNode>, RecastError> {
        Ok(self.build_units()?.into_iter().map(TransformNode::Leaf).collect())
    }
}

#[cfg(test)]
mod test {
    use isolang::Language;
    use crate::core::config::pipeline::{PipelineConfig, RecastConfig, RunnerKind};
    use crate::core::unit::Recast;
    use crate::core::verbosity::Verbosity;
    use crate::features::case::CaseMode;
    use crate::features::mode::{ExtractMode, ReplaceMode};
    use crate::features::numbers::Separator;
    use crate::features::stemming::StemMethod;

    const CONFIG: &str = r#"
verbosity: -1
runner: batch
stages:
  - recast: html
  - recast: url
    process: remove_extract
  - recast: case
    process: fupper
  - recast: numbers
    process: replace
    separator: ","
  - recast: stop_words
    language: eng
  - recast: stemming
    stemmer:
      method: snowball
      language: deu
"#;

    #[test]
    fn parses_stages(){
        let config: PipelineConfig = serde_yaml::from_str(CONFIG).unwrap();
        assert_eq!(Verbosity::Transient, config.verbosity);
        assert_eq!(RunnerKind::Batch, config.runner);
        assert_eq!(RecastConfig::Html, config.stages[0]);
        assert_eq!(RecastConfig::Url { process: ExtractMode::ExtractRemove }, config.stages[1]);
        assert_eq!(RecastConfig::Case { process: CaseMode::Title }, config.stages[2]);
        assert_eq!(RecastConfig::Numbers { process: ReplaceMode::Replace, separator: Some(Separator::Comma) }, config.stages[3]);
        assert_eq!(RecastConfig::StopWords { words: None, language: Some(Language::Eng), normalize: false }, config.stages[4]);
        assert_eq!(RecastConfig::Stemming { stemmer: StemMethod::Snowball { language: Language::Deu } }, config.stages[5]);
    }

    #[test]
    fn builds_units_in_order(){
        let config: PipelineConfig = serde_yaml::from_str(CONFIG).unwrap();
        let pipeline = config.build_pipeline().unwrap();
        let names = pipeline.chain().iter().map(|unit| unit.name()).collect::<Vec<_>>();
        assert_eq!(
            vec!["HtmlRecast", "UrlRecast", "CaseRecast", "NumbersRecast", "StopWordsRecast", "StemmingRecast"],
            names
        );
        assert_eq!(Verbosity::Transient, pipeline.verbosity());
        assert_eq!(6, config.build_nodes().unwrap().len());
    }

    #[test]
    fn unknown_process_is_rejected(){
        assert!(serde_yaml::from_str::<RecastConfig>("recast: url\nprocess: shred").is_err());
        assert!(serde_yaml::from_str::<RecastConfig>("recast: teleport").is_err());
    }

    #[test]
    fn unknown_language_fails_to_build(){
        let config: PipelineConfig = serde_yaml::from_str("stages:\n  - recast: stop_words\n    language: fra").unwrap();
        assert!(config.build_pipeline().is_err());
    }
}
