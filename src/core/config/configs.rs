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

use std::fs::File;
use std::io;
use std::io::BufReader;
use camino::Utf8Path;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::core::config::pipeline::{PipelineConfig, RecastConfig};
use crate::core::config::SystemConfig;
use crate::core::error::RecastError;
use crate::features::case::CaseMode;
use crate::features::mode::ExtractMode;

/// The files looked up by [Configs::discover_or_default], in this order.
pub const DISCOVERABLE_CONFIGS: [&str; 3] = ["recast.yaml", "recast.yml", "recast.json"];

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Recast(#[from] RecastError),
    #[error("The config {0} is neither yaml nor json.")]
    UnsupportedFormat(String),
}

/// A collection of all config used by a run.
#[derive(Debug, Default, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Configs {
    #[serde(default)]
    pub system: SystemConfig,
    #[serde(default)]
    pub pipeline: PipelineConfig,
}

impl Configs {
    #[inline]
    pub fn system(&self) -> &SystemConfig {
        &self.system
    }

    #[inline]
    pub fn pipeline(&self) -> &PipelineConfig {
        &self.pipeline
    }

    /// Loads yaml or json, depending on the extension of [path].
    pub fn load<P: AsRef<Utf8Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match path.extension() {
            Some("yaml" | "yml") => {
                let reader = BufReader::new(File::options().read(true).open(path)?);
                Ok(serde_yaml::from_reader(reader)?)
            }
            Some("json") => {
                let reader = BufReader::new(File::options().read(true).open(path)?);
                Ok(serde_json::from_reader(reader)?)
            }
            _ => Err(ConfigError::UnsupportedFormat(path.to_string())),
        }
    }

    /// Looks for a config in the working directory, falls back to the default.
    pub fn discover_or_default() -> Self {
        Self::discover_in_or_default(Utf8Path::new("."))
    }

    pub fn discover_in_or_default<P: AsRef<Utf8Path>>(folder: P) -> Self {
        let folder = folder.as_ref();
        let Some(path) = DISCOVERABLE_CONFIGS
            .iter()
            .map(|name| folder.join(name))
            .find(|path| path.exists()) else {
            return Self::default()
        };
        match Self::load(&path) {
            Ok(cfg) => {
                log::info!("Loaded config from {path}");
                cfg
            }
            Err(err) => {
                log::error!("Failed to load the config {path}, using fallback: {err}");
                Self::default()
            }
        }
    }

    /// A small but complete configuration.
    pub fn example() -> Self {
        Self {
            system: SystemConfig::default(),
            pipeline: PipelineConfig {
                stages: vec![
                    RecastConfig::Html,
                    RecastConfig::EscapeSequences,
                    RecastConfig::Url { process: ExtractMode::Remove },
                    RecastConfig::Mentions { process: ExtractMode::Remove },
                    RecastConfig::Contractions,
                    RecastConfig::Case { process: CaseMode::Lower },
                    RecastConfig::StopWords { words: None, language: None, normalize: false },
                    RecastConfig::Punctuations,
                ],
                ..PipelineConfig::default()
            },
        }
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }
}

#[cfg(test)]
mod test {
    use std::fs;
    use camino_tempfile::tempdir;
    use crate::core::config::{ConfigError, Configs};
    use crate::core::config::pipeline::RecastConfig;

    #[test]
    fn example_round_trips_through_yaml(){
        let example = Configs::example();
        let yaml = example.to_yaml().unwrap();
        let parsed: Configs = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(example, parsed);
    }

    #[test]
    fn loads_by_extension(){
        let dir = tempdir().unwrap();
        let yaml = dir.path().join("recast.yaml");
        fs::write(&yaml, "system:\n  log_level: Warn\npipeline:\n  stages:\n    - recast: html\n").unwrap();
        let cfg = Configs::load(&yaml).unwrap();
        assert_eq!(log::LevelFilter::Warn, cfg.system.log_level);
        assert_eq!(vec![RecastConfig::Html], cfg.pipeline.stages);

        let json = dir.path().join("recast.json");
        fs::write(&json, r#"{"pipeline": {"verbosity": 0, "stages": [{"recast": "punctuations"}]}}"#).unwrap();
        let cfg = Configs::load(&json).unwrap();
        assert_eq!(vec![RecastConfig::Punctuations], cfg.pipeline.stages);

        let toml = dir.path().join("recast.toml");
        fs::write(&toml, "").unwrap();
        assert!(matches!(Configs::load(&toml), Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn discovery_falls_back(){
        let dir = tempdir().unwrap();
        assert_eq!(Configs::default(), Configs::discover_in_or_default(dir.path()));
        fs::write(dir.path().join("recast.yml"), "pipeline: [").unwrap();
        assert_eq!(Configs::default(), Configs::discover_in_or_default(dir.path()));
        fs::write(dir.path().join("recast.yml"), "pipeline:\n  stages:\n    - recast: lemmatization\n").unwrap();
        assert_eq!(
            vec![RecastConfig::Lemmatization],
            Configs::discover_in_or_default(dir.path()).pipeline.stages
        );
    }
}
