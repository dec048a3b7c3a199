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

use std::str::FromStr;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use crate::core::error::RecastError;
use crate::core::progress::{NoProgress, ProgressBarSink, ProgressSink};

/// How much progress a recast shows while executing.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash, Display, EnumString, Serialize, Deserialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case", try_from = "VerbosityRepr")]
pub enum Verbosity {
    /// Nothing is shown.
    #[default]
    Silent,
    /// A bar is shown and cleared when done.
    Transient,
    /// A bar is shown and stays when done.
    Persistent,
}

impl Verbosity {
    /// Creates the progress sink for this verbosity.
    pub fn progress(self) -> Box<dyn ProgressSink> {
        match self {
            Verbosity::Silent => Box::new(NoProgress),
            Verbosity::Transient => Box::new(ProgressBarSink::new(false)),
            Verbosity::Persistent => Box::new(ProgressBarSink::new(true)),
        }
    }
}

impl TryFrom<i64> for Verbosity {
    type Error = RecastError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Verbosity::Silent),
            -1 => Ok(Verbosity::Transient),
            1 => Ok(Verbosity::Persistent),
            other => Err(RecastError::invalid_configuration("verbose", other)),
        }
    }
}

/// Configuration files may use the numeric levels or the names.
#[derive(Deserialize)]
#[serde(untagged)]
enum VerbosityRepr {
    Level(i64),
    Name(String),
}

impl TryFrom<VerbosityRepr> for Verbosity {
    type Error = RecastError;

    fn try_from(value: VerbosityRepr) -> Result<Self, Self::Error> {
        match value {
            VerbosityRepr::Level(level) => Verbosity::try_from(level),
            VerbosityRepr::Name(name) => Verbosity::from_str(&name)
                .map_err(|_| RecastError::invalid_configuration("verbose", name)),
        }
    }
}
