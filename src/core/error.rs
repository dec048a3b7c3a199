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

use std::fmt::Display;
use std::io;
use thiserror::Error;

/// Everything that can go wrong while configuring, composing or executing a recast.
#[derive(Debug, Error)]
pub enum RecastError {
    /// The input has the wrong dimensionality (multi column table, multi dimensional array, ...)
    #[error("Invalid shape: {0}")]
    InvalidShape(String),
    /// A normalized element is not a string.
    #[error("Invalid element type: {0}")]
    InvalidElementType(String),
    /// An option (process, verbosity, ...) has an unrecognized value.
    #[error("Invalid value {value:?} for option {option}")]
    InvalidConfiguration {
        option: &'static str,
        value: String
    },
    #[error("method configure needs to be called before execute on {0}")]
    NotConfigured(&'static str),
    #[error("{0} not found in Pipeline.chain")]
    NotFound(&'static str),
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl RecastError {
    pub fn invalid_configuration(option: &'static str, value: impl Display) -> Self {
        Self::InvalidConfiguration {
            option,
            value: value.to_string()
        }
    }
}
