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

//! Composable text normalization: recast units, pipelines and batch runs.

pub mod core;
pub mod features;

pub use crate::core::datum::Datum;
pub use crate::core::error::RecastError;
pub use crate::core::input::RawText;
pub use crate::core::output::{OutputKind, RecastOutput, Recasted};
pub use crate::core::pipeline::{Pipeline, TransformNode};
pub use crate::core::runner::{recast_batch, recast_pipeline};
pub use crate::core::unit::{Recast, RecastHandle, RecastInput, RecastUnit, TextRecast};
pub use crate::core::verbosity::Verbosity;
