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

use serde::{Deserialize, Serialize};
use strum::Display;
use crate::core::error::RecastError;

/// The result of a body for a single element.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Recasted {
    Text(String),
    Extracted(Vec<String>),
    Paired(String, Vec<String>),
    Tokens(Vec<String>),
}

/// The shape of [Recasted] a body produces.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Display)]
#[strum(serialize_all = "snake_case")]
pub enum OutputKind {
    Text,
    Extracted,
    Paired,
    Tokens,
}

/// The result of one execution.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RecastOutput {
    /// Remove or replace style output.
    Text { text: Vec<String> },
    /// Pure extraction, [text] is the untouched input.
    Extracted { text: Vec<String>, extracted: Vec<Vec<String>> },
    /// Combined modes, text and side channel from the same pass.
    Paired { text: Vec<String>, extracted: Vec<Vec<String>> },
    Tokens { tokens: Vec<Vec<String>> },
}

impl RecastOutput {
    /// The string sequence a following stage continues with.
    pub fn primary(&self) -> Option<&[String]> {
        match self {
            RecastOutput::Text { text }
            | RecastOutput::Extracted { text, .. }
            | RecastOutput::Paired { text, .. } => Some(text),
            RecastOutput::Tokens { .. } => None,
        }
    }

    pub fn into_primary(self) -> Option<Vec<String>> {
        match self {
            RecastOutput::Text { text }
            | RecastOutput::Extracted { text, .. }
            | RecastOutput::Paired { text, .. } => Some(text),
            RecastOutput::Tokens { .. } => None,
        }
    }

    pub fn side_channel(&self) -> Option<&[Vec<String>]> {
        match self {
            RecastOutput::Extracted { extracted, .. }
            | RecastOutput::Paired { extracted, .. } => Some(extracted),
            _ => None,
        }
    }

    pub fn kind(&self) -> OutputKind {
        match self {
            RecastOutput::Text { .. } => OutputKind::Text,
            RecastOutput::Extracted { .. } => OutputKind::Extracted,
            RecastOutput::Paired { .. } => OutputKind::Paired,
            RecastOutput::Tokens { .. } => OutputKind::Tokens,
        }
    }
}

/// Collects the per element results of a body into a [RecastOutput].
#[derive(Debug)]
pub struct OutputCollector {
    kind: OutputKind,
    input: Vec<String>,
    text: Vec<String>,
    extracted: Vec<Vec<String>>,
}

impl OutputCollector {
    /// [input] is kept as text for pure extraction.
    pub fn new(kind: OutputKind, input: Vec<String>) -> Self {
        let capacity = input.len();
        Self {
            kind,
            input,
            text: Vec::with_capacity(capacity),
            extracted: Vec::with_capacity(capacity),
        }
    }

    pub fn push(&mut self, value: Recasted) -> Result<(), RecastError> {
        match (self.kind, value) {
            (OutputKind::Text, Recasted::Text(text)) => self.text.push(text),
            (OutputKind::Extracted, Recasted::Extracted(extracted)) => self.extracted.push(extracted),
            (OutputKind::Paired, Recasted::Paired(text, extracted)) => {
                self.text.push(text);
                self.extracted.push(extracted);
            }
            (OutputKind::Tokens, Recasted::Tokens(tokens)) => self.extracted.push(tokens),
            (kind, other) => {
                return Err(RecastError::InvalidElementType(format!(
                    "a body declared as {kind} produced {other:?}"
                )))
            }
        }
        Ok(())
    }

    pub fn finish(self) -> RecastOutput {
        match self.kind {
            OutputKind::Text => RecastOutput::Text { text: self.text },
            OutputKind::Extracted => RecastOutput::Extracted { text: self.input, extracted: self.extracted },
            OutputKind::Paired => RecastOutput::Paired { text: self.text, extracted: self.extracted },
            OutputKind::Tokens => RecastOutput::Tokens { tokens: self.extracted },
        }
    }
}

#[cfg(test)]
mod test {
    use crate::core::error::RecastError;
    use crate::core::output::{OutputCollector, OutputKind, Recasted, RecastOutput};

    #[test]
    fn extracted_keeps_input_as_text(){
        let mut collector = OutputCollector::new(OutputKind::Extracted, vec!["a @b".to_string()]);
        collector.push(Recasted::Extracted(vec!["@b".to_string()])).unwrap();
        let output = collector.finish();
        assert_eq!(Some(["a @b".to_string()].as_slice()), output.primary());
        assert_eq!(vec![vec!["@b".to_string()]], output.side_channel().unwrap());
    }

    #[test]
    fn tokens_have_no_primary(){
        let output = RecastOutput::Tokens { tokens: vec![vec!["a".to_string()]] };
        assert!(output.primary().is_none());
        assert!(output.side_channel().is_none());
    }

    #[test]
    fn mismatch_is_rejected(){
        let mut collector = OutputCollector::new(OutputKind::Text, Vec::new());
        assert!(matches!(
            collector.push(Recasted::Tokens(Vec::new())),
            Err(RecastError::InvalidElementType(_))
        ));
    }
}
