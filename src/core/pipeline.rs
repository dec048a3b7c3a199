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

use std::ops::{Add, Sub};
use std::slice;
use log::debug;
use crate::core::datum::Datum;
use crate::core::error::RecastError;
use crate::core::output::RecastOutput;
use crate::core::progress::ProgressSink;
use crate::core::unit::{Recast, RecastHandle, RecastInput, RecastState};
use crate::core::verbosity::Verbosity;

/// An ordered chain of units, executed one after another.
/// The chain only holds plain units, composing pipelines flattens them.
#[derive(Debug, Clone)]
pub struct Pipeline {
    chain: Vec<RecastHandle>,
    verbosity: Verbosity,
    state: RecastState,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Pipeline {
    pub fn new(chain: Vec<RecastHandle>) -> Self {
        Self {
            chain,
            verbosity: Verbosity::Persistent,
            state: RecastState::default(),
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn chain(&self) -> &[RecastHandle] {
        &self.chain
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn datum(&self) -> &Datum {
        &self.state.datum
    }

    pub fn push(&mut self, unit: impl Into<RecastHandle>) {
        self.chain.push(unit.into())
    }

    /// Removes the first occurrence of [unit] by identity.
    pub fn remove(&mut self, unit: &RecastHandle) -> Result<(), RecastError> {
        match self.chain.iter().position(|value| value == unit) {
            Some(position) => {
                self.chain.remove(position);
                Ok(())
            }
            None => Err(RecastError::NotFound(unit.name())),
        }
    }
}

impl From<Vec<RecastHandle>> for Pipeline {
    fn from(value: Vec<RecastHandle>) -> Self {
        Self::new(value)
    }
}

impl PartialEq for Pipeline {
    fn eq(&self, other: &Self) -> bool {
        self.chain == other.chain
    }
}

impl From<&Pipeline> for RecastInput {
    fn from(value: &Pipeline) -> Self {
        RecastInput::Configured(RecastState {
            source: value.name(),
            ..value.state.clone()
        })
    }
}

impl Recast for Pipeline {
    fn name(&self) -> &'static str {
        "Pipeline"
    }

    fn verbosity(&self) -> Verbosity {
        self.verbosity
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.verbosity = verbosity;
    }

    fn is_configured(&self) -> bool {
        self.state.configured
    }

    /// Every unit in the chain is reset, so each run binds fresh data to the stages.
    fn adopt(&mut self, state: RecastState) {
        for unit in &self.chain {
            unit.reset();
        }
        self.state.datum = state.datum;
        self.state.source = state.source;
        self.state.configured = true;
    }

    fn execute_with(&mut self, progress: &mut dyn ProgressSink) -> Result<RecastOutput, RecastError> {
        if !self.state.configured {
            return Err(RecastError::NotConfigured(self.name()));
        }
        progress.begin(self.chain.len() as u64, self.name());
        let mut last = None;
        for (position, unit) in self.chain.iter().enumerate() {
            let mut unit = unit.clone();
            unit.set_verbosity(Verbosity::Silent);
            debug!("Pipeline stage {position}: {}", unit.name());
            // A unit can occur more than once, every stage rebinds the current datum.
            unit.configure(self.state.datum.clone())?;
            let output = unit.execute()?;
            match output.primary() {
                Some(primary) => self.state.datum.replace(primary.to_vec()),
                None => {
                    if let Some(next) = self.chain.get(position + 1) {
                        return Err(RecastError::InvalidElementType(format!(
                            "{} produces tokens and cannot be followed by {}",
                            unit.name(),
                            next.name()
                        )));
                    }
                }
            }
            progress.advance(1, Some(unit.name()));
            last = Some(output);
        }
        progress.finish();
        Ok(last.unwrap_or_else(|| RecastOutput::Text {
            text: self.state.datum.elements().to_vec(),
        }))
    }

    /// Always binds [input], unlike a single unit.
    fn configure_and_execute(&mut self, input: impl Into<RecastInput>) -> Result<RecastOutput, RecastError> {
        self.configure(input)?;
        self.execute()
    }
}

/// Either a single unit or a pipeline of units.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformNode {
    Leaf(RecastHandle),
    Composite(Pipeline),
}

impl TransformNode {
    pub fn units(&self) -> &[RecastHandle] {
        match self {
            TransformNode::Leaf(unit) => slice::from_ref(unit),
            TransformNode::Composite(pipeline) => pipeline.chain(),
        }
    }
}

impl From<RecastHandle> for TransformNode {
    fn from(value: RecastHandle) -> Self {
        TransformNode::Leaf(value)
    }
}

impl From<Pipeline> for TransformNode {
    fn from(value: Pipeline) -> Self {
        TransformNode::Composite(value)
    }
}

impl Recast for TransformNode {
    fn name(&self) -> &'static str {
        match self {
            TransformNode::Leaf(unit) => unit.name(),
            TransformNode::Composite(pipeline) => pipeline.name(),
        }
    }

    fn verbosity(&self) -> Verbosity {
        match self {
            TransformNode::Leaf(unit) => unit.verbosity(),
            TransformNode::Composite(pipeline) => pipeline.verbosity(),
        }
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        match self {
            TransformNode::Leaf(unit) => unit.set_verbosity(verbosity),
            TransformNode::Composite(pipeline) => pipeline.set_verbosity(verbosity),
        }
    }

    fn is_configured(&self) -> bool {
        match self {
            TransformNode::Leaf(unit) => unit.is_configured(),
            TransformNode::Composite(pipeline) => pipeline.is_configured(),
        }
    }

    fn adopt(&mut self, state: RecastState) {
        match self {
            TransformNode::Leaf(unit) => unit.adopt(state),
            TransformNode::Composite(pipeline) => pipeline.adopt(state),
        }
    }

    fn execute_with(&mut self, progress: &mut dyn ProgressSink) -> Result<RecastOutput, RecastError> {
        match self {
            TransformNode::Leaf(unit) => unit.execute_with(progress),
            TransformNode::Composite(pipeline) => pipeline.execute_with(progress),
        }
    }

    fn configure_and_execute(&mut self, input: impl Into<RecastInput>) -> Result<RecastOutput, RecastError> {
        match self {
            TransformNode::Leaf(unit) => unit.configure_and_execute(input),
            TransformNode::Composite(pipeline) => pipeline.configure_and_execute(input),
        }
    }
}

/// Anything that can be an operand of `+`.
trait Composable {
    fn units(&self) -> &[RecastHandle];

    fn is_leaf(&self) -> bool;
}

impl Composable for RecastHandle {
    fn units(&self) -> &[RecastHandle] {
        slice::from_ref(self)
    }

    fn is_leaf(&self) -> bool {
        true
    }
}

impl Composable for Pipeline {
    fn units(&self) -> &[RecastHandle] {
        self.chain()
    }

    fn is_leaf(&self) -> bool {
        false
    }
}

impl Composable for TransformNode {
    fn units(&self) -> &[RecastHandle] {
        TransformNode::units(self)
    }

    fn is_leaf(&self) -> bool {
        matches!(self, TransformNode::Leaf(_))
    }
}

/// unit + pipeline appends the unit to the end of the pipeline.
fn compose<L: Composable, R: Composable>(left: &L, right: &R) -> Pipeline {
    let chain = if left.is_leaf() && !right.is_leaf() {
        right.units().iter().chain(left.units()).cloned().collect()
    } else {
        left.units().iter().chain(right.units()).cloned().collect()
    };
    Pipeline::new(chain)
}

macro_rules! impl_compose {
    ($($left: ty => $($right: ty),+;)+) => {
        $(
            $(
                impl Add<$right> for $left {
                    type Output = Pipeline;

                    fn add(self, rhs: $right) -> Self::Output {
                        compose(&self, &rhs)
                    }
                }

                impl<'a> Add<&'a $right> for &'a $left {
                    type Output = Pipeline;

                    fn add(self, rhs: &'a $right) -> Self::Output {
                        compose(self, rhs)
                    }
                }
            )+
        )+
    };
}

impl_compose! {
    RecastHandle => RecastHandle, Pipeline, TransformNode;
    Pipeline => RecastHandle, Pipeline, TransformNode;
    TransformNode => RecastHandle, Pipeline, TransformNode;
}

impl Sub<&RecastHandle> for Pipeline {
    type Output = Result<Pipeline, RecastError>;

    fn sub(mut self, rhs: &RecastHandle) -> Self::Output {
        self.remove(rhs)?;
        Ok(self)
    }
}

impl Sub<&RecastHandle> for &Pipeline {
    type Output = Result<Pipeline, RecastError>;

    fn sub(self, rhs: &RecastHandle) -> Self::Output {
        self.clone() - rhs
    }
}

impl Sub<&RecastHandle> for TransformNode {
    type Output = Result<Pipeline, RecastError>;

    fn sub(self, rhs: &RecastHandle) -> Self::Output {
        match self {
            TransformNode::Leaf(unit) => Err(RecastError::invalid_configuration(
                "subtraction",
                format!("{} - {} is only supported on a Pipeline", unit.name(), rhs.name()),
            )),
            TransformNode::Composite(pipeline) => pipeline - rhs,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::core::error::RecastError;
    use crate::core::output::RecastOutput;
    use crate::core::pipeline::{Pipeline, TransformNode};
    use crate::core::progress::RecordedProgress;
    use crate::core::unit::{Recast, RecastHandle, TextRecast};
    use crate::core::verbosity::Verbosity;
    use crate::features::case::{CaseMode, CaseRecast};
    use crate::features::contractions::ContractionsRecast;
    use crate::features::html::HtmlRecast;
    use crate::features::mentions::MentionsRecast;
    use crate::features::mode::ExtractMode;
    use crate::features::tokenisation::{TokenMethod, TokenisationRecast};
    use crate::features::url::UrlRecast;

    fn html() -> RecastHandle {
        HtmlRecast::new().into_handle()
    }

    fn url() -> RecastHandle {
        UrlRecast::new(ExtractMode::Remove).into_handle()
    }

    #[test]
    fn composition_keeps_order(){
        let a = html();
        let b = url();
        let x = MentionsRecast::new(ExtractMode::Remove).into_handle();
        let pipeline = &a + &b;
        assert_eq!(pipeline.chain(), &[a.clone(), b.clone()]);

        let appended = &x + &pipeline;
        assert_eq!(appended.chain(), &[a.clone(), b.clone(), x.clone()]);
        assert_eq!(2, pipeline.len());

        let p1 = Pipeline::new(vec![a.clone()]);
        let p2 = Pipeline::new(vec![b.clone()]);
        let p3 = Pipeline::new(vec![x.clone()]);
        assert_eq!(&(&p1 + &p2) + &p3, &p1 + &(&p2 + &p3));

        let node = TransformNode::Composite(pipeline.clone());
        assert_eq!((node + a.clone()).chain(), &[a.clone(), b, a]);
    }

    #[test]
    fn subtraction_removes_first_occurrence(){
        let a = html();
        let b = url();
        let pipeline = Pipeline::new(vec![a.clone(), b.clone(), a.clone()]);
        let removed = (&pipeline - &a).unwrap();
        assert_eq!(removed.chain(), &[b.clone(), a.clone()]);
        assert_eq!(3, pipeline.len());

        let other = html();
        assert!(matches!(&pipeline - &other, Err(RecastError::NotFound("HtmlRecast"))));
        assert!(matches!(
            TransformNode::Leaf(a.clone()) - &a,
            Err(RecastError::InvalidConfiguration { option: "subtraction", .. })
        ));
        assert_eq!((TransformNode::Composite(pipeline) - &b).unwrap().chain(), &[a.clone(), a]);
    }

    #[test]
    fn can_exec(){
        let mut pipeline = (html() + url()).with_verbosity(Verbosity::Silent);
        pipeline.configure(vec!["Hello <b>World</b>!", "Visit www.example.com now"]).unwrap();
        let mut progress = RecordedProgress::default();
        let output = pipeline.execute_with(&mut progress).unwrap();
        assert_eq!(
            RecastOutput::Text { text: vec!["Hello World!".to_string(), "Visit now".to_string()] },
            output
        );
        assert_eq!(vec!["HtmlRecast", "UrlRecast"], progress.labels());
        assert_eq!(2, progress.total());
        assert!(progress.is_finished());
        assert_eq!(vec!["Hello World!", "Visit now"], pipeline.datum().elements());
        assert!(pipeline.chain().iter().all(|unit| unit.verbosity() == Verbosity::Silent));
    }

    #[test]
    fn reruns_bind_new_input(){
        let mut pipeline = Pipeline::new(vec![html()]).with_verbosity(Verbosity::Silent);
        let first = pipeline.configure_and_execute("<i>one</i>").unwrap();
        let second = pipeline.configure_and_execute("<i>two</i>").unwrap();
        assert_eq!(Some(&["one".to_string()][..]), first.primary());
        assert_eq!(Some(&["two".to_string()][..]), second.primary());
    }

    #[test]
    fn repeated_unit_takes_the_current_datum(){
        let lower = CaseRecast::new(CaseMode::Lower).into_handle();
        let contractions = ContractionsRecast::new().into_handle();
        let mut pipeline = Pipeline::new(vec![lower.clone(), contractions, lower])
            .with_verbosity(Verbosity::Silent);
        let output = pipeline.configure_and_execute("I'M HERE").unwrap();
        assert_eq!(Some(&["i am here".to_string()][..]), output.primary());
    }

    #[test]
    fn trailing_extraction_is_paired(){
        let mentions = MentionsRecast::new(ExtractMode::ExtractRemove).into_handle();
        let mut pipeline = (html() + mentions).with_verbosity(Verbosity::Silent);
        let output = pipeline.configure_and_execute("<p>Contact @alice about #deal</p>").unwrap();
        assert_eq!(
            RecastOutput::Paired {
                text: vec!["Contact about #deal".to_string()],
                extracted: vec![vec!["@alice".to_string()]],
            },
            output
        );
    }

    #[test]
    fn tokens_must_be_last(){
        let tokens = TokenisationRecast::new(TokenMethod::Word).into_handle();
        let mut pipeline = (tokens + html()).with_verbosity(Verbosity::Silent);
        assert!(matches!(
            pipeline.configure_and_execute("a b"),
            Err(RecastError::InvalidElementType(_))
        ));
    }

    #[test]
    fn empty_chain_returns_input(){
        let mut pipeline = Pipeline::default().with_verbosity(Verbosity::Silent);
        assert!(matches!(pipeline.execute(), Err(RecastError::NotConfigured("Pipeline"))));
        let output = pipeline.configure_and_execute("untouched").unwrap();
        assert_eq!(RecastOutput::Text { text: vec!["untouched".to_string()] }, output);
    }
}
