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
use std::cell::{Ref, RefCell, RefMut};
use std::fmt::Debug;
use std::rc::Rc;
use log::{debug, trace};
use serde_json::Value;
use crate::core::datum::Datum;
use crate::core::error::RecastError;
use crate::core::input::RawText;
use crate::core::output::{OutputCollector, OutputKind, Recasted, RecastOutput};
use crate::core::progress::ProgressSink;
use crate::core::verbosity::Verbosity;

/// The per element body of a recast.
pub trait TextRecast: Debug {
    fn name(&self) -> &'static str;

    /// The configured mode, used for the progress label.
    fn process(&self) -> Cow<'_, str>;

    fn output_kind(&self) -> OutputKind;

    /// Recasts a single element. The variant has to match [TextRecast::output_kind].
    fn recast_one(&self, text: &str) -> Result<Recasted, RecastError>;

    fn into_unit(self) -> RecastUnit where Self: Sized + 'static {
        RecastUnit::new(self)
    }

    fn into_handle(self) -> RecastHandle where Self: Sized + 'static {
        RecastHandle::new(RecastUnit::new(self))
    }
}

/// The bound data of a recast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecastState {
    /// The name of whatever produced this state.
    pub source: &'static str,
    pub datum: Datum,
    pub configured: bool,
}

impl RecastState {
    pub fn configured(source: &'static str, datum: Datum) -> Self {
        Self {
            source,
            datum,
            configured: true,
        }
    }
}

/// Something a recast can be configured with.
#[derive(Debug, Clone)]
pub enum RecastInput {
    Raw(RawText),
    /// Data of an already configured source, adopted as is.
    Configured(RecastState),
}

impl From<RawText> for RecastInput {
    fn from(value: RawText) -> Self {
        RecastInput::Raw(value)
    }
}

impl From<&str> for RecastInput {
    fn from(value: &str) -> Self {
        RecastInput::Raw(value.into())
    }
}

impl From<String> for RecastInput {
    fn from(value: String) -> Self {
        RecastInput::Raw(value.into())
    }
}

impl From<Vec<String>> for RecastInput {
    fn from(value: Vec<String>) -> Self {
        RecastInput::Raw(value.into())
    }
}

impl From<Vec<&str>> for RecastInput {
    fn from(value: Vec<&str>) -> Self {
        RecastInput::Raw(value.into())
    }
}

impl From<Value> for RecastInput {
    fn from(value: Value) -> Self {
        RecastInput::Raw(value.into())
    }
}

impl From<Datum> for RecastInput {
    fn from(value: Datum) -> Self {
        RecastInput::Configured(RecastState::configured("Datum", value))
    }
}

impl From<&RecastUnit> for RecastInput {
    fn from(value: &RecastUnit) -> Self {
        RecastInput::Configured(RecastState {
            source: value.name(),
            ..value.state.clone()
        })
    }
}

impl From<&RecastHandle> for RecastInput {
    fn from(value: &RecastHandle) -> Self {
        RecastInput::from(&*value.borrow())
    }
}

/// The configure / execute lifecycle shared by units and pipelines.
pub trait Recast {
    fn name(&self) -> &'static str;

    fn verbosity(&self) -> Verbosity;

    fn set_verbosity(&mut self, verbosity: Verbosity);

    fn is_configured(&self) -> bool;

    /// Takes over the data of [state] and marks self as configured.
    /// Name, mode and verbosity of self are kept.
    fn adopt(&mut self, state: RecastState);

    /// Executes with an explicit progress sink.
    fn execute_with(&mut self, progress: &mut dyn ProgressSink) -> Result<RecastOutput, RecastError>;

    /// Binds [input] to self. Configured sources are adopted, raw input is normalized.
    fn configure(&mut self, input: impl Into<RecastInput>) -> Result<(), RecastError> where Self: Sized {
        let state = match input.into() {
            RecastInput::Raw(raw) => {
                let mut datum = Datum::default();
                datum.set(raw)?;
                RecastState::configured(self.name(), datum)
            }
            RecastInput::Configured(state) => {
                if !state.configured {
                    return Err(RecastError::NotConfigured(state.source));
                }
                state
            }
        };
        trace!("Configure {} with {} elements from {}.", self.name(), state.datum.count(), state.source);
        self.adopt(state);
        Ok(())
    }

    /// Executes with a progress sink derived from the verbosity.
    fn execute(&mut self) -> Result<RecastOutput, RecastError> {
        let mut progress = self.verbosity().progress();
        self.execute_with(progress.as_mut())
    }

    /// Configures only if not configured yet, then executes.
    /// A second call executes the already bound data and ignores [input].
    fn configure_and_execute(&mut self, input: impl Into<RecastInput>) -> Result<RecastOutput, RecastError> where Self: Sized {
        if !self.is_configured() {
            self.configure(input)?;
        }
        self.execute()
    }
}

/// A single recast: a body plus its bound data and verbosity.
#[derive(Debug)]
pub struct RecastUnit {
    body: Box<dyn TextRecast>,
    verbosity: Verbosity,
    state: RecastState,
}

impl RecastUnit {
    pub fn new(body: impl TextRecast + 'static) -> Self {
        Self::from_boxed(Box::new(body))
    }

    pub fn from_boxed(body: Box<dyn TextRecast>) -> Self {
        Self {
            body,
            verbosity: Verbosity::default(),
            state: RecastState::default(),
        }
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn body(&self) -> &dyn TextRecast {
        self.body.as_ref()
    }

    pub fn datum(&self) -> &Datum {
        &self.state.datum
    }

    /// Drops the bound data, the unit has to be configured again.
    pub fn reset(&mut self) {
        self.state = RecastState::default();
    }

    pub fn into_handle(self) -> RecastHandle {
        RecastHandle::new(self)
    }
}

impl Recast for RecastUnit {
    fn name(&self) -> &'static str {
        self.body.name()
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

    fn adopt(&mut self, state: RecastState) {
        self.state.datum = state.datum;
        self.state.source = state.source;
        self.state.configured = true;
    }

    fn execute_with(&mut self, progress: &mut dyn ProgressSink) -> Result<RecastOutput, RecastError> {
        if !self.state.configured {
            return Err(RecastError::NotConfigured(self.name()));
        }
        let label = format!("{} process: {}", self.body.name(), self.body.process());
        let elements = self.state.datum.elements().to_vec();
        debug!("Execute {label} on {} elements.", elements.len());
        progress.begin(elements.len() as u64, &label);
        let mut collector = OutputCollector::new(self.body.output_kind(), elements.clone());
        for element in &elements {
            collector.push(self.body.recast_one(element)?)?;
            progress.advance(1, Some(&label));
        }
        progress.finish();
        let output = collector.finish();
        if let Some(primary) = output.primary() {
            self.state.datum.replace(primary.to_vec());
        }
        Ok(output)
    }
}

/// A shared unit. Composition shares handles, so identity survives it.
#[derive(Debug, Clone)]
pub struct RecastHandle(Rc<RefCell<RecastUnit>>);

impl RecastHandle {
    pub fn new(unit: RecastUnit) -> Self {
        Self(Rc::new(RefCell::new(unit)))
    }

    pub fn borrow(&self) -> Ref<'_, RecastUnit> {
        self.0.borrow()
    }

    pub fn borrow_mut(&self) -> RefMut<'_, RecastUnit> {
        self.0.borrow_mut()
    }

    pub fn reset(&self) {
        self.0.borrow_mut().reset()
    }
}

impl PartialEq for RecastHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for RecastHandle {}

impl From<RecastUnit> for RecastHandle {
    fn from(value: RecastUnit) -> Self {
        Self::new(value)
    }
}

impl Recast for RecastHandle {
    fn name(&self) -> &'static str {
        self.0.borrow().name()
    }

    fn verbosity(&self) -> Verbosity {
        self.0.borrow().verbosity()
    }

    fn set_verbosity(&mut self, verbosity: Verbosity) {
        self.0.borrow_mut().set_verbosity(verbosity)
    }

    fn is_configured(&self) -> bool {
        self.0.borrow().is_configured()
    }

    fn adopt(&mut self, state: RecastState) {
        self.0.borrow_mut().adopt(state)
    }

    fn execute_with(&mut self, progress: &mut dyn ProgressSink) -> Result<RecastOutput, RecastError> {
        self.0.borrow_mut().execute_with(progress)
    }
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;
    use crate::core::datum::Datum;
    use crate::core::error::RecastError;
    use crate::core::output::{OutputKind, Recasted, RecastOutput};
    use crate::core::progress::RecordedProgress;
    use crate::core::unit::{Recast, RecastUnit, TextRecast};
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
    use crate::features::numbers::NumbersRecast;
    use crate::features::punctuation::PunctuationsRecast;
    use crate::features::short_words::ShortWordsRecast;
    use crate::features::stemming::StemmingRecast;
    use crate::features::stopwords::StopWordsRecast;
    use crate::features::tokenisation::{TokenMethod, TokenisationRecast};
    use crate::features::url::UrlRecast;

    #[derive(Debug)]
    struct Shout;

    impl TextRecast for Shout {
        fn name(&self) -> &'static str {
            "ShoutRecast"
        }

        fn process(&self) -> Cow<'_, str> {
            Cow::Borrowed("upper")
        }

        fn output_kind(&self) -> OutputKind {
            OutputKind::Text
        }

        fn recast_one(&self, text: &str) -> Result<Recasted, RecastError> {
            Ok(Recasted::Text(text.to_uppercase()))
        }
    }

    #[test]
    fn execute_needs_configure(){
        let mut unit = Shout.into_unit();
        assert!(matches!(unit.execute(), Err(RecastError::NotConfigured("ShoutRecast"))));
    }

    #[test]
    fn can_exec(){
        let mut unit = Shout.into_unit();
        unit.configure(vec!["a", "b"]).unwrap();
        let mut progress = RecordedProgress::default();
        let output = unit.execute_with(&mut progress).unwrap();
        assert_eq!(RecastOutput::Text { text: vec!["A".to_string(), "B".to_string()] }, output);
        assert_eq!(2, progress.completed());
        assert_eq!(vec!["ShoutRecast process: upper"; 2], progress.labels());
        assert_eq!(vec!["A", "B"], unit.datum().elements());
    }

    #[test]
    fn second_configure_and_execute_ignores_new_input(){
        let mut unit = Shout.into_unit();
        let first = unit.configure_and_execute("first").unwrap();
        let second = unit.configure_and_execute("second").unwrap();
        assert_eq!(first, second);
        assert_eq!(vec!["FIRST"], second.primary().unwrap());
    }

    #[test]
    fn adopt_copies_data_only(){
        let mut source = Shout.into_unit().with_verbosity(Verbosity::Persistent);
        source.configure(vec!["x"]).unwrap();
        let mut target = Shout.into_unit();
        target.configure(&source).unwrap();
        assert!(target.is_configured());
        assert_eq!(Verbosity::Silent, target.verbosity());
        assert_eq!(source.datum(), target.datum());
    }

    #[test]
    fn every_recast_needs_configure(){
        let units = vec![
            UrlRecast::new(ExtractMode::Remove).into_unit(),
            HtmlRecast::new().into_unit(),
            EscapeSequencesRecast::new().into_unit(),
            MentionsRecast::new(ExtractMode::Extract).into_unit(),
            ContractionsRecast::new().into_unit(),
            CaseRecast::new(CaseMode::Title).into_unit(),
            EmojiRecast::new(ReplaceMode::ExtractReplace).into_unit(),
            HashtagsRecast::new(ExtractMode::ExtractRemove).into_unit(),
            ShortWordsRecast::new(3).into_unit(),
            StopWordsRecast::english().into_unit(),
            NumbersRecast::new(ReplaceMode::Replace).into_unit(),
            AlphabetRecast::new(vec![AlphabetMode::KeepAlpha]).into_unit(),
            PunctuationsRecast::new().into_unit(),
            TokenisationRecast::new(TokenMethod::Sentence).into_unit(),
            StemmingRecast::default().into_unit(),
            LemmatizationRecast::default().into_unit(),
        ];
        assert_eq!(16, units.len());
        for mut unit in units {
            let name = unit.name();
            assert!(!unit.is_configured());
            assert!(
                matches!(unit.execute(), Err(RecastError::NotConfigured(found)) if found == name),
                "{name} executed without configure"
            );
            unit.configure("ready").unwrap();
            assert!(unit.execute().is_ok(), "{name} failed after configure");
        }
    }

    #[test]
    fn adopting_unconfigured_source_fails(){
        let source = Shout.into_unit();
        let mut target = Shout.into_unit();
        assert!(matches!(target.configure(&source), Err(RecastError::NotConfigured(_))));
        target.configure(Datum::new(vec!["y".to_string()])).unwrap();
        assert_eq!(1, target.datum().count());
    }
}
