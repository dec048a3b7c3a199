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

use std::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};

/// Receives the progress of an executing recast.
pub trait ProgressSink {
    /// Starts a new run with [total] expected ticks.
    fn begin(&mut self, total: u64, label: &str);

    /// Advances by [delta] ticks, optionally relabeling the run.
    fn advance(&mut self, delta: u64, label: Option<&str>);

    fn finish(&mut self);
}

/// Swallows every event.
#[derive(Debug, Copy, Clone, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn begin(&mut self, _total: u64, _label: &str) {}

    fn advance(&mut self, _delta: u64, _label: Option<&str>) {}

    fn finish(&mut self) {}
}

/// Draws an indicatif bar on stderr.
#[derive(Debug)]
pub struct ProgressBarSink {
    retain: bool,
    bar: Option<ProgressBar>,
}

impl ProgressBarSink {
    /// If [retain] is set the bar stays visible after [ProgressSink::finish].
    pub fn new(retain: bool) -> Self {
        Self { retain, bar: None }
    }
}

fn make_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.cyan} [{elapsed_precise}] {bar:30} {pos}/{len} ({eta}) {msg}",
        )
        .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_draw_target(ProgressDrawTarget::stderr_with_hz(12));
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

impl ProgressSink for ProgressBarSink {
    fn begin(&mut self, total: u64, label: &str) {
        if let Some(old) = self.bar.take() {
            old.finish_and_clear();
        }
        let bar = make_progress_bar(total);
        bar.set_message(label.to_string());
        self.bar = Some(bar);
    }

    fn advance(&mut self, delta: u64, label: Option<&str>) {
        if let Some(ref bar) = self.bar {
            if let Some(label) = label {
                bar.set_message(label.to_string());
            }
            bar.inc(delta);
        }
    }

    fn finish(&mut self) {
        if let Some(bar) = self.bar.take() {
            if self.retain {
                bar.finish()
            } else {
                bar.finish_and_clear()
            }
        }
    }
}

/// A single observed state of a [RecordedProgress].
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct ProgressEvent {
    pub completed: u64,
    pub total: u64,
    pub label: String,
}

/// Keeps every event, mostly useful to inspect a run afterwards.
#[derive(Debug, Clone, Default)]
pub struct RecordedProgress {
    total: u64,
    completed: u64,
    label: String,
    events: Vec<ProgressEvent>,
    finished: bool,
}

impl RecordedProgress {
    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }

    pub fn completed(&self) -> u64 {
        self.completed
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// All labels in the order they were reported, without the initial one.
    pub fn labels(&self) -> Vec<&str> {
        self.events.iter().skip(1).map(|value| value.label.as_str()).collect()
    }

    fn record(&mut self) {
        self.events.push(ProgressEvent {
            completed: self.completed,
            total: self.total,
            label: self.label.clone(),
        })
    }
}

impl ProgressSink for RecordedProgress {
    fn begin(&mut self, total: u64, label: &str) {
        self.total = total;
        self.completed = 0;
        self.finished = false;
        self.label = label.to_string();
        self.record();
    }

    fn advance(&mut self, delta: u64, label: Option<&str>) {
        self.completed += delta;
        if let Some(label) = label {
            self.label = label.to_string();
        }
        self.record();
    }

    fn finish(&mut self) {
        self.finished = true;
    }
}
