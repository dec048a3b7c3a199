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

use log::debug;
use crate::core::error::RecastError;
use crate::core::input::RawText;
use crate::core::output::RecastOutput;
use crate::core::pipeline::TransformNode;
use crate::core::progress::{ProgressBarSink, ProgressSink};
use crate::core::unit::Recast;

/// Runs every node in order, each one on the primary output of the previous one.
/// Nodes are configured with that output even if they were configured before.
///
/// The progress advances by the initial element count after every node,
/// so a run reports `nodes * initial elements` ticks in total.
/// Nodes are neither flattened nor silenced.
pub fn recast_pipeline(
    input: impl Into<RawText>,
    nodes: &mut [TransformNode],
    progress: &mut dyn ProgressSink,
) -> Result<RecastOutput, RecastError> {
    let mut current = input.into().normalize()?;
    let initial = current.len() as u64;
    progress.begin(initial * nodes.len() as u64, "recast_pipeline");
    let node_count = nodes.len();
    let mut last = None;
    for (position, node) in nodes.iter_mut().enumerate() {
        debug!("Batch node {position}: {}", node.name());
        // Always rebinds, a node may already hold data of an earlier run.
        node.configure(current.clone())?;
        let output = node.execute()?;
        match output.primary() {
            Some(primary) => current = primary.to_vec(),
            None if position + 1 < node_count => {
                return Err(RecastError::InvalidElementType(format!(
                    "{} produces tokens and cannot be followed by another node",
                    node.name()
                )));
            }
            None => {}
        }
        progress.advance(initial, Some(node.name()));
        last = Some(output);
    }
    progress.finish();
    Ok(last.unwrap_or(RecastOutput::Text { text: current }))
}

/// [recast_pipeline] with a persistent progress bar on stderr.
pub fn recast_batch(
    input: impl Into<RawText>,
    nodes: &mut [TransformNode],
) -> Result<RecastOutput, RecastError> {
    let mut progress = ProgressBarSink::new(true);
    recast_pipeline(input, nodes, &mut progress)
}
