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
use std::io::{self, BufWriter, Read, Write};
use std::process::ExitCode;
use clap::Parser;
use itertools::Itertools;
use log::info;
use recast::core::config::{Configs, RunnerKind};
use recast::core::input::RawText;
use recast::core::output::RecastOutput;
use recast::core::runner::recast_pipeline;
use recast::core::unit::Recast;
use crate::args::{consume_args, ConsumedArgs, OutputFormat, RecastArgs, RunSettings};
use crate::logging::configure_logging;

mod args;
mod logging;

fn main() -> ExitCode {
    match exec_args(RecastArgs::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if log::log_enabled!(log::Level::Error) {
                log::error!("Error: {err:#}");
            } else {
                eprintln!("Error: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn exec_args(args: RecastArgs) -> anyhow::Result<()> {
    match consume_args(args)? {
        ConsumedArgs::RunConfig(settings, configs) => {
            configure_logging(configs.system())?;
            exec(settings, configs)
        }
        ConsumedArgs::ExampleWritten(path) => {
            println!("Wrote the example config to {path}");
            Ok(())
        }
        ConsumedArgs::Nothing => Ok(()),
    }
}

/// Reads the input, runs the configured stages and writes the result.
fn exec(settings: RunSettings, configs: Configs) -> anyhow::Result<()> {
    let input = read_input(&settings)?;
    let pipeline_config = configs.pipeline();
    info!("Run {} stages as {}.", pipeline_config.stages.len(), pipeline_config.runner);
    let output = match pipeline_config.runner {
        RunnerKind::Pipeline => {
            let mut pipeline = pipeline_config.build_pipeline()?;
            pipeline.configure(input)?;
            pipeline.execute()?
        }
        RunnerKind::Batch => {
            let mut nodes = pipeline_config.build_nodes()?;
            let mut progress = pipeline_config.verbosity.progress();
            recast_pipeline(input, &mut nodes, progress.as_mut())?
        }
    };
    match &settings.output {
        None => write_output(io::stdout().lock(), settings.format, &output)?,
        Some(path) => write_output(BufWriter::new(File::create(path)?), settings.format, &output)?,
    }
    info!("Finished {} elements.", output_len(&output));
    Ok(())
}

fn read_input(settings: &RunSettings) -> anyhow::Result<RawText> {
    let content = match &settings.input {
        None => {
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            content
        }
        Some(path) => std::fs::read_to_string(path)?,
    };
    if settings.json_input {
        let value: serde_json::Value = serde_json::from_str(&content)?;
        Ok(RawText::from(value))
    } else {
        Ok(RawText::from(content.lines().map(str::to_string).collect_vec()))
    }
}

fn output_len(output: &RecastOutput) -> usize {
    match output {
        RecastOutput::Tokens { tokens } => tokens.len(),
        other => other.primary().map_or(0, |primary| primary.len()),
    }
}

/// One line per element, tokens of an element are tab separated.
fn render_lines(output: &RecastOutput) -> Vec<String> {
    match output {
        RecastOutput::Tokens { tokens } => tokens.iter().map(|value| value.join("\t")).collect(),
        other => other.primary().map(<[String]>::to_vec).unwrap_or_default(),
    }
}

fn write_output<W: Write>(mut writer: W, format: OutputFormat, output: &RecastOutput) -> anyhow::Result<()> {
    match format {
        OutputFormat::Lines => {
            for line in render_lines(output) {
                writeln!(writer, "{line}")?;
            }
        }
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut writer, output)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;
    Ok(())
}
