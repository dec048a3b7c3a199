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

use camino::{Utf8Path, Utf8PathBuf};
use clap::{Parser, Subcommand, ValueEnum};
use strum::Display;
use recast::core::config::{ConfigError, Configs, RunnerKind};

/// The name of the exported example config.
pub const EXAMPLE_CONFIG_NAME: &str = "recast.example.yaml";

#[derive(Parser, Debug, Default)]
#[command(author, version, about, long_about = None)]
/// Composable text normalization
pub struct RecastArgs {
    /// Writes an exemplary config to the working directory
    #[arg(long)]
    pub generate_example_config: bool,

    /// The mode of recast
    #[command(subcommand)]
    pub mode: Option<RunMode>,
}

#[derive(Subcommand, Debug)]
pub enum RunMode {
    /// Runs the configured stages over a file or stdin.
    Run {
        /// The config file, if not set recast.yaml, recast.yml or recast.json are looked up.
        #[arg(short, long)]
        config: Option<String>,
        /// The input file, one element per line. Reads stdin if not set.
        #[arg(short, long)]
        input: Option<String>,
        /// The input is a json document, an array, a nested array or an object of columns.
        #[arg(long)]
        json_input: bool,
        /// The output file. Writes to stdout if not set.
        #[arg(short, long)]
        output: Option<String>,
        /// lines writes the primary output, tokens are tab separated. json writes everything.
        #[arg(long, value_enum, default_value_t = OutputFormat::Lines)]
        format: OutputFormat,
        /// Overrides the runner from the config.
        #[arg(long, value_enum)]
        runner: Option<RunnerKind>,
        /// Overrides the log level from the config.
        #[arg(long)]
        override_log_level: Option<log::LevelFilter>,
        /// Log to file
        #[arg(long)]
        log_to_file: bool,
    },
}

#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Display, ValueEnum)]
#[strum(serialize_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Lines,
    Json,
}

/// Where to read and write for a run.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct RunSettings {
    pub input: Option<Utf8PathBuf>,
    pub json_input: bool,
    pub output: Option<Utf8PathBuf>,
    pub format: OutputFormat,
}

#[derive(Debug)]
pub enum ConsumedArgs {
    RunConfig(RunSettings, Configs),
    ExampleWritten(Utf8PathBuf),
    Nothing,
}

/// Consumes the args and returns everything necessary to execute recast
pub(crate) fn consume_args(args: RecastArgs) -> Result<ConsumedArgs, ConfigError> {
    if let Some(mode) = args.mode {
        match mode {
            RunMode::Run { config, input, json_input, output, format, runner, override_log_level, log_to_file } => {
                let mut configs = match config {
                    None => Configs::discover_or_default(),
                    Some(path) => Configs::load(path)?,
                };

                if let Some(runner) = runner {
                    configs.pipeline.runner = runner;
                }

                if let Some(log_level) = override_log_level {
                    configs.system.log_level = log_level;
                }

                configs.system.log_to_file |= log_to_file;

                Ok(ConsumedArgs::RunConfig(
                    RunSettings {
                        input: input.map(Utf8PathBuf::from),
                        json_input,
                        output: output.map(Utf8PathBuf::from),
                        format,
                    },
                    configs,
                ))
            }
        }
    } else if args.generate_example_config {
        Ok(ConsumedArgs::ExampleWritten(export_example_config(".")?))
    } else {
        Ok(ConsumedArgs::Nothing)
    }
}

/// Writes [Configs::example] to [EXAMPLE_CONFIG_NAME] in [folder].
pub(crate) fn export_example_config<P: AsRef<Utf8Path>>(folder: P) -> Result<Utf8PathBuf, ConfigError> {
    let path = folder.as_ref().join(EXAMPLE_CONFIG_NAME);
    std::fs::write(&path, Configs::example().to_yaml()?)?;
    Ok(path)
}
