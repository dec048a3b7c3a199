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

use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Logger, Root};
use log4rs::encode::pattern::PatternEncoder;
use log4rs::{Config, Handle};
use log::LevelFilter;
use recast::core::config::SystemConfig;

const LOG_PATTERN: &str = "{l};{I} - {d} - {m}{n}";

/// The file used when logging to a file is enabled.
pub const LOG_FILE: &str = "log/recast.log";

/// Builds the log config, either to stderr or to [LOG_FILE].
pub fn logging_config(system: &SystemConfig) -> anyhow::Result<Config> {
    let config = Config::builder();

    let config = if system.log_to_file {
        let file_logger = FileAppender::builder()
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build(LOG_FILE)?;
        config.appender(Appender::builder().build("out", Box::new(file_logger)))
    } else {
        let console_logger = ConsoleAppender::builder()
            .target(Target::Stderr)
            .encoder(Box::new(PatternEncoder::new(LOG_PATTERN)))
            .build();
        config.appender(Appender::builder().build("out", Box::new(console_logger)))
    };

    Ok(
        config
            .logger(Logger::builder().build("recast", system.log_level))
            .build(Root::builder().appender("out").build(LevelFilter::Warn))?
    )
}

pub fn configure_logging(system: &SystemConfig) -> anyhow::Result<Handle> {
    Ok(log4rs::init_config(logging_config(system)?)?)
}

#[cfg(test)]
mod test {
    use log::LevelFilter;
    use recast::core::config::SystemConfig;
    use crate::logging::logging_config;

    #[test]
    fn recast_logger_uses_configured_level(){
        let config = logging_config(&SystemConfig { log_level: LevelFilter::Trace, log_to_file: false }).unwrap();
        let logger = config.loggers().iter().find(|logger| logger.name() == "recast").unwrap();
        assert_eq!(LevelFilter::Trace, logger.level());
        assert_eq!(LevelFilter::Warn, config.root().level());
        assert_eq!(1, config.appenders().len());
    }
}
