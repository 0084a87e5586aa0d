use std::sync::Arc;
use std::time::Duration;

use spdlog::sink::{RotatingFileSink, RotationPolicy, StdStream, StdStreamSink};
use spdlog::{Level, LevelFilter, Logger, LoggerBuilder};

use crate::config::{Config, LogLevel};

impl From<LogLevel> for Level {
    fn from(value: LogLevel) -> Self {
        match value {
            LogLevel::Critical => Level::Critical,
            LogLevel::Error => Level::Error,
            LogLevel::Warn => Level::Warn,
            LogLevel::Info => Level::Info,
            LogLevel::Debug => Level::Debug,
            LogLevel::Trace => Level::Trace,
        }
    }
}

/// Where console logs may go. Stdout is off limits while it carries the posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleOutput {
    /// Warnings and errors on stderr, the rest on stdout
    Split,
    /// Everything on stderr
    StderrOnly,
}

fn console_routes(output: ConsoleOutput) -> Vec<(StdStream, LevelFilter)> {
    match output {
        ConsoleOutput::Split => vec![
            (StdStream::Stdout, LevelFilter::MoreVerbose(Level::Warn)),
            (StdStream::Stderr, LevelFilter::MoreSevereEqual(Level::Warn)),
        ],
        ConsoleOutput::StderrOnly => vec![(StdStream::Stderr, LevelFilter::All)],
    }
}

fn add_console_sinks(builder: &mut LoggerBuilder, output: ConsoleOutput) -> spdlog::Result<()> {
    for (stream, level_filter) in console_routes(output) {
        let sink = Arc::new(StdStreamSink::builder()
            .std_stream(stream)
            .level_filter(level_filter)
            .build()?);
        builder.sink(sink);
    }

    Ok(())
}

/// Replaces the default logger when the configuration has a `[log]` section, or when
/// stdout is reserved for the output. Without a location only the console sinks are used.
pub fn configure_logger(config: &Config, output: ConsoleOutput) -> spdlog::Result<()> {
    let Some(ref log) = config.log else {
        if output == ConsoleOutput::Split {
            return Ok(());
        }
        let mut builder = Logger::builder();
        add_console_sinks(&mut builder, output)?;
        let logger = Arc::new(builder.build()?);
        logger.set_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
        spdlog::set_default_logger(logger);
        return Ok(());
    };

    let mut builder = Logger::builder();

    if let Some(ref location) = log.location {
        let daily_sink = Arc::new(RotatingFileSink::builder()
            .base_path(location)
            .rotation_policy(RotationPolicy::Daily { hour: 0, minute: 0 })
            .max_files(60)
            .rotate_on_open(false)
            .build()?);
        builder.sink(daily_sink);
    }

    if log.log_to_console || log.location.is_none() {
        add_console_sinks(&mut builder, output)?;
    }

    let logger = Arc::new(builder.build()?);
    logger.set_flush_level_filter(LevelFilter::MoreSevereEqual(Level::Info));
    logger.set_flush_period(Some(Duration::from_secs(2)));
    logger.set_level_filter(LevelFilter::MoreSevereEqual(log.level.into()));

    spdlog::set_default_logger(logger);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stdout_reserved_routes_everything_to_stderr() {
        let routes = console_routes(ConsoleOutput::StderrOnly);
        assert!(routes.iter().all(|(stream, _)| *stream == StdStream::Stderr));
        for level in Level::iter() {
            assert!(routes.iter().any(|(_, filter)| filter.test(level)), "{:?} is dropped", level);
        }
    }

    #[test]
    fn test_split_routes() {
        let routes = console_routes(ConsoleOutput::Split);
        for level in Level::iter() {
            let streams: Vec<StdStream> = routes.iter()
                .filter(|(_, filter)| filter.test(level))
                .map(|(stream, _)| *stream)
                .collect();
            let expected = if matches!(level, Level::Critical | Level::Error | Level::Warn) { StdStream::Stderr } else { StdStream::Stdout };
            assert_eq!(streams, [expected], "{:?}", level);
        }
    }
}
