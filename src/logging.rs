/*
 *   Copyright (c) 2024 R3BL LLC
 *   All rights reserved.
 *
 *   Licensed under the Apache License, Version 2.0 (the "License");
 *   you may not use this file except in compliance with the License.
 *   You may obtain a copy of the License at
 *
 *   http://www.apache.org/licenses/LICENSE-2.0
 *
 *   Unless required by applicable law or agreed to in writing, software
 *   distributed under the License is distributed on an "AS IS" BASIS,
 *   WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
 *   See the License for the specific language governing permissions and
 *   limitations under the License.
 */

//! Optional `tracing` setup for diagnosing the editor loop: dispatch decisions,
//! raw-mode transitions, and signal delivery all go through `tracing::trace!`/
//! `debug!` call sites elsewhere in this crate. Wiring up a subscriber is opt-in —
//! nothing in `Editor` requires one to be installed.

use std::path::PathBuf;

use tracing_core::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

/// Where log lines go. Pairing a destination with a file (`StdoutAndFile`/
/// `StderrAndFile`) is the common case during development: a clean terminal plus a
/// full trace left on disk to inspect after the fact.
#[derive(Debug, Clone)]
pub enum LogDestination {
    Stdout,
    Stderr,
    File(String),
    StdoutAndFile(String),
    StderrAndFile(String),
}

/// Configuration for [`init`]. The `Default` impl logs at `INFO` to stderr, so a
/// caller that just wants *something* can call `logging::init(Default::default())`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub destination: LogDestination,
    pub level: tracing::Level,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { destination: LogDestination::Stderr, level: tracing::Level::INFO }
    }
}

impl LoggingConfig {
    fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_level(self.level)
    }
}

macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .without_time()
            .with_thread_ids(false)
            .with_target(false)
            .with_file(false)
            .with_line_number(false)
    };
}

type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Installs a global `tracing` subscriber per `config`. Only the first call in a
/// process wins anything meaningful — `tracing` itself only allows one global
/// default subscriber, so calling this twice returns an error from the underlying
/// `try_init`, surfaced here as an `io::Error` rather than panicking.
pub fn init(config: LoggingConfig) -> std::io::Result<()> {
    let level_filter = config.level_filter();
    let mut layers: Vec<Box<DynLayer<tracing_subscriber::Registry>>> = vec![Box::new(level_filter)];

    match &config.destination {
        LogDestination::Stdout => layers.push(display_layer(std::io::stdout, level_filter)),
        LogDestination::Stderr => layers.push(display_layer(std::io::stderr, level_filter)),
        LogDestination::File(path) => layers.push(file_layer(path, level_filter)?),
        LogDestination::StdoutAndFile(path) => {
            layers.push(display_layer(std::io::stdout, level_filter));
            layers.push(file_layer(path, level_filter)?);
        }
        LogDestination::StderrAndFile(path) => {
            layers.push(display_layer(std::io::stderr, level_filter));
            layers.push(file_layer(path, level_filter)?);
        }
    }

    tracing_subscriber::registry()
        .with(layers)
        .try_init()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
}

fn display_layer<S, W>(writer: W, level_filter: LevelFilter) -> Box<DynLayer<S>>
where
    S: tracing_core::Subscriber,
    for<'a> S: tracing_subscriber::registry::LookupSpan<'a>,
    W: for<'w> tracing_subscriber::fmt::MakeWriter<'w> + Send + Sync + 'static,
{
    Box::new(create_fmt!().with_writer(writer).with_filter(level_filter))
}

fn file_layer<S>(path_str: &str, level_filter: LevelFilter) -> std::io::Result<Box<DynLayer<S>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: tracing_subscriber::registry::LookupSpan<'a>,
{
    let path = PathBuf::from(path_str);
    let parent = path.parent().filter(|p| !p.as_os_str().is_empty()).unwrap_or_else(|| std::path::Path::new("."));
    let file_name = path.file_name().ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("no file name in log path {path_str:?}"))
    })?;
    let appender = tracing_appender::rolling::never(parent, file_name);
    Ok(Box::new(create_fmt!().with_ansi(false).with_writer(appender).with_filter(level_filter)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_logs_to_stderr_at_info() {
        let config = LoggingConfig::default();
        assert!(matches!(config.destination, LogDestination::Stderr));
        assert_eq!(config.level, tracing::Level::INFO);
    }

    #[test]
    fn file_layer_rejects_a_path_with_no_file_name() {
        let err = file_layer::<tracing_subscriber::Registry>("/", LevelFilter::INFO).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    }
}
