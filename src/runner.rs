// In: src/runner.rs

//! The file-level runner: reads the input, runs one codec action, writes the
//! output, and reports the run's counters.
//!
//! The output file is only created once the codec has produced its bytes, so a
//! corrupt input never leaves a half-written output behind.

use std::fs;
use std::io::Write;
use std::path::Path;

use crate::bridge::{self, CodecOutput, RunStats};
use crate::config::{Action, ReportFormat, RunConfig};
use crate::error::HuffpackError;

/// Reads the whole file at `path`.
pub fn read_all_bytes(path: &Path) -> Result<Vec<u8>, HuffpackError> {
    fs::read(path).map_err(|source| HuffpackError::InputFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Creates (or truncates) `path` and writes `bytes` to it.
pub fn write_all_bytes(path: &Path, bytes: &[u8]) -> Result<(), HuffpackError> {
    fs::write(path, bytes).map_err(|source| HuffpackError::OutputFile {
        path: path.to_path_buf(),
        source,
    })
}

/// Writes the three counters to `sink` in the requested format.
pub fn report<W: Write>(
    sink: &mut W,
    stats: &RunStats,
    format: ReportFormat,
) -> Result<(), HuffpackError> {
    match format {
        ReportFormat::Plain => {
            writeln!(sink, "{}", stats.initial_size)?;
            writeln!(sink, "{}", stats.processed_size)?;
            writeln!(sink, "{}", stats.aux_size)?;
        }
        ReportFormat::Json => {
            serde_json::to_writer(&mut *sink, stats)?;
            writeln!(sink)?;
        }
    }
    sink.flush()?;
    Ok(())
}

/// Executes one configured run.
#[derive(Debug, Clone)]
pub struct Runner {
    config: RunConfig,
}

impl Runner {
    pub fn new(config: RunConfig) -> Self {
        Runner { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Runs the configured action and reports to `sink`.
    pub fn execute<W: Write>(&self, sink: &mut W) -> Result<RunStats, HuffpackError> {
        let config = &self.config;
        if log::log_enabled!(log::Level::Debug) {
            log::debug!(
                "Run configuration: {}",
                serde_json::to_string(config).unwrap_or_else(|e| e.to_string())
            );
        }

        let data = read_all_bytes(&config.input)?;
        let CodecOutput { bytes, stats } = match config.action {
            Action::Encode => bridge::encode(&data),
            Action::Decode => bridge::decode(&data)?,
        };
        write_all_bytes(&config.output, &bytes)?;

        log::info!(
            "{:?} {} -> {}: initial={} processed={} aux={}",
            config.action,
            config.input.display(),
            config.output.display(),
            stats.initial_size,
            stats.processed_size,
            stats.aux_size
        );

        report(sink, &stats, config.report)?;
        Ok(stats)
    }
}
