// In: src/config.rs

//! The single source of truth for a huffpack run's configuration.
//!
//! A `RunConfig` is created once at the application boundary (the CLI, or a
//! caller embedding the runner) and handed to the `Runner`. It is assembled
//! through `RunConfigBuilder`, which enforces that exactly one action, one input
//! and one output are given.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HuffpackError;

/// Environment variable that selects the report format.
pub const REPORT_ENV_VAR: &str = "HUFFPACK_REPORT";

//==================================================================================
// I. Core Configuration Enums & Structs
//==================================================================================

/// The codec direction of a run.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Compress the input (`-c`).
    Encode,
    /// Decompress the input (`-u`).
    Decode,
}

/// How the run's three counters are written to the report sink.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReportFormat {
    /// **Default:** three lines, `initial_size`, `processed_size`, `aux_size`.
    #[default]
    Plain,

    /// A single JSON object with the same three fields.
    Json,
}

impl ReportFormat {
    /// Parses a format name, case-insensitively. Unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "plain" => Some(ReportFormat::Plain),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }

    /// Reads `HUFFPACK_REPORT`, falling back to `Plain` when unset or unknown.
    pub fn from_env() -> Self {
        match std::env::var(REPORT_ENV_VAR) {
            Ok(value) => Self::parse(&value).unwrap_or_else(|| {
                log::warn!(
                    "Ignoring unknown {} value '{}', using plain reports",
                    REPORT_ENV_VAR,
                    value
                );
                ReportFormat::Plain
            }),
            Err(_) => ReportFormat::Plain,
        }
    }
}

/// A validated run configuration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub action: Action,
    pub input: PathBuf,
    pub output: PathBuf,
    #[serde(default)]
    pub report: ReportFormat,
}

impl RunConfig {
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }
}

//==================================================================================
// II. Builder
//==================================================================================

/// Collects run settings one at a time and rejects duplicates as they arrive.
#[derive(Debug, Clone, Default)]
pub struct RunConfigBuilder {
    action: Option<Action>,
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    report: ReportFormat,
}

impl RunConfigBuilder {
    pub fn set_action(&mut self, action: Action) -> Result<&mut Self, HuffpackError> {
        if self.action.is_some() {
            return Err(HuffpackError::MultipleActions);
        }
        self.action = Some(action);
        Ok(self)
    }

    pub fn set_input(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, HuffpackError> {
        if self.input.is_some() {
            return Err(HuffpackError::MultipleInputs);
        }
        self.input = Some(path.as_ref().to_path_buf());
        Ok(self)
    }

    pub fn set_output(&mut self, path: impl AsRef<Path>) -> Result<&mut Self, HuffpackError> {
        if self.output.is_some() {
            return Err(HuffpackError::MultipleOutputs);
        }
        self.output = Some(path.as_ref().to_path_buf());
        Ok(self)
    }

    pub fn report(&mut self, report: ReportFormat) -> &mut Self {
        self.report = report;
        self
    }

    /// Checks the input, then the output, then the action.
    pub fn build(&self) -> Result<RunConfig, HuffpackError> {
        let input = self.input.clone().ok_or(HuffpackError::NoInput)?;
        let output = self.output.clone().ok_or(HuffpackError::NoOutput)?;
        let action = self.action.ok_or(HuffpackError::NoAction)?;
        Ok(RunConfig {
            action,
            input,
            output,
            report: self.report,
        })
    }
}

//==================================================================================
// III. Unit Tests
//==================================================================================
