//! Startup validation
//!
//! Soft checks run once before the listener starts. Problems are reported as
//! warnings and never stop the process.

use std::fmt;

use crate::config::PipelineConfig;
use crate::pipeline::PipelineKind;

/// A non-fatal problem found at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupWarning {
    /// The LLM credential variable is unset or empty
    MissingCredential { var: String },
    /// The command provider has no program for an operation
    MissingCommand { operation: &'static str },
}

impl fmt::Display for StartupWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupWarning::MissingCredential { var } => write!(
                f,
                "{} not set in environment. Ensure the env var exists before asking questions.",
                var
            ),
            StartupWarning::MissingCommand { operation } => write!(
                f,
                "no {} command configured; requests to it will fail",
                operation
            ),
        }
    }
}

/// Check the process environment against `config`
pub fn check_environment(config: &PipelineConfig) -> Vec<StartupWarning> {
    check_with(config, |var| std::env::var(var).ok())
}

fn check_with(
    config: &PipelineConfig,
    lookup: impl Fn(&str) -> Option<String>,
) -> Vec<StartupWarning> {
    let mut warnings = Vec::new();

    let credential = lookup(&config.credential_env);
    if credential.map_or(true, |v| v.trim().is_empty()) {
        warnings.push(StartupWarning::MissingCredential {
            var: config.credential_env.clone(),
        });
    }

    if matches!(PipelineKind::parse(&config.provider), Ok(PipelineKind::Command)) {
        if config.ask_command.is_empty() {
            warnings.push(StartupWarning::MissingCommand { operation: "ask" });
        }
        if config.build_command.is_empty() {
            warnings.push(StartupWarning::MissingCommand { operation: "build" });
        }
    }

    warnings
}

/// Run the checks and log each warning
pub fn log_warnings(config: &PipelineConfig) -> usize {
    let warnings = check_environment(config);
    for warning in &warnings {
        tracing::warn!(kind = ?warning, "{}", warning);
    }
    warnings.len()
}
