//! Command-line arguments for the `cloud-invoker` diagnostic binary.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand, ValueEnum};

use crate::catcher::Catcher;
use crate::error::ConfigError;
use crate::provider::THROTTLING;
use crate::retry::Invoker;

#[derive(Debug, Parser, Clone)]
#[command(
    name = "cloud-invoker",
    version,
    about = "Inspect retry behaviour and provider helper output"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    #[arg(long, global = true, default_value_t = false)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Print an idempotency token for an API action.
    Token {
        #[arg(long)]
        action: String,
    },
    /// Split a composite resource id.
    ParseId {
        #[arg(long)]
        id: String,

        #[arg(long, default_value_t = 2)]
        parts: usize,
    },
    /// Check whether two template files are semantically equal.
    Compare {
        #[arg(long, value_enum, default_value_t = TemplateFormat::Json)]
        format: TemplateFormat,

        first: PathBuf,
        second: PathBuf,
    },
    /// Run a scripted failing operation through an invoker.
    Simulate(SimulateArgs),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TemplateFormat {
    Json,
    Yaml,
}

#[derive(Debug, clap::Args, Clone)]
pub struct SimulateArgs {
    /// Reason the catcher retries on.
    #[arg(long, default_value = THROTTLING)]
    pub reason: String,

    /// Error code the operation fails with; defaults to the reason.
    #[arg(long)]
    pub code: Option<String>,

    #[arg(long, default_value_t = 3)]
    pub failures: u32,

    #[arg(long, default_value_t = 10)]
    pub retries: u32,

    #[arg(long, default_value_t = 100)]
    pub wait_ms: u64,

    #[arg(long)]
    pub deadline_ms: Option<u64>,
}

#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub code: String,
    pub failures: u32,
    pub catcher: Catcher,
    pub deadline: Option<Duration>,
}

impl SimulateConfig {
    pub fn invoker(&self) -> Invoker {
        let invoker = Invoker::empty().with_catcher(self.catcher.clone());
        match self.deadline {
            Some(deadline) => invoker.with_deadline(deadline),
            None => invoker,
        }
    }
}

impl SimulateArgs {
    pub fn into_config(self) -> Result<SimulateConfig, ConfigError> {
        let reason = self.reason.trim().to_string();
        if reason.is_empty() {
            return Err(ConfigError::Empty { field: "reason" });
        }
        validate_range("failures", u64::from(self.failures), 0, 1000)?;
        validate_range("retries", u64::from(self.retries), 0, 1000)?;
        validate_range("wait-ms", self.wait_ms, 0, 60_000)?;
        if let Some(deadline_ms) = self.deadline_ms {
            validate_range("deadline-ms", deadline_ms, 1, u64::MAX)?;
        }

        let code = match self.code {
            Some(code) if !code.trim().is_empty() => code.trim().to_string(),
            Some(_) => return Err(ConfigError::Empty { field: "code" }),
            None => reason.clone(),
        };

        Ok(SimulateConfig {
            code,
            failures: self.failures,
            catcher: Catcher::with_wait(reason, self.retries, Duration::from_millis(self.wait_ms)),
            deadline: self.deadline_ms.map(Duration::from_millis),
        })
    }
}

fn validate_range(field: &'static str, actual: u64, min: u64, max: u64) -> Result<(), ConfigError> {
    if actual < min || actual > max {
        return Err(ConfigError::OutOfRange {
            field,
            min,
            max,
            actual,
        });
    }
    Ok(())
}
