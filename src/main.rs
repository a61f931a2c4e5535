//! `cloud-invoker` diagnostic binary.

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use cloud_invoker::cli::{CliArgs, Command, SimulateConfig, TemplateFormat};
use cloud_invoker::id::{build_client_token, parse_resource_id};
use cloud_invoker::provider::ProviderError;
use cloud_invoker::template::{compare_json_templates, compare_yaml_templates};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.verbose);

    match args.command {
        Command::Token { action } => {
            println!("{}", build_client_token(&action));
        }
        Command::ParseId { id, parts } => {
            for part in parse_resource_id(&id, parts)? {
                println!("{part}");
            }
        }
        Command::Compare {
            format,
            first,
            second,
        } => {
            let equal = compare_files(format, &first, &second)?;
            println!("{}", if equal { "equivalent" } else { "different" });
        }
        Command::Simulate(simulate) => {
            let config = simulate.into_config()?;
            run_simulation(&config).await?;
        }
    }

    Ok(())
}

fn compare_files(format: TemplateFormat, first: &Path, second: &Path) -> Result<bool> {
    let a = std::fs::read_to_string(first)
        .with_context(|| format!("failed to read {}", first.display()))?;
    let b = std::fs::read_to_string(second)
        .with_context(|| format!("failed to read {}", second.display()))?;

    let equal = match format {
        TemplateFormat::Json => compare_json_templates(&a, &b),
        TemplateFormat::Yaml => compare_yaml_templates(&a, &b),
    }
    .context("failed to compare templates")?;

    Ok(equal)
}

async fn run_simulation(config: &SimulateConfig) -> Result<()> {
    let invoker = config.invoker();
    let mut calls = 0_u32;

    let result = invoker
        .run_async(|| {
            calls += 1;
            let attempt = calls;
            let code = config.code.clone();
            let failures = config.failures;
            async move {
                let outcome: Result<u32> = if attempt <= failures {
                    Err(ProviderError::new(code, format!("scripted failure {attempt}")).into())
                } else {
                    Ok(attempt)
                };
                outcome
            }
        })
        .await;

    match result {
        Ok(attempt) => {
            info!(attempts = attempt, "operation succeeded");
            println!("succeeded after {attempt} attempt(s)");
            Ok(())
        }
        Err(err) => {
            warn!(attempts = calls, error = %err, "operation failed");
            Err(err).context(format!("operation failed after {calls} attempt(s)"))
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        tracing_subscriber::EnvFilter::new("info,cloud_invoker=debug")
    } else {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .try_init();
}
