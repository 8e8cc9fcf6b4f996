use anyhow::{Context, Result};

use crate::{
    app::{init_config, load_config, Config},
    probe::{ProbeCheck, ProbeTarget, VertexProbe},
    runtime::{format_report, ProbeRunner},
};

use super::{Cli, Commands};

/// Handle CLI subcommands
///
/// Returns `false` when a probe ran and failed.
pub async fn handle_command(cli: &Cli) -> Result<bool> {
    let command = cli
        .command
        .clone()
        .unwrap_or(Commands::All { model: None });

    match command {
        Commands::Init => {
            let path = init_config()?;
            println!("Configuration ready at: {}", path.display());
            Ok(true)
        }
        Commands::Version => {
            show_version();
            Ok(true)
        }
        Commands::Connect => run_checks(cli, &[ProbeCheck::Connect], None).await,
        Commands::Generate { model } => run_checks(cli, &[ProbeCheck::Generate], model).await,
        Commands::All { model } => {
            run_checks(cli, &[ProbeCheck::Connect, ProbeCheck::Generate], model).await
        }
    }
}

/// Show version information
pub fn show_version() {
    println!("vertex-probe v{}", env!("CARGO_PKG_VERSION"));
    println!("   Connectivity and generation checks for Vertex AI");
}

async fn run_checks(cli: &Cli, checks: &[ProbeCheck], model: Option<String>) -> Result<bool> {
    let config = load_config(cli.config.as_deref())?;

    let env_token = std::env::var(&config.vertex.token_env).ok();
    let target = resolve_target(cli, &config, env_token)?;
    let model = model.unwrap_or_else(|| config.vertex.model.clone());

    let mut probe = VertexProbe::new().context("Failed to build HTTP client")?;
    if let Some(base_url) = resolve_base_url(cli, &config) {
        probe = probe.with_base_url(base_url);
    }

    tracing::info!(?target, ?checks, model = %model, "running probes");
    let report = ProbeRunner::new(probe)
        .run(checks, &target, Some(&model))
        .await;

    println!("{}", format_report(&report, cli.output_format));
    Ok(report.all_passed())
}

/// Endpoint override: `--base-url` first, then `vertex.base_url`
pub fn resolve_base_url(cli: &Cli, config: &Config) -> Option<String> {
    cli.base_url
        .clone()
        .or_else(|| config.vertex.base_url.clone())
}

/// Combine CLI flags, configuration and the token variable into a target
///
/// CLI flags win over configuration. Fails before any request when the
/// project or token is missing.
pub fn resolve_target(cli: &Cli, config: &Config, env_token: Option<String>) -> Result<ProbeTarget> {
    let project = cli
        .project
        .clone()
        .or_else(|| config.vertex.project.clone())
        .filter(|p| !p.is_empty())
        .context("No project configured. Pass --project or set vertex.project")?;

    let location = cli
        .location
        .clone()
        .unwrap_or_else(|| config.vertex.location.clone());

    let token = cli
        .token
        .clone()
        .or(env_token)
        .filter(|t| !t.is_empty())
        .with_context(|| {
            format!(
                "No bearer token. Pass --token or set {}",
                config.vertex.token_env
            )
        })?;

    Ok(ProbeTarget::new(project, location, token))
}
