//! Configuration management commands.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CONFIG_FILE_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Path => show_path(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_path {
        Some(path) => ctx.output.debug(&format!("Loaded from {}", path.display())),
        None => ctx.output.debug("No config file found, using defaults"),
    }

    ctx.output
        .raw(ctx.config.to_toml()?.trim_end())
        .context("Failed to write to stdout")?;

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_FILE_NAMES[0]);

    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    tokio::fs::write(&path, generate_default_config())
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    ctx.output
        .success(&format!("Created {}", path.display()));
    Ok(())
}

async fn show_path(ctx: &Context) -> Result<()> {
    match &ctx.config_path {
        Some(path) => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "path": path }));
            } else {
                println!("{}", path.display());
            }
        }
        None => {
            if ctx.output.is_json() {
                ctx.output.json(&serde_json::json!({ "path": null }));
            } else {
                ctx.output.warn("No config file found, using defaults");
            }
        }
    }
    Ok(())
}
