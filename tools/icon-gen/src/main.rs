use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use types::IconConfig;

/// Generate the PWA icon set and favicon into `public/`
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {}

fn main() -> Result<()> {
    let _args = Args::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .target(env_logger::Target::Stdout)
        .init();

    let config = IconConfig::default();
    let report = icon_gen::generate(&config)
        .with_context(|| format!("generating icons into {}", config.output_dir.display()))?;

    debug!(
        "manifest icons: {}",
        serde_json::to_string_pretty(&config.manifest_icons("/icons"))?
    );
    debug!(
        "wrote {} icons; favicon {}",
        report.icons.len(),
        if report.favicon.is_ok() { "ok" } else { "skipped" }
    );
    Ok(())
}
