//! Replay a recorded event script and print the resulting poses as JSON
//!
//! Without `--models`, every catalog entry resolves to a placeholder asset.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

use ar_viewer::{
    DirectoryLoader, MemoryLoader, ModelLoader, ReplayScript, Replayer, Viewer, ViewerConfig,
};

/// Replay a recorded event script and print the resulting poses as JSON
#[derive(Parser)]
#[command(name = "ar-replay", version)]
struct Args {
    /// RON event script
    script: PathBuf,

    /// Viewer config (RON); defaults apply when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory of `<model_id>.usdz` assets
    #[arg(long)]
    models: Option<PathBuf>,
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => ViewerConfig::load(path)?,
        None => ViewerConfig::default(),
    };

    let loader: Box<dyn ModelLoader> = match &args.models {
        Some(dir) => Box::new(DirectoryLoader::new(dir)),
        None => Box::new(MemoryLoader::with_placeholders(
            config.catalog.iter().map(|entry| entry.model_id.as_str()),
        )),
    };

    let script = ReplayScript::load(&args.script)?;
    tracing::info!(
        "Replaying {} steps from {:?}",
        script.steps.len(),
        args.script
    );

    let mut replayer = Replayer::new(Viewer::new(config), loader.as_ref());
    let report = replayer.run(&script)?;
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ar_viewer=debug,ar_core=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Replay failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_parse_script_and_options() {
        let args = Args::try_parse_from([
            "ar-replay",
            "demos/place_and_manipulate.ron",
            "--config",
            "demos/viewer.ron",
            "--models",
            "assets",
        ])
        .unwrap();
        assert_eq!(args.script, PathBuf::from("demos/place_and_manipulate.ron"));
        assert_eq!(args.config, Some(PathBuf::from("demos/viewer.ron")));
        assert_eq!(args.models, Some(PathBuf::from("assets")));
    }

    #[test]
    fn test_missing_script_or_option_value_is_rejected() {
        assert!(Args::try_parse_from(["ar-replay"]).is_err());
        assert!(Args::try_parse_from(["ar-replay", "script.ron", "--config"]).is_err());
        assert!(Args::try_parse_from(["ar-replay", "script.ron", "--verbose"]).is_err());
    }
}
