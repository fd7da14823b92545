mod sync;

use clap::Parser;
use localesync_core::{config, overrides::Overrides, store, store::Mapping};
use localesync_providers::google::GoogleTranslator;
use sync::SyncEngine;
use tracing::{info, warn};

#[derive(Parser)]
#[command(
    name = "localesync",
    version,
    about = "Keep a translated locale file in sync with its source-language file"
)]
struct Cli {
    /// Path to config file.
    #[arg(short, long, default_value = "localesync.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (cfg, config_err) = config::load_or_default(&cli.config);

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.sync.log_level)),
        )
        .init();

    match (&config_err, &cfg.origin) {
        (Some(e), _) => warn!("{e}; using defaults"),
        (None, Some(path)) => info!("loaded config from {}", path.display()),
        (None, None) => info!("config file not found at {}, using defaults", cli.config),
    }

    let source_path = cfg.source_path();
    let target_path = cfg.target_path();
    let snapshot_path = cfg.snapshot_path();

    let source = store::load(&source_path, Mapping::new());
    let existing_target = store::load(&target_path, Mapping::new());
    let existing_snapshot = store::load(&snapshot_path, Mapping::new());

    let translator = GoogleTranslator::from_config(&cfg.translate)?;
    let overrides = Overrides::with_builtin(&cfg.overrides);

    let outcome = SyncEngine::new(&translator, &overrides)
        .with_pace(cfg.pace())
        .run(&source, &existing_target, &existing_snapshot)
        .await;

    // Target before snapshot: a stale snapshot only triggers re-translation.
    store::save(&target_path, &outcome.target)?;
    store::save(&snapshot_path, &outcome.snapshot)?;

    println!(
        "{} sync complete: {}",
        cfg.translate.target_lang, outcome.stats
    );
    Ok(())
}
