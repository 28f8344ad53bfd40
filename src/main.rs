use anyhow::Result;
use clap::Parser;
use ecosim_core::config::AppConfig;
use ecosim_lib::app::{App, OutputFormat, RunOptions};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Custom config file path
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Stop after this many ticks
    #[arg(short, long)]
    ticks: Option<u64>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Season applied to every environment before the first tick
    #[arg(long)]
    season: Option<String>,

    /// Per-tick output format
    #[arg(short, long, value_enum, default_value = "text")]
    output: OutputFormat,

    /// Default log level when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Run ticks back to back instead of on the interval
    #[arg(long)]
    fast: bool,

    /// Breed one animal of this kind before the first tick (repeatable)
    #[arg(long)]
    breed: Vec<String>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let args = Args::parse();
    ecosim_core::init_logging(&args.log_level);

    let mut config = AppConfig::load(&args.config)?;
    if args.seed.is_some() {
        config.world.seed = args.seed;
    }
    tracing::info!(fingerprint = %config.fingerprint(), "Configuration loaded");

    let mut app = match App::new(config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Failed to build the world: {e}");
            eprintln!("Hint: {}", e.suggestion());
            return Err(e.into());
        }
    };

    if let Some(season) = &args.season {
        let born = app.select_season(season)?;
        tracing::info!(%season, births = born.len(), "Season selected");
    }
    for label in &args.breed {
        match app.breed(label)? {
            Some(id) => tracing::info!(%id, kind = %label, "Bred on request"),
            None => tracing::info!(kind = %label, "Breeding refused"),
        }
    }

    let options = RunOptions {
        max_ticks: args.ticks,
        output: args.output,
        fast: args.fast,
    };
    app.run(&options).await?;
    println!("Exited clean.");
    Ok(())
}
