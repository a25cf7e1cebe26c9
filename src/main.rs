use clap::Parser;
use sharpline::cli::{Cli, Commands};
use sharpline::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        Config::default()
    });

    // Initialize telemetry
    sharpline::telemetry::init_telemetry(&config.telemetry)?;

    match cli.command {
        Commands::Picks(args) => {
            tracing::info!("Generating picks");
            args.execute(&config).await?;
        }
        Commands::Fetch(args) => {
            tracing::info!("Capturing odds window");
            args.execute(&config).await?;
        }
        Commands::Watch(args) => {
            tracing::info!("Starting watch loop");
            args.execute(&config).await?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!("  Data dir: {}", config.data.data_dir.display());
            println!(
                "  Spread RLM: public >= {}, move > {}",
                config.detectors.spread.min_public_threshold, config.detectors.spread.min_line_move
            );
            println!(
                "  Total RLM: move >= {}, strong >= {}, public >= {}",
                config.detectors.total.min_total_move,
                config.detectors.total.strong_total_move,
                config.detectors.total.min_public_threshold
            );
            println!(
                "  ML divergence: gap >= {}, strong >= {}",
                config.detectors.divergence.min_divergence,
                config.detectors.divergence.strong_divergence
            );
            println!(
                "  ATS extreme: rate >= {}",
                config.detectors.ats.extreme_threshold
            );
            println!(
                "  Tiers: T1 >= {}, T2 >= {}, LEAN >= {}, min signals {}",
                config.scorer.tier1_threshold,
                config.scorer.tier2_threshold,
                config.scorer.lean_threshold,
                config.scorer.min_signals
            );
        }
    }

    Ok(())
}
