//! Picks command implementation

use chrono::Utc;
use clap::Args;

use crate::config::Config;
use crate::game::merge_game_data;
use crate::notify::{DiscordNotifier, PickNotifier};
use crate::picks::PickEngine;
use crate::store::SnapshotStore;
use crate::telemetry::{increment, CounterMetric};

#[derive(Args, Debug)]
pub struct PicksArgs {
    /// Odds window file to evaluate (default: most recent)
    #[arg(long)]
    pub odds_file: Option<String>,

    /// Date for opening lines and output, YYYYMMDD (default: today)
    #[arg(long)]
    pub date: Option<String>,

    /// Persist picks to the data directory
    #[arg(long)]
    pub save: bool,

    /// Send picks to the configured webhook
    #[arg(long)]
    pub notify: bool,
}

impl PicksArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let store = SnapshotStore::new(&config.data.data_dir);
        let date = self
            .date
            .clone()
            .unwrap_or_else(|| Utc::now().format("%Y%m%d").to_string());

        let odds = match &self.odds_file {
            Some(name) => store.load_odds_window(name)?,
            None => store.latest_odds_window()?,
        };
        let opening_lines = store.load_opening_lines(&date)?;
        let public_splits = store.load_public_splits()?;
        let games = merge_game_data(&odds, &opening_lines, &public_splits);
        increment(CounterMetric::GamesScanned, games.len() as u64);

        let engine = PickEngine::new(config.detectors.clone(), config.scorer.clone())?;
        let picks = engine.generate(&games);
        increment(CounterMetric::PicksGenerated, picks.len() as u64);

        if picks.is_empty() {
            println!("No picks for {date} ({} games evaluated)", games.len());
        } else {
            println!("Picks for {date}:");
            for pick in &picks {
                println!(
                    "  [{}] {} ({}) {}%  {}",
                    pick.tier,
                    pick.pick,
                    pick.game,
                    crate::signal::fmt_pct(pick.confidence),
                    pick.best_book,
                );
            }
        }

        if self.save {
            let path = store.save_picks(&date, Utc::now(), &picks)?;
            println!("Saved to {}", path.display());
        }

        if self.notify {
            match &config.notify.discord_webhook {
                Some(url) => {
                    DiscordNotifier::new(url).notify(&picks).await?;
                    increment(CounterMetric::NotificationsSent, 1);
                }
                None => tracing::warn!("--notify given but no webhook configured"),
            }
        }

        Ok(())
    }
}
