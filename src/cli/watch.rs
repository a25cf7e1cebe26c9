//! Watch command implementation
//!
//! The continuous loop: fetch an odds window, record openers, merge, run
//! the engine, notify on anything new. Every cycle is self-contained; a
//! failed fetch or webhook never stops the loop.

use chrono::Utc;
use clap::Args;
use std::time::Duration;

use crate::config::Config;
use crate::feed::{OddsApiClient, OddsSnapshot};
use crate::game::merge_game_data;
use crate::notify::{DiscordNotifier, PickNotifier};
use crate::picks::{Pick, PickEngine, PickMarket, SeenPicks};
use crate::store::SnapshotStore;
use crate::telemetry::{increment, metrics, CounterMetric};

use super::fetch::record_opening_lines;

#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Override the configured cycle interval in seconds
    #[arg(long)]
    pub interval_secs: Option<u64>,
}

impl WatchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        if let Err(e) = metrics::init_metrics(config.telemetry.metrics_port) {
            tracing::warn!(error = %e, "Metrics exporter unavailable, continuing without it");
        }

        let store = SnapshotStore::new(&config.data.data_dir);
        let client = OddsApiClient::new(config.odds_api.clone())?;
        let engine = PickEngine::new(config.detectors.clone(), config.scorer.clone())?;
        let notifier = config
            .notify
            .discord_webhook
            .as_ref()
            .map(DiscordNotifier::new);

        // Run-scoped dedup: restarting the process intentionally starts a
        // fresh set.
        let mut seen = SeenPicks::new();

        let interval_secs = self.interval_secs.unwrap_or(config.watch.interval_secs);
        let mut interval = tokio::time::interval(Duration::from_secs(interval_secs));
        tracing::info!(interval_secs, "Watch loop started");

        loop {
            interval.tick().await;
            if let Err(e) = run_cycle(&store, &client, &engine, notifier.as_ref(), &mut seen).await
            {
                tracing::error!(error = %e, "Watch cycle failed");
            }
        }
    }
}

async fn run_cycle(
    store: &SnapshotStore,
    client: &OddsApiClient,
    engine: &PickEngine,
    notifier: Option<&DiscordNotifier>,
    seen: &mut SeenPicks,
) -> anyhow::Result<()> {
    let now = Utc::now();
    let date = now.format("%Y%m%d").to_string();

    let snapshot = fetch_or_fallback(store, client, &date, now).await?;

    let opening_lines = store.load_opening_lines(&date)?;
    let public_splits = store.load_public_splits()?;
    let games = merge_game_data(&snapshot, &opening_lines, &public_splits);
    increment(CounterMetric::GamesScanned, games.len() as u64);

    let picks = engine.generate(&games);
    let fresh: Vec<Pick> = picks
        .iter()
        .filter(|p| seen.insert(&p.game_id, PickMarket::of(p)))
        .cloned()
        .collect();
    increment(CounterMetric::PicksGenerated, fresh.len() as u64);

    if !picks.is_empty() {
        store.save_picks(&date, now, &picks)?;
    }

    if let (Some(notifier), false) = (notifier, fresh.is_empty()) {
        match notifier.notify(&fresh).await {
            Ok(()) => increment(CounterMetric::NotificationsSent, 1),
            Err(e) => tracing::warn!(error = %e, "Notification failed"),
        }
    }

    tracing::info!(
        games = games.len(),
        picks = picks.len(),
        fresh = fresh.len(),
        "Watch cycle complete"
    );
    Ok(())
}

/// Fetch a fresh window, falling back to the newest stored one
async fn fetch_or_fallback(
    store: &SnapshotStore,
    client: &OddsApiClient,
    date: &str,
    now: chrono::DateTime<Utc>,
) -> anyhow::Result<OddsSnapshot> {
    match client.fetch_odds().await {
        Ok(snapshot) => {
            let label = now.format("%Hh_%Y%m%d").to_string();
            store.save_odds_window(&label, &snapshot)?;
            record_opening_lines(store, date, &snapshot)?;
            Ok(snapshot)
        }
        Err(e) => {
            increment(CounterMetric::FetchErrors, 1);
            tracing::warn!(error = %e, "Odds fetch failed, using stored window");
            Ok(store.latest_odds_window()?)
        }
    }
}
