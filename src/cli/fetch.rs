//! Fetch command implementation

use chrono::Utc;
use clap::Args;

use crate::config::Config;
use crate::feed::{OddsApiClient, OddsSnapshot};
use crate::game::consensus_lines;
use crate::store::{OpeningLine, SnapshotStore};

#[derive(Args, Debug)]
pub struct FetchArgs {
    /// Window label (default: current UTC hour, e.g. "19h_20260209")
    #[arg(long)]
    pub label: Option<String>,
}

impl FetchArgs {
    pub async fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let client = OddsApiClient::new(config.odds_api.clone())?;
        let store = SnapshotStore::new(&config.data.data_dir);

        let snapshot = client.fetch_odds().await?;
        let now = Utc::now();
        let date = now.format("%Y%m%d").to_string();
        let label = self
            .label
            .clone()
            .unwrap_or_else(|| now.format("%Hh_%Y%m%d").to_string());

        let path = store.save_odds_window(&label, &snapshot)?;
        println!(
            "Captured {} games to {}",
            snapshot.games.len(),
            path.display()
        );

        let captured = record_opening_lines(&store, &date, &snapshot)?;
        if captured > 0 {
            println!("Recorded opening lines for {captured} new game(s)");
        }

        Ok(())
    }
}

/// Record opening lines for games seen for the first time today
///
/// The first consensus line observed for a game id becomes its opener;
/// later fetches never overwrite it.
pub(crate) fn record_opening_lines(
    store: &SnapshotStore,
    date: &str,
    snapshot: &OddsSnapshot,
) -> anyhow::Result<usize> {
    let mut opening_lines = store.load_opening_lines(date)?;
    let mut captured = 0;

    for game in &snapshot.games {
        if opening_lines.contains_key(&game.id) {
            continue;
        }
        let (spread, total) = consensus_lines(game);
        if spread.is_none() && total.is_none() {
            continue;
        }
        opening_lines.insert(game.id.clone(), OpeningLine { spread, total });
        captured += 1;
    }

    if captured > 0 {
        store.save_opening_lines(date, &opening_lines)?;
        tracing::info!(date, captured, "Recorded opening lines");
    }
    Ok(captured)
}
