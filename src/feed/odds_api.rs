//! The Odds API client
//!
//! Fetches current spread and total listings across US books. The engine
//! only ever sees the resulting `OddsSnapshot`; request failures stay at
//! this boundary for the caller to log and ride out.

use chrono::Utc;
use reqwest::Client;
use std::time::Duration;

use crate::config::OddsApiConfig;

use super::types::{OddsGame, OddsSnapshot};

/// Client for The Odds API
pub struct OddsApiClient {
    config: OddsApiConfig,
    client: Client,
}

impl OddsApiClient {
    /// Create a client from configuration
    pub fn new(config: OddsApiConfig) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        Ok(Self { config, client })
    }

    /// Fetch the current odds window for the configured sport
    ///
    /// Requests decimal odds for the spreads and totals markets only; the
    /// engine prices nothing else.
    pub async fn fetch_odds(&self) -> anyhow::Result<OddsSnapshot> {
        if self.config.api_key.is_empty() {
            anyhow::bail!("odds api key not configured");
        }

        let url = format!(
            "{}/sports/{}/odds",
            self.config.base_url, self.config.sport
        );
        tracing::debug!(url = %url, sport = %self.config.sport, "Fetching odds window");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", self.config.api_key.as_str()),
                ("regions", self.config.regions.as_str()),
                ("markets", "spreads,totals"),
                ("oddsFormat", "decimal"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("odds api error: {} - {}", status, body);
        }

        let games: Vec<OddsGame> = response.json().await?;
        tracing::info!(games = games.len(), "Fetched odds window");

        Ok(OddsSnapshot::new(games, Utc::now()))
    }
}
