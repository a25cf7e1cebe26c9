//! Pick notification module
//!
//! Pushes generated picks to a Discord webhook. Delivery failures are the
//! caller's to log; they never block or poison a run.

use async_trait::async_trait;
use serde_json::json;

use crate::picks::Pick;
use crate::score::Tier;

/// Sink for generated picks
#[async_trait]
pub trait PickNotifier: Send + Sync {
    /// Deliver a batch of picks
    async fn notify(&self, picks: &[Pick]) -> anyhow::Result<()>;
}

/// Discord webhook notifier
pub struct DiscordNotifier {
    webhook_url: String,
    client: reqwest::Client,
}

impl DiscordNotifier {
    pub fn new(webhook_url: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// One embed per pick, colored by tier
    fn embed(pick: &Pick) -> serde_json::Value {
        json!({
            "title": format!("{} {}", tier_emoji(pick.tier), pick.pick),
            "description": pick.reasoning,
            "color": tier_color(pick.tier),
            "fields": [
                {"name": "Game", "value": pick.game, "inline": true},
                {"name": "Tier", "value": pick.tier.as_str(), "inline": true},
                {"name": "Confidence", "value": format!("{}%", crate::signal::fmt_pct(pick.confidence)), "inline": true},
                {"name": "Signals", "value": pick.signals.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", "), "inline": false},
                {"name": "Best Book", "value": pick.best_book, "inline": false},
            ],
        })
    }
}

fn tier_emoji(tier: Tier) -> &'static str {
    match tier {
        Tier::Tier1 => "\u{1f525}",
        Tier::Tier2 => "\u{2b50}",
        Tier::Lean => "\u{1f440}",
        Tier::Pass => "\u{1f6ab}",
    }
}

fn tier_color(tier: Tier) -> u32 {
    match tier {
        Tier::Tier1 => 0x2ecc71,
        Tier::Tier2 => 0x3498db,
        Tier::Lean => 0xf1c40f,
        Tier::Pass => 0x95a5a6,
    }
}

#[async_trait]
impl PickNotifier for DiscordNotifier {
    async fn notify(&self, picks: &[Pick]) -> anyhow::Result<()> {
        if picks.is_empty() {
            return Ok(());
        }

        let payload = json!({
            "content": format!("{} new pick(s)", picks.len()),
            "embeds": picks.iter().map(Self::embed).collect::<Vec<_>>(),
        });

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("discord webhook error: {} - {}", status, body);
        }

        tracing::info!(picks = picks.len(), "Sent pick notification");
        Ok(())
    }
}
