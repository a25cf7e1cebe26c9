//! Prometheus metrics

use std::net::{Ipv4Addr, SocketAddr};

use metrics_exporter_prometheus::PrometheusBuilder;

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Games merged and evaluated
    GamesScanned,
    /// Picks emitted after scoring and dedup
    PicksGenerated,
    /// Odds fetch attempts that failed
    FetchErrors,
    /// Webhook notifications delivered
    NotificationsSent,
}

impl CounterMetric {
    fn name(self) -> &'static str {
        match self {
            CounterMetric::GamesScanned => "sharpline_games_scanned_total",
            CounterMetric::PicksGenerated => "sharpline_picks_generated_total",
            CounterMetric::FetchErrors => "sharpline_fetch_errors_total",
            CounterMetric::NotificationsSent => "sharpline_notifications_sent_total",
        }
    }
}

/// Increment a counter
pub fn increment(metric: CounterMetric, value: u64) {
    metrics::counter!(metric.name()).increment(value);
}

/// Start the Prometheus exporter on the given port
pub fn init_metrics(port: u16) -> anyhow::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    PrometheusBuilder::new()
        .with_http_listener(addr)
        .install()
        .map_err(|e| anyhow::anyhow!("Failed to start metrics exporter: {}", e))?;
    tracing::info!(port, "Metrics exporter listening");
    Ok(())
}
