//! sharpline: reverse line movement detection for US sports betting markets
//!
//! This library provides the core components for:
//! - Merging odds snapshots, opening lines, and public betting splits
//! - Four independent sharp-money detectors (spread RLM, total RLM,
//!   ML/spread divergence, ATS trend extremes)
//! - Multi-signal confidence scoring with tiered recommendations
//! - Sharp-side resolution and best-line selection across bookmakers
//! - Pick generation, persistence, and webhook notification
//! - Full observability stack

pub mod cli;
pub mod config;
pub mod feed;
pub mod game;
pub mod notify;
pub mod picks;
pub mod score;
pub mod signal;
pub mod store;
pub mod telemetry;
