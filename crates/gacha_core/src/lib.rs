//! # gacha_core - Deterministic Gacha Roll Simulation Engine
//!
//! This library simulates gacha (loot-box) pulls for an operator collection
//! game: a weighted rarity draw with soft-pity escalation, a hard 10-pull
//! guarantee, and featured/limited operator pool resolution.
//!
//! ## Features
//! - 100% deterministic rolls (same seed + same state = same results)
//! - Pure state threading: `PullState` in, successor `PullState` out
//! - Injectable randomness (`&mut impl Rng`) for exact boundary testing
//! - JSON API for easy integration with UI hosts

pub mod api;
pub mod config;
pub mod data;
pub mod engine;
pub mod error;

// Re-export main API functions
pub use api::{
    gacha_reset_json, gacha_roll_json, gacha_state_json, load_gacha_data_json, GachaService,
    RollRequest, RollResponse,
};

// Re-export core engine types
pub use config::GachaConfig;
pub use data::{Banner, FeaturedLists, GachaData, Operator, OperatorCatalog, PoolOverrides, Rarity, RarityWeights};
pub use engine::{roll_many, roll_one, six_star_rate, PullResult, PullState};
pub use error::{GachaError, Result};
