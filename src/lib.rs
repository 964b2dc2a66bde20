//! Fight outcome simulation engine.
//!
//! Given two fighter profiles, produces a win-probability pair (learned model
//! with a deterministic attribute fallback), a round-by-round narrative, and a
//! result classification (KO / submission / decision). The same steps run
//! across an ordered fight card, committed as one atomic batch.
//!
//! All randomness flows through an explicit seeded [`sim::Rng`], so any fight
//! or full card is exactly reproducible from its seed.

pub mod data;
pub mod error;
pub mod model;
pub mod sim;
pub mod store;
