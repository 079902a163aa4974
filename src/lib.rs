// src/lib.rs
// Public library surface for the binary, the demo and integration tests.

pub mod catalog;
pub mod config;
pub mod error;
pub mod hasher;
pub mod stream;
pub mod synth;

// Ranking + navigation
pub mod rank;
pub mod spotlight;

// Host-side plumbing: keyboard, side effects, presentation, HTTP
pub mod api;
pub mod effects;
pub mod input;
pub mod metrics;
pub mod view;

// ---- Re-exports for stable public API ----
pub use crate::api::{create_router, AppState};
pub use crate::catalog::Catalog;
pub use crate::error::SpotlightError;
pub use crate::rank::{rank, RankedEntry};
pub use crate::spotlight::{Spotlight, SpotlightEffect, Step};
