//! Monte-Carlo range uncertainty engine for battery-electric aircraft
//!
//! This crate propagates engineering uncertainty through a closed-form range
//! model. It provides:
//! - A deterministic electric Breguet range model with saturation bounds
//! - A seeded parameter sampler with per-field Gaussian noise and physical
//!   floors/clips
//! - A batch runner (parallel with the `parallel` feature) that keeps every
//!   result aligned with its trial
//! - Summary statistics, target-achievement rates and per-field Pearson
//!   sensitivity
//!
//! ```ignore
//! use aeroforge_core::{analyze, run_montecarlo};
//!
//! let run = run_montecarlo(2000, 42)?;
//! let summary = analyze(&run.samples, &run.results)?;
//! println!("mean range {:.0} km (+-{:.0})", summary.mean, summary.std);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod analysis;
pub mod config;
pub mod error;
pub mod range_model;
pub mod sampler;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use analysis::analyze;
pub use config::{AnalysisConfig, MonteCarloConfig};
pub use error::InvalidInput;
pub use simulation::{run_montecarlo, simulate};
