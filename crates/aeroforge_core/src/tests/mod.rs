//! Integration tests for the range uncertainty engine
//!
//! Tests are organized by topic:
//! - `range_model` - Closed-form model: reference value, clamp, monotonicity
//! - `sampling` - Floor/clip policy and reproducibility of sample batches
//! - `montecarlo` - Runner alignment, determinism and error propagation
//! - `summary` - Statistics summary and sensitivity on real runs

mod montecarlo;
mod range_model;
