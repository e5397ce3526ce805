//! Offer evaluation and multi-lot award engine for public procurement consultations.
//!
//! The engine turns an immutable case-file snapshot (lots, candidates, financial grids,
//! notation grids) into per-lot rankings with savings statistics and a cross-lot
//! winner / loser / mixed classification feeding award and rejection notices.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
