//! Style Compass - Swipe-driven style personality and personalized ranking
//!
//! A short swipe quiz over weighted trait cards builds a preference vector,
//! an ordered rule set turns it into a style archetype, and the resulting
//! profile drives a deterministic, explainable content ranking.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
pub mod telemetry;
