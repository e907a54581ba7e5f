//! Recommendation voting service
//!
//! Users submit named video recommendations, vote them up or down, and
//! browse them as recent, top-scoring, or weighted-random picks.

pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
