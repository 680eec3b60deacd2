//! Upstream stats-API collaborator: HTTP client, defensive response models
//! and a small read-through response cache.

pub mod cache;
pub mod client;
pub mod models;

pub use client::UpstreamClient;
