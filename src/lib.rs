// Inzluenze: influencer recommendations from a business description.
//
// This is the library root. Each module corresponds to a stage of the
// recommendation pipeline or one of its I/O boundaries.

pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod scoring;
pub mod text;
pub mod vectorize;

#[cfg(feature = "web")]
pub mod web;
