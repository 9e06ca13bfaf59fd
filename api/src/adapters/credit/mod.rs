//! Credit scoring adapter
//!
//! HTTP client for the external credit scoring service.

pub mod client;

pub use client::HttpCreditScoringClient;
