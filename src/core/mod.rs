//! Core data types for license scoring.
//!
//! - [`Document`]: a tokenized, lowercased text with an origin label
//! - [`Window`]: a half-open token range into a document
//! - [`Disqualification`], [`Verdict`], [`ScoreResult`]: scoring outcomes
//!
//! ## Normalization
//!
//! Tokens are lowercased when a document is built. The disqualification
//! rules compare diff text against lowercase keywords ("version", "gnu",
//! "lesser") and rely on this.
//!
//! [`Document`]: document::Document
//! [`Window`]: document::Window
//! [`Disqualification`]: types::Disqualification
//! [`Verdict`]: types::Verdict
//! [`ScoreResult`]: types::ScoreResult

pub mod document;
pub mod types;
