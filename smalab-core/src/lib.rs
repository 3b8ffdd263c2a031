//! SmaLab Core — engine for the SMA pullback backtester.
//!
//! This crate contains the heart of the analysis pipeline:
//! - Domain types (bars, serial dates, enriched series, trades)
//! - SMA indicator behind the `Indicator` trait
//! - Pullback setup detection (bullish and mirrored bearish)
//! - Day-by-day trade simulator with trailing-stop ratchet
//! - Trade statistics reduction
//!
//! Data flows strictly forward: price bars → SMA columns → enriched series
//! → signals → trades → statistics. Every stage is a pure function of its
//! predecessor's full output; nothing is mutated after construction.

pub mod domain;
pub mod engine;
pub mod indicators;
pub mod signal;
pub mod stats;
