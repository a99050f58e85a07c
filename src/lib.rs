//! Chain-backed series dashboard core.
//!
//! Reads a numeric time series for an identifier from a contract via
//! JSON-RPC, forwards the two most recent values to a remote prediction
//! service, and exposes both as display projections. The workflow is
//! strictly sequential: validate, read, derive, predict.

pub mod chain;
pub mod config;
pub mod error;
pub mod logging;
pub mod predictor;
pub mod view;
pub mod workflow;
