//! flowq - a one-shot Athena query runner for VPC flow log tables.
//!
//! This library exposes the core modules for use in integration tests.

pub mod athena;
pub mod config;
pub mod error;
pub mod runner;
