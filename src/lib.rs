//! Tally - Terminal-based personal budget tracker
//!
//! This library provides the core functionality for the Tally budget
//! tracker. A session starts from a single budget figure; expenses are
//! recorded against it and the remaining balance is recomputed after
//! every change, with severity coloring as the money runs out.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-based tracing setup
//! - `models`: Core data models (money, expenses, the session ledger)
//! - `tui`: Terminal user interface
//!
//! # Example
//!
//! ```rust,ignore
//! use tally::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod tui;

pub use error::TallyError;
