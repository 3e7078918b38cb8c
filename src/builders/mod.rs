//! # Builders
//!
//! This module provides builder patterns for configuring the key recovery engine.
//!
//! ## Modules
//!
//! - [`recovery_builder`] - Builder for [`KeyRecovery`](crate::analysis::KeyRecovery)
//!
//! ## Usage
//!
//! Builders provide a fluent API with sensible defaults; validation happens
//! once, in `build()`, before any analysis runs.

pub mod recovery_builder;

pub use recovery_builder::KeyRecoveryBuilder;
