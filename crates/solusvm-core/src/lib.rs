//! # solusvm-core
//!
//! Core types and utilities for talking to a SolusVM master's admin API.
//!
//! This crate provides the foundational pieces shared by the SolusVM client
//! crates: the transport error type, client configuration, and a query
//! parameter builder with a single canonical wire encoding.
//!
//! ## Modules
//!
//! - [`error`] - Transport error types
//! - [`config`] - Configuration for client instances
//! - [`query`] - Query parameter assembly helpers

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod query;

// Re-export commonly used types
pub use error::{Error, Result};
