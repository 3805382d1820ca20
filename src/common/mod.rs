//! Common types and utilities shared across the index.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants
//! - Error types
//! - The validated tree [`Order`]

pub mod config;
pub mod error;
mod order;

pub use error::{Error, Result};
pub use order::Order;
