//! Attra Core Types
//!
//! This crate provides the foundational types used throughout attra:
//! - The `Value` enum holding dynamically-typed attribute values
//! - Conversions into and out of `Value`
//! - Common error types

mod error;
mod value;

pub use error::*;
pub use value::*;
