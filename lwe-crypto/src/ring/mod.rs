//! # Ring Module
//!
//! Provides the [`Ring`] struct for representing Z_q and performing modular arithmetic.

pub mod math;

/// Represents a key vector (A, B or the error terms) using a `Vec<i64>`.
pub type Vector = Vec<i64>;

pub use math::Ring;
