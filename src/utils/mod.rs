//! Utility functions and helpers.
//!
//! This module contains the size formatting helpers used by the output layer.

pub mod size;

pub use size::format_size;
