//! # Shotcraft Core
//!
//! Core types and constants for Shotcraft.
//! Provides the shared error type and the numeric limits every editor
//! component agrees on (minimum layer size, history depth, default canvas).

pub mod constants;
pub mod error;

pub use error::{Error, Result};
