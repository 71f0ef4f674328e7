//! Shared utilities for pkgup.
//!
//! This crate provides cross-cutting concerns used by the other pkgup crates:
//! the error type, external process spawning, and terminal progress output.

pub mod errors;
pub mod process;
pub mod progress;
