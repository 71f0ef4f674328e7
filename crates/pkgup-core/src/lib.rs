//! Core data types for pkgup.
//!
//! This crate defines the data the tool works on: installed dependency trees
//! as listed by the package manager, version ranges, the tree filter that
//! keeps only paths leading to an in-range copy of a package, the tree
//! renderer, user configuration, and the `package.json` subset the tool reads.
//!
//! This crate is free of process spawning and terminal interaction.

pub mod config;
pub mod filter;
pub mod manifest;
pub mod range;
pub mod render;
pub mod tree;
