//! Configuration loading and scripted replay for mother windows.
//!
//! [`loader`] resolves a [`WindowConfig`](mother_core::WindowConfig) from the
//! environment, a config file or defaults. [`replay`] drives a headless
//! window through a JSON drag script; the `mother-replay` binary wraps both.

#![allow(missing_docs)]

/// Window config resolution from the environment and files
pub mod loader;
pub mod replay;

pub use loader::{WindowConfigSource, load_from_env, load_from_file};
pub use replay::{ReplayReport, ReplayScript, Step};
