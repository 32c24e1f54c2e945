// src/exec/mod.rs

//! Process execution layer.
//!
//! The driver loop talks to an [`ExecutorBackend`] instead of spawning
//! processes itself, so tests can swap in a fake that never touches the OS.
//!
//! - [`backend`] provides the trait and [`RealExecutorBackend`], which runs
//!   commands with `tokio::process::Command` and waits for each one.

pub mod backend;

pub use backend::{ExecutorBackend, RealExecutorBackend};
