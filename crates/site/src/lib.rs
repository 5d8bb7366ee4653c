//! SafeLoop Marketing Site Library
//!
//! This library exposes site internals for integration testing.
//! The main entry point for running the server is the `safeloop` binary.

pub mod config;
pub mod content;
pub mod error;
pub mod routes;
pub mod routing;
pub mod state;
pub mod theme;
