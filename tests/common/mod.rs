//! Common test utilities for labeled graph integration tests
//!
//! Shared graph builders and logging setup.

#![allow(dead_code)]

pub mod graph_builder;

pub use graph_builder::{build_chain, build_star, init_tracing, ChainConfig};
