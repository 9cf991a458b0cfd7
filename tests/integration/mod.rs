//! Integration tests for sweep
//!
//! These tests drive the library through both git clients: the in-memory
//! fake for policy scenarios, and real repositories created in temporary
//! directories for end-to-end cleanup and the `sweep` binary itself.

pub mod binary;
pub mod cleanup;
pub mod config;
pub mod helpers;
