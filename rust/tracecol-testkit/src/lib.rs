//! Test utilities and helpers for the tracecol project.
//!
//! This crate provides:
//! - Data generation of column values that satisfy the set-id invariant
//! - Naive reference evaluation used as the oracle for the search kernels
//! - Sinks with scripted failures
//!
//! # Usage
//!
//! This crate is primarily intended for use within the tracecol test suites and
//! development tools.

pub mod data_gen;
pub mod reference;
pub mod sinks;
