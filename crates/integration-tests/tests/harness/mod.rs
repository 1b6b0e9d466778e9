//! Shared harness for the integration test suites

// Each test binary uses a different subset of the harness
#![allow(dead_code)]

pub mod config;
pub mod mock_upstream;
