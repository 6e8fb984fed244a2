//! Operations module for interacting with the external version control tool.
//!
//! - [`git`]: low-level execution of git subprocesses with captured
//!   stdout/stderr/exit status, plus a bounded variant for the push
//!
//! The module provides a trait-based abstraction with a real and a mock
//! implementation to support both production use and testing.

pub mod git;
