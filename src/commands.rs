//! The two workflows gitprep automates.
//!
//! - [`branch`]: set up the develop and feature branches for a repository
//! - [`push`]: stage, commit and push local changes
//!
//! Both are thin sequences of [`crate::runner::Step`]s over the shared
//! command runner, with a handful of query helpers from [`crate::App`].

pub mod branch;
pub mod push;
