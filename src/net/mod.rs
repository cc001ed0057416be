//! Network-backed page features.

pub mod commits;
