//! Query-side integration for the membership matcher.
//!
//! Builds a `rhai` engine with the matcher registered as a script
//! function and evaluates YAML-defined check rules against it.

pub mod check_rule;
pub mod engine;
