//! Test Module
//!
//! Crate-level test suite for the Course Assistant.
//!
//! ## Test Categories
//! - `brain_tests`: Rule precedence, response variants, the default branch
//! - `session_tests`: Turn controller behavior on virtual time
//! - `config_tests`: Environment loading and validation

pub mod brain_tests;
pub mod session_tests;
