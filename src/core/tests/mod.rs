//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Key chain model, equality and persistence tests
//! - Collision detection tests
//! - Chain text parser tests
//! - Type tests (KeyStroke, ModifierSide)

#[cfg(test)]
mod conflict_tests;
#[cfg(test)]
mod types_tests;
