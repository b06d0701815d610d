//! Integration test crate for EasyGame.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on multiple easygame crates to verify they work together.

#[cfg(test)]
mod collision;

#[cfg(test)]
mod scene;
