//! Integration test crate for Framedeck.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on multiple framedeck crates to verify they work together.

#[cfg(test)]
mod analysis;

#[cfg(test)]
mod pool;

#[cfg(test)]
mod project;

#[cfg(test)]
mod roundtrip;
