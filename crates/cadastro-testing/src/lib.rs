//! Test utilities for Cadastro
//!
//! This crate provides mocks, fixtures and helpers for testing Cadastro
//! components.
//!
//! # Mocks
//!
//! - [`MockClientRepository`] - In-memory client repository that mirrors the
//!   storage contract (active-scope uniqueness, atomic increments, sparse
//!   month aggregation) and counts identifier lookups
//! - [`FixedClock`] - Settable clock for deterministic timestamps
//!
//! # Fixtures
//!
//! - [`fixtures::VALID_CPFS`] - Distinct CPFs passing both check digits
//! - [`fixtures::sample_client`] - Create a sample client for testing
//!
//! # Usage
//!
//! ```no_run
//! use cadastro_testing::{fixtures, MockClientRepository};
//!
//! let repository = MockClientRepository::new();
//! let client = fixtures::sample_client("Ana", "ana@example.com", fixtures::VALID_CPFS[0]);
//! repository.insert_raw(client);
//! assert_eq!(repository.len(), 1);
//! ```

pub mod fixtures;
mod mocks;
pub mod proptest_config;

pub use mocks::{FixedClock, MockClientRepository};
