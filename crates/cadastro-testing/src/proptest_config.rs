//! Shared proptest configuration for consistent test behavior across crates.
//!
//! # Usage
//!
//! ```rust,ignore
//! use cadastro_testing::proptest_config;
//!
//! proptest! {
//!     #![proptest_config(proptest_config::auto_config())]
//!
//!     #[test]
//!     fn my_property(x in 0..100i32) {
//!         // ...
//!     }
//! }
//! ```
//!
//! # CI Integration
//!
//! Set `PROPTEST_CASES` to control test thoroughness: small for PR checks,
//! large for nightly runs.

use proptest::prelude::*;

/// CI-optimized config: fast tests with small case count.
pub fn ci_config() -> ProptestConfig {
    ProptestConfig {
        cases: 64,
        max_shrink_iters: 100,
        ..ProptestConfig::default()
    }
}

/// Nightly config: thorough testing with many cases.
pub fn nightly_config() -> ProptestConfig {
    ProptestConfig {
        cases: 5000,
        max_shrink_iters: 10000,
        ..ProptestConfig::default()
    }
}

/// Get config based on the PROPTEST_CASES env var. Defaults to 256 cases.
pub fn auto_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(256);

    ProptestConfig {
        cases,
        ..ProptestConfig::default()
    }
}

/// Standard config for most property tests.
pub fn standard_config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        max_shrink_iters: 1000,
        ..ProptestConfig::default()
    }
}
