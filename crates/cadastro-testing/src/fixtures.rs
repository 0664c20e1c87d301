//! Test fixtures and sample data factories
//!
//! Provides known-valid identifier vectors and convenient factories for
//! sample domain objects.
//!
//! ```rust,ignore
//! use cadastro_testing::fixtures;
//!
//! let client = fixtures::sample_client("Ana", "ana@example.com", fixtures::VALID_CPFS[0]);
//! ```

use cadastro_core::{Client, ClientId};
use chrono::{DateTime, Utc};

/// CPFs that pass both modulo-11 check digits. Distinct values, so tests
/// exercising uniqueness can hand one to each client.
pub const VALID_CPFS: [&str; 4] = ["52998224725", "12345678909", "11144477735", "98765432100"];

/// A valid mobile number (DDD 11, leading 9)
pub const VALID_MOBILE: &str = "11987654321";

/// A valid landline number (DDD 11)
pub const VALID_LANDLINE: &str = "1134567890";

/// A mobile-length number missing the leading 9; always rejected
pub const INVALID_MOBILE: &str = "11887654321";

/// Create a sample active client with the given name, email and cpf.
///
/// Uses the valid mobile fixture for the phone and the current time for
/// both timestamps.
pub fn sample_client(name: &str, email: &str, cpf: &str) -> Client {
    Client::new(name, email, cpf, VALID_MOBILE, Utc::now())
}

/// Create a sample client with an explicit creation instant, for tests
/// exercising time-bucketed aggregations.
pub fn sample_client_created_at(
    name: &str,
    email: &str,
    cpf: &str,
    created_at: DateTime<Utc>,
) -> Client {
    Client::new(name, email, cpf, VALID_MOBILE, created_at)
}

/// Create a sample soft-deleted client.
pub fn sample_deleted_client(name: &str, email: &str, cpf: &str) -> Client {
    let now = Utc::now();
    Client {
        deleted_at: Some(now),
        ..Client::new(name, email, cpf, VALID_MOBILE, now)
    }
}

/// A fresh random client id that matches no stored row.
pub fn unknown_id() -> ClientId {
    ClientId::new()
}
