//! Port trait definitions for Cadastro
//!
//! This crate contains all port (interface) traits following Clean
//! Architecture. Infrastructure crates implement these traits, the
//! application layer consumes them.
//!
//! Output ports belong in the Use Case layer, not the Domain layer; this
//! crate extracts the definitions to break circular dependencies between the
//! application and testing crates.
//!
//! # Port Types
//!
//! - **Repository port**: client persistence and aggregation queries
//! - **Clock port**: injected time source for handlers

mod clock;
mod repository;

pub use clock::{Clock, SystemClock};
pub use repository::{
    ClientRepository, FindAllOptions, MonthCount, Paginated, SortBy, SortOrder,
};

// Type aliases for convenience
use std::sync::Arc;

/// Thread-safe reference to a client repository
pub type ClientRepositoryRef = Arc<dyn ClientRepository + Send + Sync>;

/// Thread-safe reference to a clock
pub type ClockRef = Arc<dyn Clock + Send + Sync>;
