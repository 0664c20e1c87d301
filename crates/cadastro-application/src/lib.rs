//! # Cadastro Application Layer
//!
//! This crate contains the **Use Cases** (business logic) of the Cadastro
//! backend, following Clean Architecture principles.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │  Presentation Layer                 │  <- external HTTP/CLI (out of scope)
//! ├─────────────────────────────────────┤
//! │  Application Layer                  │  <- THIS CRATE
//! │  (Use Cases / Services)             │
//! ├─────────────────────────────────────┤
//! │  Infrastructure Layer               │  <- cadastro-storage
//! ├─────────────────────────────────────┤
//! │  Domain Layer                       │  <- cadastro-core
//! └─────────────────────────────────────┘
//! ```
//!
//! ## Services
//!
//! - [`ClientService`] - Client command/query handlers (create, update,
//!   delete, get, list, latest)
//! - [`DashboardService`] - Dashboard aggregations (stats, chart data)
//!
//! ## Principles
//!
//! 1. **Transport-agnostic**: services have no knowledge of HTTP or CLI
//! 2. **Projections only**: raw entities never cross the service boundary
//! 3. **Injected dependencies**: repository and clock arrive through the
//!    constructor — no ambient or static state

// Application layer errors
pub mod error;

// Data projections returned to callers
pub mod dto;

// Output ports are in the cadastro-ports crate; re-export for convenience
pub use cadastro_ports as ports;

// Transport-agnostic business logic (use cases)
pub mod services;

pub use dto::{ClientDto, ClientsChartData, DashboardStats};
pub use error::{Error, Result};
pub use services::{
    ClientService, ClientServiceBuilder, CreateClient, DashboardService, ListClients, UpdateClient,
};

// Re-export port types for convenience
pub use cadastro_ports::{
    ClientRepository, ClientRepositoryRef, Clock, ClockRef, FindAllOptions, MonthCount, Paginated,
    SortBy, SortOrder, SystemClock,
};
