//! Cadastro Core - Domain entities and business rules
//!
//! This crate contains the core domain model following DDD principles.
//! It has minimal dependencies and no infrastructure concerns.
//!
//! # Architecture
//!
//! - `entities` - Client entity and identifier value objects (CPF, Phone)
//! - `domain_event` - Structured events emitted on client mutations
//! - `error` - Domain error types
//!
//! # Related Crates
//!
//! - Config types: `cadastro-config` crate
//! - Port traits (ClientRepository, Clock): `cadastro-ports` crate,
//!   per Clean Architecture (output ports belong in the application layer)

pub mod domain_event;
pub mod entities;
pub mod error;

pub use domain_event::{DomainEvent, DomainEventType};
pub use entities::{
    normalize_email, Client, ClientId, ClientPatch, Cpf, Phone, CPF_LEN, LANDLINE_LEN, MOBILE_LEN,
};
pub use error::{Error, ErrorCategory, ErrorCode, NotFoundError, Result};
