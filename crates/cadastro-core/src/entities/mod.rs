//! Core domain entities and value objects
//!
//! # Modules
//!
//! - `cpf` - CPF value object (parse, validate, canonicalize, format)
//! - `phone` - Phone value object for Brazilian numbers
//! - `client` - Client entity, id newtype and partial-update patch

mod client;
mod cpf;
mod phone;

pub use client::{normalize_email, Client, ClientId, ClientPatch};
pub use cpf::{Cpf, CPF_LEN};
pub use phone::{Phone, LANDLINE_LEN, MOBILE_LEN};
