//! Command and query input types for ClientService
//!
//! Inputs carry raw primitives; identifier validation and normalization
//! happen inside the handlers, never at the call site.

use cadastro_config::constants::DEFAULT_PAGE_LIMIT;
use cadastro_core::ClientId;
use cadastro_ports::{SortBy, SortOrder};

/// Input for the create command
#[derive(Debug, Clone)]
pub struct CreateClient {
    pub name: String,
    pub email: String,
    /// Raw CPF; punctuation allowed
    pub cpf: String,
    /// Raw phone; punctuation and `+55` country code allowed
    pub phone: String,
}

/// Input for the update command. Unset fields mean "keep existing value".
#[derive(Debug, Clone)]
pub struct UpdateClient {
    pub id: ClientId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
}

impl UpdateClient {
    /// An update that touches nothing but still refreshes `updated_at`
    pub fn empty(id: ClientId) -> Self {
        UpdateClient {
            id,
            name: None,
            email: None,
            cpf: None,
            phone: None,
        }
    }
}

/// Input for the list query
#[derive(Debug, Clone)]
pub struct ListClients {
    /// 1-based page number; values below 1 are raised to 1
    pub page: u32,
    /// Page size; clamped into 1..=100
    pub limit: u32,
    /// Substring matched case-insensitively against name OR email
    pub search: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for ListClients {
    fn default() -> Self {
        ListClients {
            page: 1,
            limit: DEFAULT_PAGE_LIMIT,
            search: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}
