//! Data projections returned by the use-case services
//!
//! Services never hand the raw entity to callers: projections carry display
//! (formatted) identifiers, and deleted/internal fields stay inside the
//! core. Canonical (unformatted) cpf/phone values never leave the
//! application layer.

use crate::Result;
use cadastro_core::{Client, Cpf, Phone};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Client projection with display-formatted identifiers
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDto {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Formatted as `DDD.DDD.DDD-DD`
    pub cpf: String,
    /// Formatted as `(DD) DDDDD-DDDD` / `(DD) DDDD-DDDD`
    pub phone: String,
    pub access_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ClientDto {
    /// Project an entity, re-parsing the stored canonical identifiers to
    /// produce their display forms.
    pub fn from_client(client: &Client) -> Result<Self> {
        let cpf = Cpf::parse(&client.cpf)?;
        let phone = Phone::parse(&client.phone)?;
        Ok(Self::with_identifiers(client, &cpf, &phone))
    }

    /// Project an entity using already-parsed value objects. Used by the
    /// command handlers, where the parsed phone still knows whether the
    /// input carried a country code.
    pub fn with_identifiers(client: &Client, cpf: &Cpf, phone: &Phone) -> Self {
        ClientDto {
            id: client.id.to_string(),
            name: client.name.clone(),
            email: client.email.clone(),
            cpf: cpf.formatted(),
            phone: phone.formatted(),
            access_count: client.access_count,
            created_at: client.created_at,
            updated_at: client.updated_at,
        }
    }
}

/// Dashboard counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total: u64,
    pub active: u64,
    pub deleted: u64,
    pub new_this_month: u64,
}

/// Per-month client creation series for the dashboard chart.
/// `labels` and `data` are index-aligned, oldest month first.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientsChartData {
    pub labels: Vec<String>,
    pub data: Vec<u64>,
}
