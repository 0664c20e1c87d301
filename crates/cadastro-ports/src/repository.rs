//! Repository port traits for data persistence
//!
//! Per Clean Architecture, repository interfaces (output ports) belong in the
//! Application layer. Infrastructure adapters (cadastro-storage) implement
//! these traits.
//!
//! The repository models a read/write split: mutating operations ride the
//! write path, lookups and aggregations ride the read path. An adapter backed
//! by a single database may route both paths to the same connection with no
//! behavior change.

use async_trait::async_trait;
use cadastro_core::entities::{Client, ClientId};
use cadastro_core::error::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

/// Sortable columns for client listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortBy {
    Name,
    Email,
    #[default]
    CreatedAt,
    AccessCount,
}

impl SortBy {
    /// Get the lowercase camelCase name used by API consumers
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::CreatedAt => "createdAt",
            Self::AccessCount => "accessCount",
        }
    }
}

impl FromStr for SortBy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "createdAt" => Ok(Self::CreatedAt),
            "accessCount" => Ok(Self::AccessCount),
            other => Err(format!(
                "Unknown sort field: '{other}'. Valid: name, email, createdAt, accessCount"
            )),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// SQL keyword for this direction
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ASC" => Ok(Self::Asc),
            "DESC" => Ok(Self::Desc),
            other => Err(format!("Unknown sort order: '{other}'. Valid: ASC, DESC")),
        }
    }
}

/// Query options for paginated client listings
#[derive(Debug, Clone)]
pub struct FindAllOptions {
    /// 1-based page number
    pub page: u32,
    /// Page size
    pub limit: u32,
    /// Sanitized substring matched case-insensitively against name OR email
    pub search: Option<String>,
    pub sort_by: SortBy,
    pub sort_order: SortOrder,
}

impl Default for FindAllOptions {
    fn default() -> Self {
        FindAllOptions {
            page: 1,
            limit: 10,
            search: None,
            sort_by: SortBy::default(),
            sort_order: SortOrder::default(),
        }
    }
}

/// A page of results plus pagination metadata
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u64,
}

impl<T> Paginated<T> {
    /// Build a page, deriving `total_pages = ceil(total / limit)`
    /// (0 when total is 0).
    pub fn new(items: Vec<T>, total: u64, page: u32, limit: u32) -> Self {
        let total_pages = if limit == 0 {
            0
        } else {
            total.div_ceil(u64::from(limit))
        };
        Paginated {
            items,
            total,
            page,
            limit,
            total_pages,
        }
    }

    /// Map the items, keeping the pagination metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Paginated<U> {
        Paginated {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            page: self.page,
            limit: self.limit,
            total_pages: self.total_pages,
        }
    }
}

/// Count of clients created within one calendar month
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthCount {
    /// First instant of the month (UTC)
    pub month: DateTime<Utc>,
    pub count: u64,
}

/// Repository for client entities
///
/// Uniqueness of email (case-insensitive) and cpf among *active* rows is
/// ultimately enforced by the adapter's storage constraints; `save` and
/// `update` surface violations as `EmailConflict` / `CpfConflict`, never as
/// raw storage errors.
#[async_trait]
pub trait ClientRepository: Send + Sync {
    /// Insert a new client (write path).
    async fn save(&self, client: &Client) -> Result<Client>;

    /// Replace an existing active client by id (write path).
    /// Missing or soft-deleted rows fail with `ClientNotFound`.
    async fn update(&self, client: &Client) -> Result<Client>;

    /// Soft-delete: set `deleted_at`, keep the row (write path).
    /// Missing or already-deleted rows fail with `ClientNotFound`.
    async fn soft_delete(&self, id: &ClientId) -> Result<()>;

    /// Hard delete the row (write path).
    ///
    /// Low-level primitive; command handlers never call this — client
    /// removal is always a soft delete.
    async fn delete(&self, id: &ClientId) -> Result<()>;

    /// Atomically increment the access counter by exactly 1 (write path).
    /// Implementations must perform a store-side `value = value + 1`, not
    /// an application-level read-modify-write.
    async fn increment_access_count(&self, id: &ClientId) -> Result<()>;

    /// Find a client by id (read path).
    async fn find_by_id(&self, id: &ClientId, include_deleted: bool) -> Result<Option<Client>>;

    /// Find a client by email, matched case-insensitively (read path).
    async fn find_by_email(&self, email: &str, include_deleted: bool) -> Result<Option<Client>>;

    /// Find a client by canonical cpf (read path).
    async fn find_by_cpf(&self, cpf: &str, include_deleted: bool) -> Result<Option<Client>>;

    /// List active clients with search, sort and pagination (read path).
    async fn find_all(&self, options: &FindAllOptions) -> Result<Paginated<Client>>;

    /// Count active (non-deleted) clients (read path).
    async fn count_active(&self) -> Result<u64>;

    /// Count soft-deleted clients (read path).
    async fn count_deleted(&self) -> Result<u64>;

    /// Count active clients created since the first day of the current
    /// month (read path).
    async fn count_new_this_month(&self) -> Result<u64>;

    /// Per-month creation counts for the trailing `months` calendar months
    /// ending at the current month, oldest first (read path).
    ///
    /// Sparse: months with no rows may be omitted entirely; callers that
    /// need a dense series must backfill zeros.
    async fn count_by_month(&self, months: u32) -> Result<Vec<MonthCount>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_by_roundtrip() {
        for sort in [
            SortBy::Name,
            SortBy::Email,
            SortBy::CreatedAt,
            SortBy::AccessCount,
        ] {
            assert_eq!(sort.as_str().parse::<SortBy>().unwrap(), sort);
        }
        assert!("deletedAt".parse::<SortBy>().is_err());
    }

    #[test]
    fn test_sort_order_parse_is_case_insensitive() {
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("DESC".parse::<SortOrder>().unwrap(), SortOrder::Desc);
        assert!("up".parse::<SortOrder>().is_err());
    }

    #[test]
    fn test_paginated_total_pages() {
        let page = Paginated::<u8>::new(vec![], 0, 1, 10);
        assert_eq!(page.total_pages, 0);

        let page = Paginated::new(vec![1, 2, 3], 3, 1, 10);
        assert_eq!(page.total_pages, 1);

        let page = Paginated::new(vec![0; 10], 21, 1, 10);
        assert_eq!(page.total_pages, 3);
    }

    #[test]
    fn test_paginated_map_keeps_metadata() {
        let page = Paginated::new(vec![1, 2], 12, 2, 5);
        let mapped = page.map(|n| n.to_string());
        assert_eq!(mapped.items, vec!["1".to_string(), "2".to_string()]);
        assert_eq!(mapped.total, 12);
        assert_eq!(mapped.page, 2);
        assert_eq!(mapped.total_pages, 3);
    }
}
