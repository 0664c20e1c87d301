//! In-memory mock client repository
//!
//! Stores clients in a HashMap behind an RwLock and mirrors the storage
//! contract closely enough for service tests: active-scope uniqueness on
//! email (case-insensitive) and cpf, atomic access-count increments,
//! search/sort/pagination and sparse month aggregation. Lookup counters
//! let tests assert on fail-fast ordering.

use async_trait::async_trait;
use cadastro_core::{Client, ClientId, Error, Result};
use cadastro_ports::{ClientRepository, FindAllOptions, MonthCount, Paginated, SortBy, SortOrder};
use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::RwLock;

/// A mock client repository for testing
#[derive(Debug, Default)]
pub struct MockClientRepository {
    clients: RwLock<HashMap<ClientId, Client>>,
    /// Number of find_by_email calls observed
    pub email_lookups: AtomicUsize,
    /// Number of find_by_cpf calls observed
    pub cpf_lookups: AtomicUsize,
    /// When set, count_deleted fails with a database error
    pub fail_count_deleted: AtomicBool,
}

impl MockClientRepository {
    /// Create a new empty mock repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of clients stored, deleted rows included
    pub fn len(&self) -> usize {
        self.clients.read().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all clients
    pub fn clear(&self) {
        self.clients.write().unwrap().clear();
    }

    /// Insert a client directly, bypassing uniqueness checks
    pub fn insert_raw(&self, client: Client) {
        self.clients.write().unwrap().insert(client.id, client);
    }

    /// Make the next count_deleted calls fail (simulates a read-path outage)
    pub fn set_fail_count_deleted(&self, fail: bool) {
        self.fail_count_deleted.store(fail, Ordering::SeqCst);
    }

    fn check_unique(&self, candidate: &Client) -> Result<()> {
        let clients = self.clients.read().unwrap();
        for other in clients.values() {
            if other.id == candidate.id || other.is_deleted() {
                continue;
            }
            if other.email.eq_ignore_ascii_case(&candidate.email) {
                return Err(Error::EmailConflict(candidate.email.clone()));
            }
            if other.cpf == candidate.cpf {
                return Err(Error::CpfConflict(candidate.cpf.clone()));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl ClientRepository for MockClientRepository {
    async fn save(&self, client: &Client) -> Result<Client> {
        self.check_unique(client)?;
        self.clients
            .write()
            .unwrap()
            .insert(client.id, client.clone());
        Ok(client.clone())
    }

    async fn update(&self, client: &Client) -> Result<Client> {
        {
            let clients = self.clients.read().unwrap();
            match clients.get(&client.id) {
                Some(existing) if !existing.is_deleted() => {}
                _ => return Err(Error::client_not_found(client.id.to_string())),
            }
        }
        self.check_unique(client)?;
        self.clients
            .write()
            .unwrap()
            .insert(client.id, client.clone());
        Ok(client.clone())
    }

    async fn soft_delete(&self, id: &ClientId) -> Result<()> {
        let mut clients = self.clients.write().unwrap();
        match clients.get_mut(id) {
            Some(client) if !client.is_deleted() => {
                client.deleted_at = Some(Utc::now());
                Ok(())
            }
            _ => Err(Error::client_not_found(id.to_string())),
        }
    }

    async fn delete(&self, id: &ClientId) -> Result<()> {
        match self.clients.write().unwrap().remove(id) {
            Some(_) => Ok(()),
            None => Err(Error::client_not_found(id.to_string())),
        }
    }

    async fn increment_access_count(&self, id: &ClientId) -> Result<()> {
        let mut clients = self.clients.write().unwrap();
        match clients.get_mut(id) {
            Some(client) if !client.is_deleted() => {
                client.access_count += 1;
                Ok(())
            }
            _ => Err(Error::client_not_found(id.to_string())),
        }
    }

    async fn find_by_id(&self, id: &ClientId, include_deleted: bool) -> Result<Option<Client>> {
        Ok(self
            .clients
            .read()
            .unwrap()
            .get(id)
            .filter(|c| include_deleted || !c.is_deleted())
            .cloned())
    }

    async fn find_by_email(&self, email: &str, include_deleted: bool) -> Result<Option<Client>> {
        self.email_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .clients
            .read()
            .unwrap()
            .values()
            .find(|c| (include_deleted || !c.is_deleted()) && c.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    async fn find_by_cpf(&self, cpf: &str, include_deleted: bool) -> Result<Option<Client>> {
        self.cpf_lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .clients
            .read()
            .unwrap()
            .values()
            .find(|c| (include_deleted || !c.is_deleted()) && c.cpf == cpf)
            .cloned())
    }

    async fn find_all(&self, options: &FindAllOptions) -> Result<Paginated<Client>> {
        let clients = self.clients.read().unwrap();
        let mut matches: Vec<Client> = clients
            .values()
            .filter(|c| !c.is_deleted())
            .filter(|c| match &options.search {
                Some(term) => {
                    let term = term.to_lowercase();
                    c.name.to_lowercase().contains(&term)
                        || c.email.to_lowercase().contains(&term)
                }
                None => true,
            })
            .cloned()
            .collect();

        matches.sort_by(|a, b| {
            let ordering = match options.sort_by {
                SortBy::Name => a.name.cmp(&b.name),
                SortBy::Email => a.email.cmp(&b.email),
                SortBy::CreatedAt => a.created_at.cmp(&b.created_at),
                SortBy::AccessCount => a.access_count.cmp(&b.access_count),
            };
            match options.sort_order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });

        let total = matches.len() as u64;
        let offset = (options.page.saturating_sub(1) as usize) * options.limit as usize;
        let items: Vec<Client> = matches
            .into_iter()
            .skip(offset)
            .take(options.limit as usize)
            .collect();

        Ok(Paginated::new(items, total, options.page, options.limit))
    }

    async fn count_active(&self) -> Result<u64> {
        Ok(self
            .clients
            .read()
            .unwrap()
            .values()
            .filter(|c| !c.is_deleted())
            .count() as u64)
    }

    async fn count_deleted(&self) -> Result<u64> {
        if self.fail_count_deleted.load(Ordering::SeqCst) {
            return Err(Error::Database("count_deleted unavailable".to_string()));
        }
        Ok(self
            .clients
            .read()
            .unwrap()
            .values()
            .filter(|c| c.is_deleted())
            .count() as u64)
    }

    async fn count_new_this_month(&self) -> Result<u64> {
        let month_start = month_floor(Utc::now());
        Ok(self
            .clients
            .read()
            .unwrap()
            .values()
            .filter(|c| !c.is_deleted() && c.created_at >= month_start)
            .count() as u64)
    }

    async fn count_by_month(&self, months: u32) -> Result<Vec<MonthCount>> {
        let window_start = month_floor_back(Utc::now(), months.saturating_sub(1));

        // Sparse by construction: months without rows never enter the map,
        // mirroring the GROUP BY aggregation of the real adapter
        let mut by_month: BTreeMap<DateTime<Utc>, u64> = BTreeMap::new();
        for client in self.clients.read().unwrap().values() {
            if client.is_deleted() || client.created_at < window_start {
                continue;
            }
            *by_month.entry(month_floor(client.created_at)).or_insert(0) += 1;
        }

        Ok(by_month
            .into_iter()
            .map(|(month, count)| MonthCount { month, count })
            .collect())
    }
}

fn month_floor(ts: DateTime<Utc>) -> DateTime<Utc> {
    month_floor_back(ts, 0)
}

fn month_floor_back(ts: DateTime<Utc>, back: u32) -> DateTime<Utc> {
    let total = ts.year() * 12 + ts.month0() as i32 - back as i32;
    let year = total.div_euclid(12);
    let month = total.rem_euclid(12) as u32 + 1;
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .unwrap_or(ts)
}
