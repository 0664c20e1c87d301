//! Query handlers for ClientService (get, list, latest)

use crate::dto::ClientDto;
use crate::Result;
use cadastro_config::constants::MAX_PAGE_LIMIT;
use cadastro_core::{ClientId, Error};
use cadastro_ports::{FindAllOptions, Paginated, SortBy, SortOrder};

use super::{ClientService, ListClients};

impl ClientService {
    /// Fetch a client by id and bump its access counter.
    ///
    /// The increment is a store-side atomic `+1`; the returned projection
    /// reports `loaded_count + 1` without re-reading, so concurrent gets
    /// each observe a distinct count.
    pub async fn get(&self, id: ClientId) -> Result<ClientDto> {
        let client = self
            .repository
            .find_by_id(&id, false)
            .await?
            .ok_or_else(|| Error::client_not_found(id.to_string()))?;

        self.repository.increment_access_count(&id).await?;

        let dto = ClientDto::from_client(&client)?;
        Ok(ClientDto {
            access_count: client.access_count + 1,
            ..dto
        })
    }

    /// List active clients with search, sort and pagination.
    ///
    /// `page` is raised to at least 1 and `limit` clamped into 1..=100
    /// (oversized limits are clamped down, not rejected). The search term
    /// is stripped of SQL wildcard characters before it reaches the store;
    /// a term that degenerates to the empty string disables filtering.
    pub async fn list(&self, query: ListClients) -> Result<Paginated<ClientDto>> {
        let options = FindAllOptions {
            page: query.page.max(1),
            limit: query.limit.clamp(1, MAX_PAGE_LIMIT),
            search: query
                .search
                .as_deref()
                .map(sanitize_search)
                .filter(|s| !s.is_empty()),
            sort_by: query.sort_by,
            sort_order: query.sort_order,
        };

        let page = self.repository.find_all(&options).await?;

        let mut items = Vec::with_capacity(page.items.len());
        for client in &page.items {
            items.push(ClientDto::from_client(client)?);
        }

        Ok(Paginated {
            items,
            total: page.total,
            page: page.page,
            limit: page.limit,
            total_pages: page.total_pages,
        })
    }

    /// The most recently created active clients, newest first.
    pub async fn latest(&self, limit: u32) -> Result<Vec<ClientDto>> {
        let page = self
            .list(ListClients {
                page: 1,
                limit,
                search: None,
                sort_by: SortBy::CreatedAt,
                sort_order: SortOrder::Desc,
            })
            .await?;

        Ok(page.items)
    }
}

/// Strip SQL wildcard characters from a search term so user input can never
/// broaden a LIKE match.
fn sanitize_search(raw: &str) -> String {
    raw.chars()
        .filter(|c| *c != '%' && *c != '_')
        .collect::<String>()
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_search_strips_wildcards() {
        assert_eq!(sanitize_search("jo%hn_"), "john");
        assert_eq!(sanitize_search("  ana  "), "ana");
        assert_eq!(sanitize_search("%__%"), "");
    }
}
