//! ClientRepository implementation for SQLite

use super::{
    datetime_to_micros, micros_to_datetime, month_floor_back, parse_month_key, SqliteStorage,
};
use async_trait::async_trait;
use cadastro_core::entities::{Client, ClientId};
use cadastro_core::error::{Error, Result};
use cadastro_ports::{ClientRepository, FindAllOptions, MonthCount, Paginated, SortBy, SortOrder};
use chrono::Utc;
use sqlx::sqlite::SqliteRow;
use sqlx::Row;
use tracing::debug;

#[async_trait]
impl ClientRepository for SqliteStorage {
    /// Insert a new client. The partial unique indexes are the
    /// authoritative guard against concurrent duplicate writes; a
    /// violation surfaces as the matching conflict error.
    async fn save(&self, client: &Client) -> Result<Client> {
        sqlx::query(
            r#"
            INSERT INTO clients (
                id, name, email, cpf, phone, access_count,
                created_at, updated_at, deleted_at
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(client.id.to_string())
        .bind(&client.name)
        .bind(&client.email)
        .bind(&client.cpf)
        .bind(&client.phone)
        .bind(client.access_count as i64)
        .bind(datetime_to_micros(client.created_at))
        .bind(datetime_to_micros(client.updated_at))
        .bind(client.deleted_at.map(datetime_to_micros))
        .execute(self.write_pool())
        .await
        .map_err(|err| translate_unique_violation(err, &client.email, &client.cpf))?;

        debug!(client_id = %client.id, "Client saved");

        Ok(client.clone())
    }

    /// Replace an active row. `created_at` and `deleted_at` are immutable
    /// through this path; soft deletion goes through `soft_delete`.
    async fn update(&self, client: &Client) -> Result<Client> {
        let result = sqlx::query(
            r#"
            UPDATE clients SET
                name = ?,
                email = ?,
                cpf = ?,
                phone = ?,
                access_count = ?,
                updated_at = ?
            WHERE id = ? AND deleted_at IS NULL
            "#,
        )
        .bind(&client.name)
        .bind(&client.email)
        .bind(&client.cpf)
        .bind(&client.phone)
        .bind(client.access_count as i64)
        .bind(datetime_to_micros(client.updated_at))
        .bind(client.id.to_string())
        .execute(self.write_pool())
        .await
        .map_err(|err| translate_unique_violation(err, &client.email, &client.cpf))?;

        if result.rows_affected() == 0 {
            return Err(Error::client_not_found(client.id.to_string()));
        }

        debug!(client_id = %client.id, "Client updated");
        Ok(client.clone())
    }

    async fn soft_delete(&self, id: &ClientId) -> Result<()> {
        let result = sqlx::query(
            "UPDATE clients SET deleted_at = ? WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(datetime_to_micros(Utc::now()))
        .bind(id.to_string())
        .execute(self.write_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::client_not_found(id.to_string()));
        }

        debug!(client_id = %id, "Client soft-deleted");
        Ok(())
    }

    /// Hard delete. Storage-level primitive only; the command layer always
    /// soft-deletes.
    async fn delete(&self, id: &ClientId) -> Result<()> {
        let result = sqlx::query("DELETE FROM clients WHERE id = ?")
            .bind(id.to_string())
            .execute(self.write_pool())
            .await?;

        if result.rows_affected() == 0 {
            return Err(Error::client_not_found(id.to_string()));
        }

        debug!(client_id = %id, "Client hard-deleted");
        Ok(())
    }

    /// Store-side `access_count = access_count + 1`. Concurrent increments
    /// on the same row serialize in the database and none are lost.
    async fn increment_access_count(&self, id: &ClientId) -> Result<()> {
        let result = sqlx::query(
            "UPDATE clients SET access_count = access_count + 1 \
             WHERE id = ? AND deleted_at IS NULL",
        )
        .bind(id.to_string())
        .execute(self.write_pool())
        .await?;

        if result.rows_affected() == 0 {
            return Err(Error::client_not_found(id.to_string()));
        }

        Ok(())
    }

    async fn find_by_id(&self, id: &ClientId, include_deleted: bool) -> Result<Option<Client>> {
        let sql = if include_deleted {
            "SELECT * FROM clients WHERE id = ?"
        } else {
            "SELECT * FROM clients WHERE id = ? AND deleted_at IS NULL"
        };

        let row = sqlx::query(sql)
            .bind(id.to_string())
            .fetch_optional(self.read_pool())
            .await?;

        row.as_ref().map(row_to_client).transpose()
    }

    async fn find_by_email(&self, email: &str, include_deleted: bool) -> Result<Option<Client>> {
        let sql = if include_deleted {
            "SELECT * FROM clients WHERE email = ? COLLATE NOCASE LIMIT 1"
        } else {
            "SELECT * FROM clients WHERE email = ? COLLATE NOCASE \
             AND deleted_at IS NULL LIMIT 1"
        };

        let row = sqlx::query(sql)
            .bind(email)
            .fetch_optional(self.read_pool())
            .await?;

        row.as_ref().map(row_to_client).transpose()
    }

    async fn find_by_cpf(&self, cpf: &str, include_deleted: bool) -> Result<Option<Client>> {
        let sql = if include_deleted {
            "SELECT * FROM clients WHERE cpf = ? LIMIT 1"
        } else {
            "SELECT * FROM clients WHERE cpf = ? AND deleted_at IS NULL LIMIT 1"
        };

        let row = sqlx::query(sql)
            .bind(cpf)
            .fetch_optional(self.read_pool())
            .await?;

        row.as_ref().map(row_to_client).transpose()
    }

    async fn find_all(&self, options: &FindAllOptions) -> Result<Paginated<Client>> {
        let mut where_clause = String::from("deleted_at IS NULL");
        let pattern = options.search.as_ref().map(|term| {
            where_clause.push_str(" AND (LOWER(name) LIKE ?1 OR LOWER(email) LIKE ?1)");
            format!("%{}%", term.to_lowercase())
        });

        // Sort column comes from a whitelist, never from user input
        let items_sql = format!(
            "SELECT * FROM clients WHERE {where_clause} ORDER BY {} {} LIMIT ? OFFSET ?",
            sort_column(options.sort_by),
            sort_keyword(options.sort_order),
        );
        let count_sql = format!("SELECT COUNT(*) FROM clients WHERE {where_clause}");

        let offset = i64::from(options.page.saturating_sub(1)) * i64::from(options.limit);

        let mut items_query = sqlx::query(&items_sql);
        let mut count_query = sqlx::query_scalar::<_, i64>(&count_sql);
        if let Some(pattern) = &pattern {
            items_query = items_query.bind(pattern);
            count_query = count_query.bind(pattern);
        }
        items_query = items_query.bind(i64::from(options.limit)).bind(offset);

        // Both queries ride the read path concurrently
        let (rows, total) = tokio::try_join!(
            items_query.fetch_all(self.read_pool()),
            count_query.fetch_one(self.read_pool()),
        )?;

        let items: Result<Vec<Client>> = rows.iter().map(row_to_client).collect();
        let items = items?;

        debug!(
            page = options.page,
            limit = options.limit,
            returned = items.len(),
            total = total,
            "Paginated clients query"
        );

        Ok(Paginated::new(
            items,
            total as u64,
            options.page,
            options.limit,
        ))
    }

    async fn count_active(&self) -> Result<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM clients WHERE deleted_at IS NULL")
                .fetch_one(self.read_pool())
                .await?;
        Ok(count as u64)
    }

    async fn count_deleted(&self) -> Result<u64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM clients WHERE deleted_at IS NOT NULL")
                .fetch_one(self.read_pool())
                .await?;
        Ok(count as u64)
    }

    async fn count_new_this_month(&self) -> Result<u64> {
        let month_start = month_floor_back(Utc::now(), 0);

        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM clients WHERE deleted_at IS NULL AND created_at >= ?",
        )
        .bind(datetime_to_micros(month_start))
        .fetch_one(self.read_pool())
        .await?;

        Ok(count as u64)
    }

    /// GROUP BY month over the trailing window. Months with no rows are
    /// omitted; the query layer backfills the dense series.
    async fn count_by_month(&self, months: u32) -> Result<Vec<MonthCount>> {
        let window_start = month_floor_back(Utc::now(), months.saturating_sub(1));

        let rows = sqlx::query(
            r#"
            SELECT strftime('%Y-%m', created_at / 1000000, 'unixepoch') AS month,
                   COUNT(*) AS count
            FROM clients
            WHERE deleted_at IS NULL AND created_at >= ?
            GROUP BY month
            ORDER BY month ASC
            "#,
        )
        .bind(datetime_to_micros(window_start))
        .fetch_all(self.read_pool())
        .await?;

        rows.iter()
            .map(|row| {
                let key: String = row.get("month");
                let count: i64 = row.get("count");
                Ok(MonthCount {
                    month: parse_month_key(&key)?,
                    count: count as u64,
                })
            })
            .collect()
    }
}

/// Map a row to the domain entity.
fn row_to_client(row: &SqliteRow) -> Result<Client> {
    let id: String = row.get("id");
    let deleted_at = row
        .get::<Option<i64>, _>("deleted_at")
        .map(micros_to_datetime)
        .transpose()?;

    Client::from_parts(
        ClientId::parse(&id)?,
        row.get("name"),
        row.get("email"),
        row.get("cpf"),
        row.get("phone"),
        row.get::<i64, _>("access_count") as u64,
        micros_to_datetime(row.get("created_at"))?,
        micros_to_datetime(row.get("updated_at"))?,
        deleted_at,
        Utc::now(),
    )
}

fn sort_column(sort_by: SortBy) -> &'static str {
    match sort_by {
        SortBy::Name => "name",
        SortBy::Email => "email",
        SortBy::CreatedAt => "created_at",
        SortBy::AccessCount => "access_count",
    }
}

fn sort_keyword(sort_order: SortOrder) -> &'static str {
    match sort_order {
        SortOrder::Asc => "ASC",
        SortOrder::Desc => "DESC",
    }
}

/// Translate a unique-constraint violation on one of the partial indexes
/// into the domain conflict error for that identifier. Anything else stays
/// a database error.
fn translate_unique_violation(err: sqlx::Error, email: &str, cpf: &str) -> Error {
    if let sqlx::Error::Database(ref db_err) = err {
        if db_err.is_unique_violation() {
            let message = db_err.message();
            if message.contains("email") {
                return Error::EmailConflict(email.to_string());
            }
            if message.contains("cpf") {
                return Error::CpfConflict(cpf.to_string());
            }
        }
    }
    err.into()
}
