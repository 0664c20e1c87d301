//! Client entity
//!
//! A client record with two natural identifiers (email, CPF), an access
//! counter and soft-delete lifecycle. Instances are immutable: updates go
//! through [`Client::merged`], which produces a new instance sharing the
//! same id. The entity is built only from already-validated primitives;
//! identifier validation happens in the [`Cpf`](super::Cpf) and
//! [`Phone`](super::Phone) value objects before construction.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a client (newtype for type safety)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClientId(pub Uuid);

impl ClientId {
    /// Generate a fresh random id
    pub fn new() -> Self {
        ClientId(Uuid::new_v4())
    }

    /// Parse an id from its string form
    pub fn parse(raw: &str) -> Result<Self> {
        Uuid::parse_str(raw)
            .map(ClientId)
            .map_err(|e| Error::Serialization(format!("invalid client id '{raw}': {e}")))
    }
}

impl Default for ClientId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Core client entity
///
/// `email`, `cpf` and `phone` hold canonical (storage) forms: email
/// lowercase-normalized by the create path, cpf as 11 digits, phone as
/// 10/11 digits without country code. All fields are read-only after
/// construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub email: String,
    pub cpf: String,
    pub phone: String,
    pub access_count: u64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<DateTime<Utc>>,
}

/// Partial-update payload: every mutable field is an explicit optional.
/// Unset fields mean "keep the existing value". Values are canonical
/// (already validated and normalized by the caller).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClientPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub cpf: Option<String>,
    pub phone: Option<String>,
}

impl Client {
    /// Create a fresh client: access count 0, both timestamps set to `now`,
    /// not deleted.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        cpf: impl Into<String>,
        phone: impl Into<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Client {
            id: ClientId::new(),
            name: name.into(),
            email: email.into(),
            cpf: cpf.into(),
            phone: phone.into(),
            access_count: 0,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    /// Rehydrate a client from stored parts.
    ///
    /// Rejects timestamps strictly after `now` and non-monotonic
    /// created/updated pairs with [`Error::InvalidState`].
    #[allow(clippy::too_many_arguments)]
    pub fn from_parts(
        id: ClientId,
        name: String,
        email: String,
        cpf: String,
        phone: String,
        access_count: u64,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
        deleted_at: Option<DateTime<Utc>>,
        now: DateTime<Utc>,
    ) -> Result<Self> {
        if created_at > now {
            return Err(Error::InvalidState(format!(
                "created_at {created_at} is in the future"
            )));
        }
        if updated_at > now {
            return Err(Error::InvalidState(format!(
                "updated_at {updated_at} is in the future"
            )));
        }
        if updated_at < created_at {
            return Err(Error::InvalidState(format!(
                "updated_at {updated_at} precedes created_at {created_at}"
            )));
        }

        Ok(Client {
            id,
            name,
            email,
            cpf,
            phone,
            access_count,
            created_at,
            updated_at,
            deleted_at,
        })
    }

    /// Pure merge for partial updates: unset patch fields keep the existing
    /// value; id, created_at, deleted_at and access_count are preserved;
    /// updated_at becomes `now`.
    pub fn merged(&self, patch: &ClientPatch, now: DateTime<Utc>) -> Client {
        Client {
            id: self.id,
            name: patch.name.clone().unwrap_or_else(|| self.name.clone()),
            email: patch.email.clone().unwrap_or_else(|| self.email.clone()),
            cpf: patch.cpf.clone().unwrap_or_else(|| self.cpf.clone()),
            phone: patch.phone.clone().unwrap_or_else(|| self.phone.clone()),
            access_count: self.access_count,
            created_at: self.created_at,
            updated_at: now,
            deleted_at: self.deleted_at,
        }
    }

    /// True if this record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }
}

/// Normalize an email for storage and case-insensitive comparison:
/// trim surrounding whitespace, fold to lowercase.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn test_new_defaults() {
        let ts = now();
        let client = Client::new("Ana", "ana@example.com", "52998224725", "11987654321", ts);

        assert_eq!(client.access_count, 0);
        assert_eq!(client.created_at, ts);
        assert_eq!(client.updated_at, ts);
        assert!(client.deleted_at.is_none());
        assert!(!client.is_deleted());
    }

    #[test]
    fn test_from_parts_rejects_future_created_at() {
        let ts = now();
        let err = Client::from_parts(
            ClientId::new(),
            "Ana".into(),
            "ana@example.com".into(),
            "52998224725".into(),
            "11987654321".into(),
            0,
            ts + Duration::seconds(60),
            ts + Duration::seconds(60),
            None,
            ts,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_from_parts_rejects_future_updated_at() {
        let ts = now();
        let err = Client::from_parts(
            ClientId::new(),
            "Ana".into(),
            "ana@example.com".into(),
            "52998224725".into(),
            "11987654321".into(),
            0,
            ts - Duration::seconds(60),
            ts + Duration::seconds(60),
            None,
            ts,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_from_parts_rejects_updated_before_created() {
        let ts = now();
        let err = Client::from_parts(
            ClientId::new(),
            "Ana".into(),
            "ana@example.com".into(),
            "52998224725".into(),
            "11987654321".into(),
            0,
            ts,
            ts - Duration::seconds(60),
            None,
            ts,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidState(_)));
    }

    #[test]
    fn test_merged_applies_only_set_fields() {
        let ts = now();
        let client = Client::new("Ana", "ana@example.com", "52998224725", "11987654321", ts);
        let later = ts + Duration::seconds(30);

        let patch = ClientPatch {
            name: Some("Ana Souza".to_string()),
            phone: Some("11912345678".to_string()),
            ..ClientPatch::default()
        };
        let updated = client.merged(&patch, later);

        assert_eq!(updated.id, client.id);
        assert_eq!(updated.name, "Ana Souza");
        assert_eq!(updated.email, "ana@example.com");
        assert_eq!(updated.cpf, "52998224725");
        assert_eq!(updated.phone, "11912345678");
        assert_eq!(updated.created_at, ts);
        assert_eq!(updated.updated_at, later);
        assert_eq!(updated.access_count, 0);
        // The original instance is untouched
        assert_eq!(client.name, "Ana");
    }

    #[test]
    fn test_merged_preserves_access_count_and_deleted_at() {
        let ts = now();
        let mut client =
            Client::new("Ana", "ana@example.com", "52998224725", "11987654321", ts);
        client.access_count = 7;
        client.deleted_at = Some(ts);

        let updated = client.merged(&ClientPatch::default(), ts + Duration::seconds(1));
        assert_eq!(updated.access_count, 7);
        assert_eq!(updated.deleted_at, Some(ts));
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(normalize_email("  JOHN@X.COM "), "john@x.com");
        assert_eq!(normalize_email("john@x.com"), "john@x.com");
    }

    #[test]
    fn test_client_id_parse_roundtrip() {
        let id = ClientId::new();
        let parsed = ClientId::parse(&id.to_string()).unwrap();
        assert_eq!(parsed, id);

        assert!(ClientId::parse("not-a-uuid").is_err());
    }
}
