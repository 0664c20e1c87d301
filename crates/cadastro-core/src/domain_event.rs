//! Domain events for the observability sink
//!
//! Command handlers broadcast these on client mutations. Delivery is
//! fire-and-forget: a send with no subscribers is not an error and never
//! affects the outcome of the command that produced the event.

use crate::entities::ClientId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of domain event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainEventType {
    ClientCreated,
    ClientUpdated,
    ClientDeleted,
}

impl DomainEventType {
    /// Get the lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ClientCreated => "client_created",
            Self::ClientUpdated => "client_updated",
            Self::ClientDeleted => "client_deleted",
        }
    }
}

impl fmt::Display for DomainEventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A structured event describing a client mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEvent {
    pub event_type: DomainEventType,
    pub client_id: String,
    pub detail: String,
    /// Microseconds since epoch
    pub timestamp_micros: i64,
}

impl DomainEvent {
    pub fn new(
        event_type: DomainEventType,
        client_id: &ClientId,
        detail: impl Into<String>,
        at: DateTime<Utc>,
    ) -> Self {
        DomainEvent {
            event_type,
            client_id: client_id.to_string(),
            detail: detail.into(),
            timestamp_micros: at.timestamp_micros(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_type_serialization() {
        let json = serde_json::to_string(&DomainEventType::ClientCreated).unwrap();
        assert_eq!(json, "\"client_created\"");
    }

    #[test]
    fn test_event_carries_timestamp() {
        let at = Utc::now();
        let id = ClientId::new();
        let event = DomainEvent::new(DomainEventType::ClientDeleted, &id, "soft delete", at);

        assert_eq!(event.client_id, id.to_string());
        assert_eq!(event.timestamp_micros, at.timestamp_micros());
        assert_eq!(event.event_type.to_string(), "client_deleted");
    }
}
