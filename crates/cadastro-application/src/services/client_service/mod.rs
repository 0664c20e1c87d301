//! Client management use cases (transport-agnostic)
//!
//! This module contains the ClientService for managing client records:
//! - Command handlers (create, update, delete) on the write path
//! - Query handlers (get, list, latest) on the read path
//!
//! Callers (HTTP, CLI) construct a command or query with primitive inputs
//! and get back a plain projection or a typed error. The service validates
//! through the identifier value objects, talks to the repository port and
//! emits fire-and-forget domain events on mutations.

mod builder;
mod commands;
mod crud;
mod queries;

pub use builder::ClientServiceBuilder;
pub use commands::{CreateClient, ListClients, UpdateClient};

use cadastro_core::{ClientId, DomainEvent, DomainEventType};
use cadastro_ports::{ClientRepositoryRef, ClockRef};
use tokio::sync::broadcast;

/// Client management service (transport-agnostic)
#[derive(Clone)]
pub struct ClientService {
    pub(super) repository: ClientRepositoryRef,
    /// Injected time source; handlers never read the system clock directly
    pub(super) clock: ClockRef,
    /// Domain event broadcast channel for client mutations
    pub(super) event_tx: broadcast::Sender<DomainEvent>,
}

impl std::fmt::Debug for ClientService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientService")
            .field("repository", &"<ClientRepository>")
            .finish()
    }
}

impl ClientService {
    /// Create a new builder for ClientService
    ///
    /// # Example
    /// ```ignore
    /// let service = ClientService::builder(repository)
    ///     .clock(clock)
    ///     .build();
    /// ```
    pub fn builder(repository: ClientRepositoryRef) -> ClientServiceBuilder {
        ClientServiceBuilder::new(repository)
    }

    /// Subscribe to domain events emitted by this service
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.event_tx.subscribe()
    }

    /// Broadcast a domain event. Fire-and-forget: a send with no
    /// subscribers is not an error.
    pub(super) fn emit(&self, event_type: DomainEventType, client_id: &ClientId, detail: &str) {
        let event = DomainEvent::new(event_type, client_id, detail, self.clock.now());
        let _ = self.event_tx.send(event);
    }
}
