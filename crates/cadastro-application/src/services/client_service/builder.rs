//! ClientServiceBuilder for constructing ClientService instances

use cadastro_config::constants::DEFAULT_EVENT_CHANNEL_CAPACITY;
use cadastro_core::DomainEvent;
use cadastro_ports::{ClientRepositoryRef, ClockRef, SystemClock};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::ClientService;

/// Builder for ClientService
///
/// # Example
/// ```ignore
/// let service = ClientService::builder(repository)
///     .clock(fixed_clock)
///     .event_tx(shared_tx)
///     .build();
/// ```
pub struct ClientServiceBuilder {
    repository: ClientRepositoryRef,
    clock: Option<ClockRef>,
    event_tx: Option<broadcast::Sender<DomainEvent>>,
}

impl ClientServiceBuilder {
    /// Create a new builder with required dependencies
    pub fn new(repository: ClientRepositoryRef) -> Self {
        Self {
            repository,
            clock: None,
            event_tx: None,
        }
    }

    /// Set a custom clock
    ///
    /// If not set, defaults to the system clock.
    pub fn clock(mut self, clock: ClockRef) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Set a shared domain event channel
    ///
    /// If not set, a private channel is created; events are then only
    /// observable through [`ClientService::subscribe`].
    pub fn event_tx(mut self, event_tx: broadcast::Sender<DomainEvent>) -> Self {
        self.event_tx = Some(event_tx);
        self
    }

    /// Build the ClientService
    pub fn build(self) -> ClientService {
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        let event_tx = self
            .event_tx
            .unwrap_or_else(|| broadcast::channel(DEFAULT_EVENT_CHANNEL_CAPACITY).0);

        ClientService {
            repository: self.repository,
            clock,
            event_tx,
        }
    }
}
