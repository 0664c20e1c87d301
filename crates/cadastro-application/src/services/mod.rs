//! Transport-agnostic business logic (use cases)

pub mod client_service;
pub mod dashboard_service;

pub use client_service::{
    ClientService, ClientServiceBuilder, CreateClient, ListClients, UpdateClient,
};
pub use dashboard_service::DashboardService;

#[cfg(test)]
mod dashboard_service_tests;
