//! Command handlers for ClientService (create, update, delete)

use crate::dto::ClientDto;
use crate::Result;
use cadastro_core::{
    normalize_email, Client, ClientId, ClientPatch, Cpf, DomainEventType, Error, Phone,
};

use super::{ClientService, CreateClient, UpdateClient};

impl ClientService {
    /// Create a new client.
    ///
    /// Identifier parsing happens before any store access; a format failure
    /// aborts the command without touching the repository. The email
    /// conflict check runs strictly before the cpf check — callers rely on
    /// email conflicts being reported even when the cpf would also
    /// conflict. Soft-deleted rows never block reuse of their identifiers.
    pub async fn create(&self, command: CreateClient) -> Result<ClientDto> {
        let cpf = Cpf::parse(&command.cpf)?;
        let phone = Phone::parse(&command.phone)?;
        let email = normalize_email(&command.email);

        if self.repository.find_by_email(&email, false).await?.is_some() {
            return Err(Error::EmailConflict(email).into());
        }

        if self
            .repository
            .find_by_cpf(cpf.value(), false)
            .await?
            .is_some()
        {
            return Err(Error::CpfConflict(cpf.value().to_string()).into());
        }

        let client = Client::new(
            command.name,
            email,
            cpf.value().to_string(),
            phone.value().to_string(),
            self.clock.now(),
        );
        let saved = self.repository.save(&client).await?;

        self.emit(DomainEventType::ClientCreated, &saved.id, "client created");
        tracing::info!(client_id = %saved.id, "Client created");

        Ok(ClientDto::with_identifiers(&saved, &cpf, &phone))
    }

    /// Update an existing client; unset fields keep their current values.
    ///
    /// Validation order is part of the contract: cpf format → cpf conflict
    /// → phone format → email conflict. A format failure aborts before any
    /// conflict lookup for identifiers not yet reached. A cpf equal to the
    /// client's own current value skips the conflict lookup entirely, and a
    /// conflict lookup that finds the client itself is not a conflict.
    ///
    /// The email comparison against the current value is an exact string
    /// compare, not case-folded — kept as-is for parity with the original
    /// behavior (see DESIGN.md).
    pub async fn update(&self, command: UpdateClient) -> Result<ClientDto> {
        let existing = self
            .repository
            .find_by_id(&command.id, false)
            .await?
            .ok_or_else(|| Error::client_not_found(command.id.to_string()))?;

        let mut patch = ClientPatch {
            name: command.name,
            ..ClientPatch::default()
        };

        if let Some(raw) = &command.cpf {
            let cpf = Cpf::parse(raw)?;
            if cpf.value() != existing.cpf {
                if let Some(other) = self.repository.find_by_cpf(cpf.value(), false).await? {
                    if other.id != existing.id {
                        return Err(Error::CpfConflict(cpf.value().to_string()).into());
                    }
                }
            }
            patch.cpf = Some(cpf.value().to_string());
        }

        if let Some(raw) = &command.phone {
            patch.phone = Some(Phone::parse(raw)?.value().to_string());
        }

        if let Some(email) = &command.email {
            if email != &existing.email {
                if let Some(other) = self.repository.find_by_email(email, false).await? {
                    if other.id != existing.id {
                        return Err(Error::EmailConflict(email.clone()).into());
                    }
                }
            }
            patch.email = Some(email.clone());
        }

        let updated = existing.merged(&patch, self.clock.now());
        let saved = self.repository.update(&updated).await?;

        self.emit(DomainEventType::ClientUpdated, &saved.id, "client updated");
        tracing::debug!(client_id = %saved.id, "Client updated");

        ClientDto::from_client(&saved)
    }

    /// Soft-delete a client. The row and its history are retained; only the
    /// deletion timestamp is set. Never performs a hard delete.
    pub async fn delete(&self, id: ClientId) -> Result<()> {
        self.repository
            .find_by_id(&id, false)
            .await?
            .ok_or_else(|| Error::client_not_found(id.to_string()))?;

        self.repository.soft_delete(&id).await?;

        self.emit(DomainEventType::ClientDeleted, &id, "client deleted (soft)");
        tracing::info!(client_id = %id, "Client deleted (soft)");

        Ok(())
    }
}
