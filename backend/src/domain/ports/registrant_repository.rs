//! Port for registrant (user) records.

use async_trait::async_trait;

use crate::domain::{Identity, NewRegistrant, Registrant};

use super::define_port_error;

define_port_error! {
    /// Errors raised by registrant repository adapters.
    pub enum RegistrantRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "registrant repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "registrant repository query failed: {message}",
    }
}

/// Port for registrant deduplication and creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrantRepository: Send + Sync {
    /// A registrant whose email equals `contact.email` or whose phone equals
    /// `contact.phone`. Absent fields never match. The name is ignored.
    async fn find_by_contact(
        &self,
        contact: &Identity,
    ) -> Result<Option<Registrant>, RegistrantRepositoryError>;

    async fn insert(&self, registrant: &NewRegistrant)
    -> Result<Registrant, RegistrantRepositoryError>;
}

/// Fixture implementation that never deduplicates.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureRegistrantRepository;

#[async_trait]
impl RegistrantRepository for FixtureRegistrantRepository {
    async fn find_by_contact(
        &self,
        _contact: &Identity,
    ) -> Result<Option<Registrant>, RegistrantRepositoryError> {
        Ok(None)
    }

    async fn insert(
        &self,
        registrant: &NewRegistrant,
    ) -> Result<Registrant, RegistrantRepositoryError> {
        Ok(Registrant {
            id: uuid::Uuid::new_v4(),
            email: registrant.email.clone(),
            phone: registrant.phone.clone(),
            name: registrant.name.clone(),
        })
    }
}
