//! Master catalog resolution.
//!
//! Implements [`MasterCatalogResolver`] over a [`MasterQuestionRepository`].
//! Global templates are preferred so organizations share wording; a private
//! entry is minted only when no global one fits.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;
use uuid::Uuid;

use crate::domain::ports::{
    MasterCatalogResolver, MasterQuestionRepository, MasterQuestionRepositoryError,
};
use crate::domain::{Error, MasterSignature};

/// Resolver backed by the master question repository.
#[derive(Clone)]
pub struct MasterCatalogService<R> {
    repo: Arc<R>,
}

impl<R> MasterCatalogService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_repository_error(error: MasterQuestionRepositoryError) -> Error {
    match error {
        MasterQuestionRepositoryError::Connection { message } => {
            Error::dependency_failure(format!("master catalog unavailable: {message}"))
        }
        MasterQuestionRepositoryError::Query { message } => {
            Error::dependency_failure(format!("master catalog error: {message}"))
        }
        MasterQuestionRepositoryError::DuplicateMaster { text } => Error::dependency_failure(
            format!("master question {text:?} vanished after a duplicate insert"),
        ),
    }
}

impl<R> MasterCatalogService<R>
where
    R: MasterQuestionRepository,
{
    async fn find_in_organization(
        &self,
        signature: &MasterSignature,
        organization_id: Uuid,
    ) -> Result<Option<Uuid>, Error> {
        let found = self
            .repo
            .find_for_organization(signature.question_type, &signature.text, organization_id)
            .await
            .map_err(map_repository_error)?;
        Ok(found.map(|master| master.id))
    }
}

#[async_trait]
impl<R> MasterCatalogResolver for MasterCatalogService<R>
where
    R: MasterQuestionRepository,
{
    async fn resolve_or_create(
        &self,
        signature: &MasterSignature,
        organization_id: Uuid,
    ) -> Result<Uuid, Error> {
        let global = self
            .repo
            .find_global(signature.question_type, &signature.text)
            .await
            .map_err(map_repository_error)?;
        if let Some(master) = global.filter(|master| signature.options_match(master)) {
            debug!(master_id = %master.id, "resolved global master question");
            return Ok(master.id);
        }

        if let Some(master_id) = self.find_in_organization(signature, organization_id).await? {
            debug!(%master_id, %organization_id, "resolved organization master question");
            return Ok(master_id);
        }

        match self
            .repo
            .insert_for_organization(signature, organization_id)
            .await
        {
            Ok(master) => {
                debug!(master_id = %master.id, %organization_id, "created master question");
                Ok(master.id)
            }
            Err(err @ MasterQuestionRepositoryError::DuplicateMaster { .. }) => {
                // Lost an insert race; the winner's row is now visible.
                self.find_in_organization(signature, organization_id)
                    .await?
                    .ok_or_else(|| map_repository_error(err))
            }
            Err(err) => Err(map_repository_error(err)),
        }
    }
}

#[cfg(test)]
#[path = "master_catalog_service_tests.rs"]
mod tests;
