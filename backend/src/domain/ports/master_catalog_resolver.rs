//! Driving port that maps a question signature onto a master catalog id.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Error, MasterSignature};

/// Resolve (or mint) the master question behind a builder question.
///
/// Lookup order is global first, then the organization's private catalog.
/// A global entry only counts when its options match exactly; an
/// organization entry matches on type and text alone. When nothing matches
/// an organization-scoped entry is created, so repeated calls with the same
/// signature converge on one id.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MasterCatalogResolver: Send + Sync {
    /// # Errors
    /// Returns `dependency_failure` when the catalog cannot be read or
    /// written.
    async fn resolve_or_create(
        &self,
        signature: &MasterSignature,
        organization_id: Uuid,
    ) -> Result<Uuid, Error>;
}
