//! Port for the master question catalog.
//!
//! Adapters store reusable question templates in two scopes: global rows
//! shared by every organization and rows private to one organization. The
//! resolver never updates or deletes a master; it only looks them up and
//! inserts organization-scoped ones.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{MasterQuestion, MasterScope, MasterSignature, QuestionType};

use super::define_port_error;

define_port_error! {
    /// Errors raised by master question repository adapters.
    pub enum MasterQuestionRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "master question repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "master question repository query failed: {message}",
        /// A concurrent insert already created this (type, text) entry.
        DuplicateMaster { text: String } =>
            "master question already exists: {text}",
    }
}

/// Port for master question lookup and creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MasterQuestionRepository: Send + Sync {
    /// First global master with exactly this type and text, ignoring
    /// options.
    async fn find_global(
        &self,
        question_type: QuestionType,
        text: &str,
    ) -> Result<Option<MasterQuestion>, MasterQuestionRepositoryError>;

    /// The organization's master with exactly this type and text.
    async fn find_for_organization(
        &self,
        question_type: QuestionType,
        text: &str,
        organization_id: Uuid,
    ) -> Result<Option<MasterQuestion>, MasterQuestionRepositoryError>;

    /// Insert an organization-scoped master.
    ///
    /// Returns [`MasterQuestionRepositoryError::DuplicateMaster`] when the
    /// organization already owns a master with the same type and text.
    async fn insert_for_organization(
        &self,
        signature: &MasterSignature,
        organization_id: Uuid,
    ) -> Result<MasterQuestion, MasterQuestionRepositoryError>;
}

/// Fixture implementation that never finds a master and mints a fresh one
/// on every insert.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureMasterQuestionRepository;

#[async_trait]
impl MasterQuestionRepository for FixtureMasterQuestionRepository {
    async fn find_global(
        &self,
        _question_type: QuestionType,
        _text: &str,
    ) -> Result<Option<MasterQuestion>, MasterQuestionRepositoryError> {
        Ok(None)
    }

    async fn find_for_organization(
        &self,
        _question_type: QuestionType,
        _text: &str,
        _organization_id: Uuid,
    ) -> Result<Option<MasterQuestion>, MasterQuestionRepositoryError> {
        Ok(None)
    }

    async fn insert_for_organization(
        &self,
        signature: &MasterSignature,
        organization_id: Uuid,
    ) -> Result<MasterQuestion, MasterQuestionRepositoryError> {
        Ok(MasterQuestion {
            id: Uuid::new_v4(),
            question_type: signature.question_type,
            text: signature.text.clone(),
            options: signature.options.clone(),
            scope: MasterScope::Organization(organization_id),
        })
    }
}
