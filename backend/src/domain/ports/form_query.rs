//! Driving port for reading forms back, for the builder and for attendees.

use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Error, EventSummary, ReconstructedQuestion};

/// An open event's form as shown to attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PublicForm {
    pub event: EventSummary,
    /// Questions in render order.
    pub questions: Vec<ReconstructedQuestion>,
    pub page_count: u32,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FormQuery: Send + Sync {
    /// The event's questions in render order, whatever the event's status.
    ///
    /// # Errors
    /// `dependency_failure` when storage fails or a placement references a
    /// master that no longer exists.
    async fn load_event_questions(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ReconstructedQuestion>, Error>;

    /// The form behind a public slug.
    ///
    /// # Errors
    /// `not_found` when no event carries the slug or the event is not open
    /// for registration.
    async fn load_public_form(&self, slug: &str) -> Result<PublicForm, Error>;
}

/// Fixture implementation serving one empty form for any slug.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureFormQuery;

#[async_trait]
impl FormQuery for FixtureFormQuery {
    async fn load_event_questions(
        &self,
        _event_id: Uuid,
    ) -> Result<Vec<ReconstructedQuestion>, Error> {
        Ok(Vec::new())
    }

    async fn load_public_form(&self, slug: &str) -> Result<PublicForm, Error> {
        Ok(PublicForm {
            event: EventSummary {
                id: Uuid::nil(),
                name: "Sample event".to_owned(),
                slug: Some(slug.to_owned()),
                description: None,
                location: None,
                event_date_start: None,
                event_date_end: None,
                banner_url: None,
            },
            questions: Vec::new(),
            page_count: 1,
        })
    }
}
