//! Form builder and form query services.
//!
//! Saving resolves every master reference before the stored form is touched,
//! then swaps the whole form in one repository call. Placement ids survive a
//! save only when they already belong to the event. Loading joins
//! placements with their masters and runs them back through the codec, so
//! the builder and the public page always see the same reconstruction.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::ports::{
    EventRepository, EventRepositoryError, FormBuilderCommand, FormQuery, MasterCatalogResolver,
    PlacementRepository, PlacementRepositoryError, PublicForm, SaveQuestionsRequest,
    SaveQuestionsResponse,
};
use crate::domain::{
    Error, Event, EventSummary, PlacedQuestion, ReconstructedQuestion, deserialize_placement,
    page_count, serialize_placement, sort_by_layout,
};

/// Builder and public-form use cases over events, placements and the master
/// catalog.
#[derive(Clone)]
pub struct FormService<E, P, M> {
    events: Arc<E>,
    placements: Arc<P>,
    resolver: Arc<M>,
}

impl<E, P, M> FormService<E, P, M> {
    pub fn new(events: Arc<E>, placements: Arc<P>, resolver: Arc<M>) -> Self {
        Self {
            events,
            placements,
            resolver,
        }
    }
}

pub(crate) fn map_event_error(operation: &str, error: EventRepositoryError) -> Error {
    error!(operation, %error, "event lookup failed");
    Error::dependency_failure(format!("event repository error: {error}"))
}

fn map_placement_error(event_id: Uuid, error: PlacementRepositoryError) -> Error {
    error!(%event_id, %error, "event form storage failed");
    match error {
        PlacementRepositoryError::MissingMaster { .. } => {
            Error::dependency_failure("event form references an unknown master question")
        }
        PlacementRepositoryError::Connection { message }
        | PlacementRepositoryError::Query { message } => {
            Error::dependency_failure(format!("event form storage error: {message}"))
        }
    }
}

fn reject_duplicate_ids(questions: &[ReconstructedQuestion]) -> Result<(), Error> {
    let mut seen = HashSet::with_capacity(questions.len());
    for question in questions {
        if !seen.insert(question.id.as_str()) {
            return Err(
                Error::invalid_request(format!("question id {} appears twice", question.id))
                    .with_details(json!({
                        "questionId": question.id,
                        "code": "duplicate_question_id",
                    })),
            );
        }
    }
    Ok(())
}

/// Keep a builder-supplied id only when it already names one of this event's
/// placements. Ids copied from another event's form would collide on insert.
fn claim_id(placed: &mut PlacedQuestion, owned: &HashSet<Uuid>) {
    if !owned.contains(&placed.id) {
        placed.id = Uuid::new_v4();
    }
}

impl<E, P, M> FormService<E, P, M>
where
    E: EventRepository,
    P: PlacementRepository,
    M: MasterCatalogResolver,
{
    async fn require_event(&self, event_id: Uuid) -> Result<Event, Error> {
        self.events
            .find_by_id(event_id)
            .await
            .map_err(|err| map_event_error("find_by_id", err))?
            .ok_or_else(|| Error::not_found(format!("event {event_id} not found")))
    }

    async fn owned_placement_ids(&self, event_id: Uuid) -> Result<HashSet<Uuid>, Error> {
        let rows = self
            .placements
            .list_for_event(event_id)
            .await
            .map_err(|err| map_placement_error(event_id, err))?;
        Ok(rows.into_iter().map(|row| row.placement.id).collect())
    }

    async fn reconstruct(&self, event_id: Uuid) -> Result<Vec<ReconstructedQuestion>, Error> {
        let rows = self
            .placements
            .list_for_event(event_id)
            .await
            .map_err(|err| map_placement_error(event_id, err))?;
        let mut questions = rows
            .iter()
            .map(deserialize_placement)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| {
                error!(%event_id, error = %err, "stored form could not be reconstructed");
                Error::dependency_failure(format!("stored form is inconsistent: {err}"))
            })?;
        sort_by_layout(&mut questions);
        Ok(questions)
    }
}

#[async_trait]
impl<E, P, M> FormBuilderCommand for FormService<E, P, M>
where
    E: EventRepository,
    P: PlacementRepository,
    M: MasterCatalogResolver,
{
    async fn save_questions(
        &self,
        request: SaveQuestionsRequest,
    ) -> Result<SaveQuestionsResponse, Error> {
        let SaveQuestionsRequest {
            event_id,
            organization_id,
            questions,
        } = request;

        let event = self.require_event(event_id).await?;
        if event.organization_id != organization_id {
            warn!(%event_id, %organization_id, "form save for another organization's event");
            return Err(Error::not_found(format!("event {event_id} not found")));
        }
        reject_duplicate_ids(&questions)?;
        let owned = self.owned_placement_ids(event_id).await?;

        let mut placements = Vec::with_capacity(questions.len());
        for question in &questions {
            let mut placed =
                serialize_placement(self.resolver.as_ref(), question, event_id, organization_id)
                    .await?;
            claim_id(&mut placed, &owned);
            placements.push(placed);
        }

        self.placements
            .replace_for_event(event_id, &placements)
            .await
            .map_err(|err| map_placement_error(event_id, err))?;

        info!(%event_id, saved_count = placements.len(), "saved event form");
        Ok(SaveQuestionsResponse {
            saved_count: placements.len(),
        })
    }
}

#[async_trait]
impl<E, P, M> FormQuery for FormService<E, P, M>
where
    E: EventRepository,
    P: PlacementRepository,
    M: MasterCatalogResolver,
{
    async fn load_event_questions(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<ReconstructedQuestion>, Error> {
        self.reconstruct(event_id).await
    }

    async fn load_public_form(&self, slug: &str) -> Result<PublicForm, Error> {
        let event = self
            .events
            .find_by_slug(slug)
            .await
            .map_err(|err| map_event_error("find_by_slug", err))?
            .filter(|event| event.status.accepts_registrations())
            .ok_or_else(|| {
                warn!(slug, "public form requested for a missing or closed event");
                Error::not_found("Event not found or no longer accepting registrations")
            })?;

        let questions = self.reconstruct(event.id).await?;
        Ok(PublicForm {
            event: EventSummary::from(&event),
            page_count: page_count(&questions),
            questions,
        })
    }
}

#[cfg(test)]
#[path = "form_service_tests.rs"]
mod tests;
