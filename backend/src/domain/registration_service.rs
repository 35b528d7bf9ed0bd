//! Attendee registration.
//!
//! One submission is a sequential chain: check the event is open, validate
//! required answers, recover the registrant's identity, find or create the
//! registrant, then store the response. Validation happens before the first
//! write, so a rejected submission leaves storage untouched.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;
use tracing::{error, info, warn};
use uuid::Uuid;

use crate::domain::form_service::map_event_error;
use crate::domain::ports::{
    EventRepository, FormQuery, IdentityExtractor, RegistrantRepository,
    RegistrantRepositoryError, RegistrationCommand, ResponseRepository, ResponseRepositoryError,
    SubmitRegistrationRequest,
};
use crate::domain::{
    Error, Event, Identity, NewEventResponse, NewRegistrant, Registrant, RegistrationOutcome,
    missing_required_answers,
};

const EVENT_UNAVAILABLE: &str = "Event not found or no longer accepting registrations";
const ALREADY_REGISTERED: &str = "You have already registered for this event";

/// Registration flow over events, forms, registrants and responses.
#[derive(Clone)]
pub struct RegistrationService<E, F, RG, RS, X> {
    events: Arc<E>,
    forms: Arc<F>,
    registrants: Arc<RG>,
    responses: Arc<RS>,
    extractor: Arc<X>,
}

impl<E, F, RG, RS, X> RegistrationService<E, F, RG, RS, X> {
    pub fn new(
        events: Arc<E>,
        forms: Arc<F>,
        registrants: Arc<RG>,
        responses: Arc<RS>,
        extractor: Arc<X>,
    ) -> Self {
        Self {
            events,
            forms,
            registrants,
            responses,
            extractor,
        }
    }
}

fn map_registrant_error(operation: &str, error: RegistrantRepositoryError) -> Error {
    error!(operation, %error, "registrant storage failed");
    Error::dependency_failure(format!("registrant storage error: {error}"))
}

fn already_registered(registrant_id: Uuid, event_id: Uuid) -> Error {
    warn!(%registrant_id, %event_id, "duplicate registration rejected");
    Error::conflict(ALREADY_REGISTERED)
}

fn map_response_error(operation: &str, error: ResponseRepositoryError) -> Error {
    match error {
        ResponseRepositoryError::DuplicateRegistration {
            registrant_id,
            event_id,
        } => already_registered(registrant_id, event_id),
        other => {
            error!(operation, error = %other, "response storage failed");
            Error::dependency_failure(format!("response storage error: {other}"))
        }
    }
}

impl<E, F, RG, RS, X> RegistrationService<E, F, RG, RS, X>
where
    E: EventRepository,
    F: FormQuery,
    RG: RegistrantRepository,
    RS: ResponseRepository,
    X: IdentityExtractor,
{
    async fn open_event(&self, event_id: Uuid) -> Result<Event, Error> {
        self.events
            .find_by_id(event_id)
            .await
            .map_err(|err| map_event_error("find_by_id", err))?
            .filter(|event| event.status.accepts_registrations())
            .ok_or_else(|| {
                warn!(%event_id, "registration for a missing or closed event");
                Error::not_found(EVENT_UNAVAILABLE)
            })
    }

    /// Existing registrant sharing an email or phone, or a new one. Without
    /// either, a fresh anonymous registrant is created every time.
    async fn resolve_registrant(&self, identity: &Identity) -> Result<Registrant, Error> {
        if identity.is_anonymous() {
            return self
                .registrants
                .insert(&NewRegistrant::anonymous(identity))
                .await
                .map_err(|err| map_registrant_error("insert_anonymous", err));
        }

        let existing = self
            .registrants
            .find_by_contact(identity)
            .await
            .map_err(|err| map_registrant_error("find_by_contact", err))?;
        match existing {
            Some(registrant) => Ok(registrant),
            None => self
                .registrants
                .insert(&NewRegistrant::identified(identity))
                .await
                .map_err(|err| map_registrant_error("insert", err)),
        }
    }
}

#[async_trait]
impl<E, F, RG, RS, X> RegistrationCommand for RegistrationService<E, F, RG, RS, X>
where
    E: EventRepository,
    F: FormQuery,
    RG: RegistrantRepository,
    RS: ResponseRepository,
    X: IdentityExtractor,
{
    async fn submit(
        &self,
        request: SubmitRegistrationRequest,
    ) -> Result<RegistrationOutcome, Error> {
        let SubmitRegistrationRequest { event_id, answers } = request;
        let event = self.open_event(event_id).await?;
        let questions = self.forms.load_event_questions(event_id).await?;

        let missing = missing_required_answers(&questions, &answers);
        if !missing.is_empty() {
            warn!(%event_id, missing = missing.len(), "submission missing required answers");
            return Err(
                Error::invalid_request("Please answer all required questions").with_details(
                    json!({
                        "code": "missing_required_answers",
                        "missingQuestions": missing,
                    }),
                ),
            );
        }

        let identity = self.extractor.extract(&answers, &questions);
        let registrant = self.resolve_registrant(&identity).await?;

        let registered = self
            .responses
            .exists(registrant.id, event_id)
            .await
            .map_err(|err| map_response_error("exists", err))?;
        if registered {
            return Err(already_registered(registrant.id, event_id));
        }

        self.responses
            .insert(&NewEventResponse {
                registrant_id: registrant.id,
                event_id,
                answers,
            })
            .await
            .map_err(|err| map_response_error("insert", err))?;

        info!(%event_id, registrant_id = %registrant.id, "registration stored");
        Ok(RegistrationOutcome {
            registrant_id: registrant.id,
            event_name: event.name,
        })
    }
}

#[cfg(test)]
#[path = "registration_service_tests.rs"]
mod tests;
