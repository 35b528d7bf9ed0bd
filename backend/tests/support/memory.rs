//! In-memory implementations of every storage port.
//!
//! One [`MemoryStore`] backs all five repositories so end-to-end tests can
//! run the real domain services and inspect what they wrote.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use eventform::domain::ports::{
    EventRepository, EventRepositoryError, MasterQuestionRepository,
    MasterQuestionRepositoryError, PlacementRepository, PlacementRepositoryError,
    RegistrantRepository, RegistrantRepositoryError, ResponseRepository,
    ResponseRepositoryError,
};
use eventform::domain::{
    AnswerMap, Event, Identity, JoinedPlacement, MasterQuestion, MasterScope, MasterSignature,
    NewEventResponse, NewRegistrant, PlacedQuestion, QuestionType, Registrant,
};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct StoredResponse {
    pub id: Uuid,
    pub registrant_id: Uuid,
    pub event_id: Uuid,
    pub answers: AnswerMap,
}

#[derive(Default)]
struct Tables {
    events: Vec<Event>,
    masters: Vec<MasterQuestion>,
    placements: Vec<PlacedQuestion>,
    registrants: Vec<Registrant>,
    responses: Vec<StoredResponse>,
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
}

impl MemoryStore {
    fn tables(&self) -> MutexGuard<'_, Tables> {
        self.tables.lock().expect("memory store lock")
    }

    pub fn seed_event(&self, event: Event) {
        self.tables().events.push(event);
    }

    pub fn seed_master(&self, master: MasterQuestion) {
        self.tables().masters.push(master);
    }

    pub fn masters(&self) -> Vec<MasterQuestion> {
        self.tables().masters.clone()
    }

    pub fn placements(&self, event_id: Uuid) -> Vec<PlacedQuestion> {
        self.tables()
            .placements
            .iter()
            .filter(|placement| placement.event_id == event_id)
            .cloned()
            .collect()
    }

    pub fn registrants(&self) -> Vec<Registrant> {
        self.tables().registrants.clone()
    }

    pub fn responses(&self) -> Vec<StoredResponse> {
        self.tables().responses.clone()
    }
}

fn same(stored: Option<&String>, wanted: Option<&String>) -> bool {
    matches!((stored, wanted), (Some(a), Some(b)) if a == b)
}

#[async_trait]
impl EventRepository for MemoryStore {
    async fn find_by_id(&self, event_id: Uuid) -> Result<Option<Event>, EventRepositoryError> {
        Ok(self
            .tables()
            .events
            .iter()
            .find(|event| event.id == event_id)
            .cloned())
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Event>, EventRepositoryError> {
        Ok(self
            .tables()
            .events
            .iter()
            .find(|event| event.slug.as_deref() == Some(slug))
            .cloned())
    }
}

#[async_trait]
impl MasterQuestionRepository for MemoryStore {
    async fn find_global(
        &self,
        question_type: QuestionType,
        text: &str,
    ) -> Result<Option<MasterQuestion>, MasterQuestionRepositoryError> {
        Ok(self
            .tables()
            .masters
            .iter()
            .find(|master| {
                master.scope == MasterScope::Global
                    && master.question_type == question_type
                    && master.text == text
            })
            .cloned())
    }

    async fn find_for_organization(
        &self,
        question_type: QuestionType,
        text: &str,
        organization_id: Uuid,
    ) -> Result<Option<MasterQuestion>, MasterQuestionRepositoryError> {
        Ok(self
            .tables()
            .masters
            .iter()
            .find(|master| {
                master.scope == MasterScope::Organization(organization_id)
                    && master.question_type == question_type
                    && master.text == text
            })
            .cloned())
    }

    async fn insert_for_organization(
        &self,
        signature: &MasterSignature,
        organization_id: Uuid,
    ) -> Result<MasterQuestion, MasterQuestionRepositoryError> {
        let mut tables = self.tables();
        let scope = MasterScope::Organization(organization_id);
        if tables.masters.iter().any(|master| {
            master.scope == scope
                && master.question_type == signature.question_type
                && master.text == signature.text
        }) {
            return Err(MasterQuestionRepositoryError::duplicate_master(
                signature.text.as_str(),
            ));
        }
        let master = MasterQuestion {
            id: Uuid::new_v4(),
            question_type: signature.question_type,
            text: signature.text.clone(),
            options: signature.options.clone(),
            scope,
        };
        tables.masters.push(master.clone());
        Ok(master)
    }
}

#[async_trait]
impl PlacementRepository for MemoryStore {
    async fn replace_for_event(
        &self,
        event_id: Uuid,
        placements: &[PlacedQuestion],
    ) -> Result<(), PlacementRepositoryError> {
        let mut tables = self.tables();
        if let Some(missing) = placements
            .iter()
            .filter_map(PlacedQuestion::master_id)
            .find(|id| !tables.masters.iter().any(|master| master.id == *id))
        {
            return Err(PlacementRepositoryError::missing_master(missing.to_string()));
        }
        if let Some(taken) = placements.iter().find(|incoming| {
            tables
                .placements
                .iter()
                .any(|stored| stored.id == incoming.id && stored.event_id != event_id)
        }) {
            return Err(PlacementRepositoryError::query(format!(
                "duplicate key value violates unique constraint \"event_questions_pkey\": {}",
                taken.id
            )));
        }
        tables
            .placements
            .retain(|placement| placement.event_id != event_id);
        tables.placements.extend_from_slice(placements);
        Ok(())
    }

    async fn list_for_event(
        &self,
        event_id: Uuid,
    ) -> Result<Vec<JoinedPlacement>, PlacementRepositoryError> {
        let tables = self.tables();
        let mut placements: Vec<PlacedQuestion> = tables
            .placements
            .iter()
            .filter(|placement| placement.event_id == event_id)
            .cloned()
            .collect();
        placements.sort_by_key(|placement| placement.layout);
        Ok(placements
            .into_iter()
            .map(|placement| {
                let master = placement.master_id().and_then(|id| {
                    tables.masters.iter().find(|master| master.id == id).cloned()
                });
                JoinedPlacement { placement, master }
            })
            .collect())
    }
}

#[async_trait]
impl RegistrantRepository for MemoryStore {
    async fn find_by_contact(
        &self,
        contact: &Identity,
    ) -> Result<Option<Registrant>, RegistrantRepositoryError> {
        Ok(self
            .tables()
            .registrants
            .iter()
            .find(|registrant| {
                same(registrant.email.as_ref(), contact.email.as_ref())
                    || same(registrant.phone.as_ref(), contact.phone.as_ref())
            })
            .cloned())
    }

    async fn insert(
        &self,
        registrant: &NewRegistrant,
    ) -> Result<Registrant, RegistrantRepositoryError> {
        let stored = Registrant {
            id: Uuid::new_v4(),
            email: registrant.email.clone(),
            phone: registrant.phone.clone(),
            name: registrant.name.clone(),
        };
        self.tables().registrants.push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl ResponseRepository for MemoryStore {
    async fn exists(
        &self,
        registrant_id: Uuid,
        event_id: Uuid,
    ) -> Result<bool, ResponseRepositoryError> {
        Ok(self
            .tables()
            .responses
            .iter()
            .any(|response| response.registrant_id == registrant_id && response.event_id == event_id))
    }

    async fn insert(&self, response: &NewEventResponse) -> Result<Uuid, ResponseRepositoryError> {
        let mut tables = self.tables();
        if tables.responses.iter().any(|stored| {
            stored.registrant_id == response.registrant_id && stored.event_id == response.event_id
        }) {
            return Err(ResponseRepositoryError::duplicate_registration(
                response.registrant_id,
                response.event_id,
            ));
        }
        let id = Uuid::new_v4();
        tables.responses.push(StoredResponse {
            id,
            registrant_id: response.registrant_id,
            event_id: response.event_id,
            answers: response.answers.clone(),
        });
        Ok(id)
    }
}
