//! Registrants and their event responses.

use uuid::Uuid;

use super::{AnswerMap, Identity};

/// Display name stored for registrants who gave neither email, phone, nor
/// name.
pub const ANONYMOUS_NAME: &str = "Anonymous User";

/// A deduplicated person who has registered for at least one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registrant {
    pub id: Uuid,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
}

/// Fields for a registrant about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRegistrant {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub name: Option<String>,
}

impl NewRegistrant {
    /// Registrant built from everything the extractor recovered.
    #[must_use]
    pub fn identified(identity: &Identity) -> Self {
        Self {
            email: identity.email.clone(),
            phone: identity.phone.clone(),
            name: identity.name.clone(),
        }
    }

    /// Registrant with no contact details, named after the recovered name
    /// or [`ANONYMOUS_NAME`].
    #[must_use]
    pub fn anonymous(identity: &Identity) -> Self {
        Self {
            email: None,
            phone: None,
            name: Some(
                identity
                    .name
                    .clone()
                    .unwrap_or_else(|| ANONYMOUS_NAME.to_owned()),
            ),
        }
    }
}

/// One registrant's answers to one event's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEventResponse {
    pub registrant_id: Uuid,
    pub event_id: Uuid,
    pub answers: AnswerMap,
}

/// What a successful submission reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationOutcome {
    pub registrant_id: Uuid,
    pub event_name: String,
}
