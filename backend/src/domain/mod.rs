//! Domain primitives, aggregates and services.
//!
//! Purpose: define the transport-agnostic form model and the use cases built
//! on it. Inbound adapters call the driving ports in [`ports`]; outbound
//! adapters implement the driven ones.
//!
//! Public surface:
//! - Error / ErrorCode: API error payload and stable identifier.
//! - Question model and codec: see [`question`].
//! - Services: [`MasterCatalogService`], [`FormService`] and
//!   [`RegistrationService`].

pub mod answers;
pub mod error;
pub mod event;
pub mod form_service;
pub mod identity;
pub mod master_catalog_service;
pub mod ports;
pub mod question;
pub mod registration;
pub mod registration_service;
mod trace_id;

pub use self::answers::{AnswerMap, AnswerValue, MissingAnswer, missing_required_answers};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::event::{Event, EventSlug, EventStatus, EventSummary};
pub use self::form_service::FormService;
pub use self::identity::{Identity, KeywordIdentityExtractor};
pub use self::master_catalog_service::MasterCatalogService;
pub use self::question::{
    CustomOptions, FormPage, JoinedPlacement, Layout, LayoutValidationError, MAX_COLUMN,
    MAX_POSITION, MasterQuestion, MasterScope, MasterSignature, PlacedQuestion,
    PlacementDecodeError, PlacementOrigin, QuestionMetadata, QuestionType, ReconstructedQuestion,
    UnknownQuestionType, deserialize_placement, group_by_page, page_count, serialize_placement, sort_by_layout,
};
pub use self::registration::{
    ANONYMOUS_NAME, NewEventResponse, NewRegistrant, Registrant, RegistrationOutcome,
};
pub use self::registration_service::RegistrationService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};

/// Convenient API result alias.
pub type ApiResult<T> = Result<T, Error>;
