//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod event_repository;
mod form_builder_command;
mod form_query;
mod identity_extractor;
mod master_catalog_resolver;
mod master_question_repository;
mod placement_repository;
mod registrant_repository;
mod registration_command;
mod response_repository;

#[cfg(test)]
pub use event_repository::MockEventRepository;
pub use event_repository::{EventRepository, EventRepositoryError, FixtureEventRepository};
#[cfg(test)]
pub use form_builder_command::MockFormBuilderCommand;
pub use form_builder_command::{
    FixtureFormBuilderCommand, FormBuilderCommand, SaveQuestionsRequest, SaveQuestionsResponse,
};
#[cfg(test)]
pub use form_query::MockFormQuery;
pub use form_query::{FixtureFormQuery, FormQuery, PublicForm};
pub use identity_extractor::IdentityExtractor;
#[cfg(test)]
pub use identity_extractor::MockIdentityExtractor;
pub use master_catalog_resolver::MasterCatalogResolver;
#[cfg(test)]
pub use master_catalog_resolver::MockMasterCatalogResolver;
#[cfg(test)]
pub use master_question_repository::MockMasterQuestionRepository;
pub use master_question_repository::{
    FixtureMasterQuestionRepository, MasterQuestionRepository, MasterQuestionRepositoryError,
};
#[cfg(test)]
pub use placement_repository::MockPlacementRepository;
pub use placement_repository::{
    FixturePlacementRepository, PlacementRepository, PlacementRepositoryError,
};
#[cfg(test)]
pub use registrant_repository::MockRegistrantRepository;
pub use registrant_repository::{
    FixtureRegistrantRepository, RegistrantRepository, RegistrantRepositoryError,
};
#[cfg(test)]
pub use registration_command::MockRegistrationCommand;
pub use registration_command::{
    FixtureRegistrationCommand, RegistrationCommand, SubmitRegistrationRequest,
};
#[cfg(test)]
pub use response_repository::MockResponseRepository;
pub use response_repository::{
    FixtureResponseRepository, ResponseRepository, ResponseRepositoryError,
};
