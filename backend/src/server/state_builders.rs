//! Wiring of domain services onto the HTTP state.

use std::sync::Arc;

use actix_web::web;

use eventform::domain::ports::{FormBuilderCommand, FormQuery, RegistrationCommand};
use eventform::domain::{
    FormService, KeywordIdentityExtractor, MasterCatalogService, RegistrationService,
};
use eventform::inbound::http::state::HttpState;
use eventform::outbound::persistence::{
    DbPool, DieselEventRepository, DieselMasterQuestionRepository, DieselPlacementRepository,
    DieselRegistrantRepository, DieselResponseRepository,
};

use super::ServerConfig;

type DieselFormService = FormService<
    DieselEventRepository,
    DieselPlacementRepository,
    MasterCatalogService<DieselMasterQuestionRepository>,
>;

fn build_form_service(pool: &DbPool) -> Arc<DieselFormService> {
    let resolver = Arc::new(MasterCatalogService::new(Arc::new(
        DieselMasterQuestionRepository::new(pool.clone()),
    )));
    Arc::new(FormService::new(
        Arc::new(DieselEventRepository::new(pool.clone())),
        Arc::new(DieselPlacementRepository::new(pool.clone())),
        resolver,
    ))
}

fn build_pooled_state(pool: &DbPool) -> HttpState {
    let forms = build_form_service(pool);
    let registrations = Arc::new(RegistrationService::new(
        Arc::new(DieselEventRepository::new(pool.clone())),
        Arc::clone(&forms),
        Arc::new(DieselRegistrantRepository::new(pool.clone())),
        Arc::new(DieselResponseRepository::new(pool.clone())),
        Arc::new(KeywordIdentityExtractor),
    ));

    let form_builder: Arc<dyn FormBuilderCommand> = forms.clone();
    let form_query: Arc<dyn FormQuery> = forms;
    let registrations: Arc<dyn RegistrationCommand> = registrations;
    HttpState::new(form_builder, form_query, registrations)
}

/// Build handler state: Diesel-backed services when a pool is configured,
/// fixtures otherwise.
pub(super) fn build_http_state(config: &ServerConfig) -> web::Data<HttpState> {
    let state = config
        .db_pool
        .as_ref()
        .map_or_else(HttpState::default, build_pooled_state);
    web::Data::new(state)
}
