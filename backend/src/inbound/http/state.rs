//! Shared HTTP adapter state.
//!
//! Handlers accept this state via `actix_web::web::Data` so they only depend
//! on driving ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FixtureFormBuilderCommand, FixtureFormQuery, FixtureRegistrationCommand, FormBuilderCommand,
    FormQuery, RegistrationCommand,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub form_builder: Arc<dyn FormBuilderCommand>,
    pub forms: Arc<dyn FormQuery>,
    pub registrations: Arc<dyn RegistrationCommand>,
}

impl HttpState {
    pub fn new(
        form_builder: Arc<dyn FormBuilderCommand>,
        forms: Arc<dyn FormQuery>,
        registrations: Arc<dyn RegistrationCommand>,
    ) -> Self {
        Self {
            form_builder,
            forms,
            registrations,
        }
    }
}

impl Default for HttpState {
    /// State backed entirely by fixture ports.
    fn default() -> Self {
        Self::new(
            Arc::new(FixtureFormBuilderCommand),
            Arc::new(FixtureFormQuery),
            Arc::new(FixtureRegistrationCommand),
        )
    }
}
