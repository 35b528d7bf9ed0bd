//! PostgreSQL persistence adapters using Diesel.
//!
//! Each repository implements one driven port from `domain::ports` and only
//! translates between Diesel rows and domain types. Row structs and the
//! table definitions stay private to this module.
//!
//! # Example
//!
//! ```no_run
//! use eventform::outbound::persistence::{DbPool, DieselEventRepository, PoolConfig};
//!
//! # async fn wire() -> Result<(), eventform::outbound::persistence::PoolError> {
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/eventform")).await?;
//! let events = DieselEventRepository::new(pool);
//! # let _ = events;
//! # Ok(())
//! # }
//! ```

mod diesel_event_repository;
mod diesel_master_question_repository;
mod diesel_placement_repository;
mod diesel_registrant_repository;
mod diesel_response_repository;
mod error_mapping;
mod json_codec;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_event_repository::DieselEventRepository;
pub use diesel_master_question_repository::DieselMasterQuestionRepository;
pub use diesel_placement_repository::DieselPlacementRepository;
pub use diesel_registrant_repository::DieselRegistrantRepository;
pub use diesel_response_repository::DieselResponseRepository;
pub use migrations::{MigrationError, run_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
