//! Diesel failure classification shared by every repository.
//!
//! Each repository owns its port error type, so the helpers here take the
//! port's constructors as closures and only decide which one applies.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use super::pool::PoolError;

/// Map a pool failure through the port's `connection` constructor.
pub(super) fn map_basic_pool_error<E, C>(error: PoolError, connection: C) -> E
where
    C: FnOnce(String) -> E,
{
    connection(error.into_message())
}

/// Constraint name and kind of a database-level rejection, if any.
pub(super) fn constraint_violation(error: &DieselError) -> Option<(&DatabaseErrorKind, Option<&str>)> {
    match error {
        DieselError::DatabaseError(kind, info) => Some((kind, info.constraint_name())),
        _ => None,
    }
}

/// Whether `error` is a unique violation, optionally of one named
/// constraint or index.
pub(super) fn is_unique_violation(error: &DieselError, constraint: Option<&str>) -> bool {
    matches!(
        constraint_violation(error),
        Some((DatabaseErrorKind::UniqueViolation, name))
            if constraint.is_none_or(|expected| name == Some(expected))
    )
}

/// Map a Diesel failure through the port's `query` and `connection`
/// constructors. Messages stay generic; the driver text is logged at debug.
pub(super) fn map_basic_diesel_error<E, Q, C>(error: DieselError, query: Q, connection: C) -> E
where
    Q: FnOnce(&'static str) -> E,
    C: FnOnce(&'static str) -> E,
{
    match &error {
        DieselError::DatabaseError(kind, info) => {
            debug!(?kind, message = info.message(), "diesel operation failed");
        }
        other => debug!(error = %other, "diesel operation failed"),
    }

    match error {
        DieselError::NotFound => query("record not found"),
        DieselError::QueryBuilderError(_) => query("database query error"),
        DieselError::DeserializationError(_) => query("stored row could not be decoded"),
        DieselError::SerializationError(_) => query("value could not be encoded"),
        DieselError::DatabaseError(DatabaseErrorKind::ClosedConnection, _)
        | DieselError::BrokenTransactionManager => connection("database connection error"),
        _ => query("database error"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[derive(Debug, PartialEq, Eq)]
    enum Mapped {
        Query(String),
        Connection(String),
    }

    fn map(error: DieselError) -> Mapped {
        map_basic_diesel_error(
            error,
            |message| Mapped::Query(message.to_owned()),
            |message| Mapped::Connection(message.to_owned()),
        )
    }

    fn database_error(kind: DatabaseErrorKind) -> DieselError {
        DieselError::DatabaseError(kind, Box::new("driver detail".to_owned()))
    }

    #[rstest]
    fn not_found_is_a_query_error() {
        assert_eq!(map(DieselError::NotFound), Mapped::Query("record not found".to_owned()));
    }

    #[rstest]
    fn closed_connection_is_a_connection_error() {
        assert_eq!(
            map(database_error(DatabaseErrorKind::ClosedConnection)),
            Mapped::Connection("database connection error".to_owned())
        );
    }

    #[rstest]
    fn driver_text_is_not_exposed() {
        let Mapped::Query(message) = map(database_error(DatabaseErrorKind::Unknown)) else {
            panic!("expected a query error");
        };
        assert!(!message.contains("driver detail"));
    }

    #[rstest]
    fn pool_errors_use_connection_constructor() {
        let mapped: Mapped =
            map_basic_pool_error(PoolError::checkout("timed out"), Mapped::Connection);
        assert_eq!(mapped, Mapped::Connection("timed out".to_owned()));
    }

    #[rstest]
    #[case(DatabaseErrorKind::UniqueViolation, None, true)]
    #[case(DatabaseErrorKind::ForeignKeyViolation, None, false)]
    fn unique_violations_are_recognised(
        #[case] kind: DatabaseErrorKind,
        #[case] constraint: Option<&str>,
        #[case] expected: bool,
    ) {
        assert_eq!(is_unique_violation(&database_error(kind), constraint), expected);
    }
}
