//! Service layer between the HTTP handlers and the models crate.
//! - `flight`: repository abstraction, SeaORM and in-memory implementations, `FlightService`.
//! - `errors`: the single error type surfaced to callers.

pub mod errors;
pub mod flight;
#[cfg(test)]
pub mod test_support;
