use async_trait::async_trait;
use chrono::NaiveDate;

use super::domain::Flight;
use crate::errors::ServiceError;

/// Keyed store of flights. Absence is reported through `Option`/`bool`;
/// `Err` is reserved for the store itself failing.
#[async_trait]
pub trait FlightRepository: Send + Sync {
    /// Insert when `id` is `None` or unknown, otherwise overwrite the stored row.
    async fn save(&self, flight: Flight) -> Result<Flight, ServiceError>;
    /// Overwrite the row keyed by `flight.id`. `None` when that row is gone;
    /// never inserts.
    async fn update(&self, flight: Flight) -> Result<Option<Flight>, ServiceError>;
    async fn find_all(&self) -> Result<Vec<Flight>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, ServiceError>;
    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError>;
    /// No-op for an unknown id.
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
    async fn find_by_source_and_destination_and_departure_date(
        &self,
        source: Option<&str>,
        destination: Option<&str>,
        departure_date: Option<NaiveDate>,
    ) -> Result<Vec<Flight>, ServiceError>;
}

/// Simple in-memory mock repository for tests and doc examples
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::{Mutex, MutexGuard};

    #[derive(Default)]
    pub struct MockFlightRepository {
        state: Mutex<State>,
    }

    #[derive(Default)]
    struct State {
        rows: BTreeMap<i32, Flight>,
        last_id: i32,
    }

    impl MockFlightRepository {
        fn lock(&self) -> Result<MutexGuard<'_, State>, ServiceError> {
            self.state.lock().map_err(|_| ServiceError::Db("mock store poisoned".into()))
        }

        /// Number of stored rows.
        pub fn len(&self) -> usize {
            self.state.lock().map(|s| s.rows.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }
    }

    #[async_trait]
    impl FlightRepository for MockFlightRepository {
        async fn save(&self, mut flight: Flight) -> Result<Flight, ServiceError> {
            let mut state = self.lock()?;
            let id = match flight.id {
                Some(id) if state.rows.contains_key(&id) => id,
                _ => {
                    state.last_id += 1;
                    state.last_id
                }
            };
            flight.id = Some(id);
            state.rows.insert(id, flight.clone());
            Ok(flight)
        }

        async fn update(&self, flight: Flight) -> Result<Option<Flight>, ServiceError> {
            let mut state = self.lock()?;
            let Some(id) = flight.id else { return Ok(None) };
            match state.rows.get_mut(&id) {
                Some(row) => {
                    *row = flight.clone();
                    Ok(Some(flight))
                }
                None => Ok(None),
            }
        }

        async fn find_all(&self) -> Result<Vec<Flight>, ServiceError> {
            Ok(self.lock()?.rows.values().cloned().collect())
        }

        async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, ServiceError> {
            Ok(self.lock()?.rows.get(&id).cloned())
        }

        async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
            Ok(self.lock()?.rows.contains_key(&id))
        }

        async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
            self.lock()?.rows.remove(&id);
            Ok(())
        }

        async fn find_by_source_and_destination_and_departure_date(
            &self,
            source: Option<&str>,
            destination: Option<&str>,
            departure_date: Option<NaiveDate>,
        ) -> Result<Vec<Flight>, ServiceError> {
            let state = self.lock()?;
            Ok(state
                .rows
                .values()
                .filter(|f| f.source.as_deref() == source && f.destination.as_deref() == destination && f.departure_date == departure_date)
                .cloned()
                .collect())
        }
    }
}
