use std::sync::Arc;

use tracing::{debug, info, instrument};

use super::domain::Flight;
use super::repository::FlightRepository;
use crate::errors::ServiceError;

/// Flight business service independent of web framework.
///
/// A missing record is never an error here: lookups return `None` and
/// deletion returns `false`. `Err` only carries repository failures.
pub struct FlightService<R: FlightRepository> {
    repo: Arc<R>,
}

impl<R: FlightRepository> FlightService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    /// Persist a new flight and return it with its assigned id.
    ///
    /// # Examples
    /// ```
    /// use service::flight::{FlightService, domain::Flight, repository::mock::MockFlightRepository};
    /// use std::sync::Arc;
    /// let svc = FlightService::new(Arc::new(MockFlightRepository::default()));
    /// let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let saved = tokio_test::block_on(svc.add_flight(Flight::new("BOS", "JFK", date))).unwrap();
    /// assert!(saved.id.is_some());
    /// ```
    #[instrument(skip(self, flight))]
    pub async fn add_flight(&self, mut flight: Flight) -> Result<Flight, ServiceError> {
        // creation never targets an existing row
        flight.id = None;
        let saved = self.repo.save(flight).await?;
        info!(id = ?saved.id, "flight_created");
        Ok(saved)
    }

    pub async fn find_all(&self) -> Result<Vec<Flight>, ServiceError> {
        self.repo.find_all().await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, ServiceError> {
        self.repo.find_by_id(id).await
    }

    /// Returns `true` if the flight existed and was removed.
    #[instrument(skip(self))]
    pub async fn delete_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        if !self.repo.exists_by_id(id).await? {
            debug!(id, "flight not found for delete");
            return Ok(false);
        }
        self.repo.delete_by_id(id).await?;
        info!(id, "flight_deleted");
        Ok(true)
    }

    /// Overwrite source, destination and departure date of a stored flight.
    /// The id in `incoming` is ignored.
    ///
    /// # Examples
    /// ```
    /// use service::flight::{FlightService, domain::Flight, repository::mock::MockFlightRepository};
    /// use std::sync::Arc;
    /// let svc = FlightService::new(Arc::new(MockFlightRepository::default()));
    /// let date = chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let missing = tokio_test::block_on(svc.update(42, Flight::new("BOS", "LGA", date))).unwrap();
    /// assert!(missing.is_none());
    /// ```
    #[instrument(skip(self, incoming))]
    pub async fn update(&self, id: i32, incoming: Flight) -> Result<Option<Flight>, ServiceError> {
        let Some(mut current) = self.repo.find_by_id(id).await? else {
            debug!(id, "flight not found for update");
            return Ok(None);
        };
        current.source = incoming.source;
        current.destination = incoming.destination;
        current.departure_date = incoming.departure_date;
        // the row may have been deleted since the lookup
        let Some(saved) = self.repo.update(current).await? else {
            debug!(id, "flight removed before update");
            return Ok(None);
        };
        info!(id, "flight_updated");
        Ok(Some(saved))
    }
}
