use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, PaginatorTrait, Set};

use crate::errors::ServiceError;
use crate::flight::domain::Flight;
use crate::flight::repository::FlightRepository;
use models::flight;

pub struct SeaOrmFlightRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmFlightRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

fn db_err(e: DbErr) -> ServiceError { ServiceError::Db(e.to_string()) }

#[async_trait::async_trait]
impl FlightRepository for SeaOrmFlightRepository {
    async fn save(&self, input: Flight) -> Result<Flight, ServiceError> {
        let existing = match input.id {
            Some(id) => flight::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?,
            None => None,
        };
        let saved = match existing {
            Some(current) => {
                let mut am: flight::ActiveModel = current.into();
                am.source = Set(input.source);
                am.destination = Set(input.destination);
                am.departure_date = Set(input.departure_date);
                am.update(&self.db).await.map_err(db_err)?
            }
            None => {
                let am = flight::ActiveModel {
                    id: NotSet,
                    source: Set(input.source),
                    destination: Set(input.destination),
                    departure_date: Set(input.departure_date),
                };
                am.insert(&self.db).await.map_err(db_err)?
            }
        };
        Ok(saved.into())
    }

    async fn update(&self, input: Flight) -> Result<Option<Flight>, ServiceError> {
        let Some(id) = input.id else { return Ok(None) };
        let am = flight::ActiveModel {
            id: Set(id),
            source: Set(input.source),
            destination: Set(input.destination),
            departure_date: Set(input.departure_date),
        };
        match am.update(&self.db).await {
            Ok(row) => Ok(Some(row.into())),
            Err(DbErr::RecordNotUpdated) => Ok(None),
            Err(e) => Err(db_err(e)),
        }
    }

    async fn find_all(&self) -> Result<Vec<Flight>, ServiceError> {
        let rows = flight::Entity::find().all(&self.db).await.map_err(db_err)?;
        Ok(rows.into_iter().map(Flight::from).collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Flight>, ServiceError> {
        let found = flight::Entity::find_by_id(id).one(&self.db).await.map_err(db_err)?;
        Ok(found.map(Flight::from))
    }

    async fn exists_by_id(&self, id: i32) -> Result<bool, ServiceError> {
        let n = flight::Entity::find_by_id(id).count(&self.db).await.map_err(db_err)?;
        Ok(n > 0)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        flight::Entity::delete_by_id(id).exec(&self.db).await.map_err(db_err)?;
        Ok(())
    }

    async fn find_by_source_and_destination_and_departure_date(
        &self,
        source: Option<&str>,
        destination: Option<&str>,
        departure_date: Option<NaiveDate>,
    ) -> Result<Vec<Flight>, ServiceError> {
        let rows = flight::find_by_source_and_destination_and_departure_date(&self.db, source, destination, departure_date).await?;
        Ok(rows.into_iter().map(Flight::from).collect())
    }
}
