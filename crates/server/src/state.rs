use std::sync::Arc;

use sea_orm::DatabaseConnection;
use service::flight::{repo::seaorm::SeaOrmFlightRepository, FlightService};

pub type AppFlightService = FlightService<SeaOrmFlightRepository>;

#[derive(Clone)]
pub struct ServerState {
    pub flights: Arc<AppFlightService>,
    /// See `configs::ServerConfig::strict_not_found`.
    pub strict_not_found: bool,
}

impl ServerState {
    pub fn new(db: DatabaseConnection, strict_not_found: bool) -> Self {
        let repo = Arc::new(SeaOrmFlightRepository::new(db));
        Self { flights: Arc::new(FlightService::new(repo)), strict_not_found }
    }
}
