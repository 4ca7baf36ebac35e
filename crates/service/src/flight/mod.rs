//! Flight module: three-layer architecture (domain, repository, service).
//!
//! Handlers talk to [`FlightService`]; only the repository touches the database.

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use service::FlightService;
