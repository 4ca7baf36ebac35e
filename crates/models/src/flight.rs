use sea_orm::{entity::prelude::*, DatabaseConnection, QueryFilter};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "flight")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub source: Option<String>,
    pub destination: Option<String>,
    pub departure_date: Option<Date>,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations defined here") }
}

impl ActiveModelBehavior for ActiveModel {}

/// Flights matching all three columns exactly. A `None` argument matches `NULL`.
pub async fn find_by_source_and_destination_and_departure_date(
    db: &DatabaseConnection,
    source: Option<&str>,
    destination: Option<&str>,
    departure_date: Option<Date>,
) -> Result<Vec<Model>, errors::ModelError> {
    let mut select = Entity::find();
    select = match source {
        Some(s) => select.filter(Column::Source.eq(s)),
        None => select.filter(Column::Source.is_null()),
    };
    select = match destination {
        Some(d) => select.filter(Column::Destination.eq(d)),
        None => select.filter(Column::Destination.is_null()),
    };
    select = match departure_date {
        Some(d) => select.filter(Column::DepartureDate.eq(d)),
        None => select.filter(Column::DepartureDate.is_null()),
    };
    let rows = select.all(db).await?;
    Ok(rows)
}
