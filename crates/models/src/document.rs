//! Identity documents. Stored only; no service or route reads them.
//!
//! `document_type`, `document_number` and `issued_by` are NOT NULL in the
//! schema. [`NewDocument`] leaves them optional so that a missing value reaches
//! the database and is rejected there.
use sea_orm::{entity::prelude::*, ActiveValue, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "documents")]
#[serde(rename_all = "camelCase")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub document_type: String,
    pub document_number: String,
    pub issued_by: String,
}

#[derive(Copy, Clone, Debug, EnumIter)]
pub enum Relation {}

impl RelationTrait for Relation {
    fn def(&self) -> RelationDef { panic!("no relations") }
}

impl ActiveModelBehavior for ActiveModel {}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDocument {
    pub document_type: Option<String>,
    pub document_number: Option<String>,
    pub issued_by: Option<String>,
}

impl NewDocument {
    pub fn new(document_type: &str, document_number: &str, issued_by: &str) -> Self {
        Self {
            document_type: Some(document_type.to_string()),
            document_number: Some(document_number.to_string()),
            issued_by: Some(issued_by.to_string()),
        }
    }
}

fn set_or_skip(v: Option<String>) -> ActiveValue<String> {
    match v {
        Some(s) => Set(s),
        None => NotSet,
    }
}

/// Insert a document; the database assigns the id.
pub async fn create(db: &DatabaseConnection, input: NewDocument) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        document_type: set_or_skip(input.document_type),
        document_number: set_or_skip(input.document_number),
        issued_by: set_or_skip(input.issued_by),
    };
    Ok(am.insert(db).await?)
}

pub async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Model>, errors::ModelError> {
    Ok(Entity::find_by_id(id).one(db).await?)
}

/// Returns true if a row was removed.
pub async fn delete_by_id(db: &DatabaseConnection, id: i32) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await?;
    Ok(res.rows_affected > 0)
}
