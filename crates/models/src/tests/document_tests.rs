use anyhow::Result;
use sea_orm::EntityTrait;

use crate::{db::connect_memory, document::{self, NewDocument}, errors::ModelError};

#[tokio::test]
async fn create_find_and_delete_document() -> Result<()> {
    let db = connect_memory().await?;

    let created = document::create(&db, NewDocument::new("PASSPORT", "X1234567", "US State Department")).await?;
    assert!(created.id > 0);

    let found = document::find_by_id(&db, created.id).await?.expect("stored");
    assert_eq!(found, created);
    assert_eq!(found.document_number, "X1234567");

    assert!(document::delete_by_id(&db, created.id).await?);
    assert!(document::find_by_id(&db, created.id).await?.is_none());
    assert!(!document::delete_by_id(&db, created.id).await?);
    Ok(())
}

#[tokio::test]
async fn missing_document_type_violates_not_null() -> Result<()> {
    let db = connect_memory().await?;

    let input = NewDocument { document_type: None, ..NewDocument::new("", "X1234567", "US State Department") };
    let err = document::create(&db, input).await.expect_err("NOT NULL must reject");
    assert!(err.to_string().contains("NOT NULL"), "unexpected error: {err}");

    let rows = document::Entity::find().all(&db).await?;
    assert!(rows.is_empty());
    Ok(())
}

#[tokio::test]
async fn each_required_column_is_enforced() -> Result<()> {
    let db = connect_memory().await?;

    let no_number = NewDocument { document_number: None, ..NewDocument::new("ID", "", "DMV") };
    assert!(document::create(&db, no_number).await.is_err());

    let no_issuer = NewDocument { issued_by: None, ..NewDocument::new("ID", "42", "") };
    let err = document::create(&db, no_issuer).await.expect_err("issued_by is required");
    assert!(matches!(err, ModelError::Db(ref msg) if msg.contains("NOT NULL")), "unexpected error: {err}");
    Ok(())
}

#[test]
fn new_document_reads_camel_case_json() {
    let d: NewDocument = serde_json::from_value(serde_json::json!({"documentNumber": "42", "issuedBy": "DMV"})).expect("deserialize");
    assert_eq!(d.document_type, None);
    assert_eq!(d.document_number.as_deref(), Some("42"));
}
