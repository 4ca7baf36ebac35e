
/// Document entity and NOT NULL enforcement
pub mod document_tests;
