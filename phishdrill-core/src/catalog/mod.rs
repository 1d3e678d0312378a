//! Catalog schema for `phishdrill`
//!
//! Catalogs are authored as YAML and deserialized into the types in
//! [`schema`]. The engine treats loaded catalogs as immutable: validity
//! (unique ids, non-empty red flags on deceptive items, difficulty in
//! 1..=3, reason referential integrity) is established once by the
//! loader, never re-checked per operation.

pub mod schema;

pub use schema::{
    CatalogMetadata, Category, ClueCase, ClueZone, Payload, Question, QuestionCatalog,
    ReasonOption,
};
