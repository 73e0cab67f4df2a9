use business::domain::product::model::ProductRecord;
use serde_json::Value;
use sqlx::FromRow;

/// Database row for a catalog product. The menu document is stored as
/// schemaless jsonb so admin tooling can add fields without a migration.
#[derive(Debug, FromRow)]
pub struct ProductDocumentEntity {
    pub id: String,
    pub doc: Value,
}

impl ProductDocumentEntity {
    /// Converts the database entity into a domain record
    pub fn into_domain(self) -> ProductRecord {
        let doc = match self.doc {
            Value::Object(map) => map,
            _ => serde_json::Map::new(),
        };
        ProductRecord::new(self.id, doc)
    }
}
