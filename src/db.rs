//! Document storage behind the content and submission endpoints.
//!
//! Handlers only see the [`DocumentStore`] trait. The server builds a
//! [`MongoStore`] at startup when a database is configured; tests plug in
//! their own implementations.

use std::sync::Arc;

use anyhow::Context;
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{self, Bson, DateTime, Document},
    Client, Database,
};
use serde::Serialize;
use serde_json::{Map, Value};

/// A JSON object as stored in, and returned from, a collection.
pub type Record = Map<String, Value>;

/// Shared store handle. `None` means the server runs without a database.
pub type DbHandle = Option<Arc<dyn DocumentStore>>;

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Name of the underlying database.
    fn name(&self) -> &str;

    /// Inserts `payload` into `collection` and returns the assigned identifier.
    async fn create_document(&self, collection: &str, payload: Record) -> anyhow::Result<String>;

    /// Returns up to `limit` records of `collection` matching every field of
    /// `filter`. Records keep their identifier under `_id`.
    async fn get_documents(
        &self,
        collection: &str,
        filter: Record,
        limit: i64,
    ) -> anyhow::Result<Vec<Record>>;

    async fn list_collection_names(&self) -> anyhow::Result<Vec<String>>;
}

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub async fn connect(url: &str, name: &str) -> anyhow::Result<MongoStore> {
        let client = Client::with_uri_str(url)
            .await
            .context("failed to build database client")?;
        Ok(MongoStore {
            db: client.database(name),
        })
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.db.name()
    }

    async fn create_document(&self, collection: &str, payload: Record) -> anyhow::Result<String> {
        let mut doc = bson::to_document(&payload)?;
        let now = DateTime::now();
        doc.insert("created_at", now);
        doc.insert("updated_at", now);

        let result = self
            .db
            .collection::<Document>(collection)
            .insert_one(doc)
            .await?;

        let id = match result.inserted_id {
            Bson::ObjectId(oid) => oid.to_hex(),
            other => other.to_string(),
        };
        tracing::debug!(collection, %id, "inserted document");
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Record,
        limit: i64,
    ) -> anyhow::Result<Vec<Record>> {
        let docs: Vec<Document> = self
            .db
            .collection::<Document>(collection)
            .find(bson::to_document(&filter)?)
            .limit(limit)
            .await?
            .try_collect()
            .await?;

        Ok(docs.into_iter().map(document_to_record).collect())
    }

    async fn list_collection_names(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.db.list_collection_names().await?)
    }
}

/// Serializes a value that must be a JSON object.
pub fn to_record<T: Serialize>(value: &T) -> anyhow::Result<Record> {
    match serde_json::to_value(value)? {
        Value::Object(record) => Ok(record),
        other => Err(anyhow::anyhow!("expected a JSON object, found `{other}`")),
    }
}

fn document_to_record(doc: Document) -> Record {
    doc.into_iter().map(|(k, v)| (k, bson_to_json(v))).collect()
}

// object ids become hex strings and dates RFC 3339 strings; everything else
// follows relaxed extended JSON
fn bson_to_json(value: Bson) -> Value {
    match value {
        Bson::ObjectId(oid) => Value::String(oid.to_hex()),
        Bson::DateTime(dt) => match dt.try_to_rfc3339_string() {
            Ok(s) => Value::String(s),
            Err(_) => Bson::DateTime(dt).into_relaxed_extjson(),
        },
        Bson::Document(doc) => Value::Object(document_to_record(doc)),
        Bson::Array(items) => Value::Array(items.into_iter().map(bson_to_json).collect()),
        other => other.into_relaxed_extjson(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};
    use serde_json::json;

    #[test]
    fn object_ids_and_dates_become_strings() {
        let oid = ObjectId::new();
        let record = document_to_record(doc! {
            "_id": oid,
            "title": "Guided Meditation Camp",
            "date": DateTime::from_millis(1_737_396_000_000),
            "tags": ["meditation", "peace"],
            "meta": { "seats": 40 },
        });

        assert_eq!(record["_id"], json!(oid.to_hex()));
        assert_eq!(record["date"], json!("2025-01-20T18:00:00Z"));
        assert_eq!(record["tags"], json!(["meditation", "peace"]));
        assert_eq!(record["meta"], json!({ "seats": 40 }));
    }

    #[test]
    fn to_record_rejects_non_objects() {
        assert!(to_record(&json!({ "slug": "a" })).is_ok());
        assert!(to_record(&vec!["a", "b"]).is_err());
    }
}
