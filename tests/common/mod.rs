#![allow(dead_code)]

use std::{
    collections::BTreeMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Arc, Mutex,
    },
};

use async_trait::async_trait;
use atmasakshi_api::{
    config::Config,
    db::{DbHandle, DocumentStore, Record},
    service,
};
use axum_test::TestServer;
use serde_json::Value;

/// Keeps collections in memory, in insertion order.
#[derive(Default)]
pub struct MemoryStore {
    collections: Mutex<BTreeMap<String, Vec<Record>>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn seed(&self, collection: &str, records: Vec<Value>) {
        let mut collections = self.collections.lock().unwrap();
        let docs = collections.entry(collection.to_string()).or_default();
        for record in records {
            let Value::Object(mut record) = record else {
                panic!("seed records must be objects");
            };
            record.insert("_id".to_string(), Value::String(self.new_id()));
            docs.push(record);
        }
    }

    pub fn documents(&self, collection: &str) -> Vec<Record> {
        self.collections
            .lock()
            .unwrap()
            .get(collection)
            .cloned()
            .unwrap_or_default()
    }

    fn new_id(&self) -> String {
        format!("{:024x}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        "memory"
    }

    async fn create_document(&self, collection: &str, mut payload: Record) -> anyhow::Result<String> {
        let id = self.new_id();
        payload.insert("_id".to_string(), Value::String(id.clone()));
        self.collections
            .lock()
            .unwrap()
            .entry(collection.to_string())
            .or_default()
            .push(payload);
        Ok(id)
    }

    async fn get_documents(
        &self,
        collection: &str,
        filter: Record,
        limit: i64,
    ) -> anyhow::Result<Vec<Record>> {
        let matching = self
            .documents(collection)
            .into_iter()
            .filter(|doc| filter.iter().all(|(k, v)| doc.get(k) == Some(v)));

        Ok(match usize::try_from(limit) {
            Ok(0) | Err(_) => matching.collect(),
            Ok(limit) => matching.take(limit).collect(),
        })
    }

    async fn list_collection_names(&self) -> anyhow::Result<Vec<String>> {
        Ok(self.collections.lock().unwrap().keys().cloned().collect())
    }
}

/// Fails every operation as an unreachable database would.
pub struct FailingStore {
    message: String,
}

impl FailingStore {
    pub fn new(message: impl Into<String>) -> FailingStore {
        FailingStore {
            message: message.into(),
        }
    }

    fn error(&self) -> anyhow::Error {
        anyhow::anyhow!(self.message.clone())
    }
}

#[async_trait]
impl DocumentStore for FailingStore {
    fn name(&self) -> &str {
        "unreachable"
    }

    async fn create_document(&self, _: &str, _: Record) -> anyhow::Result<String> {
        Err(self.error())
    }

    async fn get_documents(&self, _: &str, _: Record, _: i64) -> anyhow::Result<Vec<Record>> {
        Err(self.error())
    }

    async fn list_collection_names(&self) -> anyhow::Result<Vec<String>> {
        Err(self.error())
    }
}

pub fn server(db: DbHandle) -> TestServer {
    server_with_config(db, Config::default())
}

pub fn server_with_config(db: DbHandle, config: Config) -> TestServer {
    TestServer::new(service(db, config)).unwrap()
}

pub fn server_without_db() -> TestServer {
    server(None)
}

pub fn server_with(store: Arc<MemoryStore>) -> TestServer {
    server(Some(store))
}

pub fn failing_server() -> TestServer {
    failing_server_with("connection refused")
}

pub fn failing_server_with(message: &str) -> TestServer {
    server(Some(Arc::new(FailingStore::new(message))))
}
