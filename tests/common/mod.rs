//! In-process fake Elasticsearch for integration tests
//!
//! Serves the three endpoints the tool uses from an in-memory `.kibana`
//! index and records every request it receives.

#![allow(dead_code)]

use axum::Router;
use axum::body::Bytes;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, Method, StatusCode, Uri, header::AUTHORIZATION};
use kibana_sync::SyncError;
use percent_encoding::percent_decode_str;
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub authorization: Option<String>,
    pub body: Vec<u8>,
    pub response: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StoredDoc {
    pub object_type: String,
    pub id: String,
    pub source: Value,
}

#[derive(Default)]
struct Inner {
    docs: Vec<StoredDoc>,
    overrides: HashMap<String, (StatusCode, String)>,
    requests: Vec<RecordedRequest>,
}

#[derive(Clone, Default)]
pub struct FakeElasticsearch {
    inner: Arc<Mutex<Inner>>,
}

impl FakeElasticsearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start serving on an ephemeral port and return the base URL
    pub async fn start(&self) -> String {
        let app = Router::new().fallback(handle).with_state(self.clone());
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    /// Insert or replace a document
    pub fn put(&self, object_type: &str, id: &str, source: Value) {
        let mut inner = self.inner.lock().unwrap();
        upsert(&mut inner.docs, object_type, id, source);
    }

    /// Answer requests to `path` with a fixed status and body
    pub fn respond(&self, path: &str, status: StatusCode, body: &str) {
        self.inner
            .lock()
            .unwrap()
            .overrides
            .insert(path.to_string(), (status, body.to_string()));
    }

    pub fn docs(&self) -> Vec<StoredDoc> {
        self.inner.lock().unwrap().docs.clone()
    }

    pub fn ids(&self) -> Vec<String> {
        self.docs().into_iter().map(|d| d.id).collect()
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.lock().unwrap().requests.clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|r| r.path).collect()
    }
}

fn upsert(docs: &mut Vec<StoredDoc>, object_type: &str, id: &str, source: Value) {
    let doc = StoredDoc {
        object_type: object_type.to_string(),
        id: id.to_string(),
        source,
    };
    match docs
        .iter()
        .position(|d| d.object_type == object_type && d.id == id)
    {
        Some(pos) => docs[pos] = doc,
        None => docs.push(doc),
    }
}

async fn handle(
    State(es): State<FakeElasticsearch>,
    method: Method,
    uri: Uri,
    Query(params): Query<HashMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> (StatusCode, String) {
    let mut guard = es.inner.lock().unwrap();
    let inner = &mut *guard;
    let path = uri.path().to_string();

    let (status, response) = match inner.overrides.get(&path) {
        Some(fixed) => fixed.clone(),
        None => {
            let size = params.get("size").and_then(|s| s.parse().ok());
            route(&mut inner.docs, &path, size, &body)
        }
    };

    inner.requests.push(RecordedRequest {
        method,
        path,
        query: uri.query().map(str::to_string),
        authorization: headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string),
        body: body.to_vec(),
        response: response.clone(),
    });

    (status, response)
}

fn route(
    docs: &mut Vec<StoredDoc>,
    path: &str,
    size: Option<usize>,
    body: &[u8],
) -> (StatusCode, String) {
    let segments: Vec<&str> = path.trim_start_matches('/').split('/').collect();
    match segments.as_slice() {
        [".kibana", "_mget"] => {
            let request: Value = serde_json::from_slice(body).unwrap_or(Value::Null);
            let wanted = request["docs"].as_array().cloned().unwrap_or_default();
            let found: Vec<Value> = wanted
                .iter()
                .map(|r| {
                    let id = r["_id"].as_str().unwrap_or_default();
                    let object_type = r["_type"].as_str().unwrap_or_default();
                    match docs
                        .iter()
                        .find(|d| d.id == id && d.object_type == object_type)
                    {
                        Some(doc) => json!({
                            "_index": ".kibana",
                            "_type": object_type,
                            "_id": id,
                            "_version": 1,
                            "found": true,
                            "_source": doc.source,
                        }),
                        None => json!({
                            "_index": ".kibana",
                            "_type": object_type,
                            "_id": id,
                            "found": false,
                        }),
                    }
                })
                .collect();
            let response = json!({ "docs": found });
            (
                StatusCode::OK,
                serde_json::to_string_pretty(&response).unwrap(),
            )
        }
        [".kibana", object_type, "_search"] => {
            let size = size.unwrap_or(10);
            let hits: Vec<Value> = docs
                .iter()
                .filter(|d| d.object_type == *object_type)
                .take(size)
                .map(|d| {
                    json!({
                        "_index": ".kibana",
                        "_type": d.object_type,
                        "_id": d.id,
                        "_score": 1.0,
                        "_source": d.source,
                    })
                })
                .collect();
            let response = json!({
                "took": 1,
                "timed_out": false,
                "hits": { "total": hits.len(), "max_score": 1.0, "hits": hits }
            });
            (StatusCode::OK, response.to_string())
        }
        [".kibana", object_type, id] => match serde_json::from_slice::<Value>(body) {
            Ok(source) => {
                let id = percent_decode_str(id).decode_utf8_lossy();
                upsert(docs, object_type, &id, source);
                let response = json!({"_index": ".kibana", "_type": object_type, "_id": id, "created": true});
                (StatusCode::CREATED, response.to_string())
            }
            Err(e) => (StatusCode::BAD_REQUEST, e.to_string()),
        },
        _ => (StatusCode::NOT_FOUND, format!("no handler for {}", path)),
    }
}

/// Find the typed root cause of a failed operation
pub fn sync_error(err: &eyre::Report) -> Option<&SyncError> {
    err.chain().find_map(|e| e.downcast_ref::<SyncError>())
}
