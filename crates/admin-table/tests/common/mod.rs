//! In-memory admin API used by the integration tests.

#![allow(dead_code)]

use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use admin_api::{ApiError, ResourceClient};
use admin_model::{PageMeta, PageQuery, PageResult, Record, RecordId, ResourceKind};
use serde_json::{Value, json};

/// Stores records as JSON per collection and counts calls.
#[derive(Default)]
pub struct FakeClient {
    rows: Mutex<BTreeMap<ResourceKind, Vec<Value>>>,
    pub lists: AtomicUsize,
    pub removes: AtomicUsize,
    pub updates: AtomicUsize,
    pub fail_mutations: AtomicBool,
}

impl FakeClient {
    /// A client holding `count` users named `u1..uN`, all active.
    pub fn with_users(count: usize) -> Self {
        let users = (1..=count)
            .map(|n| {
                json!({
                    "id": format!("u{n}"),
                    "user_name": format!("user{n}"),
                    "email": format!("user{n}@example.com"),
                    "is_active": true,
                    "created_at": "2024-05-01T08:30:00Z"
                })
            })
            .collect();
        let client = Self::default();
        client
            .rows
            .lock()
            .unwrap()
            .insert(ResourceKind::Users, users);
        client
    }

    pub fn list_calls(&self) -> usize {
        self.lists.load(Ordering::SeqCst)
    }

    pub fn remove_calls(&self) -> usize {
        self.removes.load(Ordering::SeqCst)
    }

    pub fn fail_next_mutations(&self, fail: bool) {
        self.fail_mutations.store(fail, Ordering::SeqCst);
    }

    fn mutation_error(&self) -> Option<ApiError> {
        self.fail_mutations
            .load(Ordering::SeqCst)
            .then(|| ApiError::Server {
                status: 500,
                message: "boom".to_string(),
            })
    }
}

impl ResourceClient for FakeClient {
    async fn list<R: Record>(&self, query: &PageQuery) -> Result<PageResult<R>, ApiError> {
        self.lists.fetch_add(1, Ordering::SeqCst);
        let rows = self.rows.lock().unwrap();
        let all = rows.get(&R::KIND).map_or(&[][..], Vec::as_slice);

        let size = query.page_size as usize;
        let start = (query.page as usize - 1) * size;
        let records = all
            .iter()
            .skip(start)
            .take(size)
            .map(|v| serde_json::from_value(v.clone()))
            .collect::<Result<Vec<R>, _>>()?;

        Ok(PageResult::from_parts(
            records,
            PageMeta {
                total: all.len() as u64,
                page: query.page,
                limit: query.page_size,
            },
        ))
    }

    async fn remove<R: Record>(&self, id: &RecordId) -> Result<(), ApiError> {
        self.removes.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.mutation_error() {
            return Err(err);
        }
        let mut rows = self.rows.lock().unwrap();
        let list = rows.entry(R::KIND).or_default();
        let before = list.len();
        list.retain(|v| v["id"] != id.as_str());
        if list.len() == before {
            return Err(ApiError::Server {
                status: 404,
                message: "not found".to_string(),
            });
        }
        Ok(())
    }

    async fn set_active<R: Record>(&self, id: &RecordId, active: bool) -> Result<(), ApiError> {
        self.updates.fetch_add(1, Ordering::SeqCst);
        if let Some(err) = self.mutation_error() {
            return Err(err);
        }
        let mut rows = self.rows.lock().unwrap();
        let row = rows
            .entry(R::KIND)
            .or_default()
            .iter_mut()
            .find(|v| v["id"] == id.as_str())
            .ok_or_else(|| ApiError::Server {
                status: 404,
                message: "not found".to_string(),
            })?;
        row["is_active"] = Value::Bool(active);
        Ok(())
    }
}
