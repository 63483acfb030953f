//! Routine checklist use-cases.
//!
//! # Responsibility
//! - Manage the routine task list stored inside the config document.
//!
//! # Invariants
//! - Every mutation rewrites the whole config document atomically.
//! - Only the `rotina_pastoral` field is touched; all other config fields
//!   pass through a routine edit untouched.

use crate::store::{DocumentKey, JsonStore, StoreResult};
use serde_json::{json, Map, Value};

const ROUTINE_KEY: &str = "rotina_pastoral";

/// Checklist facade over the config document.
pub struct RoutineService<'a> {
    store: &'a JsonStore,
}

impl<'a> RoutineService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Current routine tasks, in stored order. A missing or malformed list
    /// reads as empty.
    pub fn tasks(&self) -> Vec<String> {
        self.load_document()
            .get(ROUTINE_KEY)
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Appends a task; blank input is ignored.
    pub fn add_task(&self, task: &str) -> StoreResult<()> {
        let task = task.trim();
        if task.is_empty() {
            return Ok(());
        }

        let mut tasks = self.tasks();
        tasks.push(task.to_string());
        self.save_tasks(tasks)
    }

    /// Removes a task by exact name; returns whether anything was removed.
    pub fn remove_task(&self, task: &str) -> StoreResult<bool> {
        let mut tasks = self.tasks();
        let before = tasks.len();
        tasks.retain(|item| item != task);

        if tasks.len() == before {
            return Ok(false);
        }

        self.save_tasks(tasks)?;
        Ok(true)
    }

    fn load_document(&self) -> Map<String, Value> {
        match self.store.read(DocumentKey::Config, json!({})) {
            Value::Object(map) => map,
            _ => Map::new(),
        }
    }

    fn save_tasks(&self, tasks: Vec<String>) -> StoreResult<()> {
        let mut document = self.load_document();
        document.insert(ROUTINE_KEY.to_string(), json!(tasks));
        self.store.write(DocumentKey::Config, &Value::Object(document))
    }
}
