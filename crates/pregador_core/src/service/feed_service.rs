//! Ministry network feed use-cases.
//!
//! # Responsibility
//! - Publish and remove feed posts over the network-feed document.
//!
//! # Invariants
//! - The document stores posts newest first; publish prepends.
//! - Posts that fail to decode are skipped on list but preserved on rewrite.

use crate::model::feed::FeedPost;
use crate::store::{DocumentKey, JsonStore, StoreError};
use serde_json::{json, Value};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Feed operation error.
#[derive(Debug)]
pub enum FeedError {
    /// No post carries the given id.
    PostNotFound(String),
    Store(StoreError),
}

impl Display for FeedError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PostNotFound(id) => write!(f, "feed post not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for FeedError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::PostNotFound(_) => None,
            Self::Store(err) => Some(err),
        }
    }
}

impl From<StoreError> for FeedError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Feed facade over the network-feed document.
pub struct FeedService<'a> {
    store: &'a JsonStore,
}

impl<'a> FeedService<'a> {
    pub fn new(store: &'a JsonStore) -> Self {
        Self { store }
    }

    /// Prepends a post, keeping newest-first order.
    pub fn publish(&self, post: FeedPost) -> Result<(), FeedError> {
        let mut items = self.raw_items();
        let raw = serde_json::to_value(&post).map_err(|source| {
            StoreError::Serialize {
                path: self
                    .store
                    .layout()
                    .document_path(DocumentKey::NetworkFeed),
                source,
            }
        })?;
        items.insert(0, raw);
        self.store
            .write(DocumentKey::NetworkFeed, &Value::Array(items))?;
        Ok(())
    }

    /// Removes the post with the given id.
    pub fn remove(&self, post_id: &str) -> Result<(), FeedError> {
        let mut items = self.raw_items();
        let before = items.len();
        items.retain(|item| {
            item.get("uuid").and_then(Value::as_str) != Some(post_id)
        });

        if items.len() == before {
            return Err(FeedError::PostNotFound(post_id.to_string()));
        }

        self.store
            .write(DocumentKey::NetworkFeed, &Value::Array(items))?;
        Ok(())
    }

    /// All decodable posts, newest first.
    pub fn list(&self) -> Vec<FeedPost> {
        self.raw_items()
            .iter()
            .filter_map(|item| serde_json::from_value(item.clone()).ok())
            .collect()
    }

    fn raw_items(&self) -> Vec<Value> {
        match self.store.read(DocumentKey::NetworkFeed, json!([])) {
            Value::Array(items) => items,
            _ => Vec::new(),
        }
    }
}
