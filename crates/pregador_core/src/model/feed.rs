//! Ministry network feed post model.
//!
//! # Responsibility
//! - Define the feed packet shape shared between collaborators.
//!
//! # Invariants
//! - `uuid` is unique per post and is the removal handle.
//! - The feed document stores posts newest first.

use chrono::Local;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

const POST_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One published feed packet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedPost {
    pub uuid: String,
    pub timestamp: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub link: String,
    pub body: String,
}

impl FeedPost {
    /// Creates a post with a generated id and a local-time timestamp.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        link: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            uuid: Uuid::new_v4().simple().to_string(),
            timestamp: Local::now().format(POST_TIMESTAMP_FORMAT).to_string(),
            title: title.into(),
            author: author.into(),
            link: link.into(),
            body: body.into(),
        }
    }
}
