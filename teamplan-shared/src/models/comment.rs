use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment on a board post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Unique identifier for the comment.
    pub id: uuid::Uuid,
    /// Nickname of the author.
    pub author: String,
    /// Comment body.
    pub content: String,
    /// When the comment was posted.
    pub created_at: DateTime<Utc>,
}

/// Response schema for `GET /boards/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CommentListResponse {
    /// Comments in posting order.
    pub comments: Vec<Comment>,
}

/// Request schema for `POST /boards/{id}/comments`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateCommentRequest {
    /// Comment body.
    pub content: String,
}
