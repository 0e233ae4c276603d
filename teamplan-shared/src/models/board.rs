use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A community board post.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    /// Unique identifier for the post.
    pub id: uuid::Uuid,
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
    /// Nickname of the author.
    pub author: String,
    /// Number of likes the post has received.
    pub like_count: u32,
    /// Number of comments on the post.
    pub comment_count: u32,
    /// When the post was created.
    pub created_at: DateTime<Utc>,
}

/// Response schema for `GET /boards`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoardListResponse {
    /// Matching posts, ordered as requested.
    pub boards: Vec<Board>,
}

/// Request schema for `POST /boards`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateBoardRequest {
    /// Post title.
    pub title: String,
    /// Post body.
    pub content: String,
}

/// Response schema for `POST /boards/{id}/like`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct LikeResponse {
    /// Like count after the toggle.
    pub like_count: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Counter fields arrive under their camelCase wire names
    #[test]
    fn test_board_deserialize_camel_case() {
        let board: Board = serde_json::from_str(
            r#"{
                "id": "0b9f9e52-3f43-4a1b-bb6b-0de6f2a9c001",
                "title": "Sprint retro notes",
                "content": "What went well...",
                "author": "minji",
                "likeCount": 3,
                "commentCount": 2,
                "createdAt": "2025-11-02T09:30:00Z"
            }"#,
        )
        .expect("valid board payload");
        assert_eq!(board.like_count, 3);
        assert_eq!(board.comment_count, 2);
        assert_eq!(board.author, "minji");
    }
}
