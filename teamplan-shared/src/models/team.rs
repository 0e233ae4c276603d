use serde::{Deserialize, Serialize};

use super::task::TaskList;

/// A team the current user belongs to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    /// Unique identifier for the team.
    pub id: uuid::Uuid,
    /// Team name.
    pub name: String,
    /// Short description shown on the team card.
    pub intro: String,
    /// Number of members in the team.
    pub member_count: u32,
}

/// Response schema for `GET /teams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TeamListResponse {
    /// Teams the current user belongs to.
    pub teams: Vec<Team>,
}

/// Request schema for `POST /teams`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateTeamRequest {
    /// Team name.
    pub name: String,
    /// Short description shown on the team card.
    pub intro: String,
}

/// Response schema for `GET /teams/{id}` — the team and its task lists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamDetailResponse {
    /// The team itself.
    pub team: Team,
    /// The team's task lists, tasks included.
    pub task_lists: Vec<TaskList>,
}
