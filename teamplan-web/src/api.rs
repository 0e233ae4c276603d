#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use once_cell::unsync::OnceCell;
use reqwest::{Client, RequestBuilder, Response, StatusCode};
use shared::models::{
    Board, BoardListResponse, Comment, CommentListResponse, CreateBoardRequest,
    CreateCommentRequest, CreateTaskListRequest, CreateTaskRequest, CreateTeamRequest, ErrorBody,
    LikeResponse, LoginRequest, RefreshRequest, Task, TaskList, Team, TeamDetailResponse,
    TeamListResponse, TokenPair, UpdateTaskRequest,
};
use uuid::Uuid;

use crate::config::FrontendConfig;
use crate::error::ApiError;
use crate::stores::board_filter::BoardOrder;
use crate::stores::session::{access_token, persist_tokens, refresh_token};

thread_local! {
    static SHARED_CLIENT: OnceCell<TeamPlanClient> = OnceCell::new();
}

/// Lightweight API client for TeamPlan web interactions.
#[derive(Clone, Debug)]
pub struct TeamPlanClient {
    base_url: String,
    client: Client,
}

impl TeamPlanClient {
    /// Create a new API client with the provided base URL.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    /// The process-wide client, configured from [`FrontendConfig`].
    pub fn shared() -> Self {
        SHARED_CLIENT.with(|cell| {
            cell.get_or_init(|| Self::new(FrontendConfig::new().api_base_url()))
                .clone()
        })
    }

    fn api_url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn authorize(request: RequestBuilder) -> RequestBuilder {
        match access_token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// Send a request; on a 401 answer, refresh the session once and
    /// replay the request with the new access token.
    async fn send_with_refresh<F>(&self, build: F) -> Result<Response, ApiError>
    where
        F: Fn() -> RequestBuilder,
    {
        let response = Self::authorize(build()).send().await?;
        if response.status() == StatusCode::UNAUTHORIZED && self.try_refresh().await {
            let replayed = Self::authorize(build()).send().await?;
            return into_api_result(replayed).await;
        }
        into_api_result(response).await
    }

    /// Exchange the stored refresh token for a new pair. Returns whether
    /// a fresh access token was persisted.
    async fn try_refresh(&self) -> bool {
        let Some(token) = refresh_token() else {
            return false;
        };
        let url = self.api_url("auth/refresh");
        let payload = RefreshRequest {
            refresh_token: token,
        };
        let Ok(response) = self.client.post(url).json(&payload).send().await else {
            return false;
        };
        if !response.status().is_success() {
            return false;
        }
        match response.json::<TokenPair>().await {
            Ok(pair) => {
                persist_tokens(&pair);
                true
            }
            Err(_) => false,
        }
    }

    /// Authenticate with email/password credentials.
    pub async fn login(&self, payload: &LoginRequest) -> Result<TokenPair, ApiError> {
        let url = self.api_url("auth/login");
        let response = self.client.post(url).json(payload).send().await?;
        Ok(into_api_result(response).await?.json().await?)
    }

    /// Retrieve the current user's teams.
    pub async fn get_teams(&self) -> Result<TeamListResponse, ApiError> {
        let url = self.api_url("teams");
        let response = self
            .send_with_refresh(move || self.client.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    /// Create a team.
    pub async fn create_team(&self, payload: &CreateTeamRequest) -> Result<Team, ApiError> {
        let url = self.api_url("teams");
        let payload_ref = payload;
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()).json(payload_ref))
            .await?;
        Ok(response.json().await?)
    }

    /// Retrieve a team together with its task lists.
    pub async fn get_team(&self, team_id: Uuid) -> Result<TeamDetailResponse, ApiError> {
        let url = self.api_url(&format!("teams/{team_id}"));
        let response = self
            .send_with_refresh(move || self.client.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    /// Add a task list to a team.
    pub async fn create_task_list(
        &self,
        team_id: Uuid,
        payload: &CreateTaskListRequest,
    ) -> Result<TaskList, ApiError> {
        let url = self.api_url(&format!("teams/{team_id}/lists"));
        let payload_ref = payload;
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()).json(payload_ref))
            .await?;
        Ok(response.json().await?)
    }

    /// Add a task (one-off or recurring) to a list.
    pub async fn create_task(
        &self,
        list_id: Uuid,
        payload: &CreateTaskRequest,
    ) -> Result<Task, ApiError> {
        let url = self.api_url(&format!("lists/{list_id}/tasks"));
        let payload_ref = payload;
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()).json(payload_ref))
            .await?;
        Ok(response.json().await?)
    }

    /// Check a task off or back on.
    pub async fn set_task_done(&self, task_id: Uuid, done: bool) -> Result<Task, ApiError> {
        let url = self.api_url(&format!("tasks/{task_id}"));
        let payload = UpdateTaskRequest { done };
        let payload_ref = &payload;
        let response = self
            .send_with_refresh(move || self.client.patch(url.clone()).json(payload_ref))
            .await?;
        Ok(response.json().await?)
    }

    /// Delete a task.
    pub async fn delete_task(&self, task_id: Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("tasks/{task_id}"));
        self.send_with_refresh(move || self.client.delete(url.clone()))
            .await?;
        Ok(())
    }

    /// Retrieve board posts matching a keyword, in the requested order.
    pub async fn get_boards(
        &self,
        keyword: &str,
        order: BoardOrder,
    ) -> Result<BoardListResponse, ApiError> {
        let url = self.api_url("boards");
        let keyword = keyword.to_string();
        let order = order.to_string();
        let response = self
            .send_with_refresh(move || {
                self.client
                    .get(url.clone())
                    .query(&[("keyword", keyword.as_str()), ("order", order.as_str())])
            })
            .await?;
        Ok(response.json().await?)
    }

    /// Publish a board post.
    pub async fn create_board(&self, payload: &CreateBoardRequest) -> Result<Board, ApiError> {
        let url = self.api_url("boards");
        let payload_ref = payload;
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()).json(payload_ref))
            .await?;
        Ok(response.json().await?)
    }

    /// Retrieve a single board post.
    pub async fn get_board(&self, board_id: Uuid) -> Result<Board, ApiError> {
        let url = self.api_url(&format!("boards/{board_id}"));
        let response = self
            .send_with_refresh(move || self.client.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    /// Toggle the current user's like on a post.
    pub async fn like_board(&self, board_id: Uuid) -> Result<LikeResponse, ApiError> {
        let url = self.api_url(&format!("boards/{board_id}/like"));
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    /// Retrieve the comments on a post.
    pub async fn get_comments(&self, board_id: Uuid) -> Result<CommentListResponse, ApiError> {
        let url = self.api_url(&format!("boards/{board_id}/comments"));
        let response = self
            .send_with_refresh(move || self.client.get(url.clone()))
            .await?;
        Ok(response.json().await?)
    }

    /// Add a comment to a post.
    pub async fn create_comment(
        &self,
        board_id: Uuid,
        payload: &CreateCommentRequest,
    ) -> Result<Comment, ApiError> {
        let url = self.api_url(&format!("boards/{board_id}/comments"));
        let payload_ref = payload;
        let response = self
            .send_with_refresh(move || self.client.post(url.clone()).json(payload_ref))
            .await?;
        Ok(response.json().await?)
    }

    /// Delete a comment.
    pub async fn delete_comment(&self, comment_id: Uuid) -> Result<(), ApiError> {
        let url = self.api_url(&format!("comments/{comment_id}"));
        self.send_with_refresh(move || self.client.delete(url.clone()))
            .await?;
        Ok(())
    }
}

/// Pass successful responses through; turn anything else into
/// [`ApiError::Status`], keeping the parsed body when the server sent
/// one.
async fn into_api_result(response: Response) -> Result<Response, ApiError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.json::<ErrorBody>().await.ok();
    Err(ApiError::Status { status, body })
}
