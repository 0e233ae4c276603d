use reqwest::StatusCode;
use shared::models::{Board, CommentListResponse, CreateCommentRequest};
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlTextAreaElement;
use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

use crate::api::TeamPlanClient;
use crate::components::loading::Loading;
use crate::error::{ApiError, resolve};
use crate::pages::ErrorFallback;
use crate::query::{QueryState, run_mutation, run_read};
use crate::stores::ToastStore;

#[derive(Properties, PartialEq)]
pub struct BoardDetailPageProps {
    /// Post id from the route path.
    pub board_id: String,
}

/// A single post with its like button and comment thread.
#[function_component(BoardDetailPage)]
pub fn board_detail_page(props: &BoardDetailPageProps) -> Html {
    let detail = use_state(|| QueryState::<(Board, CommentListResponse)>::Loading);
    let reload = use_state(|| 0u32);
    let comment_draft = use_state(String::new);
    let (_, toasts) = use_store::<ToastStore>();

    {
        let detail = detail.clone();
        use_effect_with((props.board_id.clone(), *reload), move |(board_id, _)| {
            let board_id = board_id.clone();
            detail.set(QueryState::Loading);
            spawn_local(async move {
                let state = match Uuid::parse_str(&board_id) {
                    Ok(id) => {
                        let client = TeamPlanClient::shared();
                        run_read(|| async {
                            let board = client.get_board(id).await?;
                            let comments = client.get_comments(id).await?;
                            Ok((board, comments))
                        })
                        .await
                    }
                    Err(_) => QueryState::Failed(resolve(&ApiError::Status {
                        status: StatusCode::NOT_FOUND,
                        body: None,
                    })),
                };
                detail.set(state);
            });
            || ()
        });
    }

    let bump_reload = {
        let reload = reload.clone();
        Callback::from(move |()| reload.set(*reload + 1))
    };

    let on_like = {
        let board_id = props.board_id.clone();
        let toasts = toasts.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |_: MouseEvent| {
            let Ok(id) = Uuid::parse_str(&board_id) else {
                return;
            };
            let toasts = toasts.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.like_board(id)).await.is_some() {
                    bump_reload.emit(());
                }
            });
        })
    };

    let on_comment_input = {
        let comment_draft = comment_draft.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                comment_draft.set(area.value());
            }
        })
    };

    let on_comment_submit = {
        let board_id = props.board_id.clone();
        let comment_draft_handle = comment_draft.clone();
        let toasts = toasts.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(id) = Uuid::parse_str(&board_id) else {
                return;
            };
            let request = CreateCommentRequest {
                content: (*comment_draft_handle).clone(),
            };
            let comment_draft_handle = comment_draft_handle.clone();
            let toasts = toasts.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.create_comment(id, &request))
                    .await
                    .is_some()
                {
                    comment_draft_handle.set(String::new());
                    bump_reload.emit(());
                }
            });
        })
    };

    let on_comment_delete = {
        let toasts = toasts;
        let bump_reload = bump_reload;
        Callback::from(move |comment_id: Uuid| {
            let toasts = toasts.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.delete_comment(comment_id))
                    .await
                    .is_some()
                {
                    bump_reload.emit(());
                }
            });
        })
    };

    match &*detail {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(display) => html! { <ErrorFallback error={display.clone()} /> },
        QueryState::Ready((board, comments)) => html! {
            <div class="p-4 max-w-3xl mx-auto space-y-6">
                <div class="card bg-base-200 shadow-xl">
                    <div class="card-body space-y-2">
                        <h1 class="card-title text-2xl">{ &board.title }</h1>
                        <p class="text-sm opacity-70">
                            { format!("{} · {}", board.author, board.created_at.format("%Y-%m-%d %H:%M")) }
                        </p>
                        <p class="whitespace-pre-line">{ &board.content }</p>
                        <div class="card-actions items-center justify-between">
                            <button class="btn btn-ghost btn-sm" onclick={on_like}>
                                <Icon icon_id={IconId::HeroiconsSolidHeart} class="h-4 w-4 text-error" />
                                { board.like_count }
                            </button>
                            <span class="text-sm opacity-60">
                                { format!("{} comments", comments.comments.len()) }
                            </span>
                        </div>
                    </div>
                </div>
                <div class="space-y-3">
                    { for comments.comments.iter().map(|comment| {
                        let delete = {
                            let on_comment_delete = on_comment_delete.clone();
                            let id = comment.id;
                            Callback::from(move |_: MouseEvent| on_comment_delete.emit(id))
                        };
                        html! {
                            <div class="flex items-start justify-between bg-base-200 rounded-lg p-3">
                                <div>
                                    <p class="text-sm font-medium">{ &comment.author }</p>
                                    <p class="text-sm">{ &comment.content }</p>
                                    <p class="text-xs opacity-50">
                                        { comment.created_at.format("%Y-%m-%d %H:%M").to_string() }
                                    </p>
                                </div>
                                <button
                                    class="btn btn-ghost btn-xs"
                                    onclick={delete}
                                    aria-label="Delete comment"
                                >
                                    <Icon icon_id={IconId::HeroiconsOutlineTrash} class="h-4 w-4" />
                                </button>
                            </div>
                        }
                    }) }
                </div>
                <form class="flex items-end gap-2" onsubmit={on_comment_submit}>
                    <textarea
                        class="textarea textarea-bordered flex-grow"
                        placeholder="Leave a comment..."
                        value={(*comment_draft).clone()}
                        oninput={on_comment_input}
                    />
                    <button
                        class="btn btn-primary"
                        type="submit"
                        disabled={(*comment_draft).is_empty()}
                    >
                        {"Post"}
                    </button>
                </form>
            </div>
        },
    }
}
