use std::str::FromStr;

use gloo_timers::callback::Timeout;
use shared::models::{BoardListResponse, CreateBoardRequest};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::api::TeamPlanClient;
use crate::components::{BoardCard, Modal};
use crate::components::loading::Loading;
use crate::pages::ErrorFallback;
use crate::query::{QueryState, run_mutation, run_read};
use crate::stores::{BoardFilterStore, BoardOrder, ToastStore};

/// How long the keyword input may rest before the filter store is
/// updated and the list refetched.
const KEYWORD_DEBOUNCE_MS: u32 = 300;

/// Board list with a keyword/order filter that survives navigation.
#[function_component(BoardsPage)]
pub fn boards_page() -> Html {
    let (filter, filter_dispatch) = use_store::<BoardFilterStore>();
    let boards = use_state(|| QueryState::<BoardListResponse>::Loading);
    let reload = use_state(|| 0u32);
    // Text field state; the store lags behind by the debounce window.
    let draft = use_state(|| filter.keyword.clone());
    let debounce = use_mut_ref(|| None::<Timeout>);
    let show_create = use_state(|| false);
    let title = use_state(String::new);
    let content = use_state(String::new);
    let (_, toasts) = use_store::<ToastStore>();

    {
        let boards = boards.clone();
        use_effect_with(
            (filter.keyword.clone(), filter.order, *reload),
            move |(keyword, order, _)| {
                let keyword = keyword.clone();
                let order = *order;
                boards.set(QueryState::Loading);
                spawn_local(async move {
                    let client = TeamPlanClient::shared();
                    let state = run_read(|| client.get_boards(&keyword, order)).await;
                    boards.set(state);
                });
                || ()
            },
        );
    }

    let on_keyword_input = {
        let draft = draft.clone();
        let filter_dispatch = filter_dispatch.clone();
        let debounce = debounce.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                let value = input.value();
                draft.set(value.clone());
                let filter_dispatch = filter_dispatch.clone();
                let mut guard = debounce.borrow_mut();
                if let Some(pending) = guard.take() {
                    pending.cancel();
                }
                *guard = Some(Timeout::new(KEYWORD_DEBOUNCE_MS, move || {
                    filter_dispatch.reduce_mut(|filter| filter.set_keyword(value));
                }));
            }
        })
    };

    let on_order_change = {
        let filter_dispatch = filter_dispatch;
        Callback::from(move |event: Event| {
            if let Some(select) = event.target_dyn_into::<HtmlSelectElement>() {
                if let Ok(order) = BoardOrder::from_str(&select.value()) {
                    filter_dispatch.reduce_mut(|filter| filter.set_order(order));
                }
            }
        })
    };

    let open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_: MouseEvent| show_create.set(true))
    };
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |()| show_create.set(false))
    };
    let on_title_change = {
        let title = title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                title.set(input.value());
            }
        })
    };
    let on_content_change = {
        let content = content.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(area) = event.target_dyn_into::<HtmlTextAreaElement>() {
                content.set(area.value());
            }
        })
    };

    let on_create = {
        let title_handle = title.clone();
        let content_handle = content.clone();
        let show_create = show_create.clone();
        let reload = reload.clone();
        let toasts = toasts;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = CreateBoardRequest {
                title: (*title_handle).clone(),
                content: (*content_handle).clone(),
            };
            let title_handle = title_handle.clone();
            let content_handle = content_handle.clone();
            let show_create = show_create.clone();
            let reload = reload.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.create_board(&request))
                    .await
                    .is_some()
                {
                    title_handle.set(String::new());
                    content_handle.set(String::new());
                    show_create.set(false);
                    reload.set(*reload + 1);
                }
            });
        })
    };

    let body = match &*boards {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(display) => html! { <ErrorFallback error={display.clone()} /> },
        QueryState::Ready(response) if response.boards.is_empty() => html! {
            <p class="text-center opacity-60 py-12">{"No posts match this search."}</p>
        },
        QueryState::Ready(response) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 gap-6">
                { for response.boards.iter().map(|board| html! {
                    <BoardCard board={board.clone()} />
                }) }
            </div>
        },
    };

    html! {
        <div class="p-4 space-y-6">
            <div class="flex flex-wrap items-center justify-between gap-3">
                <div class="flex items-center gap-3">
                    <h1 class="text-2xl font-bold">{"Boards"}</h1>
                    if boards.is_loading() {
                        <span class="loading loading-spinner loading-sm"></span>
                    }
                </div>
                <div class="flex items-center gap-2">
                    <input
                        class="input input-bordered input-sm"
                        type="search"
                        placeholder="Search posts..."
                        value={(*draft).clone()}
                        oninput={on_keyword_input}
                    />
                    <select
                        class="select select-bordered select-sm"
                        onchange={on_order_change}
                    >
                        <option value="recent" selected={filter.order == BoardOrder::Recent}>
                            {"Most recent"}
                        </option>
                        <option value="like" selected={filter.order == BoardOrder::Like}>
                            {"Most liked"}
                        </option>
                    </select>
                    <button class="btn btn-primary btn-sm" onclick={open_create}>
                        {"New post"}
                    </button>
                </div>
            </div>
            { body }
            <Modal title="Write a post" open={*show_create} on_close={close_create}>
                <form class="space-y-4" onsubmit={on_create}>
                    <div class="form-control">
                        <label class="label" for="board-title">
                            <span class="label-text">{"Title"}</span>
                        </label>
                        <input
                            id="board-title"
                            class="input input-bordered"
                            value={(*title).clone()}
                            oninput={on_title_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="board-content">
                            <span class="label-text">{"Content"}</span>
                        </label>
                        <textarea
                            id="board-content"
                            class="textarea textarea-bordered h-32"
                            value={(*content).clone()}
                            oninput={on_content_change}
                        />
                    </div>
                    <div class="modal-action">
                        <button
                            class="btn btn-primary"
                            type="submit"
                            disabled={(*title).is_empty() || (*content).is_empty()}
                        >
                            {"Publish"}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
