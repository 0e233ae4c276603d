use reqwest::StatusCode;
use shared::models::{CreateTaskListRequest, CreateTaskRequest, RepeatDay, TeamDetailResponse};
use strum::IntoEnumIterator;
use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yewdux::prelude::use_store;

use crate::api::TeamPlanClient;
use crate::components::{Modal, TaskItem};
use crate::components::loading::Loading;
use crate::error::{ApiError, resolve};
use crate::pages::ErrorFallback;
use crate::query::{QueryState, run_mutation, run_read};
use crate::stores::ToastStore;

#[derive(Properties, PartialEq)]
pub struct TeamDetailPageProps {
    /// Team id from the route path.
    pub team_id: String,
}

/// A team's task lists, with creation and check-off flows.
#[function_component(TeamDetailPage)]
pub fn team_detail_page(props: &TeamDetailPageProps) -> Html {
    let detail = use_state(|| QueryState::<TeamDetailResponse>::Loading);
    let reload = use_state(|| 0u32);
    let show_create_list = use_state(|| false);
    let list_name = use_state(String::new);
    // Which list the "add task" dialog is aimed at; None keeps it closed.
    let task_target = use_state(|| None::<Uuid>);
    let task_title = use_state(String::new);
    let repeat_days = use_state(Vec::<RepeatDay>::new);
    let (_, toasts) = use_store::<ToastStore>();

    {
        let detail = detail.clone();
        use_effect_with((props.team_id.clone(), *reload), move |(team_id, _)| {
            let team_id = team_id.clone();
            detail.set(QueryState::Loading);
            spawn_local(async move {
                let state = match Uuid::parse_str(&team_id) {
                    Ok(id) => {
                        let client = TeamPlanClient::shared();
                        run_read(|| client.get_team(id)).await
                    }
                    // An unparseable id can only be a dead link.
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

    let on_toggle = {
        let toasts = toasts.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |(task_id, done): (Uuid, bool)| {
            let toasts = toasts.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.set_task_done(task_id, done))
                    .await
                    .is_some()
                {
                    bump_reload.emit(());
                }
            });
        })
    };

    let on_delete = {
        let toasts = toasts.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |task_id: Uuid| {
            let toasts = toasts.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.delete_task(task_id))
                    .await
                    .is_some()
                {
                    bump_reload.emit(());
                }
            });
        })
    };

    let open_create_list = {
        let show_create_list = show_create_list.clone();
        Callback::from(move |_: MouseEvent| show_create_list.set(true))
    };
    let close_create_list = {
        let show_create_list = show_create_list.clone();
        Callback::from(move |()| show_create_list.set(false))
    };
    let on_list_name_change = {
        let list_name = list_name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                list_name.set(input.value());
            }
        })
    };

    let on_create_list = {
        let team_id = props.team_id.clone();
        let list_name_handle = list_name.clone();
        let show_create_list = show_create_list.clone();
        let toasts = toasts.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Ok(team_id) = Uuid::parse_str(&team_id) else {
                return;
            };
            let request = CreateTaskListRequest {
                name: (*list_name_handle).clone(),
            };
            let list_name_handle = list_name_handle.clone();
            let show_create_list = show_create_list.clone();
            let toasts = toasts.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.create_task_list(team_id, &request))
                    .await
                    .is_some()
                {
                    list_name_handle.set(String::new());
                    show_create_list.set(false);
                    bump_reload.emit(());
                }
            });
        })
    };

    let close_create_task = {
        let task_target = task_target.clone();
        Callback::from(move |()| task_target.set(None))
    };
    let on_task_title_change = {
        let task_title = task_title.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                task_title.set(input.value());
            }
        })
    };

    let on_create_task = {
        let task_target = task_target.clone();
        let task_title_handle = task_title.clone();
        let repeat_days_handle = repeat_days.clone();
        let toasts = toasts.clone();
        let bump_reload = bump_reload.clone();
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let Some(list_id) = *task_target else {
                return;
            };
            let request = CreateTaskRequest {
                title: (*task_title_handle).clone(),
                repeat_days: (*repeat_days_handle).clone(),
            };
            let task_target = task_target.clone();
            let task_title_handle = task_title_handle.clone();
            let repeat_days_handle = repeat_days_handle.clone();
            let toasts = toasts.clone();
            let bump_reload = bump_reload.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.create_task(list_id, &request))
                    .await
                    .is_some()
                {
                    task_title_handle.set(String::new());
                    repeat_days_handle.set(Vec::new());
                    task_target.set(None);
                    bump_reload.emit(());
                }
            });
        })
    };

    let toggle_repeat_day = {
        let repeat_days = repeat_days.clone();
        Callback::from(move |day: RepeatDay| {
            let mut days = (*repeat_days).clone();
            if let Some(position) = days.iter().position(|d| *d == day) {
                days.remove(position);
            } else {
                days.push(day);
            }
            repeat_days.set(days);
        })
    };

    let body = match &*detail {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(display) => html! { <ErrorFallback error={display.clone()} /> },
        QueryState::Ready(response) => {
            let team = &response.team;
            html! {
                <div class="space-y-6">
                    <div class="flex items-center justify-between">
                        <div>
                            <h1 class="text-2xl font-bold">{ &team.name }</h1>
                            <p class="opacity-70">
                                { format!("{} · {} members", team.intro, team.member_count) }
                            </p>
                        </div>
                        <button class="btn btn-primary btn-sm" onclick={open_create_list}>
                            {"New list"}
                        </button>
                    </div>
                    <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                        { for response.task_lists.iter().map(|list| {
                            let open_task_modal = {
                                let task_target = task_target.clone();
                                let list_id = list.id;
                                Callback::from(move |_: MouseEvent| {
                                    task_target.set(Some(list_id));
                                })
                            };
                            html! {
                                <div class="card bg-base-200 shadow-xl">
                                    <div class="card-body">
                                        <h2 class="card-title">{ &list.name }</h2>
                                        <ul class="divide-y divide-base-300">
                                            { for list.tasks.iter().map(|task| html! {
                                                <TaskItem
                                                    task={task.clone()}
                                                    on_toggle={on_toggle.clone()}
                                                    on_delete={on_delete.clone()}
                                                />
                                            }) }
                                        </ul>
                                        <div class="card-actions justify-end">
                                            <button class="btn btn-ghost btn-sm" onclick={open_task_modal}>
                                                {"Add task"}
                                            </button>
                                        </div>
                                    </div>
                                </div>
                            }
                        }) }
                    </div>
                </div>
            }
        }
    };

    html! {
        <div class="p-4 space-y-6">
            { body }
            <Modal title="Create a list" open={*show_create_list} on_close={close_create_list}>
                <form class="space-y-4" onsubmit={on_create_list}>
                    <div class="form-control">
                        <label class="label" for="list-name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="list-name"
                            class="input input-bordered"
                            value={(*list_name).clone()}
                            oninput={on_list_name_change}
                        />
                    </div>
                    <div class="modal-action">
                        <button
                            class="btn btn-primary"
                            type="submit"
                            disabled={(*list_name).is_empty()}
                        >
                            {"Create"}
                        </button>
                    </div>
                </form>
            </Modal>
            <Modal title="Add a task" open={task_target.is_some()} on_close={close_create_task}>
                <form class="space-y-4" onsubmit={on_create_task}>
                    <div class="form-control">
                        <label class="label" for="task-title">
                            <span class="label-text">{"Title"}</span>
                        </label>
                        <input
                            id="task-title"
                            class="input input-bordered"
                            value={(*task_title).clone()}
                            oninput={on_task_title_change}
                        />
                    </div>
                    <div class="form-control">
                        <span class="label-text">{"Repeats on"}</span>
                        <div class="flex gap-2 mt-2">
                            { for RepeatDay::iter().map(|day| {
                                let checked = repeat_days.contains(&day);
                                let toggle = {
                                    let toggle_repeat_day = toggle_repeat_day.clone();
                                    Callback::from(move |_: Event| toggle_repeat_day.emit(day))
                                };
                                html! {
                                    <label class="flex flex-col items-center gap-1 text-xs">
                                        <input
                                            type="checkbox"
                                            class="checkbox checkbox-xs"
                                            {checked}
                                            onchange={toggle}
                                        />
                                        { day.short_label() }
                                    </label>
                                }
                            }) }
                        </div>
                    </div>
                    <div class="modal-action">
                        <button
                            class="btn btn-primary"
                            type="submit"
                            disabled={(*task_title).is_empty()}
                        >
                            {"Add"}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
