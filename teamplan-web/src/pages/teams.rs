use shared::models::{CreateTeamRequest, TeamListResponse};
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::Link;
use yewdux::prelude::use_store;

use crate::api::TeamPlanClient;
use crate::components::Modal;
use crate::components::loading::Loading;
use crate::pages::ErrorFallback;
use crate::query::{QueryState, run_mutation, run_read};
use crate::routes::MainRoute;
use crate::stores::ToastStore;

/// Team overview: one card per team the user belongs to.
#[function_component(TeamsPage)]
pub fn teams_page() -> Html {
    let teams = use_state(|| QueryState::<TeamListResponse>::Loading);
    let reload = use_state(|| 0u32);
    let show_create = use_state(|| false);
    let name = use_state(String::new);
    let intro = use_state(String::new);
    let (_, toasts) = use_store::<ToastStore>();

    {
        let teams = teams.clone();
        use_effect_with(*reload, move |_| {
            teams.set(QueryState::Loading);
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                let state = run_read(|| client.get_teams()).await;
                teams.set(state);
            });
            || ()
        });
    }

    let open_create = {
        let show_create = show_create.clone();
        Callback::from(move |_: MouseEvent| show_create.set(true))
    };
    let close_create = {
        let show_create = show_create.clone();
        Callback::from(move |()| show_create.set(false))
    };

    let on_name_change = {
        let name = name.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                name.set(input.value());
            }
        })
    };
    let on_intro_change = {
        let intro = intro.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
                intro.set(input.value());
            }
        })
    };

    let on_create = {
        let name_handle = name.clone();
        let intro_handle = intro.clone();
        let show_create = show_create.clone();
        let reload = reload.clone();
        let toasts = toasts;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = CreateTeamRequest {
                name: (*name_handle).clone(),
                intro: (*intro_handle).clone(),
            };
            let name_handle = name_handle.clone();
            let intro_handle = intro_handle.clone();
            let show_create = show_create.clone();
            let reload = reload.clone();
            let toasts = toasts.clone();
            spawn_local(async move {
                let client = TeamPlanClient::shared();
                if run_mutation(&toasts, client.create_team(&request))
                    .await
                    .is_some()
                {
                    name_handle.set(String::new());
                    intro_handle.set(String::new());
                    show_create.set(false);
                    reload.set(*reload + 1);
                }
            });
        })
    };

    let body = match &*teams {
        QueryState::Loading => html! { <Loading /> },
        QueryState::Failed(display) => html! { <ErrorFallback error={display.clone()} /> },
        QueryState::Ready(response) => html! {
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6">
                { for response.teams.iter().map(|team| html! {
                    <Link<MainRoute> to={MainRoute::TeamDetail { team_id: team.id.to_string() }}>
                        <div class="card bg-base-200 shadow-xl hover:shadow-2xl transition-shadow">
                            <div class="card-body">
                                <h2 class="card-title">{ &team.name }</h2>
                                <p class="opacity-80">{ &team.intro }</p>
                                <p class="text-sm opacity-60">
                                    { format!("{} members", team.member_count) }
                                </p>
                            </div>
                        </div>
                    </Link<MainRoute>>
                }) }
            </div>
        },
    };

    let disable_create = (*name).is_empty();

    html! {
        <div class="p-4 space-y-6">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"My teams"}</h1>
                <button class="btn btn-primary btn-sm" onclick={open_create}>{"New team"}</button>
            </div>
            { body }
            <Modal title="Create a team" open={*show_create} on_close={close_create}>
                <form class="space-y-4" onsubmit={on_create}>
                    <div class="form-control">
                        <label class="label" for="team-name">
                            <span class="label-text">{"Name"}</span>
                        </label>
                        <input
                            id="team-name"
                            class="input input-bordered"
                            value={(*name).clone()}
                            oninput={on_name_change}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="team-intro">
                            <span class="label-text">{"Introduction"}</span>
                        </label>
                        <input
                            id="team-intro"
                            class="input input-bordered"
                            value={(*intro).clone()}
                            oninput={on_intro_change}
                        />
                    </div>
                    <div class="modal-action">
                        <button class="btn btn-primary" type="submit" disabled={disable_create}>
                            {"Create"}
                        </button>
                    </div>
                </form>
            </Modal>
        </div>
    }
}
