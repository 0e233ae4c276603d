use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::routes::MainRoute;
use crate::stores::SessionStore;

/// Landing page; the call to action follows the session state.
#[function_component(HomePage)]
pub fn home_page() -> Html {
    let is_logged_in = use_selector(|session: &SessionStore| session.is_logged_in);

    let call_to_action = if *is_logged_in {
        html! {
            <Link<MainRoute> to={MainRoute::Teams} classes="btn btn-primary">
                {"Go to my teams"}
            </Link<MainRoute>>
        }
    } else {
        html! {
            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary">
                {"Sign in"}
            </Link<MainRoute>>
        }
    };

    html! {
        <div class="hero py-24">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-6">
                    <h1 class="text-4xl font-bold">{"Plan together, ship together"}</h1>
                    <p class="opacity-80">
                        {"Shared task lists for your team, recurring chores that \
                          come back on their day, and a board to talk it all over."}
                    </p>
                    <div class="flex justify-center gap-3">
                        { call_to_action }
                        <Link<MainRoute> to={MainRoute::Boards} classes="btn btn-ghost">
                            {"Browse boards"}
                        </Link<MainRoute>>
                    </div>
                </div>
            </div>
        </div>
    }
}
