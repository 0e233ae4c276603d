use i18nrs::yew::use_translation;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yew_router::prelude::Link;
use yewdux::prelude::{use_selector, use_store};

use crate::routes::MainRoute;
use crate::stores::SessionStore;
use crate::stores::session;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub current_route: Option<MainRoute>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let (i18n, ..) = use_translation();
    let navigator = use_navigator();
    let is_logged_in = use_selector(|session: &SessionStore| session.is_logged_in);
    let (_, session_dispatch) = use_store::<SessionStore>();

    let nav_item = |route: MainRoute, label: String| -> Html {
        let active = props.current_route.as_ref() == Some(&route);
        html! {
            <li>
                <Link<MainRoute>
                    to={route}
                    classes={classes!("btn", "btn-ghost", active.then_some("btn-active"))}
                >
                    { label }
                </Link<MainRoute>>
            </li>
        }
    };

    let session_control = if *is_logged_in {
        let onclick = {
            let session_dispatch = session_dispatch;
            let navigator = navigator;
            Callback::from(move |event: MouseEvent| {
                event.prevent_default();
                session::logout(&session_dispatch);
                if let Some(nav) = navigator.as_ref() {
                    nav.replace(&MainRoute::Home);
                }
            })
        };
        html! {
            <button class="btn btn-outline btn-sm" {onclick}>
                { i18n.t("auth.sign_out") }
            </button>
        }
    } else {
        html! {
            <Link<MainRoute> to={MainRoute::Login} classes="btn btn-primary btn-sm">
                { i18n.t("auth.sign_in") }
            </Link<MainRoute>>
        }
    };

    html! {
        <nav class="navbar justify-between bg-base-300">
            <a class="btn btn-ghost text-lg">
                <Link<MainRoute> to={MainRoute::Home} classes="text-lg">
                    { i18n.t("app.title") }
                </Link<MainRoute>>
            </a>
            <ul class="menu menu-horizontal gap-1">
                if *is_logged_in {
                    { nav_item(MainRoute::Teams, i18n.t("nav.teams")) }
                }
                { nav_item(MainRoute::Boards, i18n.t("nav.boards")) }
            </ul>
            <div class="flex items-center gap-2 pr-2">
                { session_control }
            </div>
        </nav>
    }
}
