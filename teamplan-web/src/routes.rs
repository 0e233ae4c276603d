#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::containers::layout::Layout;
use crate::guards::{RedirectIfLoggedIn, RequireAuth};
use crate::pages::*;
use strum::EnumIter;
use wasm_bindgen::prelude::*;
use yew::prelude::*;
use yew_router::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(s: &str);
}

/// The main routes
#[derive(Debug, Clone, PartialEq, Routable, EnumIter)]
pub enum MainRoute {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/team")]
    Teams,
    #[at("/team/:team_id")]
    TeamDetail { team_id: String },
    #[at("/board")]
    Boards,
    #[at("/board/:board_id")]
    BoardDetail { board_id: String },
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Switch function for the main routes.
pub fn switch(route: MainRoute) -> Html {
    log(std::format!("Switching to route: {:?}", route).as_str());
    match route {
        MainRoute::Home => html! {
            <Layout current_route={MainRoute::Home}>
                <HomePage />
            </Layout>
        },
        MainRoute::Login => html! {
            <RedirectIfLoggedIn>
                <LoginPage />
            </RedirectIfLoggedIn>
        },
        MainRoute::Teams => html! {
            <RequireAuth>
                <Layout current_route={MainRoute::Teams}>
                    <TeamsPage />
                </Layout>
            </RequireAuth>
        },
        MainRoute::TeamDetail { team_id } => html! {
            <RequireAuth>
                <Layout current_route={MainRoute::Teams}>
                    <TeamDetailPage {team_id} />
                </Layout>
            </RequireAuth>
        },
        MainRoute::Boards => html! {
            <Layout current_route={MainRoute::Boards}>
                <BoardsPage />
            </Layout>
        },
        MainRoute::BoardDetail { board_id } => html! {
            <Layout current_route={MainRoute::Boards}>
                <BoardDetailPage {board_id} />
            </Layout>
        },
        MainRoute::NotFound => html! {
            <Layout current_route={MainRoute::NotFound}>
                <NotFoundPage />
            </Layout>
        },
    }
}
