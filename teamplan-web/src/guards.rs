//! Session-based navigation guards.
//!
//! Both guards read the session flag reactively, so a logout while a
//! protected page is mounted redirects immediately.

use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::routes::MainRoute;
use crate::stores::SessionStore;

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    /// The view rendered when the guard admits the visitor.
    pub children: Children,
}

/// Renders its children only for a signed-in session; anyone else is
/// replace-navigated to the login page and nothing is rendered.
#[function_component(RequireAuth)]
pub fn require_auth(props: &GuardProps) -> Html {
    let is_logged_in = use_selector(|session: &SessionStore| session.is_logged_in);
    if !*is_logged_in {
        return html! { <Redirect<MainRoute> to={MainRoute::Login} /> };
    }
    html! { <>{ props.children.clone() }</> }
}

/// Inverse guard for the login page: an already signed-in visitor is
/// replace-navigated to the team landing page.
#[function_component(RedirectIfLoggedIn)]
pub fn redirect_if_logged_in(props: &GuardProps) -> Html {
    let is_logged_in = use_selector(|session: &SessionStore| session.is_logged_in);
    if *is_logged_in {
        return html! { <Redirect<MainRoute> to={MainRoute::Teams} /> };
    }
    html! { <>{ props.children.clone() }</> }
}
