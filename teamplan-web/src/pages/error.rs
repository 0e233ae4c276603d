use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yew_router::hooks::use_navigator;

use crate::error::ErrorDisplayData;
use crate::routes::MainRoute;

#[derive(Properties, PartialEq)]
pub struct ErrorFallbackProps {
    /// The resolved failure being displayed.
    pub error: ErrorDisplayData,
}

/// Full-page view for a read that failed after its retry.
///
/// The single action either replaces the current entry with the login
/// page (expired session) or navigates home.
#[function_component(ErrorFallback)]
pub fn error_fallback(props: &ErrorFallbackProps) -> Html {
    let navigator = use_navigator();
    let require_login = props.error.require_login;

    let onclick = Callback::from(move |_: MouseEvent| {
        if let Some(nav) = navigator.as_ref() {
            if require_login {
                nav.replace(&MainRoute::Login);
            } else {
                nav.push(&MainRoute::Home);
            }
        }
    });
    let label = if require_login {
        "Go to sign in"
    } else {
        "Back to home"
    };

    html! {
        <div class="flex flex-col items-center justify-center py-24 gap-4">
            <Icon icon_id={IconId::HeroiconsOutlineExclamationTriangle} class="h-10 w-10 text-warning" />
            <p class="text-lg">{ props.error.message.clone() }</p>
            <p class="text-xs opacity-50">{ props.error.code.to_string() }</p>
            <button class="btn btn-primary" {onclick}>{ label }</button>
        </div>
    }
}
