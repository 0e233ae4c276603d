use yew::{Html, function_component, html};
use yew_router::prelude::Link;

use crate::routes::MainRoute;

/// `NotFoundPage` page component
#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="p-4 space-y-6 text-center py-24">
            <h1 class="text-2xl font-bold">{ "Page not found" }</h1>
            <p>{ "The page you asked for does not exist." }</p>
            <Link<MainRoute> to={MainRoute::Home} classes="btn btn-primary">
                { "Back to home" }
            </Link<MainRoute>>
        </div>
    }
}
