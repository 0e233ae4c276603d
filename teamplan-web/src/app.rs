use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::ToastHost;
use crate::routes::MainRoute;

/// Application shell: the router plus the globally mounted toast slot.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <BrowserRouter>
            <Switch<MainRoute> render={crate::routes::switch} />
            <ToastHost />
        </BrowserRouter>
    }
}
