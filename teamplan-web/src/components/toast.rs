use yew::prelude::*;
use yew_icons::{Icon, IconId};
use yewdux::prelude::use_store;

use crate::stores::ToastStore;

#[derive(Properties, PartialEq)]
pub struct ToastContainerProps {
    /// Message shown in the banner.
    pub message: AttrValue,
    /// Invoked by the banner's action button.
    pub on_action: Callback<()>,
    /// Invoked by the banner's close control.
    pub on_close: Callback<()>,
}

/// Presentational single-slot banner.
#[function_component(ToastContainer)]
pub fn toast_container(props: &ToastContainerProps) -> Html {
    let on_action = {
        let on_action = props.on_action.clone();
        Callback::from(move |_: MouseEvent| on_action.emit(()))
    };
    let on_close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="toast toast-end z-50">
            <div class="alert alert-error shadow-lg">
                <span>{ props.message.clone() }</span>
                <button class="btn btn-sm btn-ghost" onclick={on_action}>{"OK"}</button>
                <button
                    class="btn btn-sm btn-circle btn-ghost"
                    onclick={on_close}
                    aria-label="Close"
                >
                    <Icon icon_id={IconId::HeroiconsSolidXMark} class="h-4 w-4" />
                </button>
            </div>
        </div>
    }
}

/// Store-connected host for the banner; renders nothing while the slot
/// is closed. Both container callbacks dismiss.
#[function_component(ToastHost)]
pub fn toast_host() -> Html {
    let (toast, dispatch) = use_store::<ToastStore>();
    if !toast.is_open {
        return html! {};
    }

    let hide = Callback::from(move |()| dispatch.reduce_mut(ToastStore::hide));

    html! {
        <ToastContainer
            message={toast.message.clone()}
            on_action={hide.clone()}
            on_close={hide}
        />
    }
}
