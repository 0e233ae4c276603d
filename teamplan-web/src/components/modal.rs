use yew::prelude::*;
use yew_icons::{Icon, IconId};

#[derive(Properties, PartialEq)]
pub struct ModalProps {
    /// Heading shown in the modal box.
    pub title: AttrValue,
    /// Whether the modal is visible.
    pub open: bool,
    /// Invoked by the close control and the backdrop.
    pub on_close: Callback<()>,
    pub children: Children,
}

/// Shared modal chrome for the creation dialogs.
#[function_component(Modal)]
pub fn modal(props: &ModalProps) -> Html {
    if !props.open {
        return html! {};
    }

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal modal-open">
            <div class="modal-box">
                <div class="flex items-center justify-between mb-4">
                    <h3 class="font-bold text-lg">{ props.title.clone() }</h3>
                    <button
                        class="btn btn-sm btn-circle btn-ghost"
                        onclick={close.clone()}
                        aria-label="Close"
                    >
                        <Icon icon_id={IconId::HeroiconsSolidXMark} class="h-4 w-4" />
                    </button>
                </div>
                { props.children.clone() }
            </div>
            <div class="modal-backdrop" onclick={close}></div>
        </div>
    }
}
