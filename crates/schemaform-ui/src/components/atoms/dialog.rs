//! Modal dialog with a single confirm action.
//!
//! # Design
//! - Confirm and backdrop clicks both report `on_close`; edits inside the
//!   dialog are live, so there is nothing to roll back.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct DialogProps {
    #[prop_or_default]
    pub open: bool,
    pub confirm_label: AttrValue,
    #[prop_or_default]
    pub aria_label: Option<AttrValue>,
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

#[function_component(Dialog)]
pub(crate) fn dialog(props: &DialogProps) -> Html {
    if !props.open {
        return html! {};
    }
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div
            class="modal modal-open"
            role="dialog"
            aria-modal="true"
            aria-label={props.aria_label.clone()}
        >
            <div class="modal-box">
                { for props.children.iter() }
                <div class="modal-action">
                    <button class="btn btn-primary btn-sm" type="button" autofocus=true onclick={close.clone()}>
                        {props.confirm_label.clone()}
                    </button>
                </div>
            </div>
            <button class="modal-backdrop" type="button" onclick={close}></button>
        </div>
    }
}
