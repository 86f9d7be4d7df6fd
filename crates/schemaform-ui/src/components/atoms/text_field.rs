//! Labelled text input with helper text.
//!
//! # Design
//! - Emits raw strings; callers own the value.
//! - Helper text switches to error styling when `error` is set.

use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub(crate) struct TextFieldProps {
    #[prop_or_default]
    pub value: AttrValue,
    #[prop_or_default]
    pub label: Option<AttrValue>,
    #[prop_or_default]
    pub placeholder: Option<AttrValue>,
    #[prop_or_default]
    pub helper_text: Option<AttrValue>,
    #[prop_or_default]
    pub error: bool,
    #[prop_or_default]
    pub required: bool,
    #[prop_or_default]
    pub small: bool,
    #[prop_or_default]
    pub autofocus: bool,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub oninput: Callback<String>,
}

#[function_component(TextField)]
pub(crate) fn text_field(props: &TextFieldProps) -> Html {
    let oninput = {
        let oninput = props.oninput.clone();
        Callback::from(move |event: InputEvent| {
            if let Some(input) = event.target_dyn_into::<web_sys::HtmlInputElement>() {
                oninput.emit(input.value());
            }
        })
    };
    let input_classes = classes!(
        "input",
        "w-full",
        props.small.then_some("input-sm"),
        props.error.then_some("input-error")
    );
    let helper_classes = classes!(
        "fieldset-label",
        "text-xs",
        props.error.then_some("text-error")
    );

    html! {
        <label class={classes!("fieldset", "w-full", props.class.clone())}>
            {props.label.clone().map(|label| html! {
                <span class="fieldset-legend">{label}</span>
            }).unwrap_or_default()}
            <input
                class={input_classes}
                type="text"
                autocomplete="off"
                value={props.value.clone()}
                placeholder={props.placeholder.clone()}
                required={props.required}
                autofocus={props.autofocus}
                aria-invalid={props.error.then_some("true")}
                oninput={oninput}
            />
            {props.helper_text.clone().map(|text| html! {
                <span class={helper_classes}>{text}</span>
            }).unwrap_or_default()}
        </label>
    }
}
