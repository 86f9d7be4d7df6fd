use yew::prelude::*;

/// Props for icon-only row and toolbar buttons.
#[derive(Properties, PartialEq)]
pub(crate) struct IconButtonProps {
    /// Accessible label for the button.
    pub aria_label: AttrValue,
    /// Iconify class for the glyph (e.g. `lucide--settings`).
    pub icon: &'static str,
    /// Additional CSS classes.
    #[prop_or_default]
    pub class: Classes,
    /// Whether the button is disabled.
    #[prop_or_default]
    pub disabled: bool,
    /// Click handler.
    #[prop_or_default]
    pub onclick: Callback<MouseEvent>,
}

#[function_component(IconButton)]
pub(crate) fn icon_button(props: &IconButtonProps) -> Html {
    html! {
        <button
            class={classes!("btn", "btn-ghost", "btn-square", "btn-sm", props.class.clone())}
            type="button"
            aria-label={props.aria_label.clone()}
            title={props.aria_label.clone()}
            onclick={props.onclick.clone()}
            disabled={props.disabled}
        >
            <span class={classes!("iconify", props.icon, "size-4")}></span>
        </button>
    }
}
